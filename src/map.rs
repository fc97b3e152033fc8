/// Page shell for the rendered map. `{{TITLE}}` and `{{MAP_SPEC}}` are
/// substituted by `MapArtifact::to_html`; the JSON under `#map-spec` drives
/// everything the script does.
pub(crate) const INDEX_HTML: &str = r#"<!DOCTYPE html>
  <html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0"/>
    <title>{{TITLE}}</title>
    <link
      rel="stylesheet"
      href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css"
      integrity="sha256-p4NxAoJBhIIN+hmNHrzRCf9tD/miZyoHS5obTRR9BMY="
      crossorigin=""
    />
    <style>
      html, body { height: 100%; margin: 0; padding: 0; }
      #map { height: 100%; width: 100%; }
      #legend {
        position: absolute;
        bottom: 24px;
        left: 12px;
        z-index: 1000;
        background: white;
        padding: 6px 8px;
        border-radius: 4px;
        box-shadow: 0 1px 4px rgba(0,0,0,0.3);
        font: 12px sans-serif;
      }
      #legend .bar { width: 160px; height: 10px; margin: 4px 0; }
      #legend .labels { display: flex; justify-content: space-between; }
    </style>
  </head>
  <body>
    <div id="map"></div>
    <div id="legend">
      <div class="title"></div>
      <div class="bar"></div>
      <div class="labels"><span class="min"></span><span class="max"></span></div>
    </div>

    <script type="application/json" id="map-spec">{{MAP_SPEC}}</script>

    <script
      src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"
      integrity="sha256-20nQCchB9co0qIjJZRGuk2/Z9VM+kNiyxNV1lvTlZBo="
      crossorigin=""
    ></script>

    <script>
      const spec = JSON.parse(document.getElementById('map-spec').textContent);
      const view = spec.view;

      // initialize map
      const map = L.map('map').setView([view.center.lat, view.center.lng], view.zoom);

      const baseLayer = L.tileLayer(view.base.urlTemplate, {
        maxZoom: view.base.maxZoom,
        attribution: view.base.attribution
      }).addTo(map);

      // Upper-case keys to match the GetMap template served in /config
      const overlay = L.tileLayer.wms(spec.overlay.url, {
        layers: spec.overlay.layer,
        styles: '',
        format: spec.overlay.format,
        transparent: spec.overlay.transparent,
        version: spec.overlay.version,
        time: spec.overlay.time,
        uppercase: true,
        attribution: spec.overlay.attribution
      }).addTo(map);

      overlay.setZIndex(1); // Keep NDVI above the basemap

      L.control.layers(
        { [view.base.name]: baseLayer },
        { [spec.overlay.name]: overlay },
        { collapsed: spec.control.collapsed }
      ).addTo(map);

      // legend
      const legend = document.getElementById('legend');
      legend.querySelector('.title').textContent = spec.legend.title;
      legend.querySelector('.bar').style.background = spec.legend.cssGradient;
      legend.querySelector('.min').textContent = spec.legend.minLabel;
      legend.querySelector('.max').textContent = spec.legend.maxLabel;

      // Same rounding and comparison as the server side popup rule
      const rule = spec.popup;
      const toE4 = v => Math.round(v * 1e4);
      const formatE4 = v => (v / 1e4).toFixed(4);

      function popupHeader(lat, lng) {
        return '<b>Location:</b> Latitude ' + lat + ', Longitude ' + lng + '<br>' +
               '<b>Date:</b> ' + rule.dateLabel + '<br>' +
               '<b>Vegetation info:</b><br>';
      }

      map.on('click', e => {
        const latE4 = toE4(e.latlng.lat);
        const lngE4 = toE4(e.latlng.lng);
        const known =
          Math.abs(latE4 - rule.referenceE4[0]) < rule.toleranceE4 &&
          Math.abs(lngE4 - rule.referenceE4[1]) < rule.toleranceE4;

        const content = popupHeader(formatE4(latE4), formatE4(lngE4)) +
          (known ? rule.knownText : rule.genericText);

        L.marker(e.latlng).addTo(map).bindPopup(content).openPopup();
      });
  </script>
  </body>
  </html>
"#;
