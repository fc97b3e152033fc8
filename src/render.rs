use crate::config::MapConfig;
use crate::map::INDEX_HTML;
use crate::models::layer::{BaseTiles, LayerControl, MapView, OverlayLayer};
use crate::models::popup::{ClientRule, PopupRule};
use crate::utils::style::Legend;
use serde::Serialize;

pub const TITLE: &str = "BloomWatch";

/// A composed map ready to be written out or served.
///
/// One base layer, one overlay and one layer control, whatever the input.
#[derive(Debug, Clone)]
pub struct MapArtifact {
    pub view: MapView,
    pub overlay: OverlayLayer,
    pub control: LayerControl,
    pub popup: PopupRule,
    pub legend: Legend,
}

/// Initialisation data embedded in the page as JSON
#[derive(Debug, Serialize)]
pub struct MapSpec<'a> {
    pub view: &'a MapView,
    pub overlay: OverlaySpec<'a>,
    pub control: &'a LayerControl,
    pub popup: ClientRule,
    pub legend: &'a Legend,
}

#[derive(Debug, Serialize)]
pub struct OverlaySpec<'a> {
    #[serde(flatten)]
    pub layer: &'a OverlayLayer,
    pub template: String,
}

pub fn render(config: &MapConfig) -> MapArtifact {
    MapArtifact {
        view: MapView {
            center: config.center,
            zoom: config.zoom,
            base: BaseTiles::default(),
        },
        overlay: OverlayLayer::modis_ndvi(&config.overlay_time),
        control: LayerControl::default(),
        popup: PopupRule::new(config.reference, config.tolerance),
        legend: Legend::default(),
    }
}

impl MapArtifact {
    pub fn spec(&self) -> MapSpec<'_> {
        MapSpec {
            view: &self.view,
            overlay: OverlaySpec {
                layer: &self.overlay,
                template: self.overlay.url_template(),
            },
            control: &self.control,
            popup: self.popup.client_rule(),
            legend: &self.legend,
        }
    }

    pub fn spec_json(&self) -> anyhow::Result<serde_json::Value> {
        Ok(serde_json::to_value(self.spec())?)
    }

    /// Serialise to a single self-contained HTML document
    pub fn to_html(&self) -> anyhow::Result<String> {
        let json = serde_json::to_string(&self.spec())?;
        // A literal "</" would close the script element early
        let json = json.replace("</", "<\\/");
        Ok(INDEX_HTML
            .replace("{{TITLE}}", TITLE)
            .replace("{{MAP_SPEC}}", &json))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::geometry::LatLng;
    use crate::models::popup::{ClickEvent, Region};

    #[test]
    fn test_render_uses_config() {
        let config = MapConfig {
            center: LatLng::new(10.0, -20.0),
            zoom: 5,
            overlay_time: "2025-10-01".to_string(),
            ..MapConfig::default()
        };
        let artifact = render(&config);
        assert_eq!(artifact.view.center, LatLng::new(10.0, -20.0));
        assert_eq!(artifact.view.zoom, 5);
        assert_eq!(artifact.overlay.time, "2025-10-01");
        assert_eq!(artifact.view.base.name, "OpenStreetMap");
    }

    #[test]
    fn test_html_has_one_overlay_and_one_control() {
        for center in [(41.1656, 69.3457), (-33.9, 18.4), (0.0, 0.0), (89.0, -179.0)] {
            let config = MapConfig {
                center: LatLng::from(center),
                ..MapConfig::default()
            };
            let html = render(&config).to_html().unwrap();
            assert_eq!(html.matches("L.tileLayer.wms(").count(), 1);
            assert_eq!(html.matches("L.control.layers(").count(), 1);
            assert_eq!(html.matches("map.on('click'").count(), 1);
        }
    }

    #[test]
    fn test_html_embeds_spec() {
        let html = render(&MapConfig::default()).to_html().unwrap();
        assert!(!html.contains("{{MAP_SPEC}}"));
        assert!(html.contains("<title>BloomWatch</title>"));
        assert!(html.contains("\"layer\":\"MOD_NDVI_M\""));
        assert!(html.contains("\"time\":\"2024-10-01\""));
        assert!(html.contains("\"toleranceE4\":5000.0"));
        assert!(html.contains("\"referenceE4\":[411656,693457]"));
        assert!(html.contains("MODIS NDVI Monthly (October)"));
    }

    #[test]
    fn test_page_requests_use_template_parameter_names() {
        let html = render(&MapConfig::default()).to_html().unwrap();
        let start = html.find("L.tileLayer.wms(").unwrap();
        let end = html[start..].find("}).addTo(map);").unwrap() + start;
        let options = &html[start..end];
        assert!(options.contains("uppercase: true"));
        assert!(options.contains("time: spec.overlay.time"));
        assert!(options.contains("styles: ''"));
    }

    #[test]
    fn test_embedded_json_cannot_close_script() {
        let mut artifact = render(&MapConfig::default());
        artifact.popup.generic_text = "</script><b>x</b>".to_string();
        let html = artifact.to_html().unwrap();

        let start = html.find("id=\"map-spec\">").unwrap();
        let end = html[start..].find("</script>").unwrap() + start;
        let embedded = &html[start + "id=\"map-spec\">".len()..end];
        let parsed: serde_json::Value = serde_json::from_str(embedded).unwrap();
        assert_eq!(parsed["popup"]["genericText"], "</script><b>x</b>");
    }

    #[test]
    fn test_spec_json_shape() {
        let json = render(&MapConfig::default()).spec_json().unwrap();
        assert_eq!(json["view"]["zoom"], 8);
        assert_eq!(json["view"]["center"]["lat"], 41.1656);
        assert_eq!(json["overlay"]["layer"], "MOD_NDVI_M");
        assert_eq!(json["overlay"]["transparent"], true);
        assert!(
            json["overlay"]["template"]
                .as_str()
                .unwrap()
                .contains("REQUEST=GetMap")
        );
        assert_eq!(json["control"]["collapsed"], true);
    }

    #[test]
    fn test_artifact_popup_scenarios() {
        let artifact = render(&MapConfig::default());
        let near = artifact.popup.evaluate(ClickEvent { lat: 41.20, lng: 69.40 });
        let far = artifact.popup.evaluate(ClickEvent { lat: 10.0, lng: 10.0 });
        assert_eq!(near.region, Region::Known);
        assert_eq!(far.region, Region::Generic);
    }
}
