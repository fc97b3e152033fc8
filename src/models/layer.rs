use crate::models::geometry::LatLng;
use serde::Serialize;

pub const NEO_WMS_URL: &str = "https://neo.gsfc.nasa.gov/wms/wms";
pub const WMS_TILE_SIZE: u32 = 256;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseTiles {
    pub name: String,
    pub url_template: String,
    pub attribution: String,
    pub max_zoom: u8,
}

impl Default for BaseTiles {
    fn default() -> Self {
        BaseTiles {
            name: "OpenStreetMap".to_string(),
            url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
                .to_string(),
            max_zoom: 19,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MapView {
    pub center: LatLng,
    pub zoom: u8,
    pub base: BaseTiles,
}

/// A WMS overlay drawn on top of the base tiles
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayLayer {
    pub url: String,
    pub layer: String,
    pub name: String,
    pub attribution: String,
    pub format: String,
    pub transparent: bool,
    pub version: String,
    pub time: String,
}

impl OverlayLayer {
    /// MODIS monthly NDVI from NASA Earth Observations
    pub fn modis_ndvi(time: &str) -> Self {
        OverlayLayer {
            url: NEO_WMS_URL.to_string(),
            layer: "MOD_NDVI_M".to_string(),
            name: "MODIS NDVI Monthly (October)".to_string(),
            attribution: "NASA Earth Observations (NEO)".to_string(),
            format: "image/png".to_string(),
            transparent: true,
            version: "1.3.0".to_string(),
            time: time.to_string(),
        }
    }

    /// Fixed GetMap query parameters, in request order
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("SERVICE", "WMS".to_string()),
            ("VERSION", self.version.clone()),
            ("REQUEST", "GetMap".to_string()),
            ("LAYERS", self.layer.clone()),
            ("STYLES", String::new()),
            ("FORMAT", self.format.clone()),
            ("TRANSPARENT", self.transparent.to_string().to_uppercase()),
            ("TIME", self.time.clone()),
        ]
    }

    /// GetMap URL template with a `{bbox}` placeholder in EPSG:3857, as the
    /// browser fills it per tile.
    pub fn url_template(&self) -> String {
        let query = self
            .query_params()
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, encode_query_value(&value)))
            .collect::<Vec<_>>()
            .join("&");

        format!(
            "{}?{}&CRS=EPSG:3857&BBOX={{bbox}}&WIDTH={}&HEIGHT={}",
            self.url, query, WMS_TILE_SIZE, WMS_TILE_SIZE
        )
    }
}

// Only the characters that show up in layer names, formats and dates
fn encode_query_value(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            '/' => "%2F".to_string(),
            ' ' => "%20".to_string(),
            '&' => "%26".to_string(),
            '=' => "%3D".to_string(),
            ':' => "%3A".to_string(),
            c => c.to_string(),
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct LayerControl {
    pub collapsed: bool,
}

impl Default for LayerControl {
    fn default() -> Self {
        LayerControl { collapsed: true }
    }
}
