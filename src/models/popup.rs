use crate::models::geometry::{E4, LatLng, format_e4};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DATE_LABEL: &str = "5 October 2025";

pub const KNOWN_REGION_TEXT: &str = "NDVI value: ~0.3 (moderate vegetation, autumn season).<br>\
Vegetation type: crops (cotton, grapes, melons), tugai riparian forest (poplar, willow).<br>\
Bloom season: minimal in October, main bloom in spring. Fruit and cotton harvest.<br>\
Source: historical NASA MODIS data for Uzbekistan in October.";

pub const GENERIC_TEXT: &str = "NDVI value, vegetation type and bloom season could be shown here.<br>\
For real data, query the NASA API (for example GIOVANNI) with these coordinates.";

/// A pointer click on the rendered map
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ClickEvent {
    pub lat: f64,
    pub lng: f64,
}

impl ClickEvent {
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.lat.is_finite() && self.lng.is_finite(),
            "Click coordinates must be finite numbers, got lat={}, lng={}",
            self.lat,
            self.lng
        );
        Ok(())
    }
}

impl From<ClickEvent> for LatLng {
    fn from(click: ClickEvent) -> Self {
        LatLng::new(click.lat, click.lng)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Known,
    Generic,
}

#[derive(Debug, Clone, Serialize)]
pub struct PopupContent {
    pub lat: String,
    pub lng: String,
    pub region: Region,
    pub html: String,
}

/// Decides which text a clicked marker shows.
///
/// The check runs on coordinates rounded to 4 decimals, the same values the
/// popup header displays, against the unrounded tolerance. Strict on both
/// axes.
#[derive(Debug, Clone)]
pub struct PopupRule {
    pub reference: LatLng,
    pub tolerance: f64,
    pub date_label: String,
    pub known_text: String,
    pub generic_text: String,
}

impl PopupRule {
    pub fn new(reference: LatLng, tolerance: f64) -> Self {
        PopupRule {
            reference,
            tolerance,
            date_label: DEFAULT_DATE_LABEL.to_string(),
            known_text: KNOWN_REGION_TEXT.to_string(),
            generic_text: GENERIC_TEXT.to_string(),
        }
    }

    pub fn region(&self, click: ClickEvent) -> Region {
        let (lat, lng) = LatLng::from(click).to_e4();
        let (ref_lat, ref_lng) = self.reference.to_e4();
        let tolerance = self.tolerance_e4();

        let inside = |a: i64, b: i64| (a.abs_diff(b) as f64) < tolerance;

        if inside(lat, ref_lat) && inside(lng, ref_lng) {
            Region::Known
        } else {
            Region::Generic
        }
    }

    pub fn evaluate(&self, click: ClickEvent) -> PopupContent {
        let (lat_e4, lng_e4) = LatLng::from(click).to_e4();
        let lat = format_e4(lat_e4);
        let lng = format_e4(lng_e4);
        let region = self.region(click);

        let body = match region {
            Region::Known => &self.known_text,
            Region::Generic => &self.generic_text,
        };
        let html = format!("{}{}", header(&lat, &lng, &self.date_label), body);

        PopupContent {
            lat,
            lng,
            region,
            html,
        }
    }

    /// Tolerance in ten-thousandths of a degree, not rounded
    pub fn tolerance_e4(&self) -> f64 {
        self.tolerance * E4
    }

    /// Parameters the in-page click handler needs to reproduce `evaluate`
    pub fn client_rule(&self) -> ClientRule {
        let (ref_lat, ref_lng) = self.reference.to_e4();
        ClientRule {
            reference_e4: [ref_lat, ref_lng],
            tolerance_e4: self.tolerance_e4(),
            date_label: self.date_label.clone(),
            known_text: self.known_text.clone(),
            generic_text: self.generic_text.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRule {
    pub reference_e4: [i64; 2],
    pub tolerance_e4: f64,
    pub date_label: String,
    pub known_text: String,
    pub generic_text: String,
}

// Kept in step with `popupHeader` in the page script.
pub fn header(lat: &str, lng: &str, date: &str) -> String {
    format!(
        "<b>Location:</b> Latitude {}, Longitude {}<br><b>Date:</b> {}<br><b>Vegetation info:</b><br>",
        lat, lng, date
    )
}
