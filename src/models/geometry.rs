use serde::Serialize;

/// Degrees are compared and displayed at this many units per degree (4 decimals).
pub const E4: f64 = 10_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        LatLng { lat, lng }
    }

    /// Both axes as integer ten-thousandths of a degree
    pub fn to_e4(self) -> (i64, i64) {
        (to_e4(self.lat), to_e4(self.lng))
    }

    pub fn is_wgs84(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl From<(f64, f64)> for LatLng {
    fn from(pair: (f64, f64)) -> Self {
        LatLng {
            lat: pair.0, // lat
            lng: pair.1, // lng
        }
    }
}

/// Round half up, matching the browser's `Math.round` so both sides agree.
pub fn to_e4(degrees: f64) -> i64 {
    (degrees * E4 + 0.5).floor() as i64
}

/// Format ten-thousandths as a fixed 4-decimal string (`41.1656`, `-0.0500`)
pub fn format_e4(value: i64) -> String {
    let sign = if value < 0 { "-" } else { "" };
    let abs = value.unsigned_abs();
    format!("{}{}.{:04}", sign, abs / 10_000, abs % 10_000)
}
