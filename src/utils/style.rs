use colorgrad::{Gradient, preset};
use serde::Serialize;

pub const LEGEND_STOPS: usize = 5;

/// Palette used for the NDVI legend, low (bare) to high (dense vegetation)
pub fn ndvi_gradient() -> Box<dyn Gradient> {
    Box::new(preset::rd_yl_gn())
}

/// Evenly spaced hex colours sampled from the NDVI palette
pub fn ndvi_stops(n: usize) -> Vec<String> {
    let grad = ndvi_gradient();
    (0..n)
        .map(|i| {
            let t = if n > 1 { i as f32 / (n - 1) as f32 } else { 0.0 };
            let [r, g, b, _] = grad.at(t).to_rgba8();
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Legend {
    pub title: String,
    pub min_label: String,
    pub max_label: String,
    pub css_gradient: String,
}

impl Default for Legend {
    fn default() -> Self {
        let stops = ndvi_stops(LEGEND_STOPS);
        let last = stops.len().saturating_sub(1).max(1);
        let css_stops = stops
            .iter()
            .enumerate()
            .map(|(i, hex)| format!("{} {}%", hex, i * 100 / last))
            .collect::<Vec<_>>()
            .join(", ");

        Legend {
            title: "NDVI".to_string(),
            min_label: "0.0".to_string(),
            max_label: "1.0".to_string(),
            css_gradient: format!("linear-gradient(to right, {})", css_stops),
        }
    }
}

/// Colour bar for terminal output
pub fn terminal_bar(n: usize) -> String {
    let grad = ndvi_gradient();
    let mut s = String::new();
    for i in 0..n {
        let t = i as f32 / (n.max(2) - 1) as f32;
        let [r, g, b, _] = grad.at(t).to_rgba8();
        s.push_str(&format!("\x1b[38;2;{};{};{}m█\x1b[0m", r, g, b));
    }
    s
}
