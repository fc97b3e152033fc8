use crate::models::geometry::LatLng;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_CENTER: LatLng = LatLng::new(41.1656, 69.3457);
pub const DEFAULT_ZOOM: u8 = 8;
pub const DEFAULT_OVERLAY_TIME: &str = "2024-10-01";
pub const DEFAULT_TOLERANCE: f64 = 0.5;
pub const DEFAULT_OUTPUT: &str = "bloomwatch_interactive_map.html";
pub const MAX_ZOOM: u8 = 19;

/// Everything the renderer needs to build a map
#[derive(Debug, Clone)]
pub struct MapConfig {
    pub center: LatLng,
    pub zoom: u8,
    pub overlay_time: String,
    pub reference: LatLng,
    pub tolerance: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        MapConfig {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            overlay_time: DEFAULT_OVERLAY_TIME.to_string(),
            reference: DEFAULT_CENTER,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl MapConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.center.is_wgs84(),
            "Map center {:?} is outside WGS84 bounds",
            self.center
        );
        anyhow::ensure!(
            self.reference.is_wgs84(),
            "Reference point {:?} is outside WGS84 bounds",
            self.reference
        );
        anyhow::ensure!(
            self.zoom <= MAX_ZOOM,
            "Zoom {} is above the base map maximum of {}",
            self.zoom,
            MAX_ZOOM
        );
        anyhow::ensure!(
            self.tolerance.is_finite() && self.tolerance > 0.0,
            "Tolerance must be a positive number of degrees, got {}",
            self.tolerance
        );
        anyhow::ensure!(
            !self.overlay_time.trim().is_empty(),
            "Overlay time must not be empty"
        );
        Ok(())
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Interactive NDVI map for BloomWatch")]
pub struct Cli {
    #[arg(long, default_value_t = DEFAULT_CENTER.lat, allow_hyphen_values = true)]
    pub center_lat: f64,

    #[arg(long, default_value_t = DEFAULT_CENTER.lng, allow_hyphen_values = true)]
    pub center_lon: f64,

    #[arg(long, default_value_t = DEFAULT_ZOOM)]
    pub zoom: u8,

    /// TIME parameter sent to the NDVI WMS service
    #[arg(long, default_value = DEFAULT_OVERLAY_TIME)]
    pub overlay_time: String,

    /// Reference point for the region popup, defaults to the map center
    #[arg(long, allow_hyphen_values = true)]
    pub reference_lat: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    pub reference_lon: Option<f64>,

    /// Half-width of the region box in degrees, per axis
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance: f64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the map as a self-contained HTML file
    Render {
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
    },
    /// Serve the map page over HTTP
    Serve {
        #[arg(short, long, default_value_t = 8000)]
        port: u16,
    },
    /// Print the popup a click at the given coordinate would show
    Popup {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,
    },
}

impl Cli {
    pub fn map_config(&self) -> MapConfig {
        let center = LatLng::new(self.center_lat, self.center_lon);
        MapConfig {
            center,
            zoom: self.zoom,
            overlay_time: self.overlay_time.clone(),
            reference: LatLng::new(
                self.reference_lat.unwrap_or(center.lat),
                self.reference_lon.unwrap_or(center.lng),
            ),
            tolerance: self.tolerance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MapConfig::default();
        assert_eq!(config.center, LatLng::new(41.1656, 69.3457));
        assert_eq!(config.zoom, 8);
        assert_eq!(config.overlay_time, "2024-10-01");
        assert_eq!(config.tolerance, 0.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_defaults_match_map_config() {
        let cli = Cli::parse_from(["bloomwatch", "render"]);
        let config = cli.map_config();
        let default = MapConfig::default();
        assert_eq!(config.center, default.center);
        assert_eq!(config.reference, default.reference);
        assert_eq!(config.zoom, default.zoom);
        assert!(matches!(cli.command, Command::Render { ref output } if output == &PathBuf::from(DEFAULT_OUTPUT)));
    }

    #[test]
    fn test_reference_follows_center_unless_given() {
        let cli = Cli::parse_from([
            "bloomwatch",
            "--center-lat",
            "10",
            "--center-lon",
            "-20",
            "--reference-lon",
            "5",
            "popup",
            "--lat",
            "1",
            "--lng",
            "-2",
        ]);
        let config = cli.map_config();
        assert_eq!(config.reference, LatLng::new(10.0, 5.0));
        assert!(matches!(cli.command, Command::Popup { lat, lng } if lat == 1.0 && lng == -2.0));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = MapConfig {
            tolerance: 0.0,
            ..MapConfig::default()
        };
        assert!(config.validate().is_err());

        config.tolerance = 0.5;
        config.zoom = 25;
        assert!(config.validate().is_err());

        config.zoom = 8;
        config.center = LatLng::new(120.0, 0.0);
        assert!(config.validate().is_err());
    }
}
