//! Tunable grid settings.
//!
//! Every field has a default, so a config file only needs to name what it
//! changes:
//!
//! ```rust
//! use tg_render::GridConfig;
//!
//! let config = GridConfig::from_json(r#"{ "legend_height": 180, "margins": { "top": 40, "right": 120, "bottom": 10, "left": 100 } }"#).unwrap();
//! assert_eq!(config.legend_height, 180.0);
//! assert_eq!(config.year_window, 10);
//! ```

use crate::color::{Rgb, NO_DATA};
use crate::geometry::Margins;
use serde::{Deserialize, Serialize};
use tg_core::{Result, TgError};
use tg_data::DEFAULT_YEAR_WINDOW;

/// Upper bound for `year_window`.
pub const MAX_YEAR_WINDOW: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Number of most recent years kept.
    pub year_window: u32,
    pub margins: Margins,
    /// Gap between adjacent bands as a fraction of the band step.
    pub band_padding: f64,
    /// Fixed pixel height of the legend bar (clamped to the usable height).
    pub legend_height: f64,
    pub legend_width: f64,
    /// Horizontal distance between the grid and the legend bar.
    pub legend_offset: f64,
    /// Inner padding between a cell edge and its sparkline.
    pub sparkline_padding: f64,
    pub sparkline_stroke_width: f64,
    pub font_size: f64,
    pub max_line_color: Rgb,
    pub min_line_color: Rgb,
    pub no_data_color: Rgb,
    pub text_color: Rgb,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            year_window: DEFAULT_YEAR_WINDOW,
            margins: Margins::default(),
            band_padding: 0.04,
            legend_height: 300.0,
            legend_width: 20.0,
            legend_offset: 30.0,
            sparkline_padding: 3.0,
            sparkline_stroke_width: 1.0,
            font_size: 12.0,
            max_line_color: Rgb(0x2e, 0x7d, 0x32),
            min_line_color: Rgb(0xb3, 0xe5, 0xfc),
            no_data_color: NO_DATA,
            text_color: Rgb(0x33, 0x33, 0x33),
        }
    }
}

impl GridConfig {
    /// Parse a JSON config, then validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GridConfig =
            serde_json::from_str(json).map_err(|e| TgError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_YEAR_WINDOW).contains(&self.year_window) {
            return Err(TgError::Config(format!(
                "year_window must be between 1 and {MAX_YEAR_WINDOW}"
            )));
        }
        if !(0.0..1.0).contains(&self.band_padding) {
            return Err(TgError::Config("band_padding must be in [0, 1)".into()));
        }
        let lengths = [
            ("legend_height", self.legend_height),
            ("legend_width", self.legend_width),
            ("sparkline_padding", self.sparkline_padding),
            ("margins.top", self.margins.top),
            ("margins.right", self.margins.right),
            ("margins.bottom", self.margins.bottom),
            ("margins.left", self.margins.left),
        ];
        for (name, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                return Err(TgError::Config(format!("{name} must be a non-negative number")));
            }
        }
        if self.max_line_color == self.min_line_color {
            return Err(TgError::Config(
                "max_line_color and min_line_color must differ".into(),
            ));
        }
        Ok(())
    }
}
