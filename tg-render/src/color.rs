//! Color mapping for temperatures.
//!
//! The scale runs from 0 °C (blue) through yellow and orange to 40 °C
//! (dark red). It is built from the ColorBrewer RdYlBu scheme, which is
//! ordered hot-to-cold, by sampling it at `1 - t`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower end of the fixed temperature range, in °C.
pub const SCALE_MIN: f64 = 0.0;
/// Upper end of the fixed temperature range, in °C.
pub const SCALE_MAX: f64 = 40.0;

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }

    /// Parse "#rrggbb".
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().strip_prefix('#')?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgb::from_hex(&value).ok_or_else(|| format!("invalid color '{value}', expected #rrggbb"))
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_hex()
    }
}

/// RdYlBu, 11 classes, hot (index 0) to cold (index 10).
const RD_YL_BU: [Rgb; 11] = [
    Rgb(0xa5, 0x00, 0x26),
    Rgb(0xd7, 0x30, 0x27),
    Rgb(0xf4, 0x6d, 0x43),
    Rgb(0xfd, 0xae, 0x61),
    Rgb(0xfe, 0xe0, 0x90),
    Rgb(0xff, 0xff, 0xbf),
    Rgb(0xe0, 0xf3, 0xf8),
    Rgb(0xab, 0xd9, 0xe9),
    Rgb(0x74, 0xad, 0xd1),
    Rgb(0x45, 0x75, 0xb4),
    Rgb(0x31, 0x36, 0x95),
];

/// Fill for cells without data. Not on the RdYlBu ramp.
pub const NO_DATA: Rgb = Rgb(0xe0, 0xe0, 0xe0);

/// Sample RdYlBu at `t` in [0, 1], piecewise linear between the classes.
pub fn interpolate_rd_yl_bu(t: f64) -> Rgb {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let scaled = t * (RD_YL_BU.len() - 1) as f64;
    let i = (scaled.floor() as usize).min(RD_YL_BU.len() - 2);
    RD_YL_BU[i].lerp(RD_YL_BU[i + 1], scaled - i as f64)
}

/// Map a temperature in °C to its color. Values outside 0-40 °C are clamped.
pub fn color_scale(celsius: f64) -> Rgb {
    let normalized = (celsius - SCALE_MIN) / (SCALE_MAX - SCALE_MIN);
    interpolate_rd_yl_bu(1.0 - normalized)
}

/// Fill for an optional value: the scale color, or [`NO_DATA`].
pub fn fill_for(value: Option<f64>) -> Rgb {
    value.map(color_scale).unwrap_or(NO_DATA)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_blue_and_dark_red() {
        assert_eq!(color_scale(0.0), Rgb(0x31, 0x36, 0x95));
        assert_eq!(color_scale(40.0), Rgb(0xa5, 0x00, 0x26));
        // midpoint is the neutral yellow
        assert_eq!(color_scale(20.0), Rgb(0xff, 0xff, 0xbf));
    }

    #[test]
    fn out_of_range_values_clamp() {
        assert_eq!(color_scale(-15.0), color_scale(0.0));
        assert_eq!(color_scale(55.0), color_scale(40.0));
    }

    #[test]
    fn distinct_temperatures_get_distinct_colors() {
        let colors: Vec<Rgb> = (0..=40).map(|t| color_scale(t as f64)).collect();
        for pair in colors.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn cold_end_is_blue_hot_end_is_red() {
        let cold = color_scale(2.0);
        let hot = color_scale(38.0);
        assert!(cold.2 > cold.0, "cold should lean blue: {cold}");
        assert!(hot.0 > hot.2, "hot should lean red: {hot}");
    }

    #[test]
    fn no_data_is_not_a_scale_color() {
        assert_eq!(fill_for(None), NO_DATA);
        for tenth in 0..=400 {
            assert_ne!(color_scale(tenth as f64 / 10.0), NO_DATA);
        }
    }

    #[test]
    fn hex_round_trip_and_errors() {
        assert_eq!(Rgb::from_hex("#2e7d32"), Some(Rgb(0x2e, 0x7d, 0x32)));
        assert_eq!(Rgb(0x2e, 0x7d, 0x32).to_hex(), "#2e7d32");
        assert_eq!(Rgb::from_hex("2e7d32"), None);
        assert_eq!(Rgb::from_hex("#2e7d3"), None);
        assert_eq!(Rgb::from_hex("#zz7d32"), None);
        assert_eq!(Rgb::from_hex("#+f+f+f"), None);
    }
}
