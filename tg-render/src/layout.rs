//! Pixel geometry for the grid: band scales for years and months, and the
//! legend box in the right margin.

use crate::config::GridConfig;
use crate::geometry::{Rect, Size};
use serde::Serialize;
use tg_data::MONTHS;

/// A pixel interval along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Band {
    pub offset: f64,
    pub size: f64,
}

impl Band {
    pub fn center(&self) -> f64 {
        self.offset + self.size / 2.0
    }
}

/// Maps a discrete ordered domain onto equal bands of a pixel range.
///
/// Inner and outer padding are both `padding` (a fraction of the step) and
/// the bands are centered in the range. A range that is empty or inverted
/// is treated as zero length, so every band collapses to size 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandScale<T> {
    domain: Vec<T>,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl<T: PartialEq + Copy> BandScale<T> {
    pub fn new(domain: Vec<T>, range: (f64, f64), padding: f64) -> Self {
        let (r0, r1) = range;
        let extent = (r1 - r0).max(0.0);
        let n = domain.len() as f64;
        let step = extent / (n - padding + 2.0 * padding).max(1.0);
        let start = r0 + (extent - step * (n - padding)).max(0.0) / 2.0;
        let bandwidth = step * (1.0 - padding);
        Self {
            domain,
            start,
            step,
            bandwidth,
        }
    }

    pub fn band(&self, value: T) -> Option<Band> {
        let index = self.domain.iter().position(|v| *v == value)?;
        Some(Band {
            offset: self.start + self.step * index as f64,
            size: self.bandwidth,
        })
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn domain(&self) -> &[T] {
        &self.domain
    }
}

/// Legend bar placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LegendLayout {
    pub bar: Rect,
}

/// All geometry the renderer needs for one surface size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub size: Size,
    /// The usable interior after subtracting margins.
    pub inner: Rect,
    pub x: BandScale<i32>,
    pub y: BandScale<u32>,
    pub legend: LegendLayout,
}

impl Layout {
    pub fn compute(size: Size, years: &[i32], config: &GridConfig) -> Self {
        let m = &config.margins;
        let inner = Rect {
            x: m.left,
            y: m.top,
            width: (size.width - m.left - m.right).max(0.0),
            height: (size.height - m.top - m.bottom).max(0.0),
        };
        if inner.is_empty() {
            log::warn!(
                "surface {}x{} leaves no room inside the margins",
                size.width,
                size.height
            );
        }

        let x = BandScale::new(
            years.to_vec(),
            (inner.x, inner.x + inner.width),
            config.band_padding,
        );
        let y = BandScale::new(
            MONTHS.to_vec(),
            (inner.y, inner.y + inner.height),
            config.band_padding,
        );

        let legend = LegendLayout {
            bar: Rect {
                x: inner.x + inner.width + config.legend_offset,
                y: inner.y,
                width: config.legend_width,
                height: config.legend_height.min(inner.height),
            },
        };

        Self {
            size,
            inner,
            x,
            y,
            legend,
        }
    }

    pub fn x_of_year(&self, year: i32) -> Option<Band> {
        self.x.band(year)
    }

    pub fn y_of_month(&self, month: u32) -> Option<Band> {
        self.y.band(month)
    }

    /// Full rectangle for a grid cell.
    pub fn cell_rect(&self, year: i32, month: u32) -> Option<Rect> {
        let x = self.x_of_year(year)?;
        let y = self.y_of_month(month)?;
        Some(Rect {
            x: x.offset,
            y: y.offset,
            width: x.size,
            height: y.size,
        })
    }

    /// Whether cells have any area to draw into.
    pub fn has_area(&self) -> bool {
        self.x.bandwidth() > 0.0 && self.y.bandwidth() > 0.0
    }
}
