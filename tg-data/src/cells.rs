//! Reducing each `(year, month)` group into a grid cell.

use crate::grouping::Grouping;
use serde::Serialize;
use tg_core::DailyRecord;

/// The fixed month axis.
pub const MONTHS: [u32; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];

/// One slot of the year x month grid.
///
/// Empty cells (no recorded days) still occupy their grid position but
/// carry no extremes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub year: i32,
    pub month: u32,
    pub days: Vec<DailyRecord>,
    /// Hottest single day of the month.
    pub extreme_max: Option<f64>,
    /// Coldest single day of the month.
    pub extreme_min: Option<f64>,
}

impl Cell {
    pub fn new(year: i32, month: u32, days: Vec<DailyRecord>) -> Self {
        let extreme_max = days.iter().map(|d| d.max_temp).reduce(f64::max);
        let extreme_min = days.iter().map(|d| d.min_temp).reduce(f64::min);
        Self {
            year,
            month,
            days,
            extreme_max,
            extreme_min,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Average of the daily maxima.
    pub fn mean_max(&self) -> Option<f64> {
        mean(self.days.iter().map(|d| d.max_temp))
    }

    /// Average of the daily minima.
    pub fn mean_min(&self) -> Option<f64> {
        mean(self.days.iter().map(|d| d.min_temp))
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Build one cell per windowed year and month, year-major then month-minor.
pub fn aggregate(grouping: &Grouping) -> Vec<Cell> {
    grouping
        .years
        .iter()
        .flat_map(|&year| {
            MONTHS
                .into_iter()
                .map(move |month| Cell::new(year, month, grouping.days(year, month).to_vec()))
        })
        .collect()
}
