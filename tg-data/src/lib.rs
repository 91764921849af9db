//! Data processing for daily temperature observations.
//!
//! This crate turns parsed [`DailyRecord`]s into the grid the renderer
//! draws: the most recent years are kept, records are grouped by
//! `(year, month)`, and every slot of the year x month grid is reduced
//! into a [`Cell`].
//!
//! ```rust
//! use tg_data::Dataset;
//!
//! let csv = "date,max_temperature,min_temperature\n2017-06-01,32.5,27.1\n2017-06-02,33.0,26.5\n";
//! let dataset = Dataset::from_csv(csv, tg_data::DEFAULT_YEAR_WINDOW).unwrap();
//! assert_eq!(dataset.years, vec![2017]);
//! assert_eq!(dataset.cells.len(), 12);
//! assert_eq!(dataset.cell(2017, 6).unwrap().extreme_max, Some(33.0));
//! ```

pub mod cells;
pub mod grouping;

pub use cells::{aggregate, Cell, MONTHS};
pub use grouping::{group_recent_years, Grouping, YearMonthGroup, DEFAULT_YEAR_WINDOW};

use serde::Serialize;
use tg_core::{record, DailyRecord, Result, TgError};

/// The read-only output of the data pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    /// Column domain, ascending.
    pub years: Vec<i32>,
    /// `years.len() * 12` cells, year-major, month-minor.
    pub cells: Vec<Cell>,
}

impl Dataset {
    /// Group and aggregate parsed records.
    ///
    /// An empty record list is a load failure: there is no year to window on.
    pub fn from_records(records: &[DailyRecord], window: u32) -> Result<Self> {
        let grouping = group_recent_years(records, window).ok_or(TgError::EmptyDataset)?;
        let cells = aggregate(&grouping);
        log::info!(
            "built {} cells over years {:?}",
            cells.len(),
            grouping.years
        );
        Ok(Self {
            years: grouping.years,
            cells,
        })
    }

    /// Run the full pipeline over CSV text.
    pub fn from_csv(csv_data: &str, window: u32) -> Result<Self> {
        let summary = record::parse_csv(csv_data)?;
        Self::from_records(&summary.records, window)
    }

    /// Look up the cell for a year and month.
    pub fn cell(&self, year: i32, month: u32) -> Option<&Cell> {
        let column = self.years.iter().position(|y| *y == year)?;
        if !(1..=12).contains(&month) {
            return None;
        }
        self.cells.get(column * MONTHS.len() + (month as usize - 1))
    }

    /// Whether there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}
