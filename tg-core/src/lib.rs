//! Core types for Thermogrid: daily temperature records, the raw CSV row
//! shape they are parsed from, and the shared error type.

pub mod error;
pub mod record;

pub use error::{Result, TgError};
pub use record::{DailyRecord, ParseSummary, RawRow};
