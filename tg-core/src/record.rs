use crate::error::{Result, TgError};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use std::io::Read;
use tg_utils::dates;

/// Header name of the observation date column.
pub const DATE_COLUMN: &str = "date";
/// Header name of the daily maximum column.
pub const MAX_TEMPERATURE_COLUMN: &str = "max_temperature";
/// Header name of the daily minimum column.
pub const MIN_TEMPERATURE_COLUMN: &str = "min_temperature";

/// One row of the source file, still as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    pub date: String,
    pub max_temperature: String,
    pub min_temperature: String,
}

impl RawRow {
    pub fn new(date: &str, max_temperature: &str, min_temperature: &str) -> Self {
        Self {
            date: date.to_string(),
            max_temperature: max_temperature.to_string(),
            min_temperature: min_temperature.to_string(),
        }
    }
}

/// Why a row was left out of the dataset.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum RowDefect {
    Date,
    MaxTemperature,
    MinTemperature,
}

/// A single day of temperature observations in degrees Celsius.
///
/// Both temperatures are guaranteed finite; rows that fail this never
/// become a `DailyRecord`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub max_temp: f64,
    pub min_temp: f64,
}

impl DailyRecord {
    /// Build a record from an already-parsed date, deriving year/month/day.
    /// Returns `None` if either temperature is not finite.
    pub fn new(date: NaiveDate, max_temp: f64, min_temp: f64) -> Option<Self> {
        if !max_temp.is_finite() || !min_temp.is_finite() {
            return None;
        }
        let (year, month, day) = dates::decompose(&date);
        Some(Self {
            date,
            year,
            month,
            day,
            max_temp,
            min_temp,
        })
    }
}

fn parse_temperature(field: &str) -> Option<f64> {
    field
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

impl TryFrom<&RawRow> for DailyRecord {
    type Error = RowDefect;

    fn try_from(row: &RawRow) -> std::result::Result<Self, Self::Error> {
        let date = dates::parse_date(&row.date).map_err(|_| RowDefect::Date)?;
        let max_temp =
            parse_temperature(&row.max_temperature).ok_or(RowDefect::MaxTemperature)?;
        let min_temp =
            parse_temperature(&row.min_temperature).ok_or(RowDefect::MinTemperature)?;
        DailyRecord::new(date, max_temp, min_temp).ok_or(RowDefect::MaxTemperature)
    }
}

/// Output of the row parser: the surviving records plus how many rows were dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseSummary {
    pub records: Vec<DailyRecord>,
    pub dropped: usize,
}

/// Convert raw rows into daily records, silently dropping malformed rows.
pub fn parse_rows<I>(rows: I) -> ParseSummary
where
    I: IntoIterator<Item = RawRow>,
{
    let mut summary = ParseSummary::default();
    for row in rows {
        match DailyRecord::try_from(&row) {
            Ok(record) => summary.records.push(record),
            Err(defect) => {
                log::debug!("dropping row {:?}: unparseable {:?}", row, defect);
                summary.dropped += 1;
            }
        }
    }
    summary
}

/// Read CSV text with a header row into raw rows.
///
/// Columns are located by header name, so their order does not matter and
/// extra columns are ignored. A missing required header is a load failure.
pub fn read_raw_rows<R: Read>(reader: R) -> Result<Vec<RawRow>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let position = |name: &'static str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or(TgError::MissingColumn(name))
    };
    let date_idx = position(DATE_COLUMN)?;
    let max_idx = position(MAX_TEMPERATURE_COLUMN)?;
    let min_idx = position(MIN_TEMPERATURE_COLUMN)?;

    let mut rows = Vec::new();
    for result in rdr.records() {
        let r = result?;
        rows.push(RawRow::new(
            r.get(date_idx).unwrap_or(""),
            r.get(max_idx).unwrap_or(""),
            r.get(min_idx).unwrap_or(""),
        ));
    }
    Ok(rows)
}

/// Parse a CSV document into daily records.
pub fn parse_csv_reader<R: Read>(reader: R) -> Result<ParseSummary> {
    let rows = read_raw_rows(reader)?;
    let total = rows.len();
    let summary = parse_rows(rows);
    log::info!(
        "parsed {} daily records from {} rows ({} dropped)",
        summary.records.len(),
        total,
        summary.dropped
    );
    Ok(summary)
}

/// Parse CSV text into daily records.
///
/// ```rust
/// let csv = "date,max_temperature,min_temperature\n2017-06-01,32.5,27.1\n2017-06-02,,26.5\n";
/// let summary = tg_core::record::parse_csv(csv).unwrap();
/// assert_eq!(summary.records.len(), 1);
/// assert_eq!(summary.dropped, 1);
/// ```
pub fn parse_csv(csv_data: &str) -> Result<ParseSummary> {
    parse_csv_reader(csv_data.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const SAMPLE_CSV: &str = "\
date,max_temperature,min_temperature
2017-06-01,32.5,27.1
2017-06-02,33.0,26.5
2016-06-01,31.0,25.0
2016-06-02,,24.0
2016-06-03,30.0,n/a
";

    #[test]
    fn valid_row_decomposes_date() {
        let row = RawRow::new("2017-06-02", "33.0", "26.5");
        let record = DailyRecord::try_from(&row).unwrap();
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2017, 6, 2).unwrap());
        assert_eq!((record.year, record.month, record.day), (2017, 6, 2));
        assert_eq!(record.max_temp, 33.0);
        assert_eq!(record.min_temp, 26.5);
    }

    #[test]
    fn negative_and_whitespace_values_parse() {
        let row = RawRow::new("2010-01-15", " -4.5 ", "-12");
        let record = DailyRecord::try_from(&row).unwrap();
        assert_eq!(record.max_temp, -4.5);
        assert_eq!(record.min_temp, -12.0);
    }

    #[test]
    fn bad_fields_are_reported() {
        assert_eq!(
            DailyRecord::try_from(&RawRow::new("2017/06/01", "1", "1")),
            Err(RowDefect::Date)
        );
        assert_eq!(
            DailyRecord::try_from(&RawRow::new("2017-06-01", "", "1")),
            Err(RowDefect::MaxTemperature)
        );
        assert_eq!(
            DailyRecord::try_from(&RawRow::new("2017-06-01", "1", "abc")),
            Err(RowDefect::MinTemperature)
        );
    }

    #[test]
    fn non_finite_values_are_dropped() {
        let rows = vec![
            RawRow::new("2017-06-01", "NaN", "1.0"),
            RawRow::new("2017-06-02", "1.0", "inf"),
            RawRow::new("2017-06-03", "-infinity", "1.0"),
            RawRow::new("2017-06-04", "2.0", "1.0"),
        ];
        let summary = parse_rows(rows);
        assert_eq!(summary.records.len(), 1);
        assert_eq!(summary.dropped, 3);
        assert_eq!(summary.records[0].day, 4);
    }

    #[test]
    fn parse_csv_drops_incomplete_rows() {
        let summary = parse_csv(SAMPLE_CSV).unwrap();
        assert_eq!(summary.records.len(), 3);
        assert_eq!(summary.dropped, 2);
        // file order is preserved
        assert_eq!(summary.records[0].day, 1);
        assert_eq!(summary.records[2].year, 2016);
    }

    #[test]
    fn parse_csv_locates_columns_by_header() {
        let csv = "station,min_temperature,date,max_temperature\nX,10.5,2012-03-04,20.25\n";
        let summary = parse_csv(csv).unwrap();
        assert_eq!(summary.records.len(), 1);
        let record = &summary.records[0];
        assert_eq!((record.year, record.month, record.day), (2012, 3, 4));
        assert_eq!(record.max_temp, 20.25);
        assert_eq!(record.min_temp, 10.5);
    }

    #[test]
    fn parse_csv_short_rows_are_dropped() {
        let csv = "date,max_temperature,min_temperature\n2012-03-04,20.0\n2012-03-05,21.0,11.0\n";
        let summary = parse_csv(csv).unwrap();
        assert_eq!(summary.records.len(), 1);
        assert_eq!(summary.dropped, 1);
    }

    #[test]
    fn parse_csv_missing_header_fails() {
        let csv = "date,max_temperature\n2012-03-04,20.0\n";
        match parse_csv(csv) {
            Err(TgError::MissingColumn(name)) => assert_eq!(name, MIN_TEMPERATURE_COLUMN),
            other => panic!("expected missing column, got {:?}", other),
        }
    }

    #[test]
    fn parse_csv_header_only_is_empty() {
        let summary = parse_csv("date,max_temperature,min_temperature\n").unwrap();
        assert!(summary.records.is_empty());
        assert_eq!(summary.dropped, 0);
    }

    #[test]
    fn record_serializes_with_iso_date() {
        let record = DailyRecord::new(NaiveDate::from_ymd_opt(2017, 6, 1).unwrap(), 32.5, 27.1)
            .unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["date"], "2017-06-01");
        assert_eq!(json["month"], 6);
    }
}
