//! Restricting records to the most recent years and grouping them by month.

use std::collections::{BTreeMap, BTreeSet};
use tg_core::DailyRecord;

/// Number of most recent calendar years shown in the grid.
pub const DEFAULT_YEAR_WINDOW: u32 = 10;

/// Records grouped by `(year, month)`, each list in file order.
pub type YearMonthGroup = BTreeMap<(i32, u32), Vec<DailyRecord>>;

/// Output of the temporal grouper.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grouping {
    /// Distinct years present after windowing, ascending.
    pub years: Vec<i32>,
    pub groups: YearMonthGroup,
}

impl Grouping {
    /// Day list for a year and month, empty when nothing was recorded.
    pub fn days(&self, year: i32, month: u32) -> &[DailyRecord] {
        self.groups
            .get(&(year, month))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Keep records whose year is within `window` of the latest year in the
/// data and group them by `(year, month)`.
///
/// The window is anchored on the data, not on today's date: with a latest
/// year of 2017 and a window of 10, years 2008 through 2017 are kept.
/// Returns `None` for empty input since there is no latest year.
pub fn group_recent_years(records: &[DailyRecord], window: u32) -> Option<Grouping> {
    let max_year = records.iter().map(|r| r.year).max()?;
    let window = i32::try_from(window).unwrap_or(i32::MAX);
    let cutoff = max_year.saturating_sub(window);

    let mut groups = YearMonthGroup::new();
    let mut years = BTreeSet::new();
    for record in records.iter().filter(|r| r.year > cutoff) {
        years.insert(record.year);
        groups
            .entry((record.year, record.month))
            .or_default()
            .push(record.clone());
    }

    Some(Grouping {
        years: years.into_iter().collect(),
        groups,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(year: i32, month: u32, day: u32, max: f64, min: f64) -> DailyRecord {
        DailyRecord::new(NaiveDate::from_ymd_opt(year, month, day).unwrap(), max, min).unwrap()
    }

    #[test]
    fn keeps_ten_most_recent_years() {
        let records: Vec<DailyRecord> = (2000..=2017)
            .map(|year| record(year, 3, 1, 15.0, 5.0))
            .collect();
        let grouping = group_recent_years(&records, DEFAULT_YEAR_WINDOW).unwrap();
        assert_eq!(grouping.years, (2008..=2017).collect::<Vec<_>>());
        assert!(grouping.groups.keys().all(|(year, _)| *year >= 2008));
        assert!(grouping.days(2007, 3).is_empty());
    }

    #[test]
    fn window_is_anchored_on_data_not_today() {
        let records = vec![record(1990, 1, 1, 1.0, 0.0), record(1985, 1, 1, 1.0, 0.0)];
        let grouping = group_recent_years(&records, DEFAULT_YEAR_WINDOW).unwrap();
        assert_eq!(grouping.years, vec![1985, 1990]);
    }

    #[test]
    fn years_with_gaps_are_not_filled() {
        let records = vec![
            record(2017, 1, 1, 1.0, 0.0),
            record(2012, 1, 1, 1.0, 0.0),
            record(2007, 1, 1, 1.0, 0.0),
        ];
        let grouping = group_recent_years(&records, DEFAULT_YEAR_WINDOW).unwrap();
        assert_eq!(grouping.years, vec![2012, 2017]);
    }

    #[test]
    fn groups_preserve_file_order() {
        let records = vec![
            record(2017, 6, 3, 30.0, 20.0),
            record(2017, 6, 1, 31.0, 21.0),
            record(2017, 7, 1, 32.0, 22.0),
            record(2017, 6, 2, 33.0, 23.0),
        ];
        let grouping = group_recent_years(&records, DEFAULT_YEAR_WINDOW).unwrap();
        let june: Vec<u32> = grouping.days(2017, 6).iter().map(|r| r.day).collect();
        assert_eq!(june, vec![3, 1, 2]);
        assert_eq!(grouping.days(2017, 7).len(), 1);
    }

    #[test]
    fn unsorted_input_years_come_out_ascending() {
        let records = vec![
            record(2015, 1, 1, 1.0, 0.0),
            record(2017, 1, 1, 1.0, 0.0),
            record(2016, 1, 1, 1.0, 0.0),
            record(2015, 2, 1, 1.0, 0.0),
        ];
        let grouping = group_recent_years(&records, DEFAULT_YEAR_WINDOW).unwrap();
        assert_eq!(grouping.years, vec![2015, 2016, 2017]);
    }

    #[test]
    fn empty_input_has_no_grouping() {
        assert!(group_recent_years(&[], DEFAULT_YEAR_WINDOW).is_none());
    }

    #[test]
    fn custom_window() {
        let records: Vec<DailyRecord> = (2010..=2017)
            .map(|year| record(year, 1, 1, 1.0, 0.0))
            .collect();
        let grouping = group_recent_years(&records, 3).unwrap();
        assert_eq!(grouping.years, vec![2015, 2016, 2017]);
    }

    #[test]
    fn huge_window_keeps_every_year() {
        let records = vec![record(2016, 3, 1, 20.0, 8.0), record(2017, 6, 1, 30.0, 18.0)];
        let grouping = group_recent_years(&records, 3_000_000_000).unwrap();
        assert_eq!(grouping.years, vec![2016, 2017]);
        let grouping = group_recent_years(&records, u32::MAX).unwrap();
        assert_eq!(grouping.years, vec![2016, 2017]);
    }
}
