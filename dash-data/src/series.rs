use chrono::NaiveDate;
use dash_utils::dates;
use std::collections::HashMap;

/// In-memory raw series: one numeric value per calendar day, keyed by the
/// canonical "YYYY-MM-DD" date key.
///
/// The map is sparse; a day with no data is absent, which is distinct from
/// a day whose value is zero. The store is replaced wholesale each time a
/// fetch completes rather than merged incrementally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSeries {
    values: HashMap<String, f64>,
}

impl RawSeries {
    pub fn new() -> RawSeries {
        RawSeries::default()
    }

    /// Build a series from fetched `(date, value)` rows.
    ///
    /// Row dates may carry a time-of-day suffix; keys are trimmed to the
    /// calendar day. The fetch contract promises at most one row per day,
    /// so a duplicate key simply keeps the later row.
    pub fn from_rows(rows: Vec<(String, f64)>) -> RawSeries {
        let mut values = HashMap::with_capacity(rows.len());
        for (date, value) in rows {
            values.insert(dates::trim_key(&date).to_string(), value);
        }
        RawSeries { values }
    }

    pub fn insert_day(&mut self, day: &NaiveDate, value: f64) {
        self.values.insert(dates::date_key(day), value);
    }

    /// Look up the value recorded for a calendar day, if any.
    pub fn get(&self, day: &NaiveDate) -> Option<f64> {
        self.values.get(&dates::date_key(day)).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_from_rows_trims_time_of_day() {
        let series = RawSeries::from_rows(vec![
            ("2024-01-03 00:00".to_string(), 12.0),
            ("2024-01-04T09:15:00Z".to_string(), 7.0),
        ]);
        assert_eq!(series.get(&ymd(2024, 1, 3)), Some(12.0));
        assert_eq!(series.get(&ymd(2024, 1, 4)), Some(7.0));
    }

    #[test]
    fn test_absent_day_is_none_not_zero() {
        let mut series = RawSeries::new();
        series.insert_day(&ymd(2024, 1, 3), 0.0);
        assert_eq!(series.get(&ymd(2024, 1, 3)), Some(0.0));
        assert_eq!(series.get(&ymd(2024, 1, 4)), None);
    }

    #[test]
    fn test_lookup_ignores_insertion_order() {
        let a = RawSeries::from_rows(vec![
            ("2024-01-01".to_string(), 1.0),
            ("2024-01-02".to_string(), 2.0),
        ]);
        let b = RawSeries::from_rows(vec![
            ("2024-01-02".to_string(), 2.0),
            ("2024-01-01".to_string(), 1.0),
        ]);
        assert_eq!(a, b);
    }
}
