//! Partition a raw per-day series into ordered display buckets.
//!
//! The walk visits every calendar day of the primary range once, strictly
//! ascending, while a second cursor steps through the comparison range in
//! lockstep: the N-th day of the comparison window lines up with the N-th
//! day of the primary window, regardless of what dates those are.

use crate::granularity::Granularity;
use crate::series::RawSeries;
use chrono::{Datelike, NaiveDate};
use dash_core::date_range::DateRange;
use serde::Serialize;

/// One aggregated unit of chart output covering a granularity-sized span
/// of the primary range.
///
/// `None` means no contributing day had data, which is distinct from an
/// accumulated sum of exactly zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bucket {
    pub label: String,
    pub value: Option<f64>,
    pub comparison_value: Option<f64>,
}

/// Ordered buckets plus the running totals accumulated during the walk.
///
/// Totals are taken from the raw (unrounded) contributions, so they match
/// the raw series sums over the windows rather than the per-bucket rounded
/// display values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketSeries {
    pub buckets: Vec<Bucket>,
    pub total: f64,
    pub comparison_total: f64,
}

/// Build the bucket sequence for a primary range and its aligned
/// comparison range.
///
/// Bucket boundaries close per granularity: every day, every 7th day
/// consumed from the range start, or on each calendar-month change. A
/// trailing partial bucket is kept. The first and last buckets carry
/// human-readable "Month Day" labels; interior buckets are labeled by
/// their 1-based sequence index. A single-day primary range yields one
/// day bucket.
pub fn build_buckets(
    primary: &DateRange,
    comparison: &DateRange,
    raw: &RawSeries,
    granularity: Granularity,
) -> BucketSeries {
    let mut buckets: Vec<Bucket> = Vec::new();
    let mut total = 0.0;
    let mut comparison_total = 0.0;

    let mut value: Option<f64> = None;
    let mut comparison_value: Option<f64> = None;
    let mut bucket_month = primary.start().month();
    let mut days_in_bucket = 0u32;
    let mut comparison_cursor = comparison.start();

    for day in primary.days() {
        // A month bucket closes when the walk crosses into a new calendar
        // month; the new month's first day opens the next bucket.
        if granularity == Granularity::Months
            && days_in_bucket > 0
            && day.month() != bucket_month
        {
            push_bucket(&mut buckets, primary.start(), &mut value, &mut comparison_value);
            days_in_bucket = 0;
        }
        if days_in_bucket == 0 {
            bucket_month = day.month();
        }

        if let Some(v) = raw.get(&day) {
            value = Some(value.unwrap_or(0.0) + v);
            total += v;
        }

        // Comparison contributions stop once the cursor reaches the
        // primary window, otherwise overlapping windows would count those
        // days twice.
        if comparison_cursor < primary.start() {
            if let Some(v) = raw.get(&comparison_cursor) {
                comparison_value = Some(comparison_value.unwrap_or(0.0) + v);
                comparison_total += v;
            }
        }
        comparison_cursor = comparison_cursor.succ_opt().unwrap();
        days_in_bucket += 1;

        let width_reached = match granularity {
            Granularity::Days => true,
            Granularity::Weeks => days_in_bucket == 7,
            Granularity::Months => false,
        };
        if width_reached {
            push_bucket(&mut buckets, primary.start(), &mut value, &mut comparison_value);
            days_in_bucket = 0;
        }
    }

    // Trailing partial bucket when the range length is not an even number
    // of bucket widths. Month buckets always land here.
    if days_in_bucket > 0 {
        push_bucket(&mut buckets, primary.start(), &mut value, &mut comparison_value);
    }

    if let Some(last) = buckets.last_mut() {
        last.label = month_day_label(&primary.end());
        // A comparison window shorter than the primary window cannot fully
        // cover the final bucket; partial data there would be misleading.
        if comparison.day_count() < primary.day_count() {
            last.comparison_value = None;
        }
    }

    BucketSeries {
        buckets,
        total,
        comparison_total,
    }
}

fn push_bucket(
    buckets: &mut Vec<Bucket>,
    range_start: NaiveDate,
    value: &mut Option<f64>,
    comparison_value: &mut Option<f64>,
) {
    let label = if buckets.is_empty() {
        month_day_label(&range_start)
    } else {
        (buckets.len() + 1).to_string()
    };
    buckets.push(Bucket {
        label,
        value: value.take().map(f64::round),
        comparison_value: comparison_value.take().map(f64::round),
    });
}

/// Human-readable axis label, e.g. "Jan 5".
pub fn month_day_label(day: &NaiveDate) -> String {
    day.format("%b %-d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn range(from: (i32, u32, u32), to: (i32, u32, u32)) -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(from.0, from.1, from.2).unwrap(),
            NaiveDate::from_ymd_opt(to.0, to.1, to.2).unwrap(),
        )
        .unwrap()
    }

    fn series(rows: &[((i32, u32, u32), f64)]) -> RawSeries {
        let mut raw = RawSeries::new();
        for ((y, m, d), v) in rows {
            raw.insert_day(&ymd(*y, *m, *d), *v);
        }
        raw
    }

    #[test]
    fn test_day_buckets_one_per_day() {
        let primary = range((2024, 1, 1), (2024, 1, 5));
        let comparison = range((2023, 12, 27), (2023, 12, 31));
        let raw = series(&[((2024, 1, 1), 10.0), ((2024, 1, 3), 5.0)]);

        let out = build_buckets(&primary, &comparison, &raw, Granularity::Days);

        assert_eq!(out.buckets.len(), 5);
        assert_eq!(out.buckets[0].value, Some(10.0));
        assert_eq!(out.buckets[1].value, None);
        assert_eq!(out.buckets[2].value, Some(5.0));
        assert_eq!(out.buckets[3].value, None);
        assert_eq!(out.buckets[4].value, None);
        assert_eq!(out.total, 15.0);
    }

    #[test]
    fn test_first_and_last_buckets_get_readable_labels() {
        let primary = range((2024, 1, 1), (2024, 1, 5));
        let comparison = range((2023, 12, 27), (2023, 12, 31));
        let out = build_buckets(&primary, &comparison, &RawSeries::new(), Granularity::Days);

        let labels: Vec<&str> = out.buckets.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Jan 1", "2", "3", "4", "Jan 5"]);
    }

    #[test]
    fn test_no_day_dropped_or_double_counted() {
        let primary = range((2024, 2, 1), (2024, 2, 21));
        let comparison = range((2024, 1, 11), (2024, 1, 31));
        let raw = series(&[
            ((2024, 2, 1), 3.0),
            ((2024, 2, 7), 4.0),
            ((2024, 2, 8), 1.0),
            ((2024, 2, 15), 6.0),
            ((2024, 2, 21), 2.0),
        ]);

        let out = build_buckets(&primary, &comparison, &raw, Granularity::Weeks);

        let bucket_sum: f64 = out.buckets.iter().filter_map(|b| b.value).sum();
        assert_eq!(bucket_sum, 16.0);
        assert_eq!(out.total, 16.0);
    }

    #[test]
    fn test_week_buckets_close_every_seventh_day() {
        // 16 days: two full week buckets plus a 2-day partial remainder
        let primary = range((2024, 3, 1), (2024, 3, 16));
        let comparison = range((2024, 2, 14), (2024, 2, 29));
        let raw = series(&[
            ((2024, 3, 1), 1.0),
            ((2024, 3, 7), 1.0),
            ((2024, 3, 8), 5.0),
            ((2024, 3, 15), 7.0),
        ]);

        let out = build_buckets(&primary, &comparison, &raw, Granularity::Weeks);

        assert_eq!(out.buckets.len(), 3);
        assert_eq!(out.buckets[0].value, Some(2.0));
        assert_eq!(out.buckets[1].value, Some(5.0));
        assert_eq!(out.buckets[2].value, Some(7.0));
    }

    #[test]
    fn test_month_buckets_split_on_calendar_boundary() {
        // 35 days starting mid-month: partial Jan, full Feb, partial Mar
        let primary = range((2024, 1, 30), (2024, 3, 4));
        let comparison = range((2023, 12, 26), (2024, 1, 29));
        let raw = series(&[
            ((2024, 1, 30), 2.0),
            ((2024, 1, 31), 3.0),
            ((2024, 2, 1), 10.0),
            ((2024, 2, 29), 20.0),
            ((2024, 3, 1), 7.0),
        ]);

        let out = build_buckets(&primary, &comparison, &raw, Granularity::Months);

        assert_eq!(out.buckets.len(), 3);
        assert_eq!(out.buckets[0].value, Some(5.0));
        assert_eq!(out.buckets[1].value, Some(30.0));
        assert_eq!(out.buckets[2].value, Some(7.0));
        assert_eq!(out.buckets[0].label, "Jan 30");
        assert_eq!(out.buckets[1].label, "2");
        assert_eq!(out.buckets[2].label, "Mar 4");
    }

    #[test]
    fn test_zero_sum_is_not_no_data() {
        let primary = range((2024, 1, 1), (2024, 1, 2));
        let comparison = range((2023, 12, 30), (2023, 12, 31));
        let raw = series(&[((2024, 1, 1), 0.0)]);

        let out = build_buckets(&primary, &comparison, &raw, Granularity::Days);

        assert_eq!(out.buckets[0].value, Some(0.0));
        assert_eq!(out.buckets[1].value, None);
    }

    #[test]
    fn test_comparison_aligns_structurally_day_by_day() {
        let primary = range((2024, 1, 8), (2024, 1, 10));
        let comparison = range((2024, 1, 1), (2024, 1, 3));
        let raw = series(&[
            ((2024, 1, 1), 4.0),
            ((2024, 1, 3), 9.0),
            ((2024, 1, 8), 40.0),
            ((2024, 1, 10), 90.0),
        ]);

        let out = build_buckets(&primary, &comparison, &raw, Granularity::Days);

        assert_eq!(out.buckets[0].value, Some(40.0));
        assert_eq!(out.buckets[0].comparison_value, Some(4.0));
        assert_eq!(out.buckets[1].comparison_value, None);
        assert_eq!(out.buckets[2].value, Some(90.0));
        assert_eq!(out.buckets[2].comparison_value, Some(9.0));
        assert_eq!(out.comparison_total, 13.0);
    }

    #[test]
    fn test_overlapping_comparison_days_are_not_double_counted() {
        // Comparison window reaches into the primary window; the cursor
        // stops contributing at the primary start.
        let primary = range((2024, 1, 5), (2024, 1, 8));
        let comparison = range((2024, 1, 3), (2024, 1, 6));
        let raw = series(&[
            ((2024, 1, 3), 1.0),
            ((2024, 1, 4), 2.0),
            ((2024, 1, 5), 100.0),
            ((2024, 1, 6), 200.0),
        ]);

        let out = build_buckets(&primary, &comparison, &raw, Granularity::Days);

        // Only Jan 3 and Jan 4 may contribute to the comparison side.
        assert_eq!(out.comparison_total, 3.0);
        assert_eq!(out.buckets[0].comparison_value, Some(1.0));
        assert_eq!(out.buckets[1].comparison_value, Some(2.0));
        assert_eq!(out.buckets[2].comparison_value, None);
    }

    #[test]
    fn test_shorter_comparison_nulls_final_bucket() {
        let primary = range((2024, 1, 8), (2024, 1, 12));
        let comparison = range((2024, 1, 5), (2024, 1, 7));
        let raw = series(&[
            ((2024, 1, 5), 1.0),
            ((2024, 1, 6), 1.0),
            ((2024, 1, 7), 1.0),
        ]);

        let out = build_buckets(&primary, &comparison, &raw, Granularity::Days);

        assert_eq!(out.buckets.len(), 5);
        assert_eq!(out.buckets.last().unwrap().comparison_value, None);
    }

    #[test]
    fn test_single_day_range_yields_one_bucket() {
        let primary = range((2024, 1, 5), (2024, 1, 5));
        let comparison = range((2024, 1, 4), (2024, 1, 4));
        let raw = series(&[((2024, 1, 5), 42.0)]);

        let out = build_buckets(&primary, &comparison, &raw, Granularity::Days);

        assert_eq!(out.buckets.len(), 1);
        assert_eq!(out.buckets[0].value, Some(42.0));
        assert_eq!(out.buckets[0].label, "Jan 5");
    }

    #[test]
    fn test_values_round_on_close() {
        let primary = range((2024, 1, 1), (2024, 1, 7));
        let comparison = range((2023, 12, 25), (2023, 12, 31));
        let raw = series(&[((2024, 1, 2), 1.2), ((2024, 1, 3), 1.4)]);

        let out = build_buckets(&primary, &comparison, &raw, Granularity::Weeks);

        assert_eq!(out.buckets.len(), 1);
        assert_eq!(out.buckets[0].value, Some(3.0));
    }
}
