use dash_core::date_range::DateRange;
use serde::Serialize;

/// Bucket width class chosen from the primary range's span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Days,
    Weeks,
    Months,
}

impl Granularity {
    /// Classify a range by its approximate day span: under a week, one
    /// bucket per day; under a month, week buckets; otherwise month buckets.
    ///
    /// Pure function of the range; granularity never depends on how much
    /// data the range happens to contain.
    pub fn classify(range: &DateRange) -> Granularity {
        let span = range.approx_days();
        if span < 7 {
            Granularity::Days
        } else if span < 30 {
            Granularity::Weeks
        } else {
            Granularity::Months
        }
    }
}
