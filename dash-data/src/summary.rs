use dash_utils::numbers;
use serde::Serialize;

/// Header totals derived each time the buckets are rebuilt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total: f64,
    pub comparison_total: f64,
    pub percent_delta: String,
}

impl Summary {
    pub fn compute(total: f64, comparison_total: f64) -> Summary {
        Summary {
            total,
            comparison_total,
            percent_delta: percent_delta(total, comparison_total),
        }
    }

    /// Period total formatted for display.
    pub fn display_total(&self) -> String {
        numbers::format_amount(self.total)
    }

    /// Comparison-period total formatted for display.
    pub fn display_comparison_total(&self) -> String {
        numbers::format_amount(self.comparison_total)
    }
}

/// Percent difference between the period totals relative to their mean,
/// one decimal place, prefixed `+` when the current period is ahead and
/// `-` otherwise.
///
/// Two zero totals report "0.0%" rather than propagating the 0/0 division.
pub fn percent_delta(total: f64, comparison_total: f64) -> String {
    let mean = (total + comparison_total) / 2.0;
    if mean == 0.0 {
        return "0.0%".to_string();
    }
    let magnitude = 100.0 * (total - comparison_total).abs() / mean;
    let sign = if total > comparison_total { '+' } else { '-' };
    format!("{}{:.1}%", sign, magnitude)
}
