//! Preset date ranges for the dashboard's dropdown selections.
//!
//! All presets take the anchor day ("today") as an explicit parameter and
//! recompute from it on every call. A process that caches these ranges at
//! startup serves yesterday's windows after a midnight rollover.

use crate::date_range::DateRange;
use chrono::{Datelike, Days, Months, NaiveDate};

/// Primary-window presets. The token form is what dashboard rows store as
/// their initial range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangePreset {
    Last30Days,
    Last90Days,
    CurrentMonth,
}

impl RangePreset {
    pub fn from_token(token: &str) -> Option<RangePreset> {
        match token.trim() {
            "LAST_30_DAYS" => Some(RangePreset::Last30Days),
            "LAST_90_DAYS" => Some(RangePreset::Last90Days),
            "CURRENT_MONTH" => Some(RangePreset::CurrentMonth),
            _ => None,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            RangePreset::Last30Days => "LAST_30_DAYS",
            RangePreset::Last90Days => "LAST_90_DAYS",
            RangePreset::CurrentMonth => "CURRENT_MONTH",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RangePreset::Last30Days => "Last 30 days",
            RangePreset::Last90Days => "Last 90 days",
            RangePreset::CurrentMonth => "Current month",
        }
    }

    /// Resolve the preset into a concrete range ending today.
    pub fn resolve(&self, today: NaiveDate) -> DateRange {
        let range = match self {
            RangePreset::Last30Days => DateRange::new(today - Days::new(29), today),
            RangePreset::Last90Days => DateRange::new(today - Days::new(89), today),
            RangePreset::CurrentMonth => DateRange::new(today.with_day(1).unwrap(), today),
        };
        range.unwrap()
    }
}

/// Comparison-window presets ("compared to ...").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonPreset {
    PreviousPeriod,
    Previous30Days,
    Previous90Days,
    PreviousMonth,
}

impl ComparisonPreset {
    pub fn from_token(token: &str) -> Option<ComparisonPreset> {
        match token.trim() {
            "PREVIOUS_PERIOD" => Some(ComparisonPreset::PreviousPeriod),
            "PREVIOUS_30_DAYS" => Some(ComparisonPreset::Previous30Days),
            "PREVIOUS_90_DAYS" => Some(ComparisonPreset::Previous90Days),
            "PREVIOUS_MONTH" => Some(ComparisonPreset::PreviousMonth),
            _ => None,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            ComparisonPreset::PreviousPeriod => "PREVIOUS_PERIOD",
            ComparisonPreset::Previous30Days => "PREVIOUS_30_DAYS",
            ComparisonPreset::Previous90Days => "PREVIOUS_90_DAYS",
            ComparisonPreset::PreviousMonth => "PREVIOUS_MONTH",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComparisonPreset::PreviousPeriod => "Previous period",
            ComparisonPreset::Previous30Days => "Previous 30 days",
            ComparisonPreset::Previous90Days => "Previous 90 days",
            ComparisonPreset::PreviousMonth => "Previous month",
        }
    }

    /// Resolve the comparison window for a given primary range.
    ///
    /// `PreviousPeriod` mirrors the primary range's calendar span
    /// immediately before it; the fixed-width presets ignore the primary
    /// span and take the N days ending the day before it starts.
    pub fn resolve(&self, primary: &DateRange, today: NaiveDate) -> DateRange {
        match self {
            ComparisonPreset::Previous30Days => window_before(primary.start(), 30),
            ComparisonPreset::Previous90Days => window_before(primary.start(), 90),
            ComparisonPreset::PreviousMonth => {
                month_of(today.checked_sub_months(Months::new(1)).unwrap())
            }
            ComparisonPreset::PreviousPeriod => {
                let span = primary.calendar_span();
                let to = primary.start() - Days::new(1);
                let from = primary
                    .start()
                    .checked_sub_months(Months::new((span.years * 12 + span.months) as u32))
                    .unwrap()
                    - Days::new(span.days as u64 + 1);
                DateRange::new(from, to).unwrap()
            }
        }
    }
}

/// The `len` days ending the day before `start`.
fn window_before(start: NaiveDate, len: u64) -> DateRange {
    DateRange::new(start - Days::new(len), start - Days::new(1)).unwrap()
}

/// The full calendar month containing `day`.
fn month_of(day: NaiveDate) -> DateRange {
    let first = day.with_day(1).unwrap();
    let last = first + Months::new(1) - Days::new(1);
    DateRange::new(first, last).unwrap()
}
