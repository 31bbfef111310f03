use crate::error::EngineError;
use chrono::{Datelike, NaiveDate, TimeDelta};
use std::mem::replace;

/// An inclusive calendar-date range.
///
/// Both endpoints are part of the range; `from <= to` is enforced at
/// construction. The same type serves as the primary viewing window, the
/// comparison window, and the fetched-range record.
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

/// Calendar decomposition of a range's span into whole years, months and
/// leftover days, the way a human reads "1 month and 4 days".
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct CalendarSpan {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

impl DateRange {
    /// Build a range, rejecting reversed endpoints.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, EngineError> {
        if from > to {
            return Err(EngineError::InvalidArgument(format!(
                "date range starts after it ends: {} > {}",
                dash_utils::dates::date_key(&from),
                dash_utils::dates::date_key(&to),
            )));
        }
        Ok(Self { from, to })
    }

    pub fn start(&self) -> NaiveDate {
        self.from
    }

    pub fn end(&self) -> NaiveDate {
        self.to
    }

    /// True when both endpoints fall on the same calendar day.
    pub fn is_single_day(&self) -> bool {
        self.from == self.to
    }

    /// Exact number of whole days between the endpoints.
    ///
    /// Inclusive iteration visits `day_count() + 1` days.
    pub fn day_count(&self) -> i64 {
        (self.to - self.from).num_days()
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.from <= day && day <= self.to
    }

    /// Smallest range covering both `self` and `other`.
    pub fn union(&self, other: &DateRange) -> DateRange {
        DateRange {
            from: self.from.min(other.from),
            to: self.to.max(other.to),
        }
    }

    /// Iterate every day from start through end, ascending.
    pub fn days(&self) -> Days {
        Days(self.from, self.to)
    }

    /// Decompose the span into whole years, months and leftover days.
    pub fn calendar_span(&self) -> CalendarSpan {
        let mut years = self.to.year() - self.from.year();
        let mut months = self.to.month() as i32 - self.from.month() as i32;
        let mut days = self.to.day() as i32 - self.from.day() as i32;
        if days < 0 {
            months -= 1;
            let (year, month) = if self.to.month() == 1 {
                (self.to.year() - 1, 12)
            } else {
                (self.to.year(), self.to.month() - 1)
            };
            days += days_in_month(year, month) as i32;
        }
        if months < 0 {
            years -= 1;
            months += 12;
        }
        CalendarSpan { years, months, days }
    }

    /// Approximate span in days: `years*365 + months*30 + days` over the
    /// calendar decomposition. Deliberately not an exact day count; the
    /// approximation keeps bucket-size decisions stable across month-length
    /// variation.
    pub fn approx_days(&self) -> i64 {
        let span = self.calendar_span();
        span.years as i64 * 365 + span.months as i64 * 30 + span.days as i64
    }
}

/// Number of days in the given calendar month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap()
        .pred_opt()
        .unwrap()
        .day()
}

/// Iterator yielding each date of a range from start through end (inclusive).
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct Days(NaiveDate, NaiveDate);

impl Iterator for Days {
    type Item = NaiveDate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 <= self.1 {
            let next = self.0 + TimeDelta::try_days(1).unwrap();
            Some(replace(&mut self.0, next))
        } else {
            None
        }
    }
}
