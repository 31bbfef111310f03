//! Shared utility functions for dash crates.

/// Date key utilities.
///
/// Every raw-series insert and lookup goes through `date_key` so that two
/// timestamps falling on the same calendar day collide on the same map key.
pub mod dates {
    use chrono::{DateTime, NaiveDate, Utc};

    /// Canonical key format: "YYYY-MM-DD".
    pub const KEY_FORMAT: &str = "%Y-%m-%d";

    /// Format a NaiveDate as a canonical "YYYY-MM-DD" key.
    pub fn date_key(date: &NaiveDate) -> String {
        date.format(KEY_FORMAT).to_string()
    }

    /// Key for a full timestamp: the UTC calendar-date portion.
    ///
    /// UTC keeps keys stable across environments; a local-time key would
    /// split one calendar day across two keys near midnight.
    pub fn timestamp_key(dt: &DateTime<Utc>) -> String {
        date_key(&dt.date_naive())
    }

    /// Strip any time-of-day suffix from a stored date string.
    ///
    /// Backing stores hand back "2024-01-15", "2024-01-15 00:00" or
    /// "2024-01-15T00:00:00Z" depending on the column type; only the first
    /// ten characters identify the calendar day.
    pub fn trim_key(raw: &str) -> &str {
        raw.get(..10).unwrap_or(raw)
    }

    /// Parse a date string in "YYYY-MM-DD" format.
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s, KEY_FORMAT)?)
    }

}

/// Display formatting for summary numbers.
pub mod numbers {
    /// Insert thousands separators into the integer part of a number string.
    pub fn group_thousands(num: &str) -> String {
        let (sign, rest) = match num.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", num),
        };
        let (int_part, frac_part) = match rest.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (rest, None),
        };

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, c) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }

        match frac_part {
            Some(f) => format!("{sign}{grouped}.{f}"),
            None => format!("{sign}{grouped}"),
        }
    }

    /// Format a summary total for display: thousands separators, with two
    /// decimal places for fractional values and none for integral ones.
    pub fn format_amount(value: f64) -> String {
        if value.fract() == 0.0 {
            group_thousands(&format!("{value:.0}"))
        } else {
            group_thousands(&format!("{value:.2}"))
        }
    }

}
