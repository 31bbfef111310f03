//! Time-range bucketing and comparison aggregation.
//!
//! This crate is the pure, synchronous middle of the dashboard: given a
//! primary date range, a comparison date range and a raw per-day value
//! series, it decides whether the held data is stale, picks a bucket
//! granularity from the range's span, partitions the series into ordered
//! buckets with an aligned comparison series, and computes the summary
//! totals a header displays.
//!
//! Fetching is the caller's job; the `dash_core::source` traits describe
//! what the engine consumes and [`session::ChartSession`] ties the pieces
//! together for one chart.

pub mod bucket;
pub mod granularity;
pub mod series;
pub mod session;
pub mod staleness;
pub mod summary;
