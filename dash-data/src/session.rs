use crate::bucket::{build_buckets, Bucket};
use crate::granularity::Granularity;
use crate::series::RawSeries;
use crate::staleness::needs_refetch;
use crate::summary::Summary;
use dash_core::chart::{ChartConfig, ChartKind};
use dash_core::date_range::DateRange;
use dash_core::error::EngineError;
use serde::Serialize;

/// Token identifying one in-flight fetch for a session.
///
/// A user can change the range again before the previous fetch resolves;
/// completing with a superseded ticket is a no-op, so a late-arriving
/// fetch can never overwrite a newer series (last-request-wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Per-chart orchestration state: the immutable configuration, the raw
/// series currently held, and the range that series actually covers.
///
/// The session itself performs no I/O; the caller runs the fetch between
/// [`begin_fetch`](ChartSession::begin_fetch) and
/// [`complete_fetch`](ChartSession::complete_fetch).
#[derive(Debug, Clone)]
pub struct ChartSession {
    config: ChartConfig,
    raw: RawSeries,
    fetched: Option<DateRange>,
    latest_ticket: u64,
}

/// Everything a presentation layer needs to draw one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartView {
    pub display_name: String,
    pub kind: ChartKind,
    pub granularity: Granularity,
    pub buckets: Vec<Bucket>,
    pub summary: Summary,
}

impl ChartSession {
    /// Validate the configuration and open a session holding no data yet.
    pub fn new(config: ChartConfig) -> Result<ChartSession, EngineError> {
        config.ensure_complete()?;
        Ok(ChartSession {
            config,
            raw: RawSeries::new(),
            fetched: None,
            latest_ticket: 0,
        })
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn fetched_range(&self) -> Option<&DateRange> {
        self.fetched.as_ref()
    }

    /// Whether the held series must be refetched for these ranges.
    pub fn needs_refetch(&self, primary: &DateRange, comparison: &DateRange) -> bool {
        needs_refetch(primary, comparison, self.fetched.as_ref())
    }

    /// Register a new fetch as the latest one and get its ticket.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_ticket += 1;
        FetchTicket(self.latest_ticket)
    }

    /// Install fetched rows, replacing the held series wholesale.
    ///
    /// Returns false (and changes nothing) when the ticket was superseded
    /// by a newer `begin_fetch`.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        rows: Vec<(String, f64)>,
        covered: DateRange,
    ) -> bool {
        if ticket.0 != self.latest_ticket {
            log::debug!(
                "chart {}: discarding superseded fetch result",
                self.config.id
            );
            return false;
        }
        log::info!(
            "chart {}: installed {} rows covering {} days",
            self.config.id,
            rows.len(),
            covered.day_count() + 1
        );
        self.raw = RawSeries::from_rows(rows);
        self.fetched = Some(covered);
        true
    }

    /// Aggregate the held series for the given windows.
    ///
    /// Returns `None` while no fetch has completed yet; not-ready is a
    /// legitimate state, not an error.
    pub fn render(&self, primary: &DateRange, comparison: &DateRange) -> Option<ChartView> {
        self.fetched?;
        let granularity = Granularity::classify(primary);
        let series = build_buckets(primary, comparison, &self.raw, granularity);
        let summary = Summary::compute(series.total, series.comparison_total);
        Some(ChartView {
            display_name: self.config.display_name.clone(),
            kind: self.config.kind,
            granularity,
            buckets: series.buckets,
            summary,
        })
    }
}
