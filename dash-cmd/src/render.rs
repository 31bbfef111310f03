//! Full render pipeline: resolve ranges, fetch raw rows, bucket and
//! summarize each chart of a dashboard.

use crate::store;
use anyhow::Context;
use chrono::{Local, NaiveDate};
use dash_core::date_range::DateRange;
use dash_core::error::EngineError;
use dash_core::presets::{ComparisonPreset, RangePreset};
use dash_core::source::{ConfigSource, SeriesSource};
use dash_data::session::{ChartSession, ChartView};
use dash_db::Database;
use dash_utils::{dates, numbers};
use log::{info, warn};
use std::path::Path;

pub struct RenderOptions {
    pub data_dir: String,
    pub dashboard: String,
    pub chart: Option<String>,
    pub preset: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub comparison: String,
    pub json: bool,
}

/// Run the render pipeline for a dashboard (or a single chart of it).
pub fn run_render(options: &RenderOptions) -> anyhow::Result<()> {
    let db = store::open(Path::new(&options.data_dir), Some(&options.dashboard))?;

    let dashboard = db
        .query_dashboard(&options.dashboard)?
        .with_context(|| format!("unknown dashboard {:?}", options.dashboard))?;

    // The anchor day is read from the clock once per invocation and passed
    // down; preset ranges must not survive a midnight rollover.
    let today = Local::now().date_naive();

    let primary = resolve_primary(options, &dashboard.initial_range, today)?;
    let comparison_preset = ComparisonPreset::from_token(&options.comparison)
        .with_context(|| format!("unknown comparison preset {:?}", options.comparison))?;
    let comparison = comparison_preset.resolve(&primary, today);

    info!(
        "render: {} from {} to {}, compared to {} .. {}",
        dashboard.name,
        dates::date_key(&primary.start()),
        dates::date_key(&primary.end()),
        dates::date_key(&comparison.start()),
        dates::date_key(&comparison.end()),
    );

    let chart_ids: Vec<String> = match &options.chart {
        Some(id) => vec![id.clone()],
        None => db
            .query_dashboard_charts(&dashboard.name)?
            .into_iter()
            .map(|listing| listing.id)
            .collect(),
    };

    let mut views = Vec::new();
    for chart_id in &chart_ids {
        match render_chart(&db, chart_id, &primary, &comparison)? {
            Some(view) => views.push(view),
            None => warn!("chart {} unavailable", chart_id),
        }
    }

    if options.json {
        let payload = serde_json::json!({
            "dashboard": dashboard.name,
            "title": dashboard.title,
            "from": dates::date_key(&primary.start()),
            "to": dates::date_key(&primary.end()),
            "comparison_from": dates::date_key(&comparison.start()),
            "comparison_to": dates::date_key(&comparison.end()),
            "charts": views,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("{}", dashboard.title);
        println!(
            "{} .. {}  compared to  {} .. {}",
            dates::date_key(&primary.start()),
            dates::date_key(&primary.end()),
            dates::date_key(&comparison.start()),
            dates::date_key(&comparison.end()),
        );
        for view in &views {
            print_view(view);
        }
    }
    Ok(())
}

/// Explicit --from/--to endpoints win over presets; partial endpoints are
/// rejected rather than guessed at.
fn resolve_primary(
    options: &RenderOptions,
    initial_range: &str,
    today: NaiveDate,
) -> anyhow::Result<DateRange> {
    match (&options.from, &options.to) {
        (Some(from), Some(to)) => {
            let from = dates::parse_date(from)?;
            let to = dates::parse_date(to)?;
            Ok(DateRange::new(from, to)?)
        }
        (None, None) => {
            let token = options.preset.as_deref().unwrap_or(initial_range);
            let preset = RangePreset::from_token(token)
                .with_context(|| format!("unknown range preset {:?}", token))?;
            Ok(preset.resolve(today))
        }
        _ => Err(EngineError::InvalidArgument(
            "both --from and --to are required for an explicit range".to_string(),
        )
        .into()),
    }
}

/// Fetch (if needed) and aggregate one chart. Returns `None` when the
/// chart's configuration is missing or incomplete.
fn render_chart(
    db: &Database,
    chart_id: &str,
    primary: &DateRange,
    comparison: &DateRange,
) -> anyhow::Result<Option<ChartView>> {
    let Some(config) = db.fetch_chart_config(chart_id)? else {
        return Ok(None);
    };

    let mut session = match ChartSession::new(config) {
        Ok(session) => session,
        Err(EngineError::IncompleteConfig(field)) => {
            warn!("chart {}: missing {}", chart_id, field);
            return Ok(None);
        }
        Err(other) => return Err(other.into()),
    };

    if session.needs_refetch(primary, comparison) {
        let ticket = session.begin_fetch();
        let window = primary.union(comparison);
        let config = session.config().clone();
        let rows = db.fetch_raw_series(
            &config.table,
            &config.date_column,
            &config.value_expression,
            &window.start(),
            &window.end(),
        )?;
        session.complete_fetch(ticket, rows, window);
    }

    Ok(session.render(primary, comparison))
}

fn print_view(view: &ChartView) {
    println!();
    println!(
        "{}  {}  ({} vs {})",
        view.display_name,
        view.summary.percent_delta,
        view.summary.display_total(),
        view.summary.display_comparison_total(),
    );
    for bucket in &view.buckets {
        println!(
            "  {:>8}  {:>14}  {:>14}",
            bucket.label,
            display_value(bucket.value),
            display_value(bucket.comparison_value),
        );
    }
}

fn display_value(value: Option<f64>) -> String {
    match value {
        Some(v) => numbers::format_amount(v),
        None => "-".to_string(),
    }
}
