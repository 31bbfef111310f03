//! Fixture loading into the in-memory store.

use anyhow::Context;
use dash_db::Database;
use log::{info, warn};
use std::fs;
use std::path::Path;

/// Open the store and load the metadata fixtures from `data_dir`.
///
/// When `series_for` names a dashboard, each of its charts' source tables
/// is additionally loaded from `<table>.csv` in the same directory. A
/// missing series fixture leaves that table empty rather than failing the
/// whole load.
pub fn open(data_dir: &Path, series_for: Option<&str>) -> anyhow::Result<Database> {
    let db = Database::new()?;

    let dashboards = fs::read_to_string(data_dir.join("dashboards.csv"))
        .with_context(|| format!("reading {}/dashboards.csv", data_dir.display()))?;
    db.load_dashboards(&dashboards)?;

    let charts = fs::read_to_string(data_dir.join("charts.csv"))
        .with_context(|| format!("reading {}/charts.csv", data_dir.display()))?;
    db.load_charts(&charts)?;

    if let Some(dashboard) = series_for {
        for listing in db.query_dashboard_charts(dashboard)? {
            let config = match db.query_chart_config(&listing.id)? {
                Some(config) => config,
                None => continue,
            };
            let path = data_dir.join(format!("{}.csv", config.table));
            if !path.exists() {
                warn!("no series fixture for table {}", config.table);
                continue;
            }
            let data = fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            db.load_series(
                &config.table,
                &config.date_column,
                &config.value_expression,
                &data,
            )?;
            info!("store: loaded series fixture for {}", config.table);
        }
    }

    Ok(db)
}
