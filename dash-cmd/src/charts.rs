//! Chart listing command.

use crate::store;
use anyhow::Context;
use std::path::Path;

/// Print the charts configured for a dashboard.
pub fn run_charts(data_dir: &str, dashboard: &str) -> anyhow::Result<()> {
    let db = store::open(Path::new(data_dir), None)?;

    let info = db
        .query_dashboard(dashboard)?
        .with_context(|| format!("unknown dashboard {:?}", dashboard))?;

    println!("{} ({})", info.title, info.name);
    println!("initial range: {}", info.initial_range);
    for chart in db.query_dashboard_charts(dashboard)? {
        println!("  {:<24} {}", chart.id, chart.display_name);
    }
    Ok(())
}
