//! Command implementations for the dash CLI.
//!
//! Provides subcommands for listing a dashboard's charts and for running
//! the full fetch/bucket/summarize pipeline against local CSV fixtures.

use clap::Subcommand;

pub mod charts;
pub mod render;
mod store;

#[derive(Subcommand)]
pub enum Command {
    /// Render a dashboard's charts as bucketed series with summaries
    Render {
        /// Directory containing dashboards.csv, charts.csv and one
        /// <table>.csv per chart source table
        #[arg(short = 'd', long)]
        data_dir: String,

        /// Dashboard to render
        #[arg(long)]
        dashboard: String,

        /// Render only this chart id
        #[arg(long)]
        chart: Option<String>,

        /// Preset token for the primary range (LAST_30_DAYS,
        /// LAST_90_DAYS, CURRENT_MONTH); defaults to the dashboard's
        /// configured initial range
        #[arg(long)]
        preset: Option<String>,

        /// Explicit primary range start (YYYY-MM-DD); requires --to and
        /// overrides any preset
        #[arg(long)]
        from: Option<String>,

        /// Explicit primary range end (YYYY-MM-DD); requires --from
        #[arg(long)]
        to: Option<String>,

        /// Comparison preset token (PREVIOUS_PERIOD, PREVIOUS_30_DAYS,
        /// PREVIOUS_90_DAYS, PREVIOUS_MONTH)
        #[arg(long, default_value = "PREVIOUS_PERIOD")]
        comparison: String,

        /// Emit JSON instead of a text table
        #[arg(long)]
        json: bool,
    },

    /// List the charts configured for a dashboard
    Charts {
        /// Directory containing dashboards.csv and charts.csv
        #[arg(short = 'd', long)]
        data_dir: String,

        /// Dashboard to list
        #[arg(long)]
        dashboard: String,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Render {
            data_dir,
            dashboard,
            chart,
            preset,
            from,
            to,
            comparison,
            json,
        } => render::run_render(&render::RenderOptions {
            data_dir,
            dashboard,
            chart,
            preset,
            from,
            to,
            comparison,
            json,
        }),
        Command::Charts { data_dir, dashboard } => charts::run_charts(&data_dir, &dashboard),
    }
}
