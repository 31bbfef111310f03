//! dash CLI - render dashboard charts from local fixture data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "dash-cli",
    version,
    about = "Dashboard chart aggregation toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: dash_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    dash_cmd::run(cli.command)
}
