//! Thermogrid CLI - render daily temperature grids from the terminal.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "tg-cli",
    version,
    about = "Daily temperature grid toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: tg_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    tg_cmd::run(cli.command).await
}
