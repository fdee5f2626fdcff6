use std::net::IpAddr;
use std::process;

use clap::Parser;
use colored::*;
use tracing::error;

use roster_cli::{logging, run_server, Config};

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "HTTP/JSON service for person records")]
#[command(version)]
struct Cli {
    /// Port to listen on (overrides PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Address to bind (overrides BIND_ADDRESS)
    #[arg(long)]
    bind: Option<IpAddr>,
}

#[tokio::main]
async fn main() {
    // Load .env file
    dotenvy::dotenv().ok();
    logging::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!("{:#}", e);
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::from_env()?.with_overrides(cli.port, cli.bind)?;
    run_server(config).await
}
