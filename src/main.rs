// src/main.rs
use anyhow::Result;
use clap::Parser;
use jobmatch::cli::{handle_command, Cli};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

#[tokio::main]
async fn main() -> Result<()> {
    // stdout is reserved for command output
    Registry::default()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or(EnvFilter::new("jobmatch=info,rocket::server=off")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(e) = handle_command(cli).await {
        eprintln!("❌ Error: {:#}", e);
        std::process::exit(1);
    }
    Ok(())
}
