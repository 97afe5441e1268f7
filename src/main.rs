use std::io;

use anyhow::{Context, Result};
use funds_transfer::config::Config;
use funds_transfer::logger::FileErrorLog;
use funds_transfer::transfer::TransferService;
use funds_transfer::{run_scenario, Scenario};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing on stderr so stdout carries only the console report
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "funds_transfer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Config::from_env().context("Failed to load configuration")?;
    let service = TransferService::new(config.settlement);
    let mut sink = FileErrorLog::new(&config.error_log_path);

    let scenario = Scenario::demo().context("Failed to set up scenario accounts")?;

    run_scenario(scenario, &service, &mut sink, io::stdout().lock())
        .context("Failed to run transfer scenario")?;

    Ok(())
}
