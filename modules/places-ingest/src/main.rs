use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use places_common::Config;
use places_ingest::Pipeline;

const DEFAULT_LOG_FILTER: &str =
    "places_ingest=info,places_common=info,railway_stations_client=info,supabase_client=info";

#[tokio::main]
async fn main() {
    init_tracing();

    // Single catch-all. The process exits normally whatever happened.
    if let Err(e) = run().await {
        error!(error = %e, "An error occurred in the main process");
    }
}

async fn run() -> Result<()> {
    info!("Places ingest starting...");

    let config = Config::from_env()?;
    config.log_redacted();

    let pipeline = Pipeline::from_config(&config);
    let report = pipeline.run().await;
    report.log_summary();

    Ok(())
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
