use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use tourease::api::AppState;
use tourease::clock::{Clock, SystemClock};
use tourease::config::TourEaseConfig;
use tourease::enrichment::DestinationEnricher;
use tourease::providers::{OpenMeteoClient, RestCountriesClient};
use tourease::store::RecordStore;
use tourease::{logging, seed, web};

#[derive(Parser)]
#[command(name = "tourease")]
#[command(about = "TourEase travel catalog API", version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, env = "TOUREASE_CONFIG")]
    config: Option<PathBuf>,

    /// Data directory (overrides config file)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Listen port (overrides config file)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = TourEaseConfig::load_from_path(cli.config)?;
    if let Some(data_dir) = cli.data_dir {
        config.storage.data_dir = data_dir;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    config.validate()?;

    logging::init_tracing(&config.logging).context("Failed to initialize logging")?;
    info!("Starting TourEase API v{}", tourease::VERSION);

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let store = RecordStore::new(&config.storage.data_dir);
    if config.storage.seed_on_start {
        seed::ensure_seeded(&store, clock.now());
    }

    let timeout = config.providers.timeout();
    let weather = OpenMeteoClient::new(config.providers.weather_base_url.as_str(), timeout)?;
    let countries = RestCountriesClient::new(config.providers.countries_url.as_str(), timeout)?;

    let state = Arc::new(AppState {
        store,
        enricher: DestinationEnricher::new(clock.clone(), Arc::new(weather), timeout),
        countries: Arc::new(countries),
        clock,
        provider_timeout: timeout,
    });

    web::run(&config.server, state).await
}
