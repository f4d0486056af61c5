use std::sync::Arc;

use anyhow::Result;
use askweather::config::{AskWeatherConfig, LoggingConfig};
use askweather::weather::WeatherClient;
use askweather::web;
use tracing_subscriber::EnvFilter;

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = AskWeatherConfig::load()?;
    init_tracing(&config.logging);

    tracing::info!("AskWeather v{} starting", askweather::VERSION);

    let client = Arc::new(WeatherClient::new(&config)?);
    web::run(config.server.port, client).await
}
