use anyhow::Context;
use customer::config::CustomerConfig;
use customer::{app, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CustomerConfig::from_env().context("loading configuration")?;
    telemetry::init_tracing(&config.telemetry);

    tracing::info!(app = %config.app_name, "starting");

    app::run(&config).await?;
    Ok(())
}
