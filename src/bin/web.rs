use anyhow::Result;
use sar_globe::{server, telemetry, AppConfig};

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init("info,tower_http=debug");
    let config = AppConfig::from_env()?;
    server::serve(config).await
}
