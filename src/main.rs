use std::sync::Arc;

use anyhow::Result;
use fruit_sort::{config::config_loader, infrastructure::axum_http::http_serve, observability};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        error!("Server exited with error: {:#}", error);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    observability::init_observability("fruit-sort")?;

    let dotenvy_env = config_loader::load()?;
    info!("ENV has been loaded");

    http_serve::start(Arc::new(dotenvy_env)).await?;

    Ok(())
}
