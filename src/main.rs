use dotenvy::dotenv;
use std::io;
use store_inventory::{
    app,
    config::{AppConfig, database},
    errors::Result,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing; stdout belongs to the menu
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    // 2. Load .env file, non-fatal
    dotenv().ok();

    // 3. Load settings
    let config = AppConfig::load()
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;
    info!("Using database {}", config.database_url);

    // 4. Connect
    let db = database::create_connection(&config.database_url)
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;

    // 5. Wipe, import, shell, print
    app::run(&db, &config, io::stdin().lock(), io::stdout().lock())
        .await
        .inspect_err(|e| error!("Inventory run failed: {}", e))?;

    Ok(())
}
