use dm_courier::{
    bot::registry::{self, RegistryData},
    config,
    errors::Result,
};
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Connect to the database before logging in; failure aborts startup
    let database = config::database::create_connection()
        .await
        .inspect(|_| info!("Database connected."))
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;

    // 4. Run the bot
    let admin_id = config::environment::admin_id()
        .inspect_err(|e| error!("Admin ID not available: {}", e))?;
    let token = config::environment::bot_token()
        .inspect_err(|e| error!("Bot token not available: {}", e))?;

    registry::run_registry(token, RegistryData::new(database, admin_id)).await
}
