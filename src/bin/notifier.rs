use dm_courier::{bot::notifier, config, errors::Result};
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

    // 3. Notifier settings from config.toml, defaults when absent
    let app_config = config::settings::load_default_config()
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;
    info!(role = %app_config.notifier.role_name, "Configuration loaded");

    // 4. Run the bot
    let token = config::environment::bot_token()
        .inspect_err(|e| error!("Bot token not available: {}", e))?;

    notifier::run_notifier(token, app_config.notifier).await
}
