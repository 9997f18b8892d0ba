//! The file registry bot: text commands over direct messages.

use crate::bot::{handlers::direct_message, on_error};
use crate::errors::{Error, Result};
use poise::serenity_prelude as serenity;
use sea_orm::DatabaseConnection;
use tracing::{error, info, instrument};

/// Shared data available to the registry's event handler.
pub struct RegistryData {
    /// Connection holding the file records
    pub database: DatabaseConnection,
    /// The only user allowed to save files and list other clients' files
    pub admin_id: String,
}

impl RegistryData {
    /// Creates the shared context from an open connection and the admin's user ID.
    #[must_use]
    pub const fn new(database: DatabaseConnection, admin_id: String) -> Self {
        Self { database, admin_id }
    }
}

/// Logs in and answers direct messages until the gateway connection ends.
///
/// The database must already be connected; the bot registers no slash commands.
#[instrument(skip(token, data))]
pub async fn run_registry(token: String, data: RegistryData) -> Result<()> {
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            event_handler: |ctx, event, framework, data| {
                Box::pin(direct_message::handle_event(ctx, event, framework, data))
            },
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |_ctx, ready, _framework| {
            Box::pin(async move {
                info!("✅ Logged in as {}", ready.user.name);
                Ok(data)
            })
        })
        .build();

    let intents =
        serenity::GatewayIntents::DIRECT_MESSAGES | serenity::GatewayIntents::MESSAGE_CONTENT;

    info!("Setting up Serenity client for the file registry...");
    let mut client = serenity::Client::builder(&token, intents)
        .framework(framework)
        .await
        .inspect_err(|e| error!("Error creating client: {:?}", e))?;

    info!("Starting file registry client...");
    client
        .start()
        .await
        .inspect_err(|e| error!("Client error: {:?}", e))
        .map_err(Error::from)
}
