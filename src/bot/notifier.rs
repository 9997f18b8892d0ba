//! The notifier bot: `/noti`, `!ping`, and a rotating presence.

use crate::bot::{commands, on_error, presence};
use crate::config::settings::NotifierSettings;
use crate::core::presence::PresenceRotator;
use crate::errors::{Error, Result};
use poise::serenity_prelude as serenity;
use std::time::Duration;
use tracing::{error, info, instrument};

/// Shared data available to all notifier commands.
pub struct NotifierData {
    /// Role, embed and presence settings
    pub settings: NotifierSettings,
}

/// Logs in and runs the notifier until the gateway connection ends.
///
/// Slash commands are registered globally once the bot is ready.
#[instrument(skip(token, settings))]
pub async fn run_notifier(token: String, settings: NotifierSettings) -> Result<()> {
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![commands::noti(), commands::ping()],
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some("!".to_string()),
                ..Default::default()
            },
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!("✅ Bot online: {}", ready.user.tag());
                ctx.online();

                let rotator = PresenceRotator::new(settings.statuses.clone());
                let period = Duration::from_secs(settings.rotation_interval_secs);
                presence::spawn_rotation(ctx.clone(), rotator, period);

                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                info!("✅ /noti command registered");

                Ok(NotifierData { settings })
            })
        })
        .build();

    let intents = serenity::GatewayIntents::GUILDS
        | serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::DIRECT_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT;

    info!("Setting up Serenity client for the notifier...");
    let mut client = serenity::Client::builder(&token, intents)
        .framework(framework)
        .await
        .inspect_err(|e| error!("Error creating client: {:?}", e))?;

    info!("Starting notifier client...");
    client
        .start()
        .await
        .inspect_err(|e| error!("Client error: {:?}", e))
        .map_err(Error::from)
}
