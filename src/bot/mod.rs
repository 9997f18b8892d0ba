//! Bot layer - Discord-specific interface and event handlers
//!
//! Each bot gets its own shared data type and its own `run_*` entry point; both share the
//! error hook below.

/// Discord command implementations (`/noti`, `!ping`)
pub mod commands;
/// Discord event handlers (direct messages)
pub mod handlers;
/// The `/noti` bot
pub mod notifier;
/// Presence rotation task
pub mod presence;
/// The direct-message file registry bot
pub mod registry;

use crate::errors::Error;
use tracing::error;

async fn on_error<U: Send + Sync + 'static>(error: poise::FrameworkError<'_, U, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to finish bot setup: {:?}", error);
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command `{}`: {:?}", ctx.command().name, error);
            let reply = poise::CreateReply::default()
                .content("❌ Something went wrong while running this command.")
                .ephemeral(true);
            if let Err(e) = ctx.send(reply).await {
                error!("Failed to send error message: {}", e);
            }
        }
        poise::FrameworkError::EventHandler { error, event, .. } => {
            error!("Error handling `{}` event: {:?}", event.snake_case_name(), error);
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}

pub use commands::*;
pub use handlers::*;
