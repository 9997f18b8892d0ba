//! General Discord commands - the `!ping` health check.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::notifier::NotifierData,
        errors::{Error, Result},
    };
    use tracing::info;

    /// Responds with "🏓 Pong!" to test bot connectivity.
    #[poise::command(prefix_command)]
    pub async fn ping(ctx: poise::Context<'_, NotifierData, Error>) -> Result<()> {
        info!("Ping received from user: {}", ctx.author().name);
        ctx.reply("🏓 Pong!").await?;
        Ok(())
    }
}

pub use inner::*;
