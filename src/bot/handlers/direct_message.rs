//! Direct-message handler for the file registry bot.
//!
//! Guild messages and messages from bots are ignored. Every other message is answered with
//! whatever [`registry::respond`] produces.

use crate::{
    bot::registry::RegistryData,
    core::registry::{self, Caller},
    errors::{Error, Result},
};
use poise::serenity_prelude as serenity;
use tracing::trace;

/// Routes gateway events to the registry; only new messages matter.
pub async fn handle_event(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, RegistryData, Error>,
    data: &RegistryData,
) -> Result<()> {
    if let serenity::FullEvent::Message { new_message } = event {
        handle_direct_message(ctx, new_message, data).await?;
    }
    Ok(())
}

/// True for one-to-one messages from a human.
#[must_use]
pub fn is_direct_from_user(msg: &serenity::Message) -> bool {
    msg.guild_id.is_none() && !msg.author.bot
}

async fn handle_direct_message(
    ctx: &serenity::Context,
    msg: &serenity::Message,
    data: &RegistryData,
) -> Result<()> {
    if !is_direct_from_user(msg) {
        return Ok(());
    }
    trace!(author = %msg.author.id, "Direct message received");

    let author_id = msg.author.id.to_string();
    let caller = Caller::new(&author_id, &data.admin_id);
    let reply = registry::respond(&data.database, caller, &msg.content).await;

    msg.reply(ctx, reply).await?;
    Ok(())
}
