//! Presence rotation task for the notifier bot.

use crate::core::presence::{PresenceEntry, PresenceKind, PresenceRotator};
use poise::serenity_prelude as serenity;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info};

fn activity_for(entry: &PresenceEntry) -> serenity::ActivityData {
    match entry.kind {
        PresenceKind::Playing => serenity::ActivityData::playing(&entry.name),
        PresenceKind::Watching => serenity::ActivityData::watching(&entry.name),
        PresenceKind::Listening => serenity::ActivityData::listening(&entry.name),
        PresenceKind::Competing => serenity::ActivityData::competing(&entry.name),
    }
}

/// Spawns a task that applies the next presence every `period`, forever.
///
/// Returns `None` when there is nothing to rotate. A zero period is raised to one second.
pub fn spawn_rotation(
    ctx: serenity::Context,
    mut rotator: PresenceRotator,
    period: Duration,
) -> Option<JoinHandle<()>> {
    if rotator.is_empty() {
        info!("No presence entries configured, rotation disabled");
        return None;
    }
    let period = period.max(Duration::from_secs(1));

    Some(tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            if let Some(entry) = rotator.advance() {
                debug!(status = %entry.name, "Rotating presence");
                ctx.set_activity(Some(activity_for(entry)));
            }
        }
    }))
}
