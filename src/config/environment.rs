//! Environment configuration for secrets and identities.
//!
//! Values are read straight from the process environment (after `.env` has been loaded by
//! the binary). Nothing is validated beyond presence; a bad token surfaces as a login failure.

use crate::errors::{Error, Result};

/// Variable holding the Discord bot token.
pub const BOT_TOKEN_VAR: &str = "DISCORD_BOT_TOKEN";

/// Variable holding the Discord user ID allowed to save and inspect files.
pub const ADMIN_ID_VAR: &str = "ADMIN_ID";

fn required(name: &'static str) -> Result<String> {
    std::env::var(name).map_err(|source| Error::EnvVar { name, source })
}

/// Reads the bot token from `DISCORD_BOT_TOKEN`.
pub fn bot_token() -> Result<String> {
    required(BOT_TOKEN_VAR)
}

/// Reads the admin's Discord user ID from `ADMIN_ID`, trimmed.
pub fn admin_id() -> Result<String> {
    required(ADMIN_ID_VAR).map(|id| id.trim().to_string())
}
