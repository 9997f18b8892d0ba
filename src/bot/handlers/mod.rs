//! Discord event handlers
//!
//! Handlers for gateway events that are not slash commands.

/// Direct-message handling for the file registry
pub mod direct_message;
