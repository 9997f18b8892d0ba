//! Core logic - framework-agnostic operations for both bots.
//!
//! Nothing here touches Discord. Parsing, rendering and persistence live in this layer so
//! they can be tested with plain strings and an in-memory database.

/// Text command parsing for the file registry
pub mod command;
/// File record persistence
pub mod file_record;
/// Link normalization and mention handling
pub mod link;
/// Notification layout and role checks
pub mod notification;
/// Presence rotation state
pub mod presence;
/// Reply text for each registry command
pub mod registry;
