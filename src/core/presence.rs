//! Presence rotation state.
//!
//! The rotator is owned by a single timer task, so the index is a plain field.

use serde::Deserialize;

/// Activity verb shown before the status text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresenceKind {
    /// "Playing ..."
    Playing,
    /// "Watching ..."
    Watching,
    /// "Listening to ..."
    Listening,
    /// "Competing in ..."
    Competing,
}

/// One presence the bot cycles through
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PresenceEntry {
    /// Activity verb
    pub kind: PresenceKind,
    /// Status text
    pub name: String,
}

impl PresenceEntry {
    /// Creates an entry from a kind and a text.
    pub fn new(kind: PresenceKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

/// Cycles through presence entries in order, wrapping after the last.
#[derive(Debug, Clone)]
pub struct PresenceRotator {
    entries: Vec<PresenceEntry>,
    index: usize,
}

impl PresenceRotator {
    /// Creates a rotator starting at the first entry.
    #[must_use]
    pub const fn new(entries: Vec<PresenceEntry>) -> Self {
        Self { entries, index: 0 }
    }

    /// True when there is nothing to rotate.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the current entry and advances to the next one.
    pub fn advance(&mut self) -> Option<&PresenceEntry> {
        if self.entries.is_empty() {
            return None;
        }
        let current = self.index;
        self.index = (self.index + 1) % self.entries.len();
        self.entries.get(current)
    }
}
