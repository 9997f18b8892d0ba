//! Text command parsing for the file registry.
//!
//! The keyword (first word) is matched case-insensitively; arguments keep the case the
//! user typed.

use crate::core::link::extract_user_id;

/// A parsed direct-message command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `help`
    Help,
    /// `save <mention> <name> <link...>`
    Save {
        /// Client the file is saved for, mention decoration stripped
        target: String,
        /// File label
        name: String,
        /// Link as typed, words rejoined with single spaces
        link: String,
    },
    /// `save` with too few arguments
    SaveUsage,
    /// `list`
    List,
    /// `list` followed by a mention that holds no user ID
    ListUsage,
    /// `list <mention>`
    ListFor {
        /// Client whose files are listed
        target: String,
    },
    /// `get <name>`
    Get {
        /// Name to look up, inner spacing kept as typed
        name: String,
    },
    /// Anything else
    Unknown,
}

impl Command {
    /// Parses the raw text of a direct message.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        let Some(keyword) = text.split_whitespace().next() else {
            return Self::Unknown;
        };
        let rest = text[keyword.len()..].trim_start();

        match (keyword.to_lowercase().as_str(), rest.is_empty()) {
            ("help", true) => Self::Help,
            ("save", _) => Self::parse_save(text),
            ("list", true) => Self::List,
            ("list", false) => {
                let target = rest
                    .split_whitespace()
                    .next()
                    .map(extract_user_id)
                    .unwrap_or_default();
                if target.is_empty() {
                    Self::ListUsage
                } else {
                    Self::ListFor { target }
                }
            }
            ("get", false) => Self::Get {
                name: rest.to_string(),
            },
            _ => Self::Unknown,
        }
    }

    fn parse_save(text: &str) -> Self {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        match tokens.as_slice() {
            [_, mention, name, link @ ..] if !link.is_empty() => Self::Save {
                target: extract_user_id(mention),
                name: (*name).to_string(),
                link: link.join(" "),
            },
            _ => Self::SaveUsage,
        }
    }
}
