use thiserror::Error;

/// Every failure the bots can hit, from startup configuration to per-command storage errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// The database rejected or failed an operation
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// A file record was missing a required field
    #[error("Invalid file record: {field} cannot be empty")]
    InvalidRecord {
        /// Name of the empty field
        field: &'static str,
    },

    /// A required environment variable was absent or not unicode
    #[error("Environment variable {name} error: {source}")]
    EnvVar {
        /// Variable name
        name: &'static str,
        /// Underlying lookup error
        source: std::env::VarError,
    },

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error bubbled up from serenity or poise
    #[error("Serenity/Poise framework error: {0}")]
    #[allow(clippy::enum_variant_names)]
    FrameworkError(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::FrameworkError(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
