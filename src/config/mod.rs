/// Database configuration and connection management
pub mod database;

/// Credentials and identities read from environment variables
pub mod environment;

/// Notifier settings loaded from config.toml
pub mod settings;
