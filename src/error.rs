use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the marketplace ledger
#[derive(Error, Debug)]
pub enum AskpoolError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    // Database errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    // Serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // Lookup errors
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    // Ask lifecycle errors
    #[error("Invalid status transition: from {from} to {to}")]
    InvalidStatusTransition { from: String, to: String },

    #[error("Ask is not open for bidding: {status}")]
    AskNotOpen { status: String },

    // Bidding errors
    #[error("Bump below minimum: required {required}, offered {offered}")]
    BelowMinimumBump { required: Decimal, offered: Decimal },

    #[error("Insufficient balance: available {available}, required {required}")]
    InsufficientBalance { available: Decimal, required: Decimal },

    // Wallet policy errors
    #[error("Rate limited: {0}")]
    RateLimited(String),

    // Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic errors
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias for AskpoolError
pub type Result<T> = std::result::Result<T, AskpoolError>;
