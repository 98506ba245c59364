//! Unified error type for the inventory manager.
//!
//! Lookups that find nothing are not errors here: they return `Option` and the
//! caller decides (insert on a name miss, print a message on an id miss).

use thiserror::Error;

/// Every failure the inventory manager can surface.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Any `SeaORM` failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// File or console I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reading or writing failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// An import row that cannot become a product
    #[error("Malformed {field} on line {line}: {value:?}")]
    MalformedRow {
        /// 1-based line number in the import file
        line: u64,
        /// Which field was rejected (`row` when the field count is wrong)
        field: &'static str,
        /// The offending text
        value: String,
    },

    /// Console input ended while a value was still being prompted for
    #[error("Input closed before a value was entered")]
    InputClosed,
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
