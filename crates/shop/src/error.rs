//! Service-level error types.

use domain::ShopError;
use thiserror::Error;

/// Errors raised by the shop service and its order intake.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The shop rejected the order.
    #[error(transparent)]
    Shop(#[from] ShopError),

    /// An intake line did not have the `date;customer;descriptor` shape.
    #[error("invalid order line '{line}': {reason}")]
    InvalidOrderLine { line: String, reason: &'static str },

    /// An intake line carried a date that is not `YYYY-MM-DD`.
    #[error("invalid order date: {0}")]
    InvalidDate(#[from] chrono::ParseError),

    /// The configured opening stock is not a valid descriptor.
    #[error("invalid opening stock: {0}")]
    Config(#[source] ShopError),

    /// Reading order lines failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Rendering the report failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;
