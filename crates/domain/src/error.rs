//! Domain error types.

use thiserror::Error;

/// Errors raised while taking or filling a donut order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShopError {
    /// The descriptor names a donut code that is not in the catalog.
    #[error("Unknown donut code: {code:?}")]
    UnknownCode { code: String },

    /// A descriptor segment is not of the form `CODE:COUNT`.
    #[error("Malformed order segment {segment:?}: {reason}")]
    MalformedOrder {
        segment: String,
        reason: &'static str,
    },

    /// No price tier covers the order's total size.
    #[error("This order cannot be satisfied: {order_size} donuts is outside every price tier")]
    UnsatisfiableOrder { order_size: u64 },
}

impl ShopError {
    pub(crate) fn malformed(segment: &str, reason: &'static str) -> Self {
        ShopError::MalformedOrder {
            segment: segment.to_string(),
            reason,
        }
    }
}

/// Convenience type alias for domain results.
pub type Result<T> = std::result::Result<T, ShopError>;
