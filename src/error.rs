//! Error types for the order-cache crate.
//!
//! The cache operations themselves are total: cancelling an unknown order or
//! querying an unseen security is a no-op or a zero result, never an error.
//! Errors only come out of the parsing and validation paths that callers opt
//! into, such as [`Side::from_str`](crate::types::Side) and
//! [`Order::validate`](crate::types::Order::validate).

use thiserror::Error;

/// The main error type for this crate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A side string was neither `"Buy"` nor `"Sell"`
    #[error("Invalid side: {0:?} (expected \"Buy\" or \"Sell\")")]
    InvalidSide(String),

    /// An order failed the well-formedness check
    #[error("Invalid order {order_id:?}: {reason}")]
    InvalidOrder {
        /// Id of the offending order (may itself be empty)
        order_id: String,
        /// Which check failed
        reason: String,
    },
}

impl Error {
    /// Create an invalid-order error
    pub fn invalid_order(order_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidOrder {
            order_id: order_id.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error came from order validation
    pub fn is_invalid_order(&self) -> bool {
        matches!(self, Error::InvalidOrder { .. })
    }
}
