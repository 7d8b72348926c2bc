//! Order-related types.
//!
//! This module contains the [`Order`] record held by the cache and the
//! [`Side`] it rests on.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

use super::Quantity;

/// Order side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Bid for the security
    Buy,
    /// Offer of the security
    Sell,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }

    /// Canonical string form, as used on the wire
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Buy => "Buy",
            Side::Sell => "Sell",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive parse of `"Buy"` or `"Sell"`
impl FromStr for Side {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Buy" => Ok(Side::Buy),
            "Sell" => Ok(Side::Sell),
            other => Err(Error::InvalidSide(other.to_string())),
        }
    }
}

/// A resting order held by the cache.
///
/// Orders are immutable once constructed: every field is private and only
/// exposed through read accessors. The cache hands out clones, so nothing a
/// caller does with a returned order can reach the cached copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique key within the cache
    order_id: String,

    /// Security the order is for
    security_id: String,

    /// Buy or sell
    side: Side,

    /// Order quantity
    qty: Quantity,

    /// Owner of the order (not unique)
    user: String,

    /// Owner's company, used for self-trade exclusion
    company: String,
}

impl Order {
    /// Create a new order
    ///
    /// No validation is performed here. See [`Order::validate`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use order_cache::{Order, Side};
    ///
    /// let order = Order::new("OrdId1", "SecId1", Side::Buy, 1000, "User1", "CompanyA");
    /// assert_eq!(order.qty(), 1000);
    /// assert!(order.is_buy());
    /// ```
    pub fn new(
        order_id: impl Into<String>,
        security_id: impl Into<String>,
        side: Side,
        qty: Quantity,
        user: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            security_id: security_id.into(),
            side,
            qty,
            user: user.into(),
            company: company.into(),
        }
    }

    /// Get the order id
    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    /// Get the security id
    pub fn security_id(&self) -> &str {
        &self.security_id
    }

    /// Get the side
    pub fn side(&self) -> Side {
        self.side
    }

    /// Get the quantity
    pub fn qty(&self) -> Quantity {
        self.qty
    }

    /// Get the owning user
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Get the owning company
    pub fn company(&self) -> &str {
        &self.company
    }

    /// Check if this is a buy order
    pub fn is_buy(&self) -> bool {
        self.side == Side::Buy
    }

    /// Check that the order is well formed.
    ///
    /// Ids, user and company must be non-empty and `qty` must be positive.
    /// The cache never calls this on its own; it is there for callers that
    /// want to reject bad input before it reaches the cache.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOrder`] describing the first failed check.
    pub fn validate(&self) -> Result<(), Error> {
        let reason = if self.order_id.is_empty() {
            "order id is empty"
        } else if self.security_id.is_empty() {
            "security id is empty"
        } else if self.user.is_empty() {
            "user is empty"
        } else if self.company.is_empty() {
            "company is empty"
        } else if self.qty == 0 {
            "qty must be greater than zero"
        } else {
            return Ok(());
        };
        Err(Error::invalid_order(&self.order_id, reason))
    }
}
