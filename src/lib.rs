//! # order-cache
//!
//! An in-process cache of live orders for an order-management system.
//!
//! ## Features
//!
//! - **Keyed storage** - O(1) insert, replace and cancel by order id
//! - **Bulk cancellation** - by user, or by security above a quantity threshold
//! - **Matching size** - aggregate cross-company quantity per security, with
//!   same-company pairs excluded (self-trade prevention)
//! - **Copy-out snapshots** - callers never hold references into cached state
//!
//! ## Quick Start
//!
//! ```rust
//! use order_cache::{Order, OrderCache, Side};
//!
//! let mut cache = OrderCache::new();
//!
//! cache.add_order(Order::new("OrdId1", "SecId1", Side::Buy, 100, "User1", "CompanyA"));
//! cache.add_order(Order::new("OrdId2", "SecId1", Side::Buy, 200, "User2", "CompanyB"));
//! cache.add_order(Order::new("OrdId3", "SecId1", Side::Sell, 150, "User3", "CompanyA"));
//! cache.add_order(Order::new("OrdId4", "SecId1", Side::Sell, 50, "User4", "CompanyC"));
//!
//! assert_eq!(cache.get_matching_size_for_security("SecId1"), 50);
//!
//! cache.cancel_orders_for_sec_id_with_minimum_qty("SecId1", 150);
//! assert_eq!(cache.get_all_orders().len(), 2);
//! ```
//!
//! ## Architecture
//!
//! - [`cache`] - The order store, matching-size computation and shared handle
//! - [`types`] - [`Order`] and [`Side`]
//! - [`config`] - Cache configuration
//! - [`error`] - Error types for the validation paths
//!
//! ## Threading
//!
//! [`OrderCache`] is a plain owned value with no internal locking; every
//! operation runs synchronously to completion. Callers that share a cache
//! across threads provide their own exclusion, or use
//! [`cache::SharedOrderCache`].
//!
//! ## Logging
//!
//! The crate emits `tracing` events (`debug` for mutations and queries,
//! `trace` for the matching passes) and never installs a subscriber.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod cache;
pub mod config;
pub mod error;
pub mod types;

// Re-export main types at crate root for convenience
pub use cache::{OrderCache, OrderCacheApi};
pub use config::CacheConfig;
pub use error::Error;
pub use types::{Order, Side};

/// Result type alias using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexports() {
        let mut cache = OrderCache::with_config(CacheConfig::new().with_name("root"));
        cache.add_order(Order::new("OrdId1", "SecId1", Side::Buy, 10, "User1", "CompanyA"));
        assert_eq!(cache.config().name(), "root");
        assert_eq!(cache.len(), 1);
    }
}
