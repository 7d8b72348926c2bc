//! Live order cache.
//!
//! This module provides the order store and the matching-size query over it:
//!
//! - [`OrderCache`] - owned, lock-free store of live orders
//! - [`OrderCacheApi`] - the capability trait callers program against
//! - [`SharedOrderCache`] - `RwLock`-protected handle for multi-threaded callers
//! - [`matcher`] - the pure matching-size computation
//!
//! # Example
//!
//! ```rust
//! use order_cache::cache::OrderCache;
//! use order_cache::types::{Order, Side};
//!
//! let mut cache = OrderCache::new();
//!
//! cache.add_order(Order::new("OrdId1", "SecId1", Side::Buy, 1000, "User1", "CompanyA"));
//! cache.add_order(Order::new("OrdId2", "SecId1", Side::Sell, 3000, "User2", "CompanyB"));
//! cache.add_order(Order::new("OrdId3", "SecId1", Side::Sell, 500, "User3", "CompanyA"));
//!
//! assert_eq!(cache.get_matching_size_for_security("SecId1"), 1000);
//!
//! cache.cancel_orders_for_user("User2");
//! assert_eq!(cache.get_matching_size_for_security("SecId1"), 0);
//! ```

pub mod api;
pub mod matcher;
pub mod shared;
pub mod store;

pub use api::OrderCacheApi;
pub use shared::SharedOrderCache;
pub use store::OrderCache;
