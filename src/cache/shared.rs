//! Lock-protected handle for sharing one cache between threads.
//!
//! [`OrderCache`] does no locking of its own. When the surrounding system
//! calls into the cache from several threads, [`SharedOrderCache`] provides the
//! external mutual exclusion: a `parking_lot::RwLock` around a single cache,
//! taken for writing by the mutators and for reading by the queries.
//!
//! The lock only serializes calls. Nothing orders a concurrent cancel against
//! a concurrent matching query beyond which one acquires the lock first.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::CacheConfig;
use crate::error::Error;
use crate::types::{MatchSize, Order, Quantity};

use super::OrderCache;

/// Clonable, thread-safe handle to an [`OrderCache`].
///
/// Cloning the handle is cheap and every clone refers to the same cache.
///
/// # Example
///
/// ```rust
/// use order_cache::cache::SharedOrderCache;
/// use order_cache::{Order, Side};
/// use std::thread;
///
/// let cache = SharedOrderCache::new();
///
/// let writer = cache.clone();
/// thread::spawn(move || {
///     writer.add_order(Order::new("OrdId1", "SecId1", Side::Buy, 100, "User1", "CompanyA"));
/// })
/// .join()
/// .unwrap();
///
/// assert_eq!(cache.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedOrderCache {
    inner: Arc<RwLock<OrderCache>>,
}

impl SharedOrderCache {
    /// Create a handle to a new, empty cache
    pub fn new() -> Self {
        Self::from_cache(OrderCache::new())
    }

    /// Create a handle to a new cache with the given configuration
    pub fn with_config(config: CacheConfig) -> Self {
        Self::from_cache(OrderCache::with_config(config))
    }

    /// Take ownership of an existing cache
    pub fn from_cache(cache: OrderCache) -> Self {
        Self {
            inner: Arc::new(RwLock::new(cache)),
        }
    }

    /// Insert an order, replacing any order with the same id
    pub fn add_order(&self, order: Order) {
        self.inner.write().add_order(order);
    }

    /// Insert an order only if it is well formed
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOrder`] if the order fails validation.
    pub fn try_add_order(&self, order: Order) -> Result<(), Error> {
        self.inner.write().try_add_order(order)
    }

    /// Remove the order with `order_id`, if present
    pub fn cancel_order(&self, order_id: &str) {
        self.inner.write().cancel_order(order_id);
    }

    /// Remove every order owned by `user`
    pub fn cancel_orders_for_user(&self, user: &str) {
        self.inner.write().cancel_orders_for_user(user);
    }

    /// Remove every order for `security_id` with `qty >= min_qty`
    pub fn cancel_orders_for_sec_id_with_minimum_qty(&self, security_id: &str, min_qty: Quantity) {
        self.inner
            .write()
            .cancel_orders_for_sec_id_with_minimum_qty(security_id, min_qty);
    }

    /// Compute the matching size for `security_id`
    pub fn get_matching_size_for_security(&self, security_id: &str) -> MatchSize {
        self.inner.read().get_matching_size_for_security(security_id)
    }

    /// Snapshot of every cached order
    ///
    /// Returns copies taken under the read lock, so the snapshot is
    /// consistent and safe to use after the lock is released.
    pub fn get_all_orders(&self) -> Vec<Order> {
        self.inner.read().get_all_orders()
    }

    /// Run `f` against the cache while holding the read lock
    ///
    /// Useful for several queries that must observe the same state.
    pub fn with_read<R>(&self, f: impl FnOnce(&OrderCache) -> R) -> R {
        f(&self.inner.read())
    }

    /// Run `f` against the cache while holding the write lock
    pub fn with_write<R>(&self, f: impl FnOnce(&mut OrderCache) -> R) -> R {
        f(&mut self.inner.write())
    }

    /// Get number of cached orders
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Check if the cache holds no orders
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}
