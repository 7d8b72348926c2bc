//! Core order cache data structure.
//!
//! Orders are keyed by order id in an `FxHashMap`, giving O(1) insert,
//! cancel-by-id and lookup. Each entry also carries an insertion sequence
//! number so that snapshots and matching queries see orders in a stable
//! order regardless of hash layout.

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::config::CacheConfig;
use crate::error::Error;
use crate::types::{MatchSize, Order, Quantity};

use super::matcher;

/// A cached order plus the sequence number it was inserted under
#[derive(Debug, Clone)]
struct Entry {
    seq: u64,
    order: Order,
}

/// Cache of live orders for a single order-management component.
///
/// # Design Decisions
///
/// 1. **Owned values**: The cache owns every [`Order`] it holds. Read
///    methods return clones, so callers never hold a reference into cached
///    state.
///
/// 2. **Insertion sequence**: Every insert (including a replacement of an
///    existing id) stamps the entry with the next sequence number. Snapshots
///    and matching queries walk orders in that sequence.
///
/// 3. **Single-pass removal**: Bulk cancellations filter the map with
///    `retain`, which visits every entry exactly once.
///
/// # Thread Safety
///
/// This struct is `Send + Sync` but not internally synchronized. For
/// concurrent access, use [`SharedOrderCache`](super::SharedOrderCache) or
/// wrap it in a lock of your own.
#[derive(Debug, Clone)]
pub struct OrderCache {
    /// Orders by order id
    orders: FxHashMap<String, Entry>,

    /// Sequence number for the next insert
    next_seq: u64,

    config: CacheConfig,
}

impl OrderCache {
    /// Create an empty cache with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Create an empty cache with the given configuration
    #[must_use]
    pub fn with_config(config: CacheConfig) -> Self {
        let mut orders = FxHashMap::default();
        orders.reserve(config.initial_capacity());
        Self {
            orders,
            next_seq: 0,
            config,
        }
    }

    /// Get the configuration
    #[must_use]
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Insert an order, replacing any order with the same id.
    pub fn add_order(&mut self, order: Order) {
        if self.config.validate_on_insert() {
            if let Err(e) = order.validate() {
                warn!(cache = self.config.name(), error = %e, "malformed order inserted");
            }
        }
        self.insert(order);
    }

    /// Insert an order only if it is well formed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOrder`] and leaves the cache untouched if
    /// [`Order::validate`] fails.
    pub fn try_add_order(&mut self, order: Order) -> Result<(), Error> {
        order.validate()?;
        self.insert(order);
        Ok(())
    }

    fn insert(&mut self, order: Order) {
        let seq = self.next_seq;
        self.next_seq += 1;

        let order_id = order.order_id().to_string();
        let replaced = self
            .orders
            .insert(order_id, Entry { seq, order })
            .is_some();
        debug!(cache = self.config.name(), seq, replaced, "order added");
    }

    /// Remove the order with `order_id`, if present.
    pub fn cancel_order(&mut self, order_id: &str) {
        let removed = self.orders.remove(order_id).is_some();
        debug!(cache = self.config.name(), order_id, removed, "cancel order");
    }

    /// Remove every order owned by `user` (exact match).
    pub fn cancel_orders_for_user(&mut self, user: &str) {
        let removed = self.remove_where(|order| order.user() == user);
        debug!(cache = self.config.name(), user, removed, "cancel orders for user");
    }

    /// Remove every order for `security_id` whose quantity is at least `min_qty`.
    pub fn cancel_orders_for_sec_id_with_minimum_qty(
        &mut self,
        security_id: &str,
        min_qty: Quantity,
    ) {
        let removed = self
            .remove_where(|order| order.security_id() == security_id && order.qty() >= min_qty);
        debug!(
            cache = self.config.name(),
            security_id,
            min_qty,
            removed,
            "cancel orders for security with minimum qty"
        );
    }

    /// Remove every order matching `predicate`, returning how many went
    fn remove_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&Order) -> bool,
    {
        let before = self.orders.len();
        self.orders.retain(|_, entry| !predicate(&entry.order));
        before - self.orders.len()
    }

    /// Compute the matching size for `security_id` over the current orders.
    ///
    /// See [`matcher::matching_size`] for the exact rules.
    #[must_use]
    pub fn get_matching_size_for_security(&self, security_id: &str) -> MatchSize {
        let mut entries: Vec<&Entry> = self
            .orders
            .values()
            .filter(|entry| entry.order.security_id() == security_id)
            .collect();
        entries.sort_unstable_by_key(|entry| entry.seq);

        let size = matcher::matching_size(entries.iter().map(|entry| &entry.order), security_id);
        debug!(cache = self.config.name(), security_id, size, "matching size");
        size
    }

    /// Snapshot of every cached order, in insertion order.
    ///
    /// The returned orders are copies; later changes to the cache do not
    /// affect them.
    #[must_use]
    pub fn get_all_orders(&self) -> Vec<Order> {
        self.sorted_orders(|_| true)
    }

    /// Snapshot of the cached orders for one security, in insertion order
    #[must_use]
    pub fn orders_for_security(&self, security_id: &str) -> Vec<Order> {
        self.sorted_orders(|order| order.security_id() == security_id)
    }

    fn sorted_orders<F>(&self, mut keep: F) -> Vec<Order>
    where
        F: FnMut(&Order) -> bool,
    {
        let mut entries: Vec<&Entry> = self
            .orders
            .values()
            .filter(|entry| keep(&entry.order))
            .collect();
        entries.sort_unstable_by_key(|entry| entry.seq);
        entries.into_iter().map(|entry| entry.order.clone()).collect()
    }

    /// Get a copy of the order with `order_id`
    #[must_use]
    pub fn get_order(&self, order_id: &str) -> Option<Order> {
        self.orders.get(order_id).map(|entry| entry.order.clone())
    }

    /// Check if an order with `order_id` is cached
    #[must_use]
    pub fn contains_order(&self, order_id: &str) -> bool {
        self.orders.contains_key(order_id)
    }

    /// Remove every order
    pub fn clear(&mut self) {
        self.orders.clear();
        debug!(cache = self.config.name(), "cache cleared");
    }

    /// Get the number of cached orders
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Check if the cache holds no orders
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl Default for OrderCache {
    fn default() -> Self {
        Self::new()
    }
}
