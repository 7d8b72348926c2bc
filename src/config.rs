//! Configuration for the order cache.
//!
//! This module provides the [`CacheConfig`] struct. None of its settings change
//! what the cache operations return; they only affect allocation up front and
//! what gets logged.

/// Default label attached to every log event emitted by a cache
pub const DEFAULT_CACHE_NAME: &str = "order-cache";

/// Configuration for an [`OrderCache`](crate::OrderCache)
///
/// # Example
///
/// ```rust
/// use order_cache::{CacheConfig, OrderCache};
///
/// let config = CacheConfig::new()
///     .with_name("equities-desk")
///     .with_initial_capacity(10_000)
///     .with_validate_on_insert(true);
///
/// let cache = OrderCache::with_config(config);
/// assert!(cache.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Label used in log events
    name: String,

    /// Number of orders to reserve space for on construction
    initial_capacity: usize,

    /// Warn about malformed orders as they are inserted
    validate_on_insert: bool,
}

impl CacheConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self {
            name: DEFAULT_CACHE_NAME.to_string(),
            initial_capacity: 0,
            validate_on_insert: false,
        }
    }

    /// Set the label attached to log events
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set how many orders to reserve space for up front
    #[must_use]
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Log a warning for every malformed order passed to `add_order`
    ///
    /// The order is still inserted. Use `try_add_order` to reject it instead.
    #[must_use]
    pub fn with_validate_on_insert(mut self, validate_on_insert: bool) -> Self {
        self.validate_on_insert = validate_on_insert;
        self
    }

    /// Get the cache label
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the initial capacity
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// Whether `add_order` checks orders for well-formedness
    pub fn validate_on_insert(&self) -> bool {
        self.validate_on_insert
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::new()
    }
}
