//! Capability trait consumed by the surrounding order-management system.

use crate::types::{MatchSize, Order, Quantity};

use super::OrderCache;

/// The operations an order-management system needs from an order cache.
///
/// Implementations are owned by the caller and passed around by reference
/// (or boxed as `dyn OrderCacheApi`). Every operation is total: unknown ids
/// and securities resolve to a no-op or zero.
///
/// # Example
///
/// ```rust
/// use order_cache::{Order, OrderCache, OrderCacheApi, Side};
///
/// fn load(cache: &mut dyn OrderCacheApi) {
///     cache.add_order(Order::new("OrdId1", "SecId1", Side::Buy, 1000, "User1", "CompanyA"));
///     cache.add_order(Order::new("OrdId2", "SecId1", Side::Sell, 3000, "User2", "CompanyB"));
/// }
///
/// let mut cache = OrderCache::new();
/// load(&mut cache);
/// assert_eq!(cache.get_matching_size_for_security("SecId1"), 1000);
/// ```
pub trait OrderCacheApi {
    /// Insert an order, replacing any order with the same id
    fn add_order(&mut self, order: Order);

    /// Remove the order with `order_id`; unknown ids are ignored
    fn cancel_order(&mut self, order_id: &str);

    /// Remove every order whose user is exactly `user`
    fn cancel_orders_for_user(&mut self, user: &str);

    /// Remove every order for `security_id` with `qty >= min_qty`
    fn cancel_orders_for_sec_id_with_minimum_qty(&mut self, security_id: &str, min_qty: Quantity);

    /// Aggregate cross-company matching size for `security_id`
    fn get_matching_size_for_security(&self, security_id: &str) -> MatchSize;

    /// Copy of every cached order
    fn get_all_orders(&self) -> Vec<Order>;
}

impl OrderCacheApi for OrderCache {
    fn add_order(&mut self, order: Order) {
        OrderCache::add_order(self, order);
    }

    fn cancel_order(&mut self, order_id: &str) {
        OrderCache::cancel_order(self, order_id);
    }

    fn cancel_orders_for_user(&mut self, user: &str) {
        OrderCache::cancel_orders_for_user(self, user);
    }

    fn cancel_orders_for_sec_id_with_minimum_qty(&mut self, security_id: &str, min_qty: Quantity) {
        OrderCache::cancel_orders_for_sec_id_with_minimum_qty(self, security_id, min_qty);
    }

    fn get_matching_size_for_security(&self, security_id: &str) -> MatchSize {
        OrderCache::get_matching_size_for_security(self, security_id)
    }

    fn get_all_orders(&self) -> Vec<Order> {
        OrderCache::get_all_orders(self)
    }
}
