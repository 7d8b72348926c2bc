//! Matching-size computation.
//!
//! [`matching_size`] is a pure function over a sequence of orders. It does not
//! simulate trades: no quantity is consumed, so the same resting liquidity can
//! count toward several orders. The two passes are asymmetric:
//!
//! 1. Every buy whose cross-company sell quantity strictly exceeds its own
//!    quantity adds its quantity to the total.
//! 2. Every sell whose cross-company buy quantity strictly exceeds its own
//!    quantity, and also exceeds the running total, *replaces* the total with
//!    its own quantity.
//!
//! Because pass 2 overwrites, the result depends on the order in which sells
//! are visited. Callers must pass orders in a stable order;
//! [`OrderCache`](crate::OrderCache) uses insertion order.

use tracing::trace;

use crate::types::{MatchSize, Order};

/// Compute the matching size for `security_id` over `orders`.
///
/// Orders for other securities are ignored. A security with no orders, or
/// with orders on only one side, yields 0.
///
/// # Example
///
/// ```rust
/// use order_cache::cache::matcher::matching_size;
/// use order_cache::{Order, Side};
///
/// let orders = vec![
///     Order::new("1", "X", Side::Buy, 100, "u1", "A"),
///     Order::new("2", "X", Side::Buy, 200, "u2", "B"),
///     Order::new("3", "X", Side::Sell, 150, "u3", "A"),
///     Order::new("4", "X", Side::Sell, 50, "u4", "C"),
/// ];
/// assert_eq!(matching_size(&orders, "X"), 50);
/// ```
pub fn matching_size<'a, I>(orders: I, security_id: &str) -> MatchSize
where
    I: IntoIterator<Item = &'a Order>,
{
    let (buys, sells): (Vec<&Order>, Vec<&Order>) = orders
        .into_iter()
        .filter(|order| order.security_id() == security_id)
        .partition(|order| order.is_buy());

    let mut total: MatchSize = 0;

    for buy in &buys {
        let avail = cross_company_qty(&sells, buy.company());
        if avail > MatchSize::from(buy.qty()) {
            total += MatchSize::from(buy.qty());
        }
    }
    trace!(security_id, total, buys = buys.len(), "buy pass done");

    for sell in &sells {
        let avail = cross_company_qty(&buys, sell.company());
        if avail > MatchSize::from(sell.qty()) && total < avail {
            total = MatchSize::from(sell.qty());
        }
    }
    trace!(security_id, total, sells = sells.len(), "sell pass done");

    total
}

/// Sum of quantities over `counterparties` not owned by `company`
fn cross_company_qty(counterparties: &[&Order], company: &str) -> MatchSize {
    counterparties
        .iter()
        .filter(|order| order.company() != company)
        .map(|order| MatchSize::from(order.qty()))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Side;

    fn order(id: &str, sec: &str, side: Side, qty: u32, company: &str) -> Order {
        Order::new(id, sec, side, qty, format!("user-{id}"), company)
    }

    #[test]
    fn test_empty_is_zero() {
        let orders: Vec<Order> = Vec::new();
        assert_eq!(matching_size(&orders, "X"), 0);
    }

    #[test]
    fn test_one_sided_is_zero() {
        let orders = vec![
            order("1", "X", Side::Buy, 100, "A"),
            order("2", "X", Side::Buy, 200, "B"),
        ];
        assert_eq!(matching_size(&orders, "X"), 0);

        let orders = vec![order("3", "X", Side::Sell, 100, "A")];
        assert_eq!(matching_size(&orders, "X"), 0);
    }

    #[test]
    fn test_reference_scenario() {
        let orders = vec![
            order("1", "X", Side::Buy, 100, "A"),
            order("2", "X", Side::Buy, 200, "B"),
            order("3", "X", Side::Sell, 150, "A"),
            order("4", "X", Side::Sell, 50, "C"),
        ];
        assert_eq!(matching_size(&orders, "X"), 50);
    }

    #[test]
    fn test_sell_pass_depends_on_visit_order() {
        // Same orders as the reference scenario with the two sells swapped
        let orders = vec![
            order("1", "X", Side::Buy, 100, "A"),
            order("2", "X", Side::Buy, 200, "B"),
            order("4", "X", Side::Sell, 50, "C"),
            order("3", "X", Side::Sell, 150, "A"),
        ];
        assert_eq!(matching_size(&orders, "X"), 150);
    }

    #[test]
    fn test_buy_pass_accumulates() {
        // Each buy sees 1000 of cross-company sell quantity
        let orders = vec![
            order("1", "X", Side::Buy, 100, "A"),
            order("2", "X", Side::Buy, 200, "B"),
            order("3", "X", Side::Sell, 1000, "C"),
        ];
        // Buy pass: 100 + 200 = 300
        // Sell pass: avail 300 is not > 1000, total untouched
        assert_eq!(matching_size(&orders, "X"), 300);
    }

    #[test]
    fn test_sell_pass_requires_total_below_avail() {
        let orders = vec![
            order("1", "X", Side::Buy, 100, "A"),
            order("2", "X", Side::Buy, 100, "B"),
            order("3", "X", Side::Sell, 150, "C"),
            order("4", "X", Side::Sell, 150, "D"),
        ];
        // Buy pass: each buy sees 300 > 100, total = 200
        // Sell pass: each sell sees 200 > 150 and 200 < 200 is false
        assert_eq!(matching_size(&orders, "X"), 200);
    }

    #[test]
    fn test_strict_greater_than() {
        let orders = vec![
            order("1", "X", Side::Buy, 100, "A"),
            order("2", "X", Side::Sell, 100, "B"),
        ];
        assert_eq!(matching_size(&orders, "X"), 0);
    }

    #[test]
    fn test_same_company_excluded() {
        let orders = vec![
            order("1", "X", Side::Buy, 100, "A"),
            order("2", "X", Side::Sell, 500, "A"),
        ];
        assert_eq!(matching_size(&orders, "X"), 0);

        let orders = vec![
            order("1", "X", Side::Buy, 100, "A"),
            order("2", "X", Side::Sell, 500, "B"),
        ];
        // Buy pass adds 100, sell pass: 100 > 500 fails
        assert_eq!(matching_size(&orders, "X"), 100);
    }

    #[test]
    fn test_other_securities_ignored() {
        let orders = vec![
            order("1", "X", Side::Buy, 100, "A"),
            order("2", "Y", Side::Sell, 500, "B"),
            order("3", "Y", Side::Buy, 900, "C"),
        ];
        assert_eq!(matching_size(&orders, "X"), 0);
        assert_eq!(matching_size(&orders, "Z"), 0);
    }

    #[test]
    fn test_large_quantities_do_not_wrap() {
        let orders = vec![
            order("1", "X", Side::Buy, u32::MAX, "A"),
            order("2", "X", Side::Sell, u32::MAX, "B"),
            order("3", "X", Side::Sell, u32::MAX, "C"),
        ];
        // Buy sees 2 * u32::MAX > u32::MAX
        assert_eq!(matching_size(&orders, "X"), MatchSize::from(u32::MAX));
    }
}
