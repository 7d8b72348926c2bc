//! Value types held by the cache.
//!
//! - [`order`] - [`Order`] and [`Side`]

pub mod order;

pub use order::{Order, Side};

/// Quantity of a single order
///
/// Using `u32`, matching the unsigned quantities the surrounding
/// order-management system hands in.
pub type Quantity = u32;

/// Aggregate matching size for a security
///
/// Wider than [`Quantity`] because it is built from sums of many order
/// quantities, which must not wrap.
pub type MatchSize = u64;
