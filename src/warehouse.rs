//! Warehouse - The inventory store.
//!
//! Tracks per-product stock counts plus an aggregate total, with
//! O(1) stocking and atomic check-then-subtract pulls.

use rustc_hash::FxHashMap;

/// Opaque token naming a stock-keeping unit.
///
/// Kept as an owned string so the key space can grow beyond the
/// single-character identifiers the order format started with.
pub type ProductKey = String;

/// Per-product inventory with a cached aggregate total.
///
/// Deliberately dumb: units go in via [`store`](Warehouse::store) and out via
/// [`pull`](Warehouse::pull), nothing else. The aggregate `total` is the
/// depletion signal for the processing loop.
#[derive(Debug, Default)]
pub struct Warehouse {
    /// Stock count per product
    stock: FxHashMap<ProductKey, u64>,
    /// Sum of all stock counts; zero means the warehouse is drained
    total: u64,
}

impl Warehouse {
    /// Create an empty warehouse
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Stocking
    // ========================================================================

    /// Add `count` units of `product`, creating the entry if absent.
    ///
    /// There is no upper bound and no failure condition.
    pub fn store(&mut self, product: impl Into<ProductKey>, count: u64) {
        *self.stock.entry(product.into()).or_insert(0) += count;
        self.total += count;
    }

    // ========================================================================
    // Pulling
    // ========================================================================

    /// Atomically remove `count` units of `product`.
    ///
    /// # Returns
    /// `true` if the full count was available and removed; `false` if stock
    /// was insufficient, in which case nothing is modified.
    ///
    /// Pulling a product that was never stocked fails without inserting a
    /// zero-stock entry.
    pub fn pull(&mut self, product: &str, count: u64) -> bool {
        match self.stock.get_mut(product) {
            Some(have) if *have >= count => {
                *have -= count;
                self.total -= count;
                true
            }
            _ => false,
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// True iff the warehouse holds no units at all
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Membership test: has `product` ever been stocked?
    ///
    /// This is not a stock-level test; a product pulled down to zero is
    /// still a member.
    #[inline]
    pub fn has_product(&self, product: &str) -> bool {
        self.stock.contains_key(product)
    }

    /// Current stock for `product` (0 if never stocked)
    #[inline]
    pub fn available(&self, product: &str) -> u64 {
        self.stock.get(product).copied().unwrap_or(0)
    }

    /// Aggregate count across all products
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct products ever stocked
    pub fn product_count(&self) -> usize {
        self.stock.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_warehouse() {
        let wh = Warehouse::new();
        assert!(wh.is_empty());
        assert_eq!(wh.total(), 0);
        assert_eq!(wh.product_count(), 0);
        assert!(!wh.has_product("A"));
    }

    #[test]
    fn test_store_accumulates() {
        let mut wh = Warehouse::new();
        wh.store("A", 3);
        wh.store("A", 2);
        wh.store("B", 1);

        assert_eq!(wh.available("A"), 5);
        assert_eq!(wh.available("B"), 1);
        assert_eq!(wh.total(), 6);
        assert!(!wh.is_empty());
    }

    #[test]
    fn test_pull_success() {
        let mut wh = Warehouse::new();
        wh.store("A", 3);

        assert!(wh.pull("A", 2));
        assert_eq!(wh.available("A"), 1);
        assert_eq!(wh.total(), 1);
    }

    #[test]
    fn test_pull_to_zero_then_fail() {
        let mut wh = Warehouse::new();
        wh.store("A", 3);

        assert!(wh.pull("A", 3));
        assert_eq!(wh.available("A"), 0);
        assert!(wh.is_empty());

        // Nothing left: the pull fails and mutates nothing
        assert!(!wh.pull("A", 1));
        assert_eq!(wh.available("A"), 0);
        assert_eq!(wh.total(), 0);
    }

    #[test]
    fn test_pull_insufficient_leaves_stock_untouched() {
        let mut wh = Warehouse::new();
        wh.store("A", 2);

        assert!(!wh.pull("A", 3));
        assert_eq!(wh.available("A"), 2);
        assert_eq!(wh.total(), 2);
    }

    #[test]
    fn test_pull_unknown_product_does_not_insert() {
        let mut wh = Warehouse::new();
        wh.store("A", 1);

        assert!(!wh.pull("Z", 1));
        assert!(!wh.has_product("Z"));
        assert_eq!(wh.product_count(), 1);
        assert_eq!(wh.total(), 1);
    }

    #[test]
    fn test_membership_survives_depletion() {
        let mut wh = Warehouse::new();
        wh.store("A", 2);
        assert!(wh.pull("A", 2));

        // Drained but still a known product
        assert!(wh.has_product("A"));
        assert_eq!(wh.available("A"), 0);
    }
}
