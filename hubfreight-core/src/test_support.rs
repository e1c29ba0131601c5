//! Test-only catalogs, orders and a canned `Quoter` used by unit and
//! behaviour tests across the workspace.

use std::collections::BTreeSet;

use crate::{Catalog, CatalogBuilder, CenterId, Order, Quote, QuoteError, Quoter};

/// Build an order from `(code, quantity)` pairs.
pub fn order(lines: &[(&str, u32)]) -> Order {
    lines.iter().copied().collect()
}

/// Two-center catalog without any inter-center distance.
///
/// `P` lives in `N1` (hub distance 1) and `Q` in `N2` (hub distance 2), each
/// weighing one unit.
///
/// # Panics
///
/// Never in practice; the entries are fixed and valid.
pub fn unlinked_catalog() -> Catalog {
    CatalogBuilder::new("HUB")
        .center("N1", 1.0)
        .center("N2", 2.0)
        .product("P", "N1", 1.0)
        .product("Q", "N2", 1.0)
        .build()
        .expect("static test catalog is valid")
}

/// `Quoter` that ignores the catalog and returns a fixed cost for any
/// non-empty order.
#[derive(Debug, Clone, Copy)]
pub struct FixedQuoter {
    /// Cost reported for every non-empty order.
    pub cost: f64,
}

impl Quoter for FixedQuoter {
    fn quote(&self, order: &Order) -> Result<Quote, QuoteError> {
        if order.is_empty() {
            return Err(QuoteError::EmptyOrder);
        }
        let anchor = CenterId::new("FIXED");
        Ok(Quote {
            minimum_cost: self.cost,
            rate: self.cost,
            total_weight: 0.0,
            centers: BTreeSet::from([anchor.clone()]),
            anchor,
            candidates: Vec::new(),
        })
    }
}
