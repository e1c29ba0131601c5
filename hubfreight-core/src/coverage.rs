//! Resolve which centers must ship to fulfil an order.

use std::collections::{BTreeMap, BTreeSet};

use crate::{Catalog, CenterId, Order, ProductCode, QuoteError};

/// Centers, weight and items implied by the positive lines of an order.
///
/// # Examples
/// ```
/// use hubfreight_core::{Catalog, CenterId, Coverage, Order};
///
/// let catalog = Catalog::reference();
/// let order = Order::new().with_quantity("A", 1).with_quantity("D", 1);
/// let coverage = Coverage::resolve(&catalog, &order)?;
///
/// assert_eq!(coverage.total_weight, 15.0);
/// assert!(coverage.centers.contains(&CenterId::new("C1")));
/// assert!(coverage.centers.contains(&CenterId::new("C2")));
/// # Ok::<(), hubfreight_core::QuoteError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Coverage {
    /// Centers owning at least one requested product.
    pub centers: BTreeSet<CenterId>,
    /// Sum of `quantity * unit_weight` over requested items.
    pub total_weight: f64,
    /// Requested items with positive quantity.
    pub items: BTreeMap<ProductCode, u32>,
}

impl Coverage {
    /// Resolve the required centers for `order`.
    ///
    /// Returns [`QuoteError::EmptyOrder`] when no quantity is positive and
    /// [`QuoteError::UnknownProduct`] when an item is not in `catalog`.
    pub fn resolve(catalog: &Catalog, order: &Order) -> Result<Self, QuoteError> {
        let mut coverage = Self {
            centers: BTreeSet::new(),
            total_weight: 0.0,
            items: BTreeMap::new(),
        };
        for (code, quantity) in order.positive_lines() {
            let product = catalog
                .product(code)
                .ok_or_else(|| QuoteError::UnknownProduct(code.clone()))?;
            coverage.total_weight += f64::from(quantity) * product.unit_weight;
            coverage.centers.insert(product.center.clone());
            coverage.items.insert(code.clone(), quantity);
        }
        if coverage.items.is_empty() {
            return Err(QuoteError::EmptyOrder);
        }
        Ok(coverage)
    }
}
