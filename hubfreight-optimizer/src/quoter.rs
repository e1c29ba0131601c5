//! `Quoter` implementation wiring coverage, tariff and anchor search.

use std::borrow::Borrow;

use hubfreight_core::{Catalog, Coverage, Order, Quote, QuoteError, Quoter};

use crate::AnchorOptimizer;

/// Default quoter: resolves coverage, looks up the tariff rate and runs the
/// anchor search against one catalog.
///
/// The catalog may be owned, borrowed or shared (`Arc<Catalog>`), so one
/// quoter can serve many threads without copying the tables.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use hubfreight_core::{Catalog, Order, Quoter};
/// use hubfreight_optimizer::AnchorQuoter;
///
/// let quoter = AnchorQuoter::new(Arc::new(Catalog::reference()));
/// let order = Order::new().with_quantity("A", 1).with_quantity("B", 1).with_quantity("C", 1);
/// let quote = quoter.quote(&order)?;
/// assert_eq!(quote.rate, 26.0);
/// assert_eq!(quote.minimum_cost, 78.0);
/// # Ok::<(), hubfreight_core::QuoteError>(())
/// ```
#[derive(Debug, Clone)]
pub struct AnchorQuoter<C = Catalog>
where
    C: Borrow<Catalog>,
{
    catalog: C,
    optimizer: AnchorOptimizer,
}

impl<C> AnchorQuoter<C>
where
    C: Borrow<Catalog>,
{
    /// Construct a quoter over `catalog`.
    #[must_use]
    pub const fn new(catalog: C) -> Self {
        Self {
            catalog,
            optimizer: AnchorOptimizer::new(),
        }
    }

    /// Catalog used for every quote.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        self.catalog.borrow()
    }
}

impl<C> Quoter for AnchorQuoter<C>
where
    C: Borrow<Catalog> + Send + Sync,
{
    fn quote(&self, order: &Order) -> Result<Quote, QuoteError> {
        let catalog = self.catalog();
        let coverage = Coverage::resolve(catalog, order)?;
        let rate = catalog.tariff().rate(coverage.total_weight);
        let plan = self.optimizer.evaluate(&coverage.centers, rate, catalog)?;
        log::debug!(
            "quoted {} items from {} centers: weight {}, rate {}, cost {}",
            coverage.items.len(),
            coverage.centers.len(),
            coverage.total_weight,
            rate,
            plan.minimum_cost
        );
        Ok(Quote {
            minimum_cost: plan.minimum_cost,
            rate,
            total_weight: coverage.total_weight,
            centers: coverage.centers,
            anchor: plan.anchor,
            candidates: plan.candidates,
        })
    }
}

/// Quote `order` against `catalog` with the default optimizer.
///
/// # Errors
/// [`QuoteError::EmptyOrder`] when no item has a positive quantity, and
/// [`QuoteError::UnknownProduct`] or [`QuoteError::UnknownCenter`] when the
/// order and catalog disagree.
///
/// # Examples
/// ```
/// use hubfreight_core::{Catalog, Order, QuoteError};
/// use hubfreight_optimizer::compute_cost;
///
/// let catalog = Catalog::reference();
/// let empty = Order::new().with_quantity("A", 0);
/// assert_eq!(compute_cost(&catalog, &empty), Err(QuoteError::EmptyOrder));
/// ```
pub fn compute_cost(catalog: &Catalog, order: &Order) -> Result<Quote, QuoteError> {
    AnchorQuoter::new(catalog).quote(order)
}
