//! Quote results and the trait that prices orders.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::{CenterId, Order, ProductCode};

/// Errors returned by [`Quoter::quote`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    /// No product had a positive quantity.
    ///
    /// Distinct from a cost of zero; shells report it as a user error.
    #[error("order does not request any items")]
    EmptyOrder,
    /// The order names a product the catalog does not contain.
    #[error("product {0} is not in the catalog")]
    UnknownProduct(ProductCode),
    /// A required center is missing from the catalog.
    #[error("center {0} is not in the catalog")]
    UnknownCenter(CenterId),
}

/// Cost of one anchor choice.
///
/// `cost` is `hub_leg * rate` plus `distance * rate` for every other required
/// center; `link_distance` reports the summed distances.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnchorCandidate {
    /// Center whose connections are priced.
    pub anchor: CenterId,
    /// Distance from the anchor to the hub.
    pub hub_leg: f64,
    /// Summed distance from the anchor to the other required centers.
    pub link_distance: f64,
    /// Total cost for this anchor.
    pub cost: f64,
}

/// Successful quote for an order.
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
/// use hubfreight_core::{AnchorCandidate, CenterId, Quote};
///
/// let c3 = CenterId::new("C3");
/// let quote = Quote {
///     minimum_cost: 20.0,
///     rate: 10.0,
///     total_weight: 3.5,
///     centers: BTreeSet::from([c3.clone()]),
///     anchor: c3.clone(),
///     candidates: vec![AnchorCandidate {
///         anchor: c3,
///         hub_leg: 2.0,
///         link_distance: 0.0,
///         cost: 20.0,
///     }],
/// };
/// assert_eq!(quote.minimum_cost, 20.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quote {
    /// Cheapest candidate cost.
    pub minimum_cost: f64,
    /// Tariff rate per unit distance for this order.
    pub rate: f64,
    /// Total shipped weight.
    pub total_weight: f64,
    /// Centers that must ship.
    pub centers: BTreeSet<CenterId>,
    /// Anchor achieving `minimum_cost`.
    pub anchor: CenterId,
    /// Every anchor that was evaluated, in center order.
    pub candidates: Vec<AnchorCandidate>,
}

/// Price an order against a fixed catalog.
///
/// Implementations hold their catalog and must be `Send + Sync` so one
/// instance can serve concurrent callers.
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
/// use hubfreight_core::{CenterId, Order, Quote, QuoteError, Quoter};
///
/// struct FlatQuoter;
///
/// impl Quoter for FlatQuoter {
///     fn quote(&self, order: &Order) -> Result<Quote, QuoteError> {
///         if order.is_empty() {
///             return Err(QuoteError::EmptyOrder);
///         }
///         let hub = CenterId::new("C1");
///         Ok(Quote {
///             minimum_cost: 1.0,
///             rate: 1.0,
///             total_weight: 0.0,
///             centers: BTreeSet::from([hub.clone()]),
///             anchor: hub,
///             candidates: Vec::new(),
///         })
///     }
/// }
///
/// assert_eq!(FlatQuoter.quote(&Order::new()), Err(QuoteError::EmptyOrder));
/// ```
pub trait Quoter: Send + Sync {
    /// Compute the minimum delivery cost for `order`.
    fn quote(&self, order: &Order) -> Result<Quote, QuoteError>;
}
