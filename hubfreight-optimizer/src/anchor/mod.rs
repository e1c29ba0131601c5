//! Anchor search over a set of required centers.
//!
//! Each required center is tried as the anchor. An anchor's cost is its hub
//! leg plus its link to every other required center, all priced at the
//! order's rate. Links are summed independently; the search never orders the
//! non-anchor centers into a tour.

use std::collections::BTreeSet;

use hubfreight_core::{AnchorCandidate, CenterId, DistanceSource, QuoteError};

/// Every evaluated anchor and the cheapest among them.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorPlan {
    /// Anchor achieving `minimum_cost`.
    pub anchor: CenterId,
    /// Smallest candidate cost.
    pub minimum_cost: f64,
    /// Candidates in center order.
    pub candidates: Vec<AnchorCandidate>,
}

/// Picks the cheapest anchor for a set of required centers.
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
/// use hubfreight_core::{Catalog, CenterId};
/// use hubfreight_optimizer::AnchorOptimizer;
///
/// let catalog = Catalog::reference();
/// let centers = BTreeSet::from([CenterId::new("C1"), CenterId::new("C2")]);
/// let plan = AnchorOptimizer::new().evaluate(&centers, 42.0, &catalog)?;
///
/// assert_eq!(plan.anchor, CenterId::new("C2"));
/// assert_eq!(plan.minimum_cost, 273.0);
/// assert_eq!(plan.candidates.len(), 2);
/// # Ok::<(), hubfreight_core::QuoteError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AnchorOptimizer;

impl AnchorOptimizer {
    /// Construct an optimizer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Price every anchor choice and keep the cheapest.
    ///
    /// Ties keep the first anchor in center order. Missing inter-center
    /// distances count as zero.
    ///
    /// # Errors
    /// [`QuoteError::EmptyOrder`] when `centers` is empty and
    /// [`QuoteError::UnknownCenter`] when a center has no hub distance.
    pub fn evaluate<D>(
        &self,
        centers: &BTreeSet<CenterId>,
        rate: f64,
        distances: &D,
    ) -> Result<AnchorPlan, QuoteError>
    where
        D: DistanceSource + ?Sized,
    {
        let candidates = centers
            .iter()
            .map(|anchor| price_anchor(anchor, centers, rate, distances))
            .collect::<Result<Vec<_>, _>>()?;
        let best = candidates
            .iter()
            .reduce(|best, next| {
                if next.cost.total_cmp(&best.cost).is_lt() {
                    next
                } else {
                    best
                }
            })
            .ok_or(QuoteError::EmptyOrder)?;
        let anchor = best.anchor.clone();
        let minimum_cost = best.cost;
        log::debug!(
            "selected anchor {anchor} at cost {minimum_cost} from {} candidates",
            candidates.len()
        );
        Ok(AnchorPlan {
            anchor,
            minimum_cost,
            candidates,
        })
    }

    /// Minimum cost over all anchor choices.
    ///
    /// # Errors
    /// Same as [`AnchorOptimizer::evaluate`].
    pub fn minimum_cost<D>(
        &self,
        centers: &BTreeSet<CenterId>,
        rate: f64,
        distances: &D,
    ) -> Result<f64, QuoteError>
    where
        D: DistanceSource + ?Sized,
    {
        self.evaluate(centers, rate, distances)
            .map(|plan| plan.minimum_cost)
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "anchor costs are real-valued products of distance and rate"
)]
fn price_anchor<D>(
    anchor: &CenterId,
    centers: &BTreeSet<CenterId>,
    rate: f64,
    distances: &D,
) -> Result<AnchorCandidate, QuoteError>
where
    D: DistanceSource + ?Sized,
{
    let hub_leg = distances
        .hub_distance(anchor)
        .ok_or_else(|| QuoteError::UnknownCenter(anchor.clone()))?;
    let mut cost = hub_leg * rate;
    let mut link_distance = 0.0;
    for other in centers.iter().filter(|center| *center != anchor) {
        let distance = distances.pairwise(anchor, other);
        link_distance += distance;
        cost += distance * rate;
    }
    log::debug!("anchor {anchor}: hub leg {hub_leg}, links {link_distance}, cost {cost}");
    Ok(AnchorCandidate {
        anchor: anchor.clone(),
        hub_leg,
        link_distance,
        cost,
    })
}
