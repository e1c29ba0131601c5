//! Inter-center distance lookup.

use std::collections::BTreeMap;

use crate::{Catalog, CenterId};

/// Distances an optimizer needs to price anchor choices.
///
/// Implementers return `None` for unknown centers or pairs; callers decide
/// how to degrade.
///
/// # Examples
///
/// ```rust
/// use hubfreight_core::{CenterId, DistanceSource};
///
/// struct Flat;
///
/// impl DistanceSource for Flat {
///     fn hub_distance(&self, _center: &CenterId) -> Option<f64> {
///         Some(1.0)
///     }
///
///     fn link(&self, _from: &CenterId, _to: &CenterId) -> Option<f64> {
///         None
///     }
/// }
///
/// assert_eq!(Flat.hub_distance(&CenterId::new("C1")), Some(1.0));
/// assert_eq!(Flat.pairwise(&CenterId::new("C1"), &CenterId::new("C2")), 0.0);
/// ```
pub trait DistanceSource {
    /// Distance from `center` to the hub.
    fn hub_distance(&self, center: &CenterId) -> Option<f64>;

    /// Distance between two centers, checking `from → to` before `to → from`.
    fn link(&self, from: &CenterId, to: &CenterId) -> Option<f64>;

    /// Distance between two centers, or zero when no link is known.
    ///
    /// Unknown pairs contribute nothing to a cost rather than failing the
    /// quote.
    fn pairwise(&self, from: &CenterId, to: &CenterId) -> f64 {
        self.link(from, to).unwrap_or_else(|| {
            log::debug!("no distance between {from} and {to}; counting it as zero");
            0.0
        })
    }
}

impl DistanceSource for Catalog {
    fn hub_distance(&self, center: &CenterId) -> Option<f64> {
        Self::hub_distance(self, center)
    }

    fn link(&self, from: &CenterId, to: &CenterId) -> Option<f64> {
        self.links().lookup(from, to)
    }
}

/// Directed distances between pairs of centers.
///
/// Entries are stored as given. [`DistanceTable::lookup`] falls back to the
/// reverse direction, so a table only needs one entry per unordered pair.
///
/// # Examples
/// ```
/// use hubfreight_core::{CenterId, DistanceTable};
///
/// let mut table = DistanceTable::new();
/// table.insert(CenterId::new("C1"), CenterId::new("C2"), 4.0);
///
/// assert_eq!(table.lookup(&CenterId::new("C2"), &CenterId::new("C1")), Some(4.0));
/// assert_eq!(table.lookup(&CenterId::new("C1"), &CenterId::new("C3")), None);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DistanceTable {
    entries: BTreeMap<(CenterId, CenterId), f64>,
}

impl DistanceTable {
    /// Construct an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the distance from `from` to `to`, replacing any previous entry.
    pub fn insert(&mut self, from: CenterId, to: CenterId, distance: f64) {
        self.entries.insert((from, to), distance);
    }

    fn direct(&self, from: &CenterId, to: &CenterId) -> Option<f64> {
        self.entries.get(&(from.clone(), to.clone())).copied()
    }

    /// Distance stored in either direction, forward entry first.
    pub fn lookup(&self, from: &CenterId, to: &CenterId) -> Option<f64> {
        self.direct(from, to).or_else(|| self.direct(to, from))
    }

    /// Iterate over the stored directed entries.
    pub fn iter(&self) -> impl Iterator<Item = (&CenterId, &CenterId, f64)> + '_ {
        self.entries
            .iter()
            .map(|((from, to), distance)| (from, to, *distance))
    }

    /// Number of stored directed entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
