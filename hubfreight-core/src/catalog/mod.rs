//! Static catalog data: centers, the products they stock, distances and the
//! tariff.
//!
//! A [`Catalog`] is built once through [`CatalogBuilder`] and then only read.
//! Quoters borrow or share it; nothing mutates it after construction.

mod builder;
mod error;
mod reference;
#[cfg(feature = "serde")]
mod spec;

use std::collections::BTreeMap;

pub use builder::CatalogBuilder;
pub use error::CatalogError;
pub use reference::REFERENCE_HUB;
#[cfg(feature = "serde")]
pub use spec::{CatalogSpec, CenterSpec, LinkSpec};

use crate::{CenterId, DistanceTable, ProductCode, TariffSchedule};

/// A source location and its distance to the hub.
#[derive(Debug, Clone, PartialEq)]
pub struct Center {
    /// Center identifier.
    pub id: CenterId,
    /// Distance from this center to the hub.
    pub hub_distance: f64,
}

/// A product and the single center that stocks it.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Item code.
    pub code: ProductCode,
    /// Owning center.
    pub center: CenterId,
    /// Weight of one unit.
    pub unit_weight: f64,
}

/// Immutable catalog shared by every quote.
///
/// # Examples
/// ```
/// use hubfreight_core::{Catalog, CenterId, ProductCode};
///
/// let catalog = Catalog::reference();
/// let product = catalog.product(&ProductCode::new("D")).expect("reference product");
/// assert_eq!(product.center, CenterId::new("C2"));
/// assert_eq!(catalog.hub_distance(&product.center), Some(2.5));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    hub: String,
    centers: BTreeMap<CenterId, Center>,
    products: BTreeMap<ProductCode, Product>,
    links: DistanceTable,
    tariff: TariffSchedule,
}

impl Catalog {
    /// Name of the destination hub.
    pub fn hub(&self) -> &str {
        &self.hub
    }

    /// Look up a center.
    pub fn center(&self, id: &CenterId) -> Option<&Center> {
        self.centers.get(id)
    }

    /// All centers in identifier order.
    pub fn centers(&self) -> impl Iterator<Item = &Center> + '_ {
        self.centers.values()
    }

    /// Look up a product.
    pub fn product(&self, code: &ProductCode) -> Option<&Product> {
        self.products.get(code)
    }

    /// All products in code order.
    pub fn products(&self) -> impl Iterator<Item = &Product> + '_ {
        self.products.values()
    }

    /// Products stocked by `center`.
    pub fn stock<'a>(&'a self, center: &'a CenterId) -> impl Iterator<Item = &'a Product> + 'a {
        self.products.values().filter(move |p| &p.center == center)
    }

    /// Distance from `center` to the hub, if the center exists.
    pub fn hub_distance(&self, center: &CenterId) -> Option<f64> {
        self.center(center).map(|c| c.hub_distance)
    }

    /// Inter-center distances.
    pub const fn links(&self) -> &DistanceTable {
        &self.links
    }

    /// Tariff applied to every shipment.
    pub const fn tariff(&self) -> &TariffSchedule {
        &self.tariff
    }

    /// Unordered center pairs with no distance in either direction.
    ///
    /// Quotes treat these pairs as zero distance, which understates cost, so
    /// callers may want to report them.
    ///
    /// # Examples
    /// ```
    /// use hubfreight_core::{CatalogBuilder, CenterId};
    ///
    /// # fn main() -> Result<(), hubfreight_core::CatalogError> {
    /// let catalog = CatalogBuilder::new("L1")
    ///     .center("C1", 1.0)
    ///     .center("C2", 1.0)
    ///     .build()?;
    /// assert_eq!(
    ///     catalog.unlinked_pairs(),
    ///     vec![(CenterId::new("C1"), CenterId::new("C2"))]
    /// );
    /// # Ok(())
    /// # }
    /// ```
    pub fn unlinked_pairs(&self) -> Vec<(CenterId, CenterId)> {
        let ids: Vec<&CenterId> = self.centers.keys().collect();
        ids.iter()
            .enumerate()
            .flat_map(|(idx, a)| ids.iter().skip(idx + 1).map(move |b| (*a, *b)))
            .filter(|(a, b)| self.links.lookup(a, b).is_none())
            .map(|(a, b)| (a.clone(), b.clone()))
            .collect()
    }
}
