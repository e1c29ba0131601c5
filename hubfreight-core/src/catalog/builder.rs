//! Validating construction of [`Catalog`] values.

use std::collections::BTreeMap;

use crate::{CenterId, DistanceTable, ProductCode, TariffSchedule};

use super::{Catalog, CatalogError, Center, Product};

/// Collects catalog entries and validates them in [`CatalogBuilder::build`].
///
/// # Examples
/// ```
/// use hubfreight_core::{CatalogBuilder, CenterId, TariffSchedule};
///
/// # fn main() -> Result<(), hubfreight_core::CatalogError> {
/// let catalog = CatalogBuilder::new("L1")
///     .center("C1", 3.0)
///     .center("C2", 2.5)
///     .product("A", "C1", 3.0)
///     .product("D", "C2", 12.0)
///     .link("C1", "C2", 4.0)
///     .tariff(TariffSchedule::new(10.0, 8.0))
///     .build()?;
/// assert_eq!(catalog.hub_distance(&CenterId::new("C2")), Some(2.5));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    hub: String,
    centers: Vec<Center>,
    products: Vec<Product>,
    links: Vec<(CenterId, CenterId, f64)>,
    tariff: TariffSchedule,
}

impl CatalogBuilder {
    /// Start a catalog whose shipments converge on `hub`.
    pub fn new(hub: impl Into<String>) -> Self {
        Self {
            hub: hub.into(),
            ..Self::default()
        }
    }

    /// Add a center at `hub_distance` from the hub.
    pub fn center(mut self, id: impl Into<CenterId>, hub_distance: f64) -> Self {
        self.centers.push(Center {
            id: id.into(),
            hub_distance,
        });
        self
    }

    /// Add a product stocked by `center`.
    pub fn product(
        mut self,
        code: impl Into<ProductCode>,
        center: impl Into<CenterId>,
        unit_weight: f64,
    ) -> Self {
        self.products.push(Product {
            code: code.into(),
            center: center.into(),
            unit_weight,
        });
        self
    }

    /// Add a distance between two centers.
    pub fn link(mut self, from: impl Into<CenterId>, to: impl Into<CenterId>, distance: f64) -> Self {
        self.links.push((from.into(), to.into(), distance));
        self
    }

    /// Replace the tariff. Defaults to the reference schedule.
    pub const fn tariff(mut self, tariff: TariffSchedule) -> Self {
        self.tariff = tariff;
        self
    }

    /// Validate the collected entries and freeze them into a [`Catalog`].
    pub fn build(self) -> Result<Catalog, CatalogError> {
        self.tariff.validate()?;
        let centers = self.collect_centers()?;
        let products = collect_products(&centers, self.products)?;
        let links = collect_links(&centers, self.links)?;
        Ok(Catalog {
            hub: self.hub,
            centers,
            products,
            links,
            tariff: self.tariff,
        })
    }

    fn collect_centers(&self) -> Result<BTreeMap<CenterId, Center>, CatalogError> {
        let mut centers = BTreeMap::new();
        for center in &self.centers {
            if !is_distance(center.hub_distance) {
                return Err(CatalogError::InvalidDistance {
                    leg: format!("{}-{}", center.id, self.hub),
                    distance: center.hub_distance,
                });
            }
            if centers.insert(center.id.clone(), center.clone()).is_some() {
                return Err(CatalogError::DuplicateCenter(center.id.clone()));
            }
        }
        Ok(centers)
    }
}

fn collect_products(
    centers: &BTreeMap<CenterId, Center>,
    entries: Vec<Product>,
) -> Result<BTreeMap<ProductCode, Product>, CatalogError> {
    let mut products = BTreeMap::new();
    for product in entries {
        if !centers.contains_key(&product.center) {
            return Err(CatalogError::UnknownCenter {
                owner: format!("product {}", product.code),
                center: product.center,
            });
        }
        if !(product.unit_weight.is_finite() && product.unit_weight > 0.0) {
            return Err(CatalogError::InvalidWeight {
                product: product.code,
                weight: product.unit_weight,
            });
        }
        let code = product.code.clone();
        if products.insert(code.clone(), product).is_some() {
            return Err(CatalogError::DuplicateProduct(code));
        }
    }
    Ok(products)
}

fn collect_links(
    centers: &BTreeMap<CenterId, Center>,
    entries: Vec<(CenterId, CenterId, f64)>,
) -> Result<DistanceTable, CatalogError> {
    let mut links = DistanceTable::new();
    for (from, to, distance) in entries {
        let leg = format!("{from}-{to}");
        if from == to {
            return Err(CatalogError::SelfLink(from));
        }
        for end in [&from, &to] {
            if !centers.contains_key(end) {
                return Err(CatalogError::UnknownCenter {
                    owner: format!("link {leg}"),
                    center: end.clone(),
                });
            }
        }
        if !is_distance(distance) {
            return Err(CatalogError::InvalidDistance { leg, distance });
        }
        links.insert(from, to, distance);
    }
    Ok(links)
}

fn is_distance(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TariffError;
    use rstest::{fixture, rstest};

    #[fixture]
    fn two_centers() -> CatalogBuilder {
        CatalogBuilder::new("L1")
            .center("C1", 3.0)
            .center("C2", 2.5)
            .product("A", "C1", 3.0)
            .product("D", "C2", 12.0)
    }

    #[rstest]
    fn builds_valid_catalog(two_centers: CatalogBuilder) {
        let catalog = two_centers
            .link("C1", "C2", 4.0)
            .build()
            .expect("valid catalog");
        assert_eq!(catalog.hub(), "L1");
        assert_eq!(catalog.centers().count(), 2);
        assert_eq!(catalog.products().count(), 2);
        assert_eq!(catalog.links().len(), 1);
    }

    #[rstest]
    fn rejects_duplicate_center(two_centers: CatalogBuilder) {
        let err = two_centers.center("C1", 1.0).build().expect_err("duplicate");
        assert_eq!(err, CatalogError::DuplicateCenter(CenterId::new("C1")));
    }

    #[rstest]
    fn rejects_product_in_two_centers(two_centers: CatalogBuilder) {
        let err = two_centers
            .product("A", "C2", 3.0)
            .build()
            .expect_err("product owned twice");
        assert_eq!(err, CatalogError::DuplicateProduct(ProductCode::new("A")));
    }

    #[rstest]
    fn rejects_product_of_unknown_center(two_centers: CatalogBuilder) {
        let err = two_centers
            .product("Z", "C9", 1.0)
            .build()
            .expect_err("unknown center");
        assert_eq!(
            err,
            CatalogError::UnknownCenter {
                owner: "product Z".into(),
                center: CenterId::new("C9"),
            }
        );
    }

    #[rstest]
    #[case(0.0)]
    #[case(-1.0)]
    #[case(f64::INFINITY)]
    fn rejects_unusable_weight(two_centers: CatalogBuilder, #[case] weight: f64) {
        let err = two_centers
            .product("Z", "C1", weight)
            .build()
            .expect_err("bad weight");
        assert!(matches!(err, CatalogError::InvalidWeight { .. }));
    }

    #[rstest]
    fn rejects_negative_hub_distance() {
        let err = CatalogBuilder::new("L1")
            .center("C1", -3.0)
            .build()
            .expect_err("negative distance");
        assert_eq!(
            err,
            CatalogError::InvalidDistance {
                leg: "C1-L1".into(),
                distance: -3.0,
            }
        );
    }

    #[rstest]
    fn rejects_link_to_unknown_center(two_centers: CatalogBuilder) {
        let err = two_centers
            .link("C1", "C7", 1.0)
            .build()
            .expect_err("unknown link end");
        assert_eq!(
            err,
            CatalogError::UnknownCenter {
                owner: "link C1-C7".into(),
                center: CenterId::new("C7"),
            }
        );
    }

    #[rstest]
    fn rejects_self_link(two_centers: CatalogBuilder) {
        let err = two_centers.link("C2", "C2", 1.0).build().expect_err("self link");
        assert_eq!(err, CatalogError::SelfLink(CenterId::new("C2")));
    }

    #[rstest]
    fn rejects_invalid_tariff(two_centers: CatalogBuilder) {
        let err = two_centers
            .tariff(TariffSchedule::new(-1.0, 8.0))
            .build()
            .expect_err("bad tariff");
        assert_eq!(err, CatalogError::Tariff(TariffError::InvalidBaseRate(-1.0)));
    }
}
