//! Serializable catalog description.
//!
//! Products are nested under the center that stocks them, so the format
//! cannot express a product owned by two centers at once.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{CenterId, ProductCode, TariffSchedule};

use super::{Catalog, CatalogBuilder, CatalogError};

/// Flat, serializable form of a [`Catalog`].
///
/// # Examples
/// ```
/// use hubfreight_core::{Catalog, CatalogSpec};
///
/// let json = r#"{
///     "hub": "L1",
///     "centers": [
///         { "id": "C1", "hub_distance": 3.0, "products": { "A": 3.0 } }
///     ]
/// }"#;
/// let spec: CatalogSpec = serde_json::from_str(json).expect("valid JSON");
/// let catalog = Catalog::try_from(spec).expect("valid catalog");
/// assert_eq!(catalog.hub(), "L1");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSpec {
    /// Destination hub name.
    pub hub: String,
    /// Tariff; the reference schedule when omitted.
    #[serde(default)]
    pub tariff: TariffSchedule,
    /// Source centers with their stock.
    pub centers: Vec<CenterSpec>,
    /// Inter-center distances.
    #[serde(default)]
    pub links: Vec<LinkSpec>,
}

/// A center and the unit weight of each product it stocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CenterSpec {
    /// Center identifier.
    pub id: CenterId,
    /// Distance to the hub.
    pub hub_distance: f64,
    /// Unit weight per stocked product.
    #[serde(default)]
    pub products: BTreeMap<ProductCode, f64>,
}

/// Distance between two centers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkSpec {
    /// First center.
    pub from: CenterId,
    /// Second center.
    pub to: CenterId,
    /// Distance between them.
    pub distance: f64,
}

impl TryFrom<CatalogSpec> for Catalog {
    type Error = CatalogError;

    fn try_from(spec: CatalogSpec) -> Result<Self, Self::Error> {
        let mut builder = CatalogBuilder::new(spec.hub).tariff(spec.tariff);
        for center in spec.centers {
            builder = builder.center(center.id.clone(), center.hub_distance);
            for (code, weight) in center.products {
                builder = builder.product(code, center.id.clone(), weight);
            }
        }
        for link in spec.links {
            builder = builder.link(link.from, link.to, link.distance);
        }
        builder.build()
    }
}

impl From<&Catalog> for CatalogSpec {
    fn from(catalog: &Catalog) -> Self {
        let centers = catalog
            .centers()
            .map(|center| CenterSpec {
                id: center.id.clone(),
                hub_distance: center.hub_distance,
                products: catalog
                    .stock(&center.id)
                    .map(|p| (p.code.clone(), p.unit_weight))
                    .collect(),
            })
            .collect();
        let links = catalog
            .links()
            .iter()
            .map(|(from, to, distance)| LinkSpec {
                from: from.clone(),
                to: to.clone(),
                distance,
            })
            .collect();
        Self {
            hub: catalog.hub().to_owned(),
            tariff: *catalog.tariff(),
            centers,
            links,
        }
    }
}
