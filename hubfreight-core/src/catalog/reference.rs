//! The reference three-center network.

use std::collections::BTreeMap;

use crate::{CenterId, DistanceTable, ProductCode, TariffSchedule};

use super::{Catalog, Center, Product};

/// Hub every reference center delivers to.
pub const REFERENCE_HUB: &str = "L1";

const CENTERS: [(&str, f64); 3] = [("C1", 3.0), ("C2", 2.5), ("C3", 2.0)];

const PRODUCTS: [(&str, &str, f64); 9] = [
    ("A", "C1", 3.0),
    ("B", "C1", 2.0),
    ("C", "C1", 8.0),
    ("D", "C2", 12.0),
    ("E", "C2", 25.0),
    ("F", "C2", 15.0),
    ("G", "C3", 0.5),
    ("H", "C3", 1.0),
    ("I", "C3", 2.0),
];

const LINKS: [(&str, &str, f64); 3] = [("C1", "C2", 4.0), ("C1", "C3", 3.0), ("C2", "C3", 2.5)];

impl Catalog {
    /// The reference catalog: centers `C1`, `C2` and `C3` stocking products
    /// `A` to `I`, delivering to hub `L1` under the default tariff.
    ///
    /// The tables are known to be valid, so this bypasses the builder checks.
    pub fn reference() -> Self {
        let centers = CENTERS
            .iter()
            .map(|&(id, hub_distance)| {
                let id = CenterId::new(id);
                (id.clone(), Center { id, hub_distance })
            })
            .collect();
        let products: BTreeMap<ProductCode, Product> = PRODUCTS
            .iter()
            .map(|&(code, center, unit_weight)| {
                let code = ProductCode::new(code);
                let product = Product {
                    code: code.clone(),
                    center: CenterId::new(center),
                    unit_weight,
                };
                (code, product)
            })
            .collect();
        let mut links = DistanceTable::new();
        for &(from, to, distance) in &LINKS {
            links.insert(CenterId::new(from), CenterId::new(to), distance);
        }
        Self {
            hub: REFERENCE_HUB.to_owned(),
            centers,
            products,
            links,
            tariff: TariffSchedule::default(),
        }
    }
}
