use thiserror::Error;

use crate::{CenterId, ProductCode, TariffError};

/// Errors from [`crate::CatalogBuilder::build`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// Two centers share an identifier.
    #[error("center {0} is defined more than once")]
    DuplicateCenter(CenterId),
    /// Two products share a code, possibly in different centers.
    ///
    /// A product must belong to exactly one center.
    #[error("product {0} is defined more than once")]
    DuplicateProduct(ProductCode),
    /// A product or link names a center that was never defined.
    #[error("{owner} refers to unknown center {center}")]
    UnknownCenter {
        /// Description of the referencing entry, e.g. `product A`.
        owner: String,
        /// The missing center.
        center: CenterId,
    },
    /// A unit weight was zero, negative or not finite.
    #[error("product {product} has invalid unit weight {weight}")]
    InvalidWeight {
        /// Offending product.
        product: ProductCode,
        /// Supplied weight.
        weight: f64,
    },
    /// A distance was negative or not finite.
    #[error("distance {leg} is invalid: {distance}")]
    InvalidDistance {
        /// Leg label such as `C1-L1` or `C1-C2`.
        leg: String,
        /// Supplied distance.
        distance: f64,
    },
    /// A link connects a center to itself.
    #[error("center {0} cannot be linked to itself")]
    SelfLink(CenterId),
    /// The tariff parameters are unusable.
    #[error("invalid tariff: {0}")]
    Tariff(#[from] TariffError),
}
