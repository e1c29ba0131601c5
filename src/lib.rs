//! Facade crate for the hubfreight shipping quote engine.
//!
//! This crate re-exports the core domain types and, behind the `optimizer`
//! feature, the default anchor-search quoter.

#![forbid(unsafe_code)]

pub use hubfreight_core::{
    AnchorCandidate, Catalog, CatalogBuilder, CatalogError, Center, CenterId, Coverage,
    DistanceSource, DistanceTable, Order, OrderError, Product, ProductCode, Quote, QuoteError,
    Quoter, REFERENCE_HUB, TariffError, TariffSchedule,
};

#[cfg(feature = "serde")]
pub use hubfreight_core::{CatalogSpec, CenterSpec, LinkSpec};

#[cfg(feature = "optimizer")]
pub use hubfreight_optimizer::{AnchorOptimizer, AnchorPlan, AnchorQuoter, compute_cost};
