//! Core domain types for hubfreight.
//!
//! A [`Catalog`] describes which center stocks each product, how far centers
//! are from each other and from the hub, and the [`TariffSchedule`] that turns
//! shipment weight into a rate per unit distance. An [`Order`] is resolved
//! into a [`Coverage`] and priced by a [`Quoter`] implementation.
//!
//! Everything here is synchronous and allocation-light; a catalog is built
//! once and shared read-only between quotes.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
mod coverage;
mod distance;
mod ids;
mod order;
mod quote;
pub mod tariff;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use catalog::{Catalog, CatalogBuilder, CatalogError, Center, Product, REFERENCE_HUB};
#[cfg(feature = "serde")]
pub use catalog::{CatalogSpec, CenterSpec, LinkSpec};
pub use coverage::Coverage;
pub use distance::{DistanceSource, DistanceTable};
pub use ids::{CenterId, ProductCode};
pub use order::{Order, OrderError};
pub use quote::{AnchorCandidate, Quote, QuoteError, Quoter};
pub use tariff::{TariffError, TariffSchedule};
