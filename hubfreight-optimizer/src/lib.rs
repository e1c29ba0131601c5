//! Minimum-cost quoting for hubfreight orders.
//!
//! This crate provides [`AnchorQuoter`], the default implementation of the
//! [`Quoter`](hubfreight_core::Quoter) trait. A quote resolves the centers an
//! order needs, turns its total weight into a tariff rate, and then lets
//! [`AnchorOptimizer`] try every required center as the cost anchor.
//!
//! The search space is one candidate per required center, so quotes are
//! deterministic and effectively instantaneous for realistic catalogs.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod anchor;
mod quoter;

pub use anchor::{AnchorOptimizer, AnchorPlan};
pub use quoter::{AnchorQuoter, compute_cost};
