//! Property-based tests for anchor quoting.
//!
//! These tests use `proptest` to assert invariants that must hold for every
//! valid catalog and order, complementing the fixed reference scenarios.
//!
//! # Invariants tested
//!
//! - **Minimum:** the quoted cost is the smallest candidate cost.
//! - **Formula:** the quoted cost matches `hub * rate + Σ link * rate`
//!   computed directly from the catalog tables.
//! - **Coverage:** one candidate is evaluated per required center.
//! - **Single item:** one product costs its center's hub leg times the rate.
//! - **Empty orders:** all-zero orders fail with `EmptyOrder`.
//! - **Missing links:** absent distances never fail a quote.


use hubfreight_core::{Order, QuoteError};
use hubfreight_optimizer::compute_cost;
use proptest::prelude::*;

use proptest_support::{
    catalog_and_order, catalog_strategy, costs_match, expected_quote, single_center_cost,
    single_item,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: the minimum cost is the smallest candidate and never exceeds
    /// any candidate.
    ///
    /// Generated catalogs drop links at random, so this also shows that
    /// missing distances never turn into errors.
    #[test]
    fn minimum_is_smallest_candidate((catalog, order) in catalog_and_order()) {
        match compute_cost(&catalog, &order) {
            Ok(quote) => {
                prop_assert_eq!(quote.candidates.len(), quote.centers.len());
                for candidate in &quote.candidates {
                    prop_assert!(
                        quote.minimum_cost <= candidate.cost,
                        "minimum {} exceeds candidate {:?}",
                        quote.minimum_cost,
                        candidate
                    );
                }
                let smallest = quote
                    .candidates
                    .iter()
                    .map(|candidate| candidate.cost)
                    .fold(f64::INFINITY, f64::min);
                prop_assert_eq!(quote.minimum_cost, smallest);
            }
            Err(err) => {
                prop_assert_eq!(err, QuoteError::EmptyOrder);
                prop_assert!(order.is_empty());
            }
        }
    }

    /// Property: the quoted minimum matches an anchor search written directly
    /// against the catalog's hub distances and link table.
    #[test]
    fn minimum_matches_direct_formula((catalog, order) in catalog_and_order()) {
        match (compute_cost(&catalog, &order), expected_quote(&catalog, &order)) {
            (Ok(quote), Some((centers, minimum))) => {
                prop_assert_eq!(&quote.centers, &centers);
                prop_assert!(
                    costs_match(quote.minimum_cost, minimum),
                    "quoted {} but the direct formula gives {}",
                    quote.minimum_cost,
                    minimum
                );
            }
            (Err(err), None) => prop_assert_eq!(err, QuoteError::EmptyOrder),
            (outcome, expected) => {
                return Err(TestCaseError::fail(format!(
                    "quote {outcome:?} disagrees with direct formula {expected:?}"
                )));
            }
        }
    }

    /// Property: a single product costs `hub_distance * rate(weight)`.
    #[test]
    fn single_item_costs_hub_leg_times_rate((catalog, code, quantity) in single_item()) {
        let order = Order::new().with_quantity(code.clone(), quantity);
        let quote = compute_cost(&catalog, &order).expect("single item is quotable");
        let expected = single_center_cost(&catalog, &code, quantity).expect("known product");
        prop_assert_eq!(quote.centers.len(), 1);
        prop_assert_eq!(quote.minimum_cost, expected);
    }

    /// Property: orders whose quantities are all zero are rejected rather than
    /// priced at zero.
    #[test]
    fn zero_orders_are_rejected(catalog in catalog_strategy()) {
        let order: Order = catalog.products().map(|p| (p.code.clone(), 0_u32)).collect();
        prop_assert_eq!(compute_cost(&catalog, &order), Err(QuoteError::EmptyOrder));
    }
}
