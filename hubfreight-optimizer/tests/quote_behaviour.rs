//! Behavioural tests for `AnchorQuoter` using rstest-bdd.

use std::cell::RefCell;

use hubfreight_core::test_support::{order, unlinked_catalog};
use hubfreight_core::{Catalog, CenterId, Order, Quote, QuoteError, Quoter};
use hubfreight_optimizer::AnchorQuoter;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[derive(Debug)]
struct QuoteWorld {
    catalog: RefCell<Option<Catalog>>,
    order: RefCell<Order>,
    outcome: RefCell<Option<Result<Quote, QuoteError>>>,
}

impl QuoteWorld {
    fn new() -> Self {
        Self {
            catalog: RefCell::new(None),
            order: RefCell::new(Order::new()),
            outcome: RefCell::new(None),
        }
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn expect_outcome(&self) -> Result<Quote, QuoteError> {
        self.outcome
            .borrow()
            .as_ref()
            .cloned()
            .expect("outcome should be recorded before assertions")
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn expect_quote(&self) -> Quote {
        self.expect_outcome().expect("expected a quote")
    }
}

#[fixture]
fn world() -> QuoteWorld {
    QuoteWorld::new()
}

#[given("the reference catalog")]
fn given_reference_catalog(world: &QuoteWorld) {
    world.catalog.replace(Some(Catalog::reference()));
}

#[given("a catalog without inter-center links")]
fn given_unlinked_catalog(world: &QuoteWorld) {
    world.catalog.replace(Some(unlinked_catalog()));
}

#[given("an order for one each of G, H and I")]
fn given_single_center_order(world: &QuoteWorld) {
    world.order.replace(order(&[("G", 1), ("H", 1), ("I", 1)]));
}

#[given("an order for one each of A, B and C")]
fn given_light_order(world: &QuoteWorld) {
    world.order.replace(order(&[("A", 1), ("B", 1), ("C", 1)]));
}

#[given("an order for one each of A, B, C and D")]
fn given_two_center_order(world: &QuoteWorld) {
    world
        .order
        .replace(order(&[("A", 1), ("B", 1), ("C", 1), ("D", 1)]));
}

#[given("an order for one each of P and Q")]
fn given_unlinked_order(world: &QuoteWorld) {
    world.order.replace(order(&[("P", 1), ("Q", 1)]));
}

#[given("an order with every quantity set to zero")]
fn given_zero_order(world: &QuoteWorld) {
    world.order.replace(order(&[("A", 0), ("E", 0), ("I", 0)]));
}

#[when("the order is quoted")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn when_quoted(world: &QuoteWorld) {
    let catalog = world
        .catalog
        .borrow()
        .clone()
        .expect("catalog should be configured");
    let outcome = AnchorQuoter::new(catalog).quote(&world.order.borrow());
    world.outcome.replace(Some(outcome));
}

#[then("the minimum cost is 20")]
#[expect(clippy::float_cmp, reason = "reference costs are exact")]
fn then_cost_20(world: &QuoteWorld) {
    assert_eq!(world.expect_quote().minimum_cost, 20.0);
}

#[then("the minimum cost is 78")]
#[expect(clippy::float_cmp, reason = "reference costs are exact")]
fn then_cost_78(world: &QuoteWorld) {
    assert_eq!(world.expect_quote().minimum_cost, 78.0);
}

#[then("the minimum cost is 273")]
#[expect(clippy::float_cmp, reason = "reference costs are exact")]
fn then_cost_273(world: &QuoteWorld) {
    assert_eq!(world.expect_quote().minimum_cost, 273.0);
}

#[then("the minimum cost is 10")]
#[expect(clippy::float_cmp, reason = "reference costs are exact")]
fn then_cost_10(world: &QuoteWorld) {
    assert_eq!(world.expect_quote().minimum_cost, 10.0);
}

#[then("the anchor is C3")]
fn then_anchor_c3(world: &QuoteWorld) {
    assert_eq!(world.expect_quote().anchor, CenterId::new("C3"));
}

#[then("the anchor is C1")]
fn then_anchor_c1(world: &QuoteWorld) {
    assert_eq!(world.expect_quote().anchor, CenterId::new("C1"));
}

#[then("the anchor is C2")]
fn then_anchor_c2(world: &QuoteWorld) {
    assert_eq!(world.expect_quote().anchor, CenterId::new("C2"));
}

#[then("the anchor is N1")]
fn then_anchor_n1(world: &QuoteWorld) {
    assert_eq!(world.expect_quote().anchor, CenterId::new("N1"));
}

#[then("two candidates are reported")]
fn then_two_candidates(world: &QuoteWorld) {
    assert_eq!(world.expect_quote().candidates.len(), 2);
}

#[then("the quote fails because the order is empty")]
fn then_empty(world: &QuoteWorld) {
    assert_eq!(world.expect_outcome(), Err(QuoteError::EmptyOrder));
}

#[scenario(path = "tests/features/quote.feature", index = 0)]
fn single_center(world: QuoteWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/quote.feature", index = 1)]
fn light_order(world: QuoteWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/quote.feature", index = 2)]
fn two_centers(world: QuoteWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/quote.feature", index = 3)]
fn unlinked_centers(world: QuoteWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/quote.feature", index = 4)]
fn empty_order(world: QuoteWorld) {
    let _ = world;
}
