//! Customer orders: requested quantity per product.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::{Catalog, ProductCode};

/// Errors returned by [`Order::from_raw`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// The item code is not in the catalog.
    #[error("unknown product {0}")]
    UnknownProduct(ProductCode),
    /// A quantity was below zero.
    #[error("quantity for {product} must not be negative, got {quantity}")]
    NegativeQuantity {
        /// Offending product.
        product: ProductCode,
        /// Supplied quantity.
        quantity: i64,
    },
    /// A quantity does not fit the supported range.
    #[error("quantity for {product} is too large: {quantity}")]
    QuantityOutOfRange {
        /// Offending product.
        product: ProductCode,
        /// Supplied quantity.
        quantity: i64,
    },
}

/// Requested quantities keyed by product code.
///
/// Products that were never mentioned have quantity zero. An order whose
/// quantities are all zero is empty and cannot be quoted.
///
/// # Examples
/// ```
/// use hubfreight_core::{Order, ProductCode};
///
/// let order = Order::new().with_quantity("A", 2).with_quantity("B", 0);
/// assert_eq!(order.quantity(&ProductCode::new("A")), 2);
/// assert_eq!(order.quantity(&ProductCode::new("Z")), 0);
/// assert_eq!(order.positive_lines().count(), 1);
/// assert!(!order.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Order {
    lines: BTreeMap<ProductCode, u32>,
}

impl Order {
    /// Construct an order with no lines.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate untyped boundary input against `catalog`.
    ///
    /// Shells decode requests into signed integers; this rejects negative,
    /// oversized and unknown entries before any cost is computed.
    ///
    /// # Examples
    /// ```
    /// use hubfreight_core::{Catalog, Order, OrderError, ProductCode};
    ///
    /// let catalog = Catalog::reference();
    /// let order = Order::from_raw(&catalog, [("A", 1), ("G", 0)])?;
    /// assert_eq!(order.quantity(&ProductCode::new("A")), 1);
    ///
    /// let err = Order::from_raw(&catalog, [("A", -1)]).unwrap_err();
    /// assert!(matches!(err, OrderError::NegativeQuantity { .. }));
    /// # Ok::<(), OrderError>(())
    /// ```
    pub fn from_raw<I, K>(catalog: &Catalog, entries: I) -> Result<Self, OrderError>
    where
        I: IntoIterator<Item = (K, i64)>,
        K: Into<ProductCode>,
    {
        let mut order = Self::new();
        for (code, quantity) in entries {
            let product: ProductCode = code.into();
            if catalog.product(&product).is_none() {
                return Err(OrderError::UnknownProduct(product));
            }
            if quantity < 0 {
                return Err(OrderError::NegativeQuantity { product, quantity });
            }
            let Ok(units) = u32::try_from(quantity) else {
                return Err(OrderError::QuantityOutOfRange { product, quantity });
            };
            order.set_quantity(product, units);
        }
        Ok(order)
    }

    /// Set the quantity for `product`, replacing any previous value.
    pub fn set_quantity(&mut self, product: impl Into<ProductCode>, quantity: u32) {
        self.lines.insert(product.into(), quantity);
    }

    /// Set a quantity while returning `self` for chaining.
    pub fn with_quantity(mut self, product: impl Into<ProductCode>, quantity: u32) -> Self {
        self.set_quantity(product, quantity);
        self
    }

    /// Quantity requested for `product`, zero when absent.
    pub fn quantity(&self, product: &ProductCode) -> u32 {
        self.lines.get(product).copied().unwrap_or(0)
    }

    /// Lines with a quantity above zero, in code order.
    pub fn positive_lines(&self) -> impl Iterator<Item = (&ProductCode, u32)> + '_ {
        self.lines
            .iter()
            .filter(|(_, qty)| **qty > 0)
            .map(|(code, qty)| (code, *qty))
    }

    /// Whether no product has a positive quantity.
    pub fn is_empty(&self) -> bool {
        self.positive_lines().next().is_none()
    }
}

impl<K: Into<ProductCode>> FromIterator<(K, u32)> for Order {
    fn from_iter<T: IntoIterator<Item = (K, u32)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::new(), |order, (code, qty)| order.with_quantity(code, qty))
    }
}
