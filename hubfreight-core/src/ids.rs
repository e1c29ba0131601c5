//! Identifiers for catalog products and source centers.

use std::fmt;

/// Item code identifying a catalog product, e.g. `"A"`.
///
/// # Examples
/// ```
/// use hubfreight_core::ProductCode;
///
/// let code = ProductCode::new("A");
/// assert_eq!(code.as_str(), "A");
/// assert_eq!(code.to_string(), "A");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ProductCode(String);

impl ProductCode {
    /// Wrap an item code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Borrow the raw code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductCode {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ProductCode {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Identifier of a source center, e.g. `"C1"`.
///
/// Ordering is lexical; optimizers rely on it to break cost ties
/// deterministically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CenterId(String);

impl CenterId {
    /// Wrap a center identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CenterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CenterId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for CenterId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_ids_order_lexically() {
        let mut ids = vec![CenterId::new("C3"), CenterId::new("C1"), CenterId::new("C2")];
        ids.sort();
        assert_eq!(
            ids,
            vec![CenterId::new("C1"), CenterId::new("C2"), CenterId::new("C3")]
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn codes_serialize_as_plain_strings() {
        let json = serde_json::to_string(&ProductCode::new("G")).expect("serialize code");
        assert_eq!(json, "\"G\"");
    }
}
