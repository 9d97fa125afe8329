//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. A [`crate::Price`] of
/// `10` is the same price wherever it appears; a [`crate::SaleDay`] of `2024-05-01`
/// is the same day in every ledger.
///
/// To "modify" a value object, create a new one with the new values.
///
/// ```ignore
/// let a = Price::new(10.0)?;
/// let b = Price::new(10.0)?;
/// assert_eq!(a, b); // Equal by value, not identity
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
