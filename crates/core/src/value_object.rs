//! Value object trait: equality by value, not identity.
//!
//! Products in the registry have no identity of their own (their only address
//! is their position), so every domain type here is a value object.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two products
/// with the same fields are the same product as far as the domain cares, and
/// the registry happily stores duplicates.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Cpf(String);
///
/// impl ValueObject for Cpf {}
///
/// assert_eq!(Cpf("52998224725".into()), Cpf("52998224725".into()));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
