//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity: two with the same attributes are equal and
/// interchangeable. They are immutable; "changing" one means building a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Money(u64);
///
/// impl ValueObject for Money {}
///
/// assert_eq!(Money(1000), Money(1000));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
