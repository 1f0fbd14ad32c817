//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Price ranges, badges and agent codes have no identity of their own; two
/// with the same fields are interchangeable.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
