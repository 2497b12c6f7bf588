//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable domain objects defined entirely by their
/// attribute values — two with the same values are the same value. To
/// "modify" one, build a new one.
///
/// Contrast with [`crate::Entity`], which has identity: two entities with
/// the same id are the same entity regardless of attribute values.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Price(u64); // minor currency units
///
/// impl ValueObject for Price {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
