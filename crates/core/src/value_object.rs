//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. To
/// "modify" one, build a new one; construction is where validation happens.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Footprint {
///     width: f64,
///     depth: f64,
/// }
///
/// impl ValueObject for Footprint {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
