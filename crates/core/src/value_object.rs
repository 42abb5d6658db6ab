//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity: two values with the same attributes are
/// the same value. Item categories are one example: every "Aged Brie" shares
/// a single `Category::AgedBrie`.
///
/// The bounds keep them cheap to pass around and easy to assert on:
/// - **Copy**: small enough to pass by value
/// - **Eq**: compared by attribute values
/// - **Debug**: shows up in logs and test failures
pub trait ValueObject: Copy + Eq + core::fmt::Debug {}
