//! Value object trait: equality by value, not identity.
//!
//! Item attributes (name, rarity, level, price, points) are value objects:
//! they carry no identity and are defined entirely by what they hold.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. A value object
/// type is only constructible through its validating constructor, so holding
/// one is proof that its bounds were checked.
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Level(u16);
///
/// impl ValueObject for Level {}
///
/// let a = Level::new(10)?;
/// let b = Level::new(10)?;
/// assert_eq!(a, b);  // Equal by value
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
