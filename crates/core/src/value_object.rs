//! Value object trait: equality by value, not identity.
//!
//! Billable services are value objects: a clone of a service is indistinguishable from
//! the original at the moment it is taken, and nothing is shared between the two.

/// Marker trait for value objects.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity, two value objects with equal fields are equal
/// - **Entity**: has identity, two entities with the same id are the same entity
///
/// `Clone` must produce an independent copy: mutating the copy never affects the source.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Allowance {
///     units: u32,
/// }
///
/// impl ValueObject for Allowance {}
///
/// let a = Allowance { units: 10 };
/// let mut b = a.clone();
/// b.units = 20;
/// assert_eq!(a.units, 10);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
