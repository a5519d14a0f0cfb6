//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// A service package is an entity identified by its name; two packages with equal
/// contents but different names are different packages.
pub trait Entity {
    /// Identifier type.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
