//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Two entities are the same entity iff their identifiers are equal, even when
/// their other attributes have since diverged.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Identity comparison, ignoring every attribute except the identifier.
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
