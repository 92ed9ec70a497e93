//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// The surrogate id is assigned by the persistence gateway on first save,
/// so an entity built in memory may not carry one yet.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier, if already assigned.
    fn id(&self) -> Option<Self::Id>;
}
