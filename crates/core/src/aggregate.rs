//! Aggregate root trait for the domain models.

/// Aggregate root marker + minimal interface.
///
/// An aggregate root owns a cluster of objects and is the only way to reach or
/// modify them. Callers hold the root and go through its methods; child
/// entities are exposed read-only.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;
}
