//! Token sources for freshly generated identifiers.
//!
//! Identifier types never call a global random source directly; they take an
//! [`IdGenerator`] so tests can substitute a deterministic one.

use uuid::Uuid;

/// Source of unique, non-nil tokens.
pub trait IdGenerator {
    /// Produce the next token. Implementations must never return [`Uuid::nil`].
    fn next_uuid(&mut self) -> Uuid;
}

/// Default generator: UUIDv7 (time-ordered).
#[derive(Debug, Default, Copy, Clone)]
pub struct TimeOrderedIds;

impl IdGenerator for TimeOrderedIds {
    fn next_uuid(&mut self) -> Uuid {
        Uuid::now_v7()
    }
}

/// Deterministic generator yielding `1, 2, 3, ...` encoded as UUIDs.
///
/// Prefer this in tests for reproducible identifiers.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u128,
}

impl SequentialIds {
    /// Start the sequence at `start` (a start of 0 is bumped to 1 to skip nil).
    pub fn starting_at(start: u128) -> Self {
        Self {
            next: start.max(1),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequentialIds {
    fn next_uuid(&mut self) -> Uuid {
        let value = self.next;
        // Wrap past u128::MAX back to 1, never to 0.
        self.next = value.checked_add(1).unwrap_or(1);
        Uuid::from_u128(value)
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for &mut G {
    fn next_uuid(&mut self) -> Uuid {
        (**self).next_uuid()
    }
}
