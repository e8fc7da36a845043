//! `acme-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by every bounded
//! context (no infrastructure concerns).

pub mod aggregate;
pub mod error;
pub mod id;
pub mod value_object;

pub use aggregate::AggregateRoot;
pub use error::{DomainError, DomainResult, ensure_not_blank};
pub use id::{IdGenerator, SequentialIds, TimeOrderedIds};
pub use value_object::ValueObject;
