//! Value object trait: equality by value, not identity.
//!
//! Value objects are defined entirely by their attribute values. Two value
//! objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. In this model
/// they are also **self-validating**: the only way to obtain one is through a
/// constructor returning [`DomainResult`](crate::DomainResult), so every
/// instance in existence satisfies its invariants.
///
/// ## Value Object vs Aggregate
///
/// - **Value Object**: no identity (`Money { 10, "USD" }` equals any other `Money { 10, "USD" }`)
/// - **Aggregate**: has identity (two suppliers with the same name are still different suppliers)
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// pub struct Money {
///     amount: Decimal,
///     currency: CurrencyCode,
/// }
///
/// impl ValueObject for Money {}
///
/// impl Money {
///     pub fn new(amount: Decimal, currency: &str) -> DomainResult<Self> { /* validate */ }
/// }
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
