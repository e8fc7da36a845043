//! Shared kernel value objects (money, currency codes, postal addresses).
//!
//! These types are used by more than one bounded context and carry no
//! identity of their own.

pub mod address;
pub mod money;

pub use address::Address;
pub use money::{CurrencyCode, Money};
