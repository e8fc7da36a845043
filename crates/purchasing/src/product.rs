use core::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use acme_core::{DomainError, DomainResult, IdGenerator, TimeOrderedIds, ValueObject};

/// Product identifier as seen from purchasing. Never the nil UUID.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Uuid", into = "Uuid")]
pub struct ProductId(Uuid);

impl ProductId {
    pub fn new(id: Uuid) -> DomainResult<Self> {
        if id.is_nil() {
            return Err(DomainError::invalid_argument(
                "id",
                "product id cannot be the nil UUID",
            ));
        }
        Ok(Self(id))
    }

    /// Create a new identifier.
    ///
    /// Uses UUIDv7 (time-ordered). Prefer [`ProductId::generate_with`] in tests
    /// for determinism.
    pub fn generate() -> Self {
        Self::generate_with(&mut TimeOrderedIds)
    }

    pub fn generate_with(ids: &mut impl IdGenerator) -> Self {
        Self(ids.next_uuid())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl ValueObject for ProductId {}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<Uuid> for ProductId {
    type Error = DomainError;

    fn try_from(value: Uuid) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProductId> for Uuid {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::from_str(s)
            .map_err(|e| DomainError::invalid_argument("id", format!("ProductId: {e}")))?;
        Self::new(uuid)
    }
}
