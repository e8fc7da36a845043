use serde::{Deserialize, Serialize};

use acme_core::{
    AggregateRoot, DomainError, DomainResult, IdGenerator, TimeOrderedIds, ValueObject,
    ensure_not_blank,
};
use acme_shared::Address;

/// Supplier identifier.
///
/// Either supplied by the caller (any non-blank text, e.g. `"SUP-1"`) or
/// generated as the hyphenated text of a fresh UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SupplierId(String);

impl SupplierId {
    pub fn new(identifier: impl Into<String>) -> DomainResult<Self> {
        let identifier = identifier.into();
        ensure_not_blank("identifier", &identifier)?;
        Ok(Self(identifier))
    }

    /// Generate a fresh identifier from the default time-ordered source.
    pub fn generate() -> Self {
        Self::generate_with(&mut TimeOrderedIds)
    }

    /// Generate a fresh identifier from `ids`.
    pub fn generate_with(ids: &mut impl IdGenerator) -> Self {
        let id = Self(ids.next_uuid().to_string());
        tracing::trace!(supplier_id = %id, "generated supplier id");
        id
    }

    pub fn identifier(&self) -> &str {
        &self.0
    }
}

impl ValueObject for SupplierId {}

impl core::fmt::Display for SupplierId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for SupplierId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SupplierId> for String {
    fn from(value: SupplierId) -> Self {
        value.0
    }
}

/// Aggregate root: Supplier.
///
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SupplierRecord")]
pub struct Supplier {
    id: SupplierId,
    name: String,
    address: Address,
}

impl Supplier {
    /// Create a supplier with a caller-chosen identifier.
    pub fn new(id: &str, name: impl Into<String>, address: Address) -> DomainResult<Self> {
        ensure_not_blank("id", id)?;
        let name = name.into();
        ensure_not_blank("name", &name)?;

        Ok(Self {
            id: SupplierId::new(id)?,
            name,
            address,
        })
    }

    /// Create a supplier with a freshly generated identifier.
    pub fn register(name: impl Into<String>, address: Address) -> DomainResult<Self> {
        Self::register_with(name, address, &mut TimeOrderedIds)
    }

    /// Like [`Supplier::register`], drawing the identifier from `ids`.
    pub fn register_with(
        name: impl Into<String>,
        address: Address,
        ids: &mut impl IdGenerator,
    ) -> DomainResult<Self> {
        let name = name.into();
        ensure_not_blank("name", &name)?;

        let supplier = Self {
            id: SupplierId::generate_with(ids),
            name,
            address,
        };
        tracing::debug!(supplier_id = %supplier.id, name = %supplier.name, "supplier registered");
        Ok(supplier)
    }

    pub fn id_typed(&self) -> &SupplierId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &Address {
        &self.address
    }
}

impl AggregateRoot for Supplier {
    type Id = SupplierId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[derive(Deserialize)]
struct SupplierRecord {
    id: String,
    name: String,
    address: Address,
}

impl TryFrom<SupplierRecord> for Supplier {
    type Error = DomainError;

    fn try_from(record: SupplierRecord) -> Result<Self, Self::Error> {
        Self::new(&record.id, record.name, record.address)
    }
}
