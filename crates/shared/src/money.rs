use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use acme_core::{DomainError, DomainResult, ValueObject};

/// Three-character currency code (ISO 4217 style, e.g. `"USD"`).
///
/// Only the shape is checked: non-blank and exactly three characters.
/// Membership in the ISO 4217 list is not verified.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn parse(code: impl Into<String>) -> DomainResult<Self> {
        let code = code.into();
        if code.trim().is_empty() || code.chars().count() != 3 {
            return Err(DomainError::invalid_argument(
                "currency",
                "must be a valid 3-letter ISO 4217 currency code",
            ));
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for CurrencyCode {}

impl core::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<CurrencyCode> for String {
    fn from(value: CurrencyCode) -> Self {
        value.0
    }
}

/// Non-negative monetary amount in a single currency.
///
/// `Money` has no arithmetic of its own: compute with [`Money::amount`] and
/// wrap the result again through a constructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MoneyRecord")]
pub struct Money {
    amount: Decimal,
    currency: CurrencyCode,
}

impl Money {
    /// Validate both the currency text and the amount.
    pub fn new(amount: Decimal, currency: &str) -> DomainResult<Self> {
        let currency = CurrencyCode::parse(currency)?;
        Self::in_currency(amount, currency)
    }

    /// Build from an already-validated currency; only the amount is checked.
    pub fn in_currency(amount: Decimal, currency: CurrencyCode) -> DomainResult<Self> {
        if amount < Decimal::ZERO {
            return Err(DomainError::invalid_argument(
                "amount",
                "cannot be negative",
            ));
        }
        Ok(Self { amount, currency })
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &str {
        self.currency.as_str()
    }

    pub fn currency_code(&self) -> &CurrencyCode {
        &self.currency
    }
}

impl ValueObject for Money {}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

#[derive(Deserialize)]
struct MoneyRecord {
    amount: Decimal,
    currency: String,
}

impl TryFrom<MoneyRecord> for Money {
    type Error = DomainError;

    fn try_from(record: MoneyRecord) -> Result<Self, Self::Error> {
        Self::new(record.amount, &record.currency)
    }
}
