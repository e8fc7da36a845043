use serde::{Deserialize, Serialize};

use acme_core::{DomainError, DomainResult, ValueObject, ensure_not_blank};

/// Postal address.
///
/// Every field except `state_or_region` is required and must not be blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "AddressRecord")]
pub struct Address {
    street: String,
    number: String,
    city: String,
    state_or_region: Option<String>,
    postal_code: String,
    country: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        number: impl Into<String>,
        city: impl Into<String>,
        state_or_region: Option<String>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
    ) -> DomainResult<Self> {
        let address = Self {
            street: street.into(),
            number: number.into(),
            city: city.into(),
            state_or_region,
            postal_code: postal_code.into(),
            country: country.into(),
        };

        ensure_not_blank("street", &address.street)?;
        ensure_not_blank("number", &address.number)?;
        ensure_not_blank("city", &address.city)?;
        ensure_not_blank("postal_code", &address.postal_code)?;
        ensure_not_blank("country", &address.country)?;

        Ok(address)
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state_or_region(&self) -> Option<&str> {
        self.state_or_region.as_deref()
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}

impl ValueObject for Address {}

/// Single-line rendering: `"{street} {number}, {city}, {state}, {postal}, {country}"`.
///
/// A missing state or region leaves its slot empty rather than dropping it.
impl core::fmt::Display for Address {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} {}, {}, {}, {}, {}",
            self.street,
            self.number,
            self.city,
            self.state_or_region.as_deref().unwrap_or_default(),
            self.postal_code,
            self.country
        )
    }
}

#[derive(Deserialize)]
struct AddressRecord {
    street: String,
    number: String,
    city: String,
    #[serde(default)]
    state_or_region: Option<String>,
    postal_code: String,
    country: String,
}

impl TryFrom<AddressRecord> for Address {
    type Error = DomainError;

    fn try_from(r: AddressRecord) -> Result<Self, Self::Error> {
        Self::new(
            r.street,
            r.number,
            r.city,
            r.state_or_region,
            r.postal_code,
            r.country,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn springfield(state: Option<&str>) -> DomainResult<Address> {
        Address::new(
            "Main",
            "123",
            "Springfield",
            state.map(str::to_string),
            "00000",
            "US",
        )
    }

    #[test]
    fn display_without_state_keeps_empty_slot() {
        let address = springfield(None).unwrap();
        assert_eq!(address.to_string(), "Main 123, Springfield, , 00000, US");
    }

    #[test]
    fn display_with_state() {
        let address = springfield(Some("IL")).unwrap();
        assert_eq!(address.to_string(), "Main 123, Springfield, IL, 00000, US");
        assert_eq!(address.state_or_region(), Some("IL"));
    }

    #[test]
    fn accessors_return_fields() {
        let address = springfield(None).unwrap();
        assert_eq!(address.street(), "Main");
        assert_eq!(address.number(), "123");
        assert_eq!(address.city(), "Springfield");
        assert_eq!(address.state_or_region(), None);
        assert_eq!(address.postal_code(), "00000");
        assert_eq!(address.country(), "US");
    }

    #[test]
    fn each_blank_required_field_is_reported_by_name() {
        let cases = [
            ("street", Address::new(" ", "1", "c", None, "p", "US")),
            ("number", Address::new("s", "", "c", None, "p", "US")),
            ("city", Address::new("s", "1", "\t", None, "p", "US")),
            ("postal_code", Address::new("s", "1", "c", None, "", "US")),
            ("country", Address::new("s", "1", "c", None, "p", "  ")),
        ];

        for (field, result) in cases {
            let err = result.unwrap_err();
            assert_eq!(err.argument(), Some(field));
        }
    }

    #[test]
    fn blank_state_or_region_is_accepted() {
        assert!(springfield(Some("")).is_ok());
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(springfield(None).unwrap(), springfield(None).unwrap());
        assert_ne!(springfield(None).unwrap(), springfield(Some("IL")).unwrap());
    }

    #[test]
    fn deserialize_validates_and_defaults_state() {
        let address: Address = serde_json::from_str(
            r#"{"street":"Main","number":"123","city":"Springfield","postal_code":"00000","country":"US"}"#,
        )
        .unwrap();
        assert_eq!(address, springfield(None).unwrap());

        let bad = serde_json::from_str::<Address>(
            r#"{"street":"","number":"123","city":"Springfield","postal_code":"00000","country":"US"}"#,
        );
        assert!(bad.is_err());
    }
}
