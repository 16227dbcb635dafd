//! Address contracts

use serde::Deserialize;

use crate::base::{normalize, Attributes, Contract, FieldRules, Rule};

/// Address attributes as sent by the client
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddressInput {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
}

impl AddressInput {
    pub fn normalized(self) -> Self {
        Self {
            street: normalize(self.street),
            city: normalize(self.city),
            state: normalize(self.state),
            country: normalize(self.country),
            postal_code: normalize(self.postal_code),
        }
    }
}

impl Attributes for AddressInput {
    fn attribute(&self, field: &str) -> Option<&str> {
        match field {
            "street" => self.street.as_deref(),
            "city" => self.city.as_deref(),
            "state" => self.state.as_deref(),
            "country" => self.country.as_deref(),
            "postal_code" => self.postal_code.as_deref(),
            _ => None,
        }
    }
}

const RULES: &[FieldRules] = &[
    FieldRules::new("street", &[Rule::MaxLength(200)]),
    FieldRules::new("city", &[Rule::MaxLength(100)]),
    FieldRules::new("state", &[Rule::MaxLength(100)]),
    FieldRules::new("country", &[Rule::Required, Rule::MaxLength(100)]),
    FieldRules::new("postal_code", &[Rule::MaxLength(10)]),
];

#[derive(Debug, Default, Clone, Copy)]
pub struct AddressContract;

impl Contract<AddressInput> for AddressContract {
    fn rules(&self) -> &'static [FieldRules] {
        RULES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_required() {
        let input = AddressInput {
            street: Some("Jalan Merdeka".to_string()),
            country: Some("  ".to_string()),
            ..Default::default()
        }
        .normalized();

        let errors = AddressContract.validate(&input).unwrap_err();
        assert_eq!(
            errors.get("country"),
            Some(&vec!["The country field is required.".to_string()])
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_postal_code_limit() {
        let input = AddressInput {
            country: Some("Indonesia".to_string()),
            postal_code: Some("12345678901".to_string()),
            ..Default::default()
        };
        let errors = AddressContract.validate(&input).unwrap_err();
        assert_eq!(
            errors.get("postal_code"),
            Some(&vec!["The postal code field must not be greater than 10 characters.".to_string()])
        );
    }

    #[test]
    fn test_valid_address() {
        let input = AddressInput {
            street: Some("Jalan Merdeka".to_string()),
            city: Some("Jakarta".to_string()),
            state: Some("DKI Jakarta".to_string()),
            country: Some("Indonesia".to_string()),
            postal_code: Some("10110".to_string()),
        };
        assert!(AddressContract.validate(&input).is_ok());
    }
}
