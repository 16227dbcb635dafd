//! Contact contracts
//!
//! Create and update share one rule set: an update replaces every field.

use serde::Deserialize;

use crate::base::{normalize, Attributes, Contract, FieldRules, Rule};

/// Contact attributes as sent by the client
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ContactInput {
    pub fn normalized(self) -> Self {
        Self {
            first_name: normalize(self.first_name),
            last_name: normalize(self.last_name),
            email: normalize(self.email),
            phone: normalize(self.phone),
        }
    }
}

impl Attributes for ContactInput {
    fn attribute(&self, field: &str) -> Option<&str> {
        match field {
            "first_name" => self.first_name.as_deref(),
            "last_name" => self.last_name.as_deref(),
            "email" => self.email.as_deref(),
            "phone" => self.phone.as_deref(),
            _ => None,
        }
    }
}

const RULES: &[FieldRules] = &[
    FieldRules::new("first_name", &[Rule::Required, Rule::MaxLength(100)]),
    FieldRules::new("last_name", &[Rule::MaxLength(100)]),
    FieldRules::new("email", &[Rule::MaxLength(200), Rule::Email]),
    FieldRules::new("phone", &[Rule::MaxLength(20)]),
];

#[derive(Debug, Default, Clone, Copy)]
pub struct ContactContract;

impl Contract<ContactInput> for ContactContract {
    fn rules(&self) -> &'static [FieldRules] {
        RULES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn daud() -> ContactInput {
        ContactInput {
            first_name: Some("Daud".to_string()),
            last_name: Some("Ramadhan".to_string()),
            email: Some("daud28ramadhan@gmail.com".to_string()),
            phone: Some("081234567890".to_string()),
        }
    }

    #[test]
    fn test_valid_contact() {
        assert!(ContactContract.validate(&daud()).is_ok());
    }

    #[test]
    fn test_only_first_name_required() {
        let input = ContactInput {
            first_name: Some("Daud".to_string()),
            ..Default::default()
        };
        assert!(ContactContract.validate(&input).is_ok());
    }

    #[test]
    fn test_invalid_fields_are_aggregated() {
        let input = ContactInput {
            first_name: Some("".to_string()),
            last_name: None,
            email: Some("salah".to_string()),
            phone: Some("0".repeat(21)),
        }
        .normalized();

        let errors = ContactContract.validate(&input).unwrap_err();
        assert_eq!(
            errors.get("first_name"),
            Some(&vec!["The first name field is required.".to_string()])
        );
        assert_eq!(
            errors.get("email"),
            Some(&vec!["The email field must be a valid email address.".to_string()])
        );
        assert_eq!(
            errors.get("phone"),
            Some(&vec!["The phone field must not be greater than 20 characters.".to_string()])
        );
        assert!(!errors.has_error("last_name"));
    }

    #[test]
    fn test_one_message_per_field() {
        let mut input = daud();
        input.email = Some(format!("{}@example", "a".repeat(250)));
        let errors = ContactContract.validate(&input).unwrap_err();
        assert_eq!(errors.get("email").map(Vec::len), Some(1));
    }
}
