//! Update contract for the current user's profile

use serde::Deserialize;

use super::USER_FIELD_MAX;
use crate::base::{normalize, normalize_secret, Attributes, Contract, FieldRules};

/// Profile update request; every field is optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub password: Option<String>,
}

impl UpdateUser {
    pub fn normalized(self) -> Self {
        Self {
            name: normalize(self.name),
            password: normalize_secret(self.password),
        }
    }

    /// Nothing to change
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.password.is_none()
    }
}

impl Attributes for UpdateUser {
    fn attribute(&self, field: &str) -> Option<&str> {
        match field {
            "name" => self.name.as_deref(),
            "password" => self.password.as_deref(),
            _ => None,
        }
    }
}

const RULES: &[FieldRules] = &[
    FieldRules::new("name", &[USER_FIELD_MAX]),
    FieldRules::new("password", &[USER_FIELD_MAX]),
];

#[derive(Debug, Default, Clone, Copy)]
pub struct UpdateUserContract;

impl Contract<UpdateUser> for UpdateUserContract {
    fn rules(&self) -> &'static [FieldRules] {
        RULES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_update_is_valid() {
        let input = UpdateUser::default().normalized();
        assert!(input.is_empty());
        assert!(UpdateUserContract.validate(&input).is_ok());
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let input = UpdateUser {
            name: Some("   ".to_string()),
            password: Some(String::new()),
        }
        .normalized();
        assert!(input.is_empty());
    }

    #[test]
    fn test_name_too_long() {
        let input = UpdateUser {
            name: Some("n".repeat(101)),
            password: None,
        };
        let errors = UpdateUserContract.validate(&input).unwrap_err();
        assert_eq!(
            errors.get("name"),
            Some(&vec!["The name field must not be greater than 100 characters.".to_string()])
        );
    }
}
