//! Create contract for users (registration)

use serde::Deserialize;

use super::USER_FIELD_MAX;
use crate::base::{normalize, normalize_secret, Attributes, Contract, FieldRules, Rule};

/// Registration request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterUser {
    pub username: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

impl RegisterUser {
    pub fn normalized(self) -> Self {
        Self {
            username: normalize(self.username),
            password: normalize_secret(self.password),
            name: normalize(self.name),
        }
    }
}

impl Attributes for RegisterUser {
    fn attribute(&self, field: &str) -> Option<&str> {
        match field {
            "username" => self.username.as_deref(),
            "password" => self.password.as_deref(),
            "name" => self.name.as_deref(),
            _ => None,
        }
    }
}

const RULES: &[FieldRules] = &[
    FieldRules::new("username", &[Rule::Required, USER_FIELD_MAX]),
    FieldRules::new("password", &[Rule::Required, USER_FIELD_MAX]),
    FieldRules::new("name", &[Rule::Required, USER_FIELD_MAX]),
];

/// Contract for registering a new user
#[derive(Debug, Default, Clone, Copy)]
pub struct CreateUserContract;

impl Contract<RegisterUser> for CreateUserContract {
    fn rules(&self) -> &'static [FieldRules] {
        RULES
    }
}
