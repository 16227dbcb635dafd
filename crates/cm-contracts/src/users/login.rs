//! Login contract

use serde::Deserialize;

use super::USER_FIELD_MAX;
use crate::base::{normalize, normalize_secret, Attributes, Contract, FieldRules, Rule};

/// Login request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginUser {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl LoginUser {
    pub fn normalized(self) -> Self {
        Self {
            username: normalize(self.username),
            password: normalize_secret(self.password),
        }
    }
}

impl Attributes for LoginUser {
    fn attribute(&self, field: &str) -> Option<&str> {
        match field {
            "username" => self.username.as_deref(),
            "password" => self.password.as_deref(),
            _ => None,
        }
    }
}

const RULES: &[FieldRules] = &[
    FieldRules::new("username", &[Rule::Required, USER_FIELD_MAX]),
    FieldRules::new("password", &[Rule::Required, USER_FIELD_MAX]),
];

#[derive(Debug, Default, Clone, Copy)]
pub struct LoginContract;

impl Contract<LoginUser> for LoginContract {
    fn rules(&self) -> &'static [FieldRules] {
        RULES
    }
}
