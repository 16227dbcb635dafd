//! Base contract system
//!
//! A contract is an ordered list of `(field, rules)` pairs. Every field is
//! checked; within a field the first failing rule wins and records the one
//! message for that field.

use cm_core::error::ValidationErrors;
use regex::Regex;
use std::sync::LazyLock;

/// Result of contract validation
pub type ValidationResult = Result<(), ValidationErrors>;

/// Local part and dot-separated domain labels, no whitespace. A TLD is not
/// required (`user@localhost` passes).
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)*$").expect("email pattern compiles")
});

/// A single validation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Value must be present and not blank
    Required,
    /// At most this many characters
    MaxLength(usize),
    /// Must look like an email address
    Email,
}

impl Rule {
    /// Check a (normalized) value, returning the failure message if any
    pub fn check(&self, field: &str, value: Option<&str>) -> Option<String> {
        let label = label(field);
        match (self, value) {
            (Rule::Required, v) if v.map_or(true, |v| v.trim().is_empty()) => {
                Some(format!("The {} field is required.", label))
            }
            (Rule::MaxLength(max), Some(v)) if v.chars().count() > *max => Some(format!(
                "The {} field must not be greater than {} characters.",
                label, max
            )),
            (Rule::Email, Some(v)) if !EMAIL_PATTERN.is_match(v) => {
                Some(format!("The {} field must be a valid email address.", label))
            }
            _ => None,
        }
    }
}

/// Rules for one field, evaluated in order
#[derive(Debug, Clone, Copy)]
pub struct FieldRules {
    pub field: &'static str,
    pub rules: &'static [Rule],
}

impl FieldRules {
    pub const fn new(field: &'static str, rules: &'static [Rule]) -> Self {
        Self { field, rules }
    }
}

/// Read access to the named attributes of a request
pub trait Attributes {
    fn attribute(&self, field: &str) -> Option<&str>;
}

/// Base contract trait
pub trait Contract<T: Attributes>: Send + Sync {
    /// The ordered rule list
    fn rules(&self) -> &'static [FieldRules];

    /// Validate the entity
    fn validate(&self, entity: &T) -> ValidationResult {
        validate_rules(entity, self.rules())
    }

    /// Check if an attribute is writable
    fn is_writable(&self, attribute: &str) -> bool {
        self.rules().iter().any(|f| f.field == attribute)
    }
}

/// Run a rule list against an attribute source
pub fn validate_rules<T: Attributes + ?Sized>(entity: &T, rules: &[FieldRules]) -> ValidationResult {
    let mut errors = ValidationErrors::new();

    for field_rules in rules {
        let value = entity.attribute(field_rules.field);
        if let Some(message) = field_rules
            .rules
            .iter()
            .find_map(|rule| rule.check(field_rules.field, value))
        {
            errors.add(field_rules.field, message);
        }
    }

    errors.into_result()
}

/// Trim a value and treat an empty result as absent
pub fn normalize(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == v.len() {
            Some(v)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Secrets keep their whitespace; only an empty value counts as absent
pub fn normalize_secret(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Human label for a field name: underscores become spaces
fn label(field: &str) -> String {
    field.replace('_', " ")
}
