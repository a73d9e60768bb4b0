//! Declarative per-field validation rules
//!
//! Each field has at most one validator. A validator sees the whole form
//! (confirmation needs the password) and returns the message of every rule
//! that fails, in rule order. Only the first is displayed. Empty values are
//! treated as absent by the length rules, so an untouched form only trips
//! `required` rules.

use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use super::fields::{Field, FormValues};
use crate::constants::MIN_PASSWORD_LENGTH;

/// Email syntax (WHATWG-style: local part, `@`, dot-separated DNS labels).
/// This pattern is a compile-time constant and cannot fail to compile.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .unwrap()
});

/// A field rule: every failing message, empty when valid
pub type Validator = fn(&FormValues) -> Vec<String>;

/// Failing messages keyed by field. Fields without errors are absent.
pub type FieldErrors = BTreeMap<Field, Vec<String>>;

/// One optional validator per field
#[derive(Clone, Copy)]
pub struct ValidationSchema {
    pub email: Option<Validator>,
    pub password: Option<Validator>,
    pub confirm_password: Option<Validator>,
    pub first_name: Option<Validator>,
    pub last_name: Option<Validator>,
    pub phone: Option<Validator>,
    pub residence: Option<Validator>,
}

impl fmt::Debug for ValidationSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ruled: Vec<&str> = Field::ALL
            .iter()
            .filter(|field| self.rule(**field).is_some())
            .map(|field| field.name())
            .collect();
        f.debug_struct("ValidationSchema").field("rules", &ruled).finish()
    }
}

impl Default for ValidationSchema {
    fn default() -> Self {
        Self::signup()
    }
}

impl ValidationSchema {
    /// Rules for the account signup form. Phone and residence are accepted as-is.
    pub fn signup() -> Self {
        Self {
            email: Some(validate_email),
            password: Some(validate_password),
            confirm_password: Some(validate_confirm_password),
            first_name: Some(validate_first_name),
            last_name: Some(validate_last_name),
            phone: None,
            residence: None,
        }
    }

    pub fn rule(&self, field: Field) -> Option<Validator> {
        match field {
            Field::Email => self.email,
            Field::Password => self.password,
            Field::ConfirmPassword => self.confirm_password,
            Field::FirstName => self.first_name,
            Field::LastName => self.last_name,
            Field::Phone => self.phone,
            Field::Residence => self.residence,
        }
    }

    /// Evaluate every field independently
    pub fn validate(&self, values: &FormValues) -> FieldErrors {
        Field::ALL
            .iter()
            .filter_map(|field| {
                let rule = self.rule(*field)?;
                let messages = rule(values);
                (!messages.is_empty()).then_some((*field, messages))
            })
            .collect()
    }
}

/// Length as a browser counts it (UTF-16 code units), so an astral
/// character such as an emoji counts twice.
fn too_short(value: &str) -> bool {
    !value.is_empty() && value.encode_utf16().count() < MIN_PASSWORD_LENGTH
}

pub fn validate_email(values: &FormValues) -> Vec<String> {
    if values.email.is_empty() {
        return vec!["Email is required".to_string()];
    }
    if !EMAIL_RE.is_match(&values.email) {
        return vec!["Invalid email".to_string()];
    }
    Vec::new()
}

pub fn validate_password(values: &FormValues) -> Vec<String> {
    let mut messages = Vec::new();
    if too_short(&values.password) {
        messages.push(format!(
            "Password should be at least {} characters",
            MIN_PASSWORD_LENGTH
        ));
    }
    messages
}

/// Length and equality are separate rules: a short confirmation that also
/// differs carries both messages. An empty confirmation against a non-empty
/// password is a mismatch.
pub fn validate_confirm_password(values: &FormValues) -> Vec<String> {
    let confirm = &values.confirm_password;
    let mut messages = Vec::new();
    if too_short(confirm) {
        messages.push(format!(
            "Confirm password should be at least {} characters",
            MIN_PASSWORD_LENGTH
        ));
    }
    if *confirm != values.password {
        messages.push("Passwords do not match".to_string());
    }
    messages
}

pub fn validate_first_name(values: &FormValues) -> Vec<String> {
    if values.first_name.is_empty() {
        return vec!["First name is required".to_string()];
    }
    Vec::new()
}

pub fn validate_last_name(values: &FormValues) -> Vec<String> {
    if values.last_name.is_empty() {
        return vec!["Last name is required".to_string()];
    }
    Vec::new()
}
