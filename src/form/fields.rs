//! Form fields, values and wizard steps

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the seven fixed form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Email,
    Password,
    ConfirmPassword,
    FirstName,
    LastName,
    Phone,
    Residence,
}

impl Field {
    /// All fields in form order
    pub const ALL: [Field; 7] = [
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
        Field::FirstName,
        Field::LastName,
        Field::Phone,
        Field::Residence,
    ];

    /// Key used in the submitted JSON body
    pub fn name(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Phone => "phone",
            Field::Residence => "residence",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Email => "Email",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm Password",
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Phone => "Phone",
            Field::Residence => "Residence",
        }
    }

    /// The wizard page this field is edited on
    pub fn step(self) -> WizardStep {
        match self {
            Field::Email | Field::Password | Field::ConfirmPassword => WizardStep::AccountDetails,
            _ => WizardStep::PersonalInfo,
        }
    }

    /// Password fields are masked when rendered
    pub fn is_secret(self) -> bool {
        matches!(self, Field::Password | Field::ConfirmPassword)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Wizard page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    AccountDetails,
    PersonalInfo,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [
        WizardStep::AccountDetails,
        WizardStep::PersonalInfo,
        WizardStep::Review,
    ];

    pub fn index(self) -> usize {
        match self {
            WizardStep::AccountDetails => 0,
            WizardStep::PersonalInfo => 1,
            WizardStep::Review => 2,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::AccountDetails => "Account Details",
            WizardStep::PersonalInfo => "Personal Info",
            WizardStep::Review => "Review and Submit",
        }
    }

    /// Fields edited on this page
    pub fn fields(self) -> &'static [Field] {
        match self {
            WizardStep::AccountDetails => &[Field::Email, Field::Password, Field::ConfirmPassword],
            WizardStep::PersonalInfo => &[
                Field::FirstName,
                Field::LastName,
                Field::Phone,
                Field::Residence,
            ],
            WizardStep::Review => &[],
        }
    }

    /// Following page, saturating at the review step
    pub fn next(self) -> Self {
        match self {
            WizardStep::AccountDetails => WizardStep::PersonalInfo,
            WizardStep::PersonalInfo | WizardStep::Review => WizardStep::Review,
        }
    }

    /// Previous page, saturating at the first step
    pub fn prev(self) -> Self {
        match self {
            WizardStep::AccountDetails | WizardStep::PersonalInfo => WizardStep::AccountDetails,
            WizardStep::Review => WizardStep::PersonalInfo,
        }
    }

    pub fn is_last(self) -> bool {
        self == WizardStep::Review
    }
}

/// Current value of every field, serialized as the submission body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub residence: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Phone => &self.phone,
            Field::Residence => &self.residence,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Phone => &mut self.phone,
            Field::Residence => &mut self.residence,
        }
    }

    /// Replace one field's value
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot(field) = value.into();
    }

    /// True when every listed field has a non-empty value
    pub fn all_present(&self, fields: &[Field]) -> bool {
        fields.iter().all(|f| !self.get(*f).is_empty())
    }
}
