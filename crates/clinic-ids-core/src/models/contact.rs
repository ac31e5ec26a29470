//! Patient contact form models.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::nif::{format_nif, Nif};
use crate::phone::{format_mobile, MobileRules};

/// Contact details as entered on a patient form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContactDetails {
    /// Patient or client name
    pub name: String,
    /// Tax identifier, needed for invoicing
    pub nif: Option<String>,
    /// Mobile number for appointment reminders
    pub mobile: Option<String>,
}

/// A form field that can fail validation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Nif,
    Mobile,
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContactField::Name => "name",
            ContactField::Nif => "nif",
            ContactField::Mobile => "mobile",
        };
        f.write_str(name)
    }
}

/// A single failed field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldError {
    pub field: ContactField,
    pub message: String,
}

/// Outcome of validating a [`ContactDetails`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ValidationReport {
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    fn push(&mut self, field: ContactField, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors reported against one field.
    pub fn errors_for(&self, field: ContactField) -> Vec<&FieldError> {
        self.errors.iter().filter(|e| e.field == field).collect()
    }

    /// Convert to JSON for the form layer.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl ContactDetails {
    /// Create contact details with only a name.
    pub fn new(name: String) -> Self {
        Self {
            name,
            nif: None,
            mobile: None,
        }
    }

    /// Validate every field. Blank optional fields count as absent.
    pub fn validate(&self, rules: &MobileRules) -> ValidationReport {
        let mut report = ValidationReport::default();

        if self.name.trim().is_empty() {
            report.push(ContactField::Name, "Name is required");
        }

        if let Some(nif) = present(&self.nif) {
            if let Err(e) = Nif::parse(nif) {
                report.push(ContactField::Nif, e.to_string());
            }
        }

        if let Some(mobile) = present(&self.mobile) {
            if let Err(e) = rules.parse(mobile) {
                report.push(ContactField::Mobile, e.to_string());
            }
        }

        report
    }

    /// Display forms of each field. Values that cannot be formatted are kept as typed.
    pub fn formatted(&self) -> ContactDetails {
        ContactDetails {
            name: self.name.trim().to_string(),
            nif: present(&self.nif).map(format_nif),
            mobile: present(&self.mobile).map(format_mobile),
        }
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
