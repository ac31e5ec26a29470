//! Clinic IDs Core Library
//!
//! Validation and display formatting for the identifiers collected on clinic
//! patient forms: the Portuguese tax number (NIF) and mobile phone numbers.
//!
//! # Failure model
//!
//! ```text
//!  raw input ──► is_valid_*  ──► bool                (never fails)
//!            ──► format_*    ──► display form | input verbatim
//!            ──► Nif::parse / MobileNumber::parse ──► typed value | error
//! ```
//!
//! Everything here is pure computation over strings and safe to call from any
//! thread.
//!
//! # Modules
//!
//! - [`nif`]: NIF check digit, validation, formatting and taxpayer category
//! - [`phone`]: Mobile number rules, validation and formatting
//! - [`models`]: Contact form payload and validation report

mod grouping;
pub mod models;
pub mod nif;
pub mod phone;

// Re-export commonly used types
pub use models::{ContactDetails, ContactField, FieldError, ValidationReport};
pub use nif::{format_nif, is_valid_nif, nif_check_digit, Nif, NifCategory, NifError};
pub use phone::{
    format_mobile, is_valid_mobile, MobileNumber, MobileRules, MobileRulesConfig, PhoneError,
};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::Arc;

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum ClinicIdsError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<NifError> for ClinicIdsError {
    fn from(e: NifError) -> Self {
        ClinicIdsError::InvalidInput(e.to_string())
    }
}

impl From<PhoneError> for ClinicIdsError {
    fn from(e: PhoneError) -> Self {
        match e {
            PhoneError::InvalidFormat(_) => ClinicIdsError::InvalidInput(e.to_string()),
            _ => ClinicIdsError::ConfigError(e.to_string()),
        }
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Identifier helpers with the default mobile rules.
#[uniffi::export]
pub fn open_identifiers() -> Arc<ClinicIds> {
    Arc::new(ClinicIds {
        rules: MobileRules::new(),
    })
}

/// Identifier helpers accepting the given mobile second digits, e.g. `"1236"` or `"1, 2, 3, 6"`.
#[uniffi::export]
pub fn open_identifiers_with_second_digits(
    digits: String,
) -> Result<Arc<ClinicIds>, ClinicIdsError> {
    let digits: Vec<char> = digits
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();
    let rules = MobileRules::with_second_digits(&digits)?;
    Ok(Arc::new(ClinicIds { rules }))
}

// =========================================================================
// Main API Object
// =========================================================================

/// Identifier helpers bound to one set of mobile rules.
#[derive(uniffi::Object)]
pub struct ClinicIds {
    rules: MobileRules,
}

#[uniffi::export]
impl ClinicIds {
    // =========================================================================
    // NIF Operations
    // =========================================================================

    pub fn is_valid_nif(&self, input: String) -> bool {
        nif::is_valid_nif(&input)
    }

    pub fn format_nif(&self, input: String) -> String {
        nif::format_nif(&input)
    }

    /// Taxpayer category of a valid NIF.
    pub fn nif_category(&self, input: String) -> Result<FfiNifCategory, ClinicIdsError> {
        let nif = Nif::parse(&input)?;
        Ok(nif.category().into())
    }

    // =========================================================================
    // Mobile Operations
    // =========================================================================

    pub fn is_valid_mobile(&self, input: String) -> bool {
        self.rules.is_valid(&input)
    }

    pub fn format_mobile(&self, input: String) -> String {
        phone::format_mobile(&input)
    }

    /// Accepted second digits, ascending, e.g. `"1236"`.
    pub fn mobile_second_digits(&self) -> String {
        self.rules.second_digits().into_iter().collect()
    }

    // =========================================================================
    // Form Operations
    // =========================================================================

    /// Validate a contact form; an empty list means every field passed.
    pub fn validate_contact(&self, contact: FfiContactDetails) -> Vec<FfiFieldError> {
        let details: ContactDetails = contact.into();
        details
            .validate(&self.rules)
            .errors
            .into_iter()
            .map(|e| e.into())
            .collect()
    }

    /// Display forms of a contact form's fields.
    pub fn format_contact(&self, contact: FfiContactDetails) -> FfiContactDetails {
        let details: ContactDetails = contact.into();
        details.formatted().into()
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe contact details.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiContactDetails {
    pub name: String,
    pub nif: Option<String>,
    pub mobile: Option<String>,
}

impl From<FfiContactDetails> for ContactDetails {
    fn from(contact: FfiContactDetails) -> Self {
        ContactDetails {
            name: contact.name,
            nif: contact.nif,
            mobile: contact.mobile,
        }
    }
}

impl From<ContactDetails> for FfiContactDetails {
    fn from(contact: ContactDetails) -> Self {
        Self {
            name: contact.name,
            nif: contact.nif,
            mobile: contact.mobile,
        }
    }
}

/// FFI-safe field error.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiFieldError {
    pub field: String,
    pub message: String,
}

impl From<FieldError> for FfiFieldError {
    fn from(error: FieldError) -> Self {
        Self {
            field: error.field.to_string(),
            message: error.message,
        }
    }
}

/// FFI-safe taxpayer category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiNifCategory {
    Individual,
    NonResidentIndividual,
    Company,
    PublicEntity,
    UndividedInheritance,
    NonResidentEntity,
    InvestmentFund,
    OfficialAssignment,
    VatRefund,
    ExceptionalRegime,
    SoleTrader,
    Condominium,
    NonResidentWithoutEstablishment,
    CivilSociety,
    Unassigned,
}

impl From<NifCategory> for FfiNifCategory {
    fn from(category: NifCategory) -> Self {
        match category {
            NifCategory::Individual => Self::Individual,
            NifCategory::NonResidentIndividual => Self::NonResidentIndividual,
            NifCategory::Company => Self::Company,
            NifCategory::PublicEntity => Self::PublicEntity,
            NifCategory::UndividedInheritance => Self::UndividedInheritance,
            NifCategory::NonResidentEntity => Self::NonResidentEntity,
            NifCategory::InvestmentFund => Self::InvestmentFund,
            NifCategory::OfficialAssignment => Self::OfficialAssignment,
            NifCategory::VatRefund => Self::VatRefund,
            NifCategory::ExceptionalRegime => Self::ExceptionalRegime,
            NifCategory::SoleTrader => Self::SoleTrader,
            NifCategory::Condominium => Self::Condominium,
            NifCategory::NonResidentWithoutEstablishment => Self::NonResidentWithoutEstablishment,
            NifCategory::CivilSociety => Self::CivilSociety,
            NifCategory::Unassigned => Self::Unassigned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_identifiers() {
        let ids = open_identifiers();
        assert!(ids.is_valid_nif("123 456 789".into()));
        assert_eq!(ids.format_nif("123456789".into()), "123 456 789");
        assert!(ids.is_valid_mobile("+351 912 345 678".into()));
        assert_eq!(ids.format_mobile("912345678".into()), "+351 912 345 678");
        assert_eq!(ids.mobile_second_digits(), "1236");
    }

    #[test]
    fn test_custom_second_digits() {
        let ids = open_identifiers_with_second_digits("1, 2, 3, 5, 6".into()).unwrap();
        assert_eq!(ids.mobile_second_digits(), "12356");
        assert!(ids.is_valid_mobile("952345678".into()));

        let err = open_identifiers_with_second_digits("".into()).err();
        assert!(matches!(err, Some(ClinicIdsError::ConfigError(_))));
    }

    #[test]
    fn test_non_digit_second_digits() {
        let err = open_identifiers_with_second_digits("1x".into()).err();
        match err {
            Some(ClinicIdsError::ConfigError(message)) => assert!(message.contains("'x'")),
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_nif_category() {
        let ids = open_identifiers();
        assert_eq!(
            ids.nif_category("501442600".into()).unwrap(),
            FfiNifCategory::Company
        );
        assert!(matches!(
            ids.nif_category("501442601".into()),
            Err(ClinicIdsError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_validate_contact() {
        let ids = open_identifiers();
        let errors = ids.validate_contact(FfiContactDetails {
            name: "Maria Silva".into(),
            nif: Some("123456780".into()),
            mobile: Some("912345678".into()),
        });
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "nif");
    }

    #[test]
    fn test_format_contact() {
        let ids = open_identifiers();
        let formatted = ids.format_contact(FfiContactDetails {
            name: "Maria Silva".into(),
            nif: Some("123456789".into()),
            mobile: Some("912345678".into()),
        });
        assert_eq!(formatted.nif.as_deref(), Some("123 456 789"));
        assert_eq!(formatted.mobile.as_deref(), Some("+351 912 345 678"));
    }
}
