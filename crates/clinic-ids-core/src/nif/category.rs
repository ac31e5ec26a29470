//! Taxpayer categories encoded in the leading digits of a NIF.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of taxpayer a NIF was issued to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NifCategory {
    /// 1, 2, 3
    Individual,
    /// 45
    NonResidentIndividual,
    /// 5
    Company,
    /// 6
    PublicEntity,
    /// 70, 74, 75
    UndividedInheritance,
    /// 71
    NonResidentEntity,
    /// 72
    InvestmentFund,
    /// 77
    OfficialAssignment,
    /// 78
    VatRefund,
    /// 79
    ExceptionalRegime,
    /// 8 (no longer issued)
    SoleTrader,
    /// 90, 91
    Condominium,
    /// 98
    NonResidentWithoutEstablishment,
    /// 99
    CivilSociety,
    /// Any other prefix
    Unassigned,
}

impl NifCategory {
    /// Classify compact NIF digits by their first one or two characters.
    pub fn from_digits(digits: &str) -> Self {
        let mut chars = digits.chars();
        match (chars.next(), chars.next()) {
            (Some('1' | '2' | '3'), _) => Self::Individual,
            (Some('4'), Some('5')) => Self::NonResidentIndividual,
            (Some('5'), _) => Self::Company,
            (Some('6'), _) => Self::PublicEntity,
            (Some('7'), Some('0' | '4' | '5')) => Self::UndividedInheritance,
            (Some('7'), Some('1')) => Self::NonResidentEntity,
            (Some('7'), Some('2')) => Self::InvestmentFund,
            (Some('7'), Some('7')) => Self::OfficialAssignment,
            (Some('7'), Some('8')) => Self::VatRefund,
            (Some('7'), Some('9')) => Self::ExceptionalRegime,
            (Some('8'), _) => Self::SoleTrader,
            (Some('9'), Some('0' | '1')) => Self::Condominium,
            (Some('9'), Some('8')) => Self::NonResidentWithoutEstablishment,
            (Some('9'), Some('9')) => Self::CivilSociety,
            _ => Self::Unassigned,
        }
    }

    /// Whether the NIF belongs to a natural person.
    pub fn is_individual(&self) -> bool {
        matches!(
            self,
            Self::Individual | Self::NonResidentIndividual | Self::SoleTrader
        )
    }

    /// Human-readable label for invoices and patient forms.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Individual => "Individual",
            Self::NonResidentIndividual => "Non-resident individual",
            Self::Company => "Company",
            Self::PublicEntity => "Public administration",
            Self::UndividedInheritance => "Undivided inheritance",
            Self::NonResidentEntity => "Non-resident entity",
            Self::InvestmentFund => "Investment fund",
            Self::OfficialAssignment => "Officially assigned",
            Self::VatRefund => "Non-resident (VAT refund)",
            Self::ExceptionalRegime => "Exceptional regime",
            Self::SoleTrader => "Sole trader",
            Self::Condominium => "Condominium or irregular entity",
            Self::NonResidentWithoutEstablishment => "Non-resident without establishment",
            Self::CivilSociety => "Civil society",
            Self::Unassigned => "Unassigned",
        }
    }
}

impl fmt::Display for NifCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_digit_prefixes() {
        assert_eq!(NifCategory::from_digits("123456789"), NifCategory::Individual);
        assert_eq!(NifCategory::from_digits("234567890"), NifCategory::Individual);
        assert_eq!(NifCategory::from_digits("301234567"), NifCategory::Individual);
        assert_eq!(NifCategory::from_digits("501442600"), NifCategory::Company);
        assert_eq!(NifCategory::from_digits("600000000"), NifCategory::PublicEntity);
        assert_eq!(NifCategory::from_digits("800000000"), NifCategory::SoleTrader);
    }

    #[test]
    fn test_two_digit_prefixes() {
        assert_eq!(
            NifCategory::from_digits("450000000"),
            NifCategory::NonResidentIndividual
        );
        assert_eq!(
            NifCategory::from_digits("740000000"),
            NifCategory::UndividedInheritance
        );
        assert_eq!(NifCategory::from_digits("720000000"), NifCategory::InvestmentFund);
        assert_eq!(NifCategory::from_digits("910000000"), NifCategory::Condominium);
        assert_eq!(
            NifCategory::from_digits("980000000"),
            NifCategory::NonResidentWithoutEstablishment
        );
        assert_eq!(NifCategory::from_digits("990000000"), NifCategory::CivilSociety);
    }

    #[test]
    fn test_unassigned_prefixes() {
        assert_eq!(NifCategory::from_digits("000000000"), NifCategory::Unassigned);
        assert_eq!(NifCategory::from_digits("400000000"), NifCategory::Unassigned);
        assert_eq!(NifCategory::from_digits("730000000"), NifCategory::Unassigned);
        assert_eq!(NifCategory::from_digits("920000000"), NifCategory::Unassigned);
        assert_eq!(NifCategory::from_digits(""), NifCategory::Unassigned);
    }

    #[test]
    fn test_is_individual() {
        assert!(NifCategory::Individual.is_individual());
        assert!(NifCategory::SoleTrader.is_individual());
        assert!(!NifCategory::Company.is_individual());
        assert!(!NifCategory::CivilSociety.is_individual());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&NifCategory::PublicEntity).unwrap();
        assert_eq!(json, "\"public_entity\"");
    }
}
