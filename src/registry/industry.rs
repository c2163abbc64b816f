//! Industry resolution from worksheet codes
//!
//! Each industry worksheet is named by a code such as `T4.3`. This module
//! holds the fixed mapping from those codes to industry labels.

use log::debug;
use std::fmt;

/// Industries published in the survey, one per worksheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Industry {
    /// T4 - aggregate over all industries
    AllIndustries,
    /// T4.1
    Manufacturing,
    /// T4.2
    Construction,
    /// T4.3
    WholesaleAndRetailTrade,
    /// T4.4
    TransportationAndStorage,
    /// T4.5
    AccommodationAndFoodServices,
    /// T4.6
    InformationAndCommunications,
    /// T4.7
    FinancialAndInsuranceServices,
    /// T4.8
    RealEstateServices,
    /// T4.9
    ProfessionalServices,
    /// T4.10
    AdministrativeAndSupportServices,
    /// T4.11
    PublicAdministrationAndEducation,
    /// T4.12
    HealthAndSocialServices,
    /// T4.13
    ArtsEntertainmentAndRecreation,
    /// T4.14
    OtherCommunitySocialAndPersonalServices,
}

impl Industry {
    /// All industries in worksheet order
    pub const ALL: [Industry; 15] = [
        Industry::AllIndustries,
        Industry::Manufacturing,
        Industry::Construction,
        Industry::WholesaleAndRetailTrade,
        Industry::TransportationAndStorage,
        Industry::AccommodationAndFoodServices,
        Industry::InformationAndCommunications,
        Industry::FinancialAndInsuranceServices,
        Industry::RealEstateServices,
        Industry::ProfessionalServices,
        Industry::AdministrativeAndSupportServices,
        Industry::PublicAdministrationAndEducation,
        Industry::HealthAndSocialServices,
        Industry::ArtsEntertainmentAndRecreation,
        Industry::OtherCommunitySocialAndPersonalServices,
    ];

    /// Worksheet code of the industry
    #[must_use]
    pub fn sheet_code(self) -> &'static str {
        match self {
            Industry::AllIndustries => "T4",
            Industry::Manufacturing => "T4.1",
            Industry::Construction => "T4.2",
            Industry::WholesaleAndRetailTrade => "T4.3",
            Industry::TransportationAndStorage => "T4.4",
            Industry::AccommodationAndFoodServices => "T4.5",
            Industry::InformationAndCommunications => "T4.6",
            Industry::FinancialAndInsuranceServices => "T4.7",
            Industry::RealEstateServices => "T4.8",
            Industry::ProfessionalServices => "T4.9",
            Industry::AdministrativeAndSupportServices => "T4.10",
            Industry::PublicAdministrationAndEducation => "T4.11",
            Industry::HealthAndSocialServices => "T4.12",
            Industry::ArtsEntertainmentAndRecreation => "T4.13",
            Industry::OtherCommunitySocialAndPersonalServices => "T4.14",
        }
    }

    /// Human-readable industry label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Industry::AllIndustries => "All Industries",
            Industry::Manufacturing => "Manufacturing",
            Industry::Construction => "Construction",
            Industry::WholesaleAndRetailTrade => "Wholesale and Retail Trade",
            Industry::TransportationAndStorage => "Transportation and Storage",
            Industry::AccommodationAndFoodServices => "Accommodation and Food Services",
            Industry::InformationAndCommunications => "Information and Communications",
            Industry::FinancialAndInsuranceServices => "Financial and Insurance Services",
            Industry::RealEstateServices => "Real Estate Services",
            Industry::ProfessionalServices => "Professional Services",
            Industry::AdministrativeAndSupportServices => "Administrative and Support Services",
            Industry::PublicAdministrationAndEducation => "Public Administration and Education",
            Industry::HealthAndSocialServices => "Health and Social Services",
            Industry::ArtsEntertainmentAndRecreation => "Arts, Entertainment and Recreation",
            Industry::OtherCommunitySocialAndPersonalServices => {
                "Other Community, Social and Personal Services"
            }
        }
    }

    /// Resolve a worksheet code. Matching is exact: `T4.3 ` or `t4.3` do not resolve.
    #[must_use]
    pub fn from_sheet_code(code: &str) -> Option<Self> {
        let industry = Self::ALL.into_iter().find(|i| i.sheet_code() == code);
        if industry.is_none() {
            debug!("No industry mapped to sheet code '{code}'");
        }
        industry
    }

    /// Resolve an industry label exactly
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.label() == label)
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Labels of all industries in worksheet order
#[must_use]
pub fn industry_labels() -> Vec<&'static str> {
    Industry::ALL.iter().map(|i| i.label()).collect()
}
