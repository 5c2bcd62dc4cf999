use std::fmt;

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifies one of the five validation rules.
///
/// Declaration order is the canonical rule order used for normalization and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleKey {
    ApplicantDataIsValid,
    ApplicantIncomeIsVerified,
    ApplicantAddressIsComplete,
    ApplicantIsEligible,
    ApplicantIdentityIsConfirmed,
}

impl RuleKey {
    pub const ALL: [RuleKey; 5] = [
        RuleKey::ApplicantDataIsValid,
        RuleKey::ApplicantIncomeIsVerified,
        RuleKey::ApplicantAddressIsComplete,
        RuleKey::ApplicantIsEligible,
        RuleKey::ApplicantIdentityIsConfirmed,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            RuleKey::ApplicantDataIsValid => "applicantDataIsValid",
            RuleKey::ApplicantIncomeIsVerified => "applicantIncomeIsVerified",
            RuleKey::ApplicantAddressIsComplete => "applicantAddressIsComplete",
            RuleKey::ApplicantIsEligible => "applicantIsEligible",
            RuleKey::ApplicantIdentityIsConfirmed => "applicantIdentityIsConfirmed",
        }
    }

    /// Human readable name used when a rule did not fire.
    pub const fn label(self) -> &'static str {
        match self {
            RuleKey::ApplicantDataIsValid => "Personal data validation",
            RuleKey::ApplicantIncomeIsVerified => "Income verification",
            RuleKey::ApplicantAddressIsComplete => "Address completeness",
            RuleKey::ApplicantIsEligible => "Eligibility check",
            RuleKey::ApplicantIdentityIsConfirmed => "Identity confirmation",
        }
    }
}

impl fmt::Display for RuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Facts submitted for validation, plus the conclusion flags written by the rules.
///
/// Every input field is optional and unknown fields are ignored. The legacy
/// `applicant`-prefixed field names are also accepted; when both spellings are sent the
/// canonical one wins. Conclusion flags are never read from input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ApplicantInput")]
pub struct ApplicantRecord {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub social_security_number: Option<String>,

    #[serde(serialize_with = "bigdecimal::serde::json_num_option::serialize")]
    pub annual_income: Option<BigDecimal>,
    pub employment_status: Option<String>,
    pub employer_name: Option<String>,

    pub street_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,

    pub age: Option<i32>,
    pub credit_score: Option<i32>,

    pub drivers_license_number: Option<String>,
    pub passport_number: Option<String>,
    pub state_id_number: Option<String>,

    pub applicant_data_is_valid: bool,
    pub applicant_income_is_verified: bool,
    pub applicant_address_is_complete: bool,
    pub applicant_is_eligible: bool,
    pub applicant_identity_is_confirmed: bool,
}

/// Wire shape accepting both the canonical and the legacy field names.
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ApplicantInput {
    first_name: Option<String>,
    applicant_first_name: Option<String>,
    last_name: Option<String>,
    applicant_last_name: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_date")]
    date_of_birth: Option<NaiveDate>,
    #[serde(deserialize_with = "deserialize_optional_date")]
    applicant_date_of_birth: Option<NaiveDate>,
    social_security_number: Option<String>,
    applicant_social_security_number: Option<String>,
    annual_income: Option<BigDecimal>,
    applicant_annual_income: Option<BigDecimal>,
    employment_status: Option<String>,
    applicant_employment_status: Option<String>,
    employer_name: Option<String>,
    applicant_employer_name: Option<String>,
    street_address: Option<String>,
    applicant_street_address: Option<String>,
    city: Option<String>,
    applicant_city: Option<String>,
    state: Option<String>,
    applicant_state: Option<String>,
    zip_code: Option<String>,
    applicant_zip_code: Option<String>,
    age: Option<i32>,
    applicant_age: Option<i32>,
    credit_score: Option<i32>,
    applicant_credit_score: Option<i32>,
    drivers_license_number: Option<String>,
    applicant_drivers_license_number: Option<String>,
    passport_number: Option<String>,
    applicant_passport_number: Option<String>,
    state_id_number: Option<String>,
    applicant_state_id_number: Option<String>,
}

impl From<ApplicantInput> for ApplicantRecord {
    fn from(input: ApplicantInput) -> Self {
        Self {
            first_name: input.first_name.or(input.applicant_first_name),
            last_name: input.last_name.or(input.applicant_last_name),
            date_of_birth: input.date_of_birth.or(input.applicant_date_of_birth),
            social_security_number: input
                .social_security_number
                .or(input.applicant_social_security_number),
            annual_income: input.annual_income.or(input.applicant_annual_income),
            employment_status: input.employment_status.or(input.applicant_employment_status),
            employer_name: input.employer_name.or(input.applicant_employer_name),
            street_address: input.street_address.or(input.applicant_street_address),
            city: input.city.or(input.applicant_city),
            state: input.state.or(input.applicant_state),
            zip_code: input.zip_code.or(input.applicant_zip_code),
            age: input.age.or(input.applicant_age),
            credit_score: input.credit_score.or(input.applicant_credit_score),
            drivers_license_number: input
                .drivers_license_number
                .or(input.applicant_drivers_license_number),
            passport_number: input.passport_number.or(input.applicant_passport_number),
            state_id_number: input.state_id_number.or(input.applicant_state_id_number),
            ..Self::default()
        }
    }
}

impl ApplicantRecord {
    pub fn conclusion(&self, key: RuleKey) -> bool {
        match key {
            RuleKey::ApplicantDataIsValid => self.applicant_data_is_valid,
            RuleKey::ApplicantIncomeIsVerified => self.applicant_income_is_verified,
            RuleKey::ApplicantAddressIsComplete => self.applicant_address_is_complete,
            RuleKey::ApplicantIsEligible => self.applicant_is_eligible,
            RuleKey::ApplicantIdentityIsConfirmed => self.applicant_identity_is_confirmed,
        }
    }

    pub(crate) fn set_conclusion(&mut self, key: RuleKey, value: bool) {
        let flag = match key {
            RuleKey::ApplicantDataIsValid => &mut self.applicant_data_is_valid,
            RuleKey::ApplicantIncomeIsVerified => &mut self.applicant_income_is_verified,
            RuleKey::ApplicantAddressIsComplete => &mut self.applicant_address_is_complete,
            RuleKey::ApplicantIsEligible => &mut self.applicant_is_eligible,
            RuleKey::ApplicantIdentityIsConfirmed => &mut self.applicant_identity_is_confirmed,
        };
        *flag = value;
    }
}

/// A text fact counts as present when it is non-null and non-empty.
pub(crate) fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|text| !text.is_empty())
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.filter(|value| !value.trim().is_empty())
        .map(|value| parse_date(&value).map_err(serde::de::Error::custom))
        .transpose()
}
