use std::fmt;

use bigdecimal::BigDecimal;

use super::super::domain::{is_present, ApplicantRecord, RuleKey};

pub(crate) const MINIMUM_AGE: i32 = 18;
/// Credit score must be strictly above this value.
pub(crate) const CREDIT_SCORE_FLOOR: i32 = 600;
/// Annual income must be strictly above this value.
pub(crate) const ELIGIBLE_INCOME_FLOOR: i64 = 25_000;

/// One registered rule: the predicate plus the text reported about it.
#[derive(Clone, Copy)]
pub struct RuleDefinition {
    pub key: RuleKey,
    /// Message recorded when the rule fires.
    pub message: &'static str,
    /// Condition summary published in the rule catalog.
    pub summary: &'static str,
    predicate: fn(&ApplicantRecord) -> bool,
}

impl RuleDefinition {
    pub const fn new(
        key: RuleKey,
        message: &'static str,
        summary: &'static str,
        predicate: fn(&ApplicantRecord) -> bool,
    ) -> Self {
        Self {
            key,
            message,
            summary,
            predicate,
        }
    }

    pub fn fires(&self, applicant: &ApplicantRecord) -> bool {
        (self.predicate)(applicant)
    }
}

impl fmt::Debug for RuleDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleDefinition")
            .field("key", &self.key)
            .field("message", &self.message)
            .field("summary", &self.summary)
            .finish_non_exhaustive()
    }
}

const STANDARD_RULES: [RuleDefinition; 5] = [
    RuleDefinition::new(
        RuleKey::ApplicantDataIsValid,
        "Personal data is valid",
        "Checks: firstName, lastName, dateOfBirth, socialSecurityNumber are present",
        personal_data_is_valid,
    ),
    RuleDefinition::new(
        RuleKey::ApplicantIncomeIsVerified,
        "Income is verified",
        "Checks: annualIncome > 0, employmentStatus and employerName are present",
        income_is_verified,
    ),
    RuleDefinition::new(
        RuleKey::ApplicantAddressIsComplete,
        "Address is complete",
        "Checks: streetAddress, city, state, zipCode are present",
        address_is_complete,
    ),
    RuleDefinition::new(
        RuleKey::ApplicantIsEligible,
        "Applicant is eligible",
        "Checks: age >= 18, creditScore > 600, annualIncome > 25000",
        is_eligible,
    ),
    RuleDefinition::new(
        RuleKey::ApplicantIdentityIsConfirmed,
        "Identity is confirmed",
        "Checks: at least one of driversLicenseNumber, passportNumber, stateIdNumber is present",
        identity_is_confirmed,
    ),
];

/// Immutable, validated set of rule definitions shared by every evaluation.
#[derive(Debug, Clone)]
pub struct RuleSet {
    definitions: Vec<RuleDefinition>,
}

impl RuleSet {
    /// Validate a definition list: every known rule exactly once.
    pub fn new(definitions: Vec<RuleDefinition>) -> Result<Self, RuleSetError> {
        for (index, definition) in definitions.iter().enumerate() {
            if definitions[..index]
                .iter()
                .any(|earlier| earlier.key == definition.key)
            {
                return Err(RuleSetError::DuplicateRule(definition.key));
            }
        }

        if let Some(missing) = RuleKey::ALL
            .into_iter()
            .find(|key| !definitions.iter().any(|definition| definition.key == *key))
        {
            return Err(RuleSetError::MissingRule(missing));
        }

        Ok(Self { definitions })
    }

    pub fn standard() -> Result<Self, RuleSetError> {
        Self::new(STANDARD_RULES.to_vec())
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RuleDefinition> {
        self.definitions.iter()
    }

    pub fn get(&self, key: RuleKey) -> Option<&RuleDefinition> {
        self.definitions
            .iter()
            .find(|definition| definition.key == key)
    }
}

/// Raised when a rule set cannot be assembled.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleSetError {
    #[error("rule {0} has no definition")]
    MissingRule(RuleKey),
    #[error("rule {0} is defined more than once")]
    DuplicateRule(RuleKey),
}

fn personal_data_is_valid(applicant: &ApplicantRecord) -> bool {
    is_present(&applicant.first_name)
        && is_present(&applicant.last_name)
        && applicant.date_of_birth.is_some()
        && is_present(&applicant.social_security_number)
}

fn income_is_verified(applicant: &ApplicantRecord) -> bool {
    income_exceeds(applicant, 0)
        && is_present(&applicant.employment_status)
        && is_present(&applicant.employer_name)
}

fn address_is_complete(applicant: &ApplicantRecord) -> bool {
    is_present(&applicant.street_address)
        && is_present(&applicant.city)
        && is_present(&applicant.state)
        && is_present(&applicant.zip_code)
}

fn is_eligible(applicant: &ApplicantRecord) -> bool {
    applicant.age.is_some_and(|age| age >= MINIMUM_AGE)
        && applicant
            .credit_score
            .is_some_and(|score| score > CREDIT_SCORE_FLOOR)
        && income_exceeds(applicant, ELIGIBLE_INCOME_FLOOR)
}

fn identity_is_confirmed(applicant: &ApplicantRecord) -> bool {
    is_present(&applicant.drivers_license_number)
        || is_present(&applicant.passport_number)
        || is_present(&applicant.state_id_number)
}

fn income_exceeds(applicant: &ApplicantRecord, floor: i64) -> bool {
    applicant
        .annual_income
        .as_ref()
        .is_some_and(|income| *income > BigDecimal::from(floor))
}
