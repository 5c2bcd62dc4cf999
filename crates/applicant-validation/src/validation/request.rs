use serde::{Deserialize, Serialize};

use super::batch::{ExpectedResults, TestCase};
use super::domain::ApplicantRecord;
use super::service::ValidationServiceError;

/// Body of a single validation request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationRequest {
    #[serde(default)]
    pub applicant: Option<ApplicantRecord>,
}

/// Body of a batch validation request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchValidationRequest {
    #[serde(default)]
    pub test_cases: Option<Vec<TestCaseRequest>>,
}

/// Wire form of a test case before boundary checks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCaseRequest {
    #[serde(default)]
    pub test_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub input: Option<ValidationRequest>,
    #[serde(default)]
    pub expected: Option<ExpectedResults>,
}

impl TestCaseRequest {
    pub(crate) fn into_test_case(self, index: usize) -> Result<TestCase, ValidationServiceError> {
        let applicant = self
            .input
            .and_then(|input| input.applicant)
            .ok_or(ValidationServiceError::MissingTestCaseApplicant { index })?;

        Ok(TestCase {
            name: self.test_name,
            description: self.description,
            applicant,
            expected: self.expected,
        })
    }
}
