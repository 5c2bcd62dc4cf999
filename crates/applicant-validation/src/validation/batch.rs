use std::collections::BTreeMap;
use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::domain::{ApplicantRecord, RuleKey};
use super::engine::ValidationEngine;
use super::response::ValidationResponse;

pub(crate) const FULLY_VALID_FIELD: &str = "fullyValid";

/// Optional expectations for a test case. A `None` field makes no assertion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpectedResults {
    #[serde(default)]
    pub fully_valid: Option<bool>,
    #[serde(default)]
    pub applicant_data_is_valid: Option<bool>,
    #[serde(default)]
    pub applicant_income_is_verified: Option<bool>,
    #[serde(default)]
    pub applicant_address_is_complete: Option<bool>,
    #[serde(default)]
    pub applicant_is_eligible: Option<bool>,
    #[serde(default)]
    pub applicant_identity_is_confirmed: Option<bool>,
}

impl ExpectedResults {
    pub fn rule(&self, key: RuleKey) -> Option<bool> {
        match key {
            RuleKey::ApplicantDataIsValid => self.applicant_data_is_valid,
            RuleKey::ApplicantIncomeIsVerified => self.applicant_income_is_verified,
            RuleKey::ApplicantAddressIsComplete => self.applicant_address_is_complete,
            RuleKey::ApplicantIsEligible => self.applicant_is_eligible,
            RuleKey::ApplicantIdentityIsConfirmed => self.applicant_identity_is_confirmed,
        }
    }

    /// Compare against a response: `fullyValid` first, then rules in canonical order.
    pub fn assert_against(&self, response: &ValidationResponse) -> Vec<AssertionResult> {
        let mut assertions = Vec::new();

        if let Some(expected) = self.fully_valid {
            assertions.push(AssertionResult::new(
                FULLY_VALID_FIELD,
                Some(expected),
                response.fully_valid,
            ));
        }

        for key in RuleKey::ALL {
            if let Some(expected) = self.rule(key) {
                assertions.push(AssertionResult::new(
                    key.as_str(),
                    Some(expected),
                    response.passed(key),
                ));
            }
        }

        assertions
    }
}

/// Named applicant plus optional expectations, ready to run.
#[derive(Debug, Clone, PartialEq)]
pub struct TestCase {
    pub name: String,
    pub description: Option<String>,
    pub applicant: ApplicantRecord,
    pub expected: Option<ExpectedResults>,
}

/// Single expected-vs-actual comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssertionResult {
    pub field: String,
    pub expected: Option<bool>,
    pub actual: bool,
    #[serde(rename = "match")]
    pub matched: bool,
}

impl AssertionResult {
    pub fn new(field: impl Into<String>, expected: Option<bool>, actual: bool) -> Self {
        Self {
            field: field.into(),
            expected,
            actual,
            matched: expected.map_or(true, |expected| expected == actual),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCaseResult {
    pub test_name: String,
    pub description: Option<String>,
    pub test_passed: bool,
    pub actual_rule_results: BTreeMap<RuleKey, bool>,
    pub assertions: Vec<AssertionResult>,
    pub validation_response: ValidationResponse,
}

/// Tally of a batch run. `results` follows input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub total_tests: usize,
    pub passed: usize,
    pub failed: usize,
    pub results: Vec<TestCaseResult>,
}

impl BatchReport {
    fn from_results(results: Vec<TestCaseResult>) -> Self {
        let total_tests = results.len();
        let passed = results.iter().filter(|result| result.test_passed).count();

        Self {
            total_tests,
            passed,
            failed: total_tests - passed,
            results,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Runs test cases through the engine, each on its own record.
#[derive(Debug, Clone)]
pub struct BatchRunner {
    engine: Arc<ValidationEngine>,
    parallel: bool,
}

impl BatchRunner {
    pub fn new(engine: Arc<ValidationEngine>) -> Self {
        Self {
            engine,
            parallel: false,
        }
    }

    /// Spread cases across the rayon pool. Output order still matches input order.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn run(&self, cases: Vec<TestCase>) -> BatchReport {
        let results: Vec<TestCaseResult> = if self.parallel {
            cases
                .into_par_iter()
                .map(|case| self.run_case(case))
                .collect()
        } else {
            cases.into_iter().map(|case| self.run_case(case)).collect()
        };

        let report = BatchReport::from_results(results);
        info!(
            total = report.total_tests,
            passed = report.passed,
            failed = report.failed,
            parallel = self.parallel,
            "batch validation finished"
        );
        report
    }

    pub fn run_case(&self, case: TestCase) -> TestCaseResult {
        let TestCase {
            name,
            description,
            applicant,
            expected,
        } = case;

        let response = self.engine.validate(applicant);
        let assertions = expected
            .map(|expected| expected.assert_against(&response))
            .unwrap_or_default();
        let test_passed = assertions.iter().all(|assertion| assertion.matched);

        TestCaseResult {
            test_name: name,
            description,
            test_passed,
            actual_rule_results: response.rule_results.clone(),
            assertions,
            validation_response: response,
        }
    }
}
