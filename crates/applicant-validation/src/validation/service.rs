use std::sync::Arc;

use tracing::warn;

use crate::config::ValidationSettings;

use super::batch::{BatchReport, BatchRunner, TestCase};
use super::catalog::{HealthStatus, RuleCatalog};
use super::engine::{RuleSetError, ValidationEngine};
use super::request::{BatchValidationRequest, ValidationRequest};
use super::response::ValidationResponse;

/// Facade that rejects malformed requests before they reach the engine.
#[derive(Debug, Clone)]
pub struct ValidationService {
    engine: Arc<ValidationEngine>,
    settings: ValidationSettings,
}

impl ValidationService {
    pub fn new(engine: Arc<ValidationEngine>, settings: ValidationSettings) -> Self {
        Self { engine, settings }
    }

    /// Build the service around the standard rule set.
    pub fn standard(settings: ValidationSettings) -> Result<Self, RuleSetError> {
        Ok(Self::new(Arc::new(ValidationEngine::standard()?), settings))
    }

    pub fn engine(&self) -> &ValidationEngine {
        &self.engine
    }

    pub fn settings(&self) -> ValidationSettings {
        self.settings
    }

    pub fn validate(
        &self,
        request: ValidationRequest,
    ) -> Result<ValidationResponse, ValidationServiceError> {
        let applicant = request.applicant.ok_or_else(|| {
            warn!("validation request rejected: applicant missing");
            ValidationServiceError::MissingApplicant
        })?;

        Ok(self.engine.validate(applicant))
    }

    pub fn validate_batch(
        &self,
        request: BatchValidationRequest,
    ) -> Result<BatchReport, ValidationServiceError> {
        let cases = self.test_cases(request).inspect_err(|err| {
            warn!(error = %err, "batch request rejected");
        })?;

        let runner = BatchRunner::new(self.engine.clone()).parallel(self.settings.parallel_batches);
        Ok(runner.run(cases))
    }

    fn test_cases(
        &self,
        request: BatchValidationRequest,
    ) -> Result<Vec<TestCase>, ValidationServiceError> {
        let cases = request
            .test_cases
            .filter(|cases| !cases.is_empty())
            .ok_or(ValidationServiceError::MissingTestCases)?;

        if cases.len() > self.settings.max_test_cases {
            return Err(ValidationServiceError::TooManyTestCases {
                count: cases.len(),
                limit: self.settings.max_test_cases,
            });
        }

        cases
            .into_iter()
            .enumerate()
            .map(|(index, case)| case.into_test_case(index))
            .collect()
    }

    pub fn catalog(&self) -> RuleCatalog {
        RuleCatalog::describe(self.engine.rules())
    }

    pub fn health(&self) -> HealthStatus {
        HealthStatus::up()
    }
}

/// Client errors raised at the request boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationServiceError {
    #[error("request must include an applicant")]
    MissingApplicant,
    #[error("request must include at least one test case")]
    MissingTestCases,
    #[error("test case {index} must include input.applicant")]
    MissingTestCaseApplicant { index: usize },
    #[error("batch of {count} test cases exceeds the limit of {limit}")]
    TooManyTestCases { count: usize, limit: usize },
}
