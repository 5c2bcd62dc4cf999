//! Applicant validation: the record model, the five rules, evaluation, normalization and
//! batch regression runs.
//!
//! Every evaluation works on its own [`ApplicantRecord`]; the only shared state is the
//! immutable [`RuleSet`] behind the [`ValidationEngine`].

pub mod batch;
pub mod catalog;
pub mod domain;
pub mod engine;
pub mod request;
pub mod response;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use batch::{
    AssertionResult, BatchReport, BatchRunner, ExpectedResults, TestCase, TestCaseResult,
};
pub use catalog::{HealthStatus, RuleCatalog};
pub use domain::{ApplicantRecord, RuleKey};
pub use engine::{
    Evaluation, EvaluationResult, RuleDefinition, RuleOutcome, RuleSet, RuleSetError,
    ValidationEngine,
};
pub use request::{BatchValidationRequest, TestCaseRequest, ValidationRequest};
pub use response::{ValidationDetail, ValidationResponse};
pub use router::validation_router;
pub use service::{ValidationService, ValidationServiceError};
