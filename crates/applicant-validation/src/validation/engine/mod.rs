mod result;
mod rules;

pub use result::{EvaluationResult, RuleOutcome};
pub use rules::{RuleDefinition, RuleSet, RuleSetError};

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use super::domain::ApplicantRecord;
use super::response::ValidationResponse;

/// Stateless evaluator that applies the shared rule set to one record at a time.
#[derive(Debug, Clone)]
pub struct ValidationEngine {
    rules: Arc<RuleSet>,
}

/// Record after rules together with the outcomes it produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub applicant: ApplicantRecord,
    pub result: EvaluationResult,
}

impl ValidationEngine {
    pub fn new(rules: Arc<RuleSet>) -> Self {
        Self { rules }
    }

    pub fn standard() -> Result<Self, RuleSetError> {
        Ok(Self::new(Arc::new(RuleSet::standard()?)))
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Run every rule once against `applicant`, setting the conclusion flag of each rule
    /// that fires. Rules whose condition does not hold record nothing.
    pub fn evaluate(&self, mut applicant: ApplicantRecord) -> Evaluation {
        let mut result = EvaluationResult::default();

        for rule in self.rules.iter() {
            if !rule.fires(&applicant) {
                continue;
            }
            let recorded = result.record(RuleOutcome {
                rule: rule.key,
                passed: true,
                message: rule.message.to_string(),
                timestamp: Utc::now(),
            });
            if recorded {
                applicant.set_conclusion(rule.key, true);
            }
        }

        debug!(
            fired = result.len(),
            total = self.rules.len(),
            "applicant rules evaluated"
        );

        Evaluation { applicant, result }
    }

    /// Evaluate and normalize into the externally visible verdict.
    pub fn validate(&self, applicant: ApplicantRecord) -> ValidationResponse {
        ValidationResponse::from_evaluation(self.evaluate(applicant), self.rules.len())
    }
}
