use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::super::domain::RuleKey;

/// Record of one rule that fired during an evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleOutcome {
    pub rule: RuleKey,
    pub passed: bool,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Outcomes collected from one evaluation.
///
/// `outcomes` keeps firing order; `results` holds at most one entry per rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    outcomes: Vec<RuleOutcome>,
    results: BTreeMap<RuleKey, bool>,
}

impl EvaluationResult {
    /// Append an outcome. A rule that already fired is not recorded again.
    pub(crate) fn record(&mut self, outcome: RuleOutcome) -> bool {
        if self.results.contains_key(&outcome.rule) {
            return false;
        }
        self.results.insert(outcome.rule, outcome.passed);
        self.outcomes.push(outcome);
        true
    }

    pub fn outcomes(&self) -> &[RuleOutcome] {
        &self.outcomes
    }

    pub fn results(&self) -> &BTreeMap<RuleKey, bool> {
        &self.results
    }

    pub fn result(&self, key: RuleKey) -> Option<bool> {
        self.results.get(&key).copied()
    }

    /// Number of rules that fired.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub(crate) fn into_parts(self) -> (Vec<RuleOutcome>, BTreeMap<RuleKey, bool>) {
        (self.outcomes, self.results)
    }
}
