use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::{ApplicantRecord, RuleKey};
use super::engine::{Evaluation, RuleOutcome};

/// Normalized verdict for one applicant. `rule_results` always covers every known rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResponse {
    pub fully_valid: bool,
    pub rules_matched: usize,
    pub total_rules: usize,
    pub rule_results: BTreeMap<RuleKey, bool>,
    pub details: Vec<ValidationDetail>,
    pub fact_after_rules: ApplicantRecord,
}

/// Per-rule line in a response. Only fired rules carry a timestamp.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationDetail {
    pub rule: RuleKey,
    pub passed: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl ValidationDetail {
    fn not_met(rule: RuleKey) -> Self {
        Self {
            rule,
            passed: false,
            message: format!("{} - conditions not met", rule.label()),
            timestamp: None,
        }
    }
}

impl From<RuleOutcome> for ValidationDetail {
    fn from(outcome: RuleOutcome) -> Self {
        Self {
            rule: outcome.rule,
            passed: outcome.passed,
            message: outcome.message,
            timestamp: Some(outcome.timestamp),
        }
    }
}

impl ValidationResponse {
    /// Fill in a failed entry for every rule that never fired, then derive the verdict.
    ///
    /// Fired details keep their firing order; not-fired details follow in canonical rule order.
    pub fn from_evaluation(evaluation: Evaluation, total_rules: usize) -> Self {
        let Evaluation { applicant, result } = evaluation;
        let rules_matched = result.len();
        let (outcomes, mut rule_results) = result.into_parts();

        let mut details: Vec<ValidationDetail> =
            outcomes.into_iter().map(ValidationDetail::from).collect();

        for key in RuleKey::ALL {
            if !rule_results.contains_key(&key) {
                rule_results.insert(key, false);
                details.push(ValidationDetail::not_met(key));
            }
        }

        let fully_valid =
            rule_results.len() == total_rules && rule_results.values().all(|passed| *passed);

        Self {
            fully_valid,
            rules_matched,
            total_rules,
            rule_results,
            details,
            fact_after_rules: applicant,
        }
    }

    /// Normalized result for `key`.
    pub fn passed(&self, key: RuleKey) -> bool {
        self.rule_results.get(&key).copied().unwrap_or(false)
    }

    pub fn failed_rules(&self) -> impl Iterator<Item = RuleKey> + '_ {
        self.rule_results
            .iter()
            .filter(|(_, passed)| !**passed)
            .map(|(key, _)| *key)
    }
}
