use std::collections::BTreeMap;

use serde::Serialize;

use super::domain::RuleKey;
use super::engine::RuleSet;

pub const ENGINE_NAME: &str = concat!("applicant-validation ", env!("CARGO_PKG_VERSION"));
pub const APPLICATION_NAME: &str = "applicant-validation-service";

/// Read-only description of the loaded rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleCatalog {
    pub engine: &'static str,
    pub total_rules: usize,
    pub rules: BTreeMap<RuleKey, &'static str>,
}

impl RuleCatalog {
    pub fn describe(rules: &RuleSet) -> Self {
        Self {
            engine: ENGINE_NAME,
            total_rules: rules.len(),
            rules: rules
                .iter()
                .map(|definition| (definition.key, definition.summary))
                .collect(),
        }
    }
}

/// Static liveness payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub engine: &'static str,
    pub application: &'static str,
}

impl HealthStatus {
    pub const fn up() -> Self {
        Self {
            status: "UP",
            engine: ENGINE_NAME,
            application: APPLICATION_NAME,
        }
    }
}
