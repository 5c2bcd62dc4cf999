use super::common::*;
use crate::validation::{ApplicantRecord, RuleKey};

#[test]
fn complete_applicant_passes_every_rule() {
    let engine = engine();

    let response = engine.validate(valid_applicant());

    assert!(response.fully_valid);
    assert_eq!(response.rules_matched, 5);
    assert_eq!(response.total_rules, 5);
    assert!(response.rule_results.values().all(|passed| *passed));
    assert!(response
        .details
        .iter()
        .all(|detail| detail.passed && detail.timestamp.is_some()));
}

#[test]
fn names_alone_fire_nothing() {
    let engine = engine();

    let response = engine.validate(names_only_applicant());

    assert!(!response.fully_valid);
    assert_eq!(response.rules_matched, 0);
    assert_eq!(response.rule_results.len(), 5);
    assert!(response.rule_results.values().all(|passed| !*passed));
    assert_eq!(response.details.len(), 5);
    assert!(response
        .details
        .iter()
        .all(|detail| detail.message.ends_with("conditions not met")));
}

#[test]
fn underage_applicant_fails_only_eligibility() {
    let engine = engine();

    let response = engine.validate(underage_applicant());

    assert!(!response.fully_valid);
    assert_eq!(response.rules_matched, 4);
    assert!(!response.passed(RuleKey::ApplicantIsEligible));
    assert_eq!(
        response.failed_rules().collect::<Vec<_>>(),
        vec![RuleKey::ApplicantIsEligible]
    );
}

#[test]
fn evaluation_sets_conclusion_flags_for_fired_rules() {
    let engine = engine();

    let evaluation = engine.evaluate(underage_applicant());

    assert!(evaluation.applicant.conclusion(RuleKey::ApplicantDataIsValid));
    assert!(evaluation.applicant.applicant_identity_is_confirmed);
    assert!(!evaluation.applicant.applicant_is_eligible);
    assert_eq!(evaluation.result.len(), 4);
    assert_eq!(evaluation.result.result(RuleKey::ApplicantIsEligible), None);
    assert_eq!(
        evaluation.result.result(RuleKey::ApplicantAddressIsComplete),
        Some(true)
    );
}

#[test]
fn outcomes_follow_rule_registration_order() {
    let engine = engine();

    let evaluation = engine.evaluate(valid_applicant());

    let fired: Vec<RuleKey> = evaluation
        .result
        .outcomes()
        .iter()
        .map(|outcome| outcome.rule)
        .collect();
    assert_eq!(fired, RuleKey::ALL.to_vec());
}

#[test]
fn repeated_evaluations_agree() {
    let engine = engine();

    let first = engine.validate(underage_applicant());
    let second = engine.validate(underage_applicant());

    assert_eq!(first.rule_results, second.rule_results);
    assert_eq!(first.fully_valid, second.fully_valid);
}

#[test]
fn empty_record_evaluates_without_error() {
    let engine = engine();

    let evaluation = engine.evaluate(ApplicantRecord::default());

    assert!(evaluation.result.is_empty());
    assert_eq!(evaluation.applicant, ApplicantRecord::default());
}
