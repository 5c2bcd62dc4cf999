/// Property-based tests for normalization and batch invariants.
use std::sync::Arc;

use applicant_validation::validation::{
    ApplicantRecord, BatchRunner, ExpectedResults, RuleKey, TestCase, ValidationEngine,
};
use bigdecimal::BigDecimal;
use chrono::{Days, NaiveDate};
use proptest::prelude::*;

fn text() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        Just(Some("  ".to_string())),
        "[A-Za-z0-9 -]{1,12}".prop_map(Some),
    ]
}

prop_compose! {
    fn personal()(
        first_name in text(),
        last_name in text(),
        born in proptest::option::of(0u64..20_000),
        social_security_number in text(),
    ) -> (Option<String>, Option<String>, Option<NaiveDate>, Option<String>) {
        let epoch = NaiveDate::from_ymd_opt(1940, 1, 1).expect("valid epoch");
        let date_of_birth = born.and_then(|days| epoch.checked_add_days(Days::new(days)));
        (first_name, last_name, date_of_birth, social_security_number)
    }
}

prop_compose! {
    fn address()(
        street_address in text(),
        city in text(),
        state in text(),
        zip_code in text(),
    ) -> (Option<String>, Option<String>, Option<String>, Option<String>) {
        (street_address, city, state, zip_code)
    }
}

prop_compose! {
    fn identity()(
        drivers_license_number in text(),
        passport_number in text(),
        state_id_number in text(),
    ) -> (Option<String>, Option<String>, Option<String>) {
        (drivers_license_number, passport_number, state_id_number)
    }
}

prop_compose! {
    fn applicant()(
        personal in personal(),
        income in proptest::option::of(-10_000i64..200_000),
        employment_status in text(),
        employer_name in text(),
        address in address(),
        age in proptest::option::of(0i32..100),
        credit_score in proptest::option::of(300i32..850),
        identity in identity(),
    ) -> ApplicantRecord {
        let (first_name, last_name, date_of_birth, social_security_number) = personal;
        let (street_address, city, state, zip_code) = address;
        let (drivers_license_number, passport_number, state_id_number) = identity;
        ApplicantRecord {
            first_name,
            last_name,
            date_of_birth,
            social_security_number,
            annual_income: income.map(BigDecimal::from),
            employment_status,
            employer_name,
            street_address,
            city,
            state,
            zip_code,
            age,
            credit_score,
            drivers_license_number,
            passport_number,
            state_id_number,
            ..ApplicantRecord::default()
        }
    }
}

fn engine() -> Arc<ValidationEngine> {
    Arc::new(ValidationEngine::standard().expect("rules load"))
}

proptest! {
    #[test]
    fn normalized_results_cover_every_rule(record in applicant()) {
        let response = engine().validate(record);
        prop_assert_eq!(response.rule_results.len(), 5);
        prop_assert_eq!(response.details.len(), 5);
        prop_assert!(response.rules_matched <= 5);
        prop_assert_eq!(
            response.rules_matched,
            response.rule_results.values().filter(|passed| **passed).count()
        );
    }

    #[test]
    fn fully_valid_iff_every_rule_passes(record in applicant()) {
        let response = engine().validate(record);
        let all_pass = RuleKey::ALL.into_iter().all(|key| response.passed(key));
        prop_assert_eq!(response.fully_valid, all_pass);
    }

    #[test]
    fn conclusion_flags_mirror_rule_results(record in applicant()) {
        let response = engine().validate(record);
        for key in RuleKey::ALL {
            prop_assert_eq!(response.fact_after_rules.conclusion(key), response.passed(key));
        }
    }

    #[test]
    fn evaluation_is_idempotent(record in applicant()) {
        let engine = engine();
        let first = engine.validate(record.clone());
        let second = engine.validate(record);
        prop_assert_eq!(first.rule_results, second.rule_results);
        prop_assert_eq!(first.fully_valid, second.fully_valid);
    }

    #[test]
    fn batch_tallies_are_consistent(
        records in proptest::collection::vec(applicant(), 1..12),
        expectations in proptest::collection::vec(proptest::option::of(any::<bool>()), 12),
    ) {
        let cases: Vec<TestCase> = records
            .into_iter()
            .enumerate()
            .map(|(index, applicant)| TestCase {
                name: format!("case-{index}"),
                description: None,
                applicant,
                expected: Some(ExpectedResults {
                    fully_valid: expectations[index],
                    ..ExpectedResults::default()
                }),
            })
            .collect();
        let total = cases.len();

        let report = BatchRunner::new(engine()).parallel(true).run(cases);

        prop_assert_eq!(report.total_tests, total);
        prop_assert_eq!(report.passed + report.failed, report.total_tests);
        for (index, result) in report.results.iter().enumerate() {
            prop_assert_eq!(&result.test_name, &format!("case-{index}"));
            if expectations[index].is_none() {
                prop_assert!(result.test_passed);
                prop_assert!(result.assertions.is_empty());
            }
        }
    }
}
