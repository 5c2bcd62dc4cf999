use std::str::FromStr;
use std::sync::Arc;

use axum::response::Response;
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde_json::Value;

use crate::config::ValidationSettings;
use crate::validation::{
    validation_router, ApplicantRecord, ExpectedResults, TestCase, ValidationEngine,
    ValidationService,
};

pub(super) fn income(raw: &str) -> Option<BigDecimal> {
    Some(BigDecimal::from_str(raw).expect("valid decimal"))
}

/// Applicant that satisfies all five rules.
pub(super) fn valid_applicant() -> ApplicantRecord {
    ApplicantRecord {
        first_name: Some("Dana".to_string()),
        last_name: Some("Whitfield".to_string()),
        date_of_birth: NaiveDate::from_ymd_opt(1994, 3, 12),
        social_security_number: Some("123-45-6789".to_string()),
        annual_income: income("50000"),
        employment_status: Some("EMPLOYED".to_string()),
        employer_name: Some("Riverside Logistics".to_string()),
        street_address: Some("418 Grand Ave".to_string()),
        city: Some("Des Moines".to_string()),
        state: Some("IA".to_string()),
        zip_code: Some("50309".to_string()),
        age: Some(30),
        credit_score: Some(700),
        drivers_license_number: Some("IA-D1234567".to_string()),
        ..ApplicantRecord::default()
    }
}

pub(super) fn names_only_applicant() -> ApplicantRecord {
    ApplicantRecord {
        first_name: Some("Dana".to_string()),
        last_name: Some("Whitfield".to_string()),
        ..ApplicantRecord::default()
    }
}

pub(super) fn underage_applicant() -> ApplicantRecord {
    ApplicantRecord {
        age: Some(17),
        credit_score: Some(650),
        annual_income: income("30000"),
        ..valid_applicant()
    }
}

pub(super) fn engine() -> Arc<ValidationEngine> {
    Arc::new(ValidationEngine::standard().expect("standard rules load"))
}

pub(super) fn settings() -> ValidationSettings {
    ValidationSettings {
        parallel_batches: false,
        max_test_cases: 4,
    }
}

pub(super) fn service() -> ValidationService {
    ValidationService::new(engine(), settings())
}

pub(super) fn router() -> axum::Router {
    validation_router(Arc::new(service()))
}

pub(super) fn case(
    name: &str,
    applicant: ApplicantRecord,
    expected: Option<ExpectedResults>,
) -> TestCase {
    TestCase {
        name: name.to_string(),
        description: Some(format!("{name} scenario")),
        applicant,
        expected,
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
