use applicant_validation::config::AppConfig;
use applicant_validation::error::AppError;
use applicant_validation::validation::{
    BatchReport, BatchValidationRequest, ValidationRequest, ValidationResponse, ValidationService,
};
use clap::Args;
use serde::de::DeserializeOwned;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct ValidateArgs {
    /// JSON file holding `{ "applicant": { ... } }`
    pub(crate) file: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// JSON file holding `{ "testCases": [ ... ] }`
    pub(crate) file: PathBuf,
    /// Exit with an error when any test case misses its expectations
    #[arg(long)]
    pub(crate) strict: bool,
}

pub(crate) fn run_validate(args: ValidateArgs) -> Result<(), AppError> {
    let service = load_service()?;
    let request: ValidationRequest = read_json(&args.file)?;
    let response = service.validate(request)?;
    print!("{}", render_validation(&response));
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let service = load_service()?;
    let request: BatchValidationRequest = read_json(&args.file)?;
    let report = service.validate_batch(request)?;
    print!("{}", render_batch(&report));
    enforce(&report, args.strict)
}

fn load_service() -> Result<ValidationService, AppError> {
    let config = AppConfig::load()?;
    Ok(ValidationService::standard(config.validation)?)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn enforce(report: &BatchReport, strict: bool) -> Result<(), AppError> {
    if strict && !report.all_passed() {
        return Err(AppError::Regression {
            failed: report.failed,
            total: report.total_tests,
        });
    }
    Ok(())
}

fn verdict(passed: bool) -> &'static str {
    if passed {
        "PASS"
    } else {
        "FAIL"
    }
}

pub(crate) fn render_validation(response: &ValidationResponse) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Fully valid: {} ({}/{} rules matched)",
        if response.fully_valid { "yes" } else { "no" },
        response.rules_matched,
        response.total_rules
    );
    for detail in &response.details {
        let _ = writeln!(
            out,
            "  [{}] {}: {}",
            verdict(detail.passed),
            detail.rule,
            detail.message
        );
    }
    out
}

pub(crate) fn render_batch(report: &BatchReport) -> String {
    let mut out = String::new();
    for result in &report.results {
        let _ = write!(out, "[{}] {}", verdict(result.test_passed), result.test_name);
        if let Some(description) = result.description.as_deref() {
            let _ = write!(out, " ({description})");
        }
        out.push('\n');
        for assertion in result.assertions.iter().filter(|assertion| !assertion.matched) {
            let expected = assertion
                .expected
                .map_or_else(|| "-".to_string(), |value| value.to_string());
            let _ = writeln!(
                out,
                "    {}: expected {}, actual {}",
                assertion.field, expected, assertion.actual
            );
        }
    }
    let _ = writeln!(
        out,
        "Summary: {} passed, {} failed, {} total",
        report.passed, report.failed, report.total_tests
    );
    out
}
