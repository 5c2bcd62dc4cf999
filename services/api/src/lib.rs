mod cli;
mod infra;
mod routes;
mod runner;
mod server;

use applicant_validation::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
