use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_ops_routes;
use applicant_validation::config::AppConfig;
use applicant_validation::error::AppError;
use applicant_validation::telemetry;
use applicant_validation::validation::ValidationService;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let service = Arc::new(ValidationService::standard(config.validation)?);
    info!(
        rules = service.engine().rules().len(),
        parallel_batches = config.validation.parallel_batches,
        max_test_cases = config.validation.max_test_cases,
        "rule set loaded"
    );

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let app_state = AppState::new(prometheus_handle);
    let readiness_flag = app_state.readiness.clone();

    let app = with_ops_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "applicant validation service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
