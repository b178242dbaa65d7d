use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryApplicationRepository, InMemoryNotificationPublisher};
use crate::routes::marketplace_routes;
use advisor_connect::auth::ReviewerGate;
use advisor_connect::config::AppConfig;
use advisor_connect::error::AppError;
use advisor_connect::marketplace::applications::AdvisorApplicationService;
use advisor_connect::marketplace::directory::AdvisorDirectory;
use advisor_connect::telemetry;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
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

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryApplicationRepository::default());
    let notifications = Arc::new(InMemoryNotificationPublisher::default());
    let application_service = Arc::new(AdvisorApplicationService::new(repository, notifications));
    let directory = Arc::new(AdvisorDirectory::seeded());
    let gate = ReviewerGate::new(&config.review.reviewer_email);

    let app = marketplace_routes(application_service, gate, directory)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "advisor marketplace ready");

    axum::serve(listener, app).await?;
    Ok(())
}
