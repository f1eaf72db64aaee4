use crate::cli::ServeArgs;
use crate::infra::{serve_source, AppState};
use crate::routes::with_candidate_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use talent_scout::candidates::CandidateDirectory;
use talent_scout::config::AppConfig;
use talent_scout::error::AppError;
use talent_scout::telemetry;
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

    let source = serve_source(config.data.path.as_deref());
    let directory = Arc::new(CandidateDirectory::load(source)?);
    info!(total = directory.total(), "candidate directory ready");

    let app = with_candidate_routes(directory)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "talent scout api ready");

    axum::serve(listener, app).await?;
    Ok(())
}
