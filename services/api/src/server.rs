use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::scoring_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use locality_scoring::config::AppConfig;
use locality_scoring::error::AppError;
use locality_scoring::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
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
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let scoring = Arc::new(config.scoring.build_service());
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        scoring,
    };

    let app = scoring_routes()
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        cache_capacity = config.scoring.cache_capacity,
        variance = config.scoring.variance,
        "locality scoring service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
