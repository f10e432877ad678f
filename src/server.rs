use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use rand::{rngs::StdRng, SeedableRng};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::geo::{japan_base_locations, JapanCoordinates};
use crate::globe::GlobeSettings;
use crate::sar::{self, BaseLocation, SarBatch};

/// Shared, read-only handler state.
#[derive(Clone)]
pub struct AppState {
    config: Arc<AppConfig>,
    locations: Arc<[BaseLocation]>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        AppState {
            config: Arc::new(config),
            locations: japan_base_locations().into(),
        }
    }
}

#[derive(Deserialize)]
struct SarQuery {
    samples: Option<i64>,
    seed: Option<u64>,
}

async fn healthz() -> impl IntoResponse {
    "ok"
}

async fn sar_data(
    State(state): State<AppState>,
    Query(q): Query<SarQuery>,
) -> Result<Json<SarBatch>, ApiError> {
    let samples = q
        .samples
        .unwrap_or(state.config.samples_per_location)
        .min(state.config.max_samples_per_location);
    // Fresh source per request; nothing is shared between handlers.
    let mut rng = match q.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let batch = sar::generate(&state.locations, samples, &mut rng)?;
    Ok(Json(batch))
}

async fn japan_coordinates(State(state): State<AppState>) -> impl IntoResponse {
    Json(JapanCoordinates::new(state.config.japan_center))
}

async fn globe_animation_data(State(state): State<AppState>) -> impl IntoResponse {
    Json(GlobeSettings::new(&state.config))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/sar-data", get(sar_data))
        .route("/api/japan-coordinates", get(japan_coordinates))
        .route("/api/globe-animation-data", get(globe_animation_data))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Bind `config.bind_addr` and serve until Ctrl-C.
pub async fn serve(config: AppConfig) -> Result<()> {
    let addr = config.bind_addr;
    let app = router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!("Serving on http://{addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {err}");
        std::future::pending::<()>().await;
    }
}
