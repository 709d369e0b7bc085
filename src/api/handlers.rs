//! HTTP API handlers.

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::db::{AcademicRepository, Mahasiswa};
use crate::error::{IpsError, ServiceError};
use crate::ips::{compute_ips, IpsReport};
use crate::metrics;

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// Read access to the academic tables.
    pub repo: AcademicRepository,
    /// Prometheus render handle for the metrics endpoint.
    pub prometheus: PrometheusHandle,
}

impl AppState {
    /// Create new app state.
    pub fn new(repo: AcademicRepository, prometheus: PrometheusHandle) -> Self {
        Self { repo, prometheus }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status line.
    pub status: &'static str,
    /// Current time, RFC 3339.
    pub timestamp: String,
}

/// Query parameters for the IPS endpoint.
#[derive(Debug, Deserialize)]
pub struct IpsParams {
    /// NIM of the student, e.g. "22002".
    pub nim: String,
}

/// Health check handler - always returns 200, touches no storage.
pub async fn health() -> impl IntoResponse {
    let timestamp = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default();

    Json(HealthResponse {
        status: "Acad Service is running",
        timestamp,
    })
}

/// Mahasiswa listing handler - full table pass-through, no filtering.
pub async fn list_mahasiswa(
    State(state): State<AppState>,
) -> Result<Json<Vec<Mahasiswa>>, ServiceError> {
    let mahasiswa = state.repo.list_mahasiswa().await?;
    metrics::inc_mahasiswa_listed();
    Ok(Json(mahasiswa))
}

/// IPS handler - fetch joined KRS rows for the NIM and reduce them.
pub async fn get_ips(
    State(state): State<AppState>,
    Query(params): Query<IpsParams>,
) -> Result<Json<IpsReport>, ServiceError> {
    let _timer = metrics::timer_ips_compute();

    let rows = state.repo.krs_for_nim(&params.nim).await?;

    let report = compute_ips(&params.nim, &rows).map_err(|e| {
        if matches!(e, IpsError::InvalidGrade { .. }) {
            metrics::inc_invalid_grades();
        }
        e
    })?;

    metrics::inc_ips_computed();
    Ok(Json(report))
}

/// Prometheus exposition handler.
pub async fn render_metrics(State(state): State<AppState>) -> impl IntoResponse {
    state.prometheus.render()
}
