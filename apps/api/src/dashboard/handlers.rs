//! Axum route handlers for the public comparison dashboard.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::dashboard::service::{compare, DashboardView, DEFAULT_CROP_A, DEFAULT_CROP_B};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct DashboardParams {
    pub crop_a: Option<String>,
    pub crop_b: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    #[serde(flatten)]
    pub view: DashboardView,
    pub current_crop_a: String,
    pub current_crop_b: String,
}

/// GET /public/
pub async fn handle_public_index() -> Json<Value> {
    Json(json!({
        "section": "public",
        "endpoints": ["/public/dashboard/"],
    }))
}

/// GET /public/dashboard/?crop_a=&crop_b=
///
/// Comparison payload for two named crops; unspecified names fall back to
/// the default pairing.
pub async fn handle_dashboard(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> Json<DashboardResponse> {
    let crop_a = params
        .crop_a
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_CROP_A)
        .to_string();
    let crop_b = params
        .crop_b
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_CROP_B)
        .to_string();

    let view = compare(&state.catalog, &crop_a, &crop_b);

    Json(DashboardResponse {
        view,
        current_crop_a: crop_a,
        current_crop_b: crop_b,
    })
}
