//! Axum route handlers for the landing page and research catalog.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::catalog::query::{find_entry, query, CatalogEntry, CatalogFilter, CatalogPage};
use crate::errors::AppError;
use crate::models::catalog::QcStatus;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CatalogParams {
    pub crop: Option<String>,
    pub part: Option<String>,
    pub origin: Option<String>,
    pub year: Option<String>,
    pub qc: Option<String>,
    pub selected: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    #[serde(flatten)]
    pub page: CatalogPage,
    pub selected: Option<CatalogEntry>,
    pub current_crop: String,
    pub current_part: String,
    pub current_origin: String,
    pub current_year: String,
    pub current_qc: String,
}

/// GET /
///
/// Landing summary: distinct crop count and total compound count.
pub async fn handle_landing(State(state): State<AppState>) -> Json<Value> {
    let crops = state.catalog.crops();
    let mut names: Vec<&str> = crops.iter().map(|c| c.name_ko.as_str()).collect();
    names.sort_unstable();
    names.dedup();

    Json(json!({
        "crop_count": names.len(),
        "compound_count": state.catalog.counts().compounds,
    }))
}

/// GET /research/
pub async fn handle_research_index() -> Json<Value> {
    Json(json!({
        "section": "research",
        "endpoints": ["/research/catalog/"],
    }))
}

/// GET /research/catalog/?crop=&part=&origin=&year=&qc=&selected=
///
/// Filtered compound list joined with crop attributes. QC defaults to PASS
/// when the caller supplies none; empty query values count as absent.
pub async fn handle_catalog(
    State(state): State<AppState>,
    Query(params): Query<CatalogParams>,
) -> Result<Json<CatalogResponse>, AppError> {
    let filter = build_filter(&params)?;

    let selected = match params.selected.as_deref().filter(|s| !s.is_empty()) {
        Some(raw) => {
            let id: u32 = raw
                .parse()
                .map_err(|_| AppError::Validation(format!("invalid selected id: {raw}")))?;
            find_entry(&state.catalog, id)
        }
        None => None,
    };

    let page = query(&state.catalog, &filter);

    Ok(Json(CatalogResponse {
        current_crop: filter.crop.clone().unwrap_or_default(),
        current_part: filter.part.clone().unwrap_or_default(),
        current_origin: filter.origin.clone().unwrap_or_default(),
        current_year: filter.year.map(|y| y.to_string()).unwrap_or_default(),
        current_qc: filter
            .qc
            .map(|qc| qc.as_str().to_string())
            .unwrap_or_default(),
        page,
        selected,
    }))
}

fn build_filter(params: &CatalogParams) -> Result<CatalogFilter, AppError> {
    let year = match params.year.as_deref().filter(|s| !s.is_empty()) {
        Some(raw) => Some(
            raw.parse::<i32>()
                .map_err(|_| AppError::Validation(format!("invalid year: {raw}")))?,
        ),
        None => None,
    };

    // Default QC filter is PASS; callers wanting REVIEW rows ask for them
    let qc = match params.qc.as_deref().filter(|s| !s.is_empty()) {
        Some(raw) => Some(
            QcStatus::parse(raw)
                .ok_or_else(|| AppError::Validation(format!("invalid qc status: {raw}")))?,
        ),
        None => Some(QcStatus::Pass),
    };

    Ok(CatalogFilter {
        crop: params.crop.clone().filter(|s| !s.is_empty()),
        part: params.part.clone().filter(|s| !s.is_empty()),
        origin: params.origin.clone().filter(|s| !s.is_empty()),
        year,
        qc,
    })
}
