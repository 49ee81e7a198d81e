//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for the chart computation.

use axum::{
    extract::{Query, State},
    http::Uri,
    response::Html,
    Json,
};
use qtty::Kilograms;

use super::dto::{
    DatasetSummary, HealthResponse, PayloadScatterData, PayloadScatterQuery, PayloadSliderData,
    SiteOptionsData, SuccessPieData, SuccessPieQuery,
};
use super::error::AppError;
use super::state::AppState;
use crate::models::{PayloadRange, SiteSelection};
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Dashboard page, embedded at compile time.
const DASHBOARD_PAGE: &str = include_str!("../../assets/index.html");

/// How much of the checksum the health endpoint reports.
const CHECKSUM_PREFIX_LEN: usize = 12;

// =============================================================================
// Dashboard page
// =============================================================================

/// GET /
///
/// Serve the embedded dashboard page.
pub async fn dashboard_page() -> Html<&'static str> {
    Html(DASHBOARD_PAGE)
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint reporting the loaded dataset.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let dataset = &state.dataset;
    let checksum = dataset
        .checksum()
        .chars()
        .take(CHECKSUM_PREFIX_LEN)
        .collect();

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        dataset: DatasetSummary {
            records: dataset.len(),
            sites: dataset.sites().len(),
            checksum,
        },
    }))
}

// =============================================================================
// Control endpoints
// =============================================================================

/// GET /v1/sites
///
/// Dropdown options for the site selector, sentinel first.
pub async fn get_site_options(State(state): State<AppState>) -> HandlerResult<SiteOptionsData> {
    Ok(Json(services::site_options(&state.dataset)))
}

/// GET /v1/payload-range
///
/// Bounds, step and marks for the payload slider.
pub async fn get_payload_range(State(state): State<AppState>) -> HandlerResult<PayloadSliderData> {
    Ok(Json(services::payload_slider(&state.dataset)))
}

// =============================================================================
// Chart endpoints
// =============================================================================

/// GET /v1/charts/success-pie
///
/// Success pie for the selected site (or every site).
pub async fn get_success_pie(
    State(state): State<AppState>,
    Query(query): Query<SuccessPieQuery>,
) -> HandlerResult<SuccessPieData> {
    let selection = site_selection(query.site.as_deref());

    Ok(Json(services::compute_success_pie(
        state.dataset.records(),
        &selection,
    )))
}

/// GET /v1/charts/payload-scatter
///
/// Payload/outcome scatter for the selected site and payload range.
pub async fn get_payload_scatter(
    State(state): State<AppState>,
    Query(query): Query<PayloadScatterQuery>,
) -> HandlerResult<PayloadScatterData> {
    let selection = site_selection(query.site.as_deref());
    let range = payload_range(&query, state.dataset.payload_domain())?;

    Ok(Json(services::compute_payload_scatter(
        state.dataset.records(),
        &selection,
        &range,
    )))
}

// =============================================================================
// Fallback
// =============================================================================

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

// =============================================================================
// Query helpers
// =============================================================================

fn site_selection(param: Option<&str>) -> SiteSelection {
    match param {
        Some(value) => SiteSelection::from_param(value),
        None => SiteSelection::All,
    }
}

/// Resolve the requested payload range, defaulting each missing end to
/// the dataset bound. An inverted range is passed through as-is; the
/// filter treats it as empty rather than an error.
fn payload_range(
    query: &PayloadScatterQuery,
    domain: PayloadRange,
) -> Result<PayloadRange, AppError> {
    let min = match query.payload_min.as_deref() {
        Some(raw) => Kilograms::new(parse_bound("payload_min", raw)?),
        None => domain.min,
    };
    let max = match query.payload_max.as_deref() {
        Some(raw) => Kilograms::new(parse_bound("payload_max", raw)?),
        None => domain.max,
    };
    Ok(PayloadRange::new(min, max))
}

fn parse_bound(name: &str, raw: &str) -> Result<f64, AppError> {
    raw.parse::<f64>()
        .map_err(|_| AppError::BadRequest(format!("Invalid {}: '{}' is not a number", name, raw)))
}
