// Page handlers for HTML rendering with Askama
//
// Each handler names its path suffix and the builder call; guarding,
// caching and error pages live in `AppState::render_page`.

use axum::{
    extract::{Path, State},
    http::Uri,
    response::Response,
};

use crate::web::state::AppState;
use crate::web::templates::*;

// ============================================================================
// Company pages
// ============================================================================

pub async fn home(State(state): State<AppState>, Path(locale): Path<String>) -> Response {
    state
        .render_page(&locale, "", |pages| pages.home().map(HomeTemplate::from))
        .await
}

pub async fn about(State(state): State<AppState>, Path(locale): Path<String>) -> Response {
    state
        .render_page(&locale, "/about", |pages| pages.about().map(AboutTemplate::from))
        .await
}

pub async fn contact(State(state): State<AppState>, Path(locale): Path<String>) -> Response {
    state
        .render_page(&locale, "/contact", |pages| pages.contact().map(ContactTemplate::from))
        .await
}

pub async fn insights(State(state): State<AppState>, Path(locale): Path<String>) -> Response {
    state
        .render_page(&locale, "/insights", |pages| pages.insights().map(InsightsTemplate::from))
        .await
}

// ============================================================================
// Sectors
// ============================================================================

pub async fn sectors(State(state): State<AppState>, Path(locale): Path<String>) -> Response {
    state
        .render_page(&locale, "/sectors", |pages| pages.sectors().map(SectorIndexTemplate::from))
        .await
}

pub async fn sector(
    State(state): State<AppState>,
    Path((locale, slug)): Path<(String, String)>,
) -> Response {
    let suffix = format!("/sectors/{}", slug);
    state
        .render_page(&locale, &suffix, |pages| pages.sector(&slug).map(SectorTemplate::from))
        .await
}

// ============================================================================
// Capabilities
// ============================================================================

pub async fn capabilities(State(state): State<AppState>, Path(locale): Path<String>) -> Response {
    state
        .render_page(&locale, "/capabilities", |pages| {
            pages.capabilities().map(CapabilityIndexTemplate::from)
        })
        .await
}

pub async fn capability(
    State(state): State<AppState>,
    Path((locale, slug)): Path<(String, String)>,
) -> Response {
    let suffix = format!("/capabilities/{}", slug);
    state
        .render_page(&locale, &suffix, |pages| pages.capability(&slug).map(CapabilityTemplate::from))
        .await
}

// ============================================================================
// Fallback
// ============================================================================

pub async fn not_found(State(state): State<AppState>, uri: Uri) -> Response {
    state.route_not_found(uri.path())
}
