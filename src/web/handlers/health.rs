use axum::{extract::State, response::IntoResponse, Json};

use crate::i18n::Locale;
use crate::web::state::AppState;

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let locales: Vec<&str> = Locale::ALL.iter().map(|l| l.code()).collect();

    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "catalog": {
            "sectors": state.catalog.all_sectors().len(),
            "capabilities": state.catalog.all_capabilities().len(),
            "insights": state.catalog.insights().len(),
        },
        "locales": locales,
        "cached_pages": state.page_cache.entry_count(),
    }))
}
