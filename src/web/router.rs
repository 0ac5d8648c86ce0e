// ============================================================================
// Router
// ============================================================================

use axum::{
    http::{header::ACCEPT_LANGUAGE, HeaderMap},
    response::Redirect,
    routing::get,
    Router,
};
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::i18n::negotiate;
use crate::web::handlers::{health_check, pages};
use crate::web::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        // Bare root picks a locale from Accept-Language
        .route("/", get(redirect_to_locale))
        .route("/health", get(health_check))

        // Localized pages
        .route("/:locale", get(pages::home))
        .route("/:locale/about", get(pages::about))
        .route("/:locale/sectors", get(pages::sectors))
        .route("/:locale/sectors/:slug", get(pages::sector))
        .route("/:locale/capabilities", get(pages::capabilities))
        .route("/:locale/capabilities/:slug", get(pages::capability))
        .route("/:locale/contact", get(pages::contact))
        .route("/:locale/insights", get(pages::insights))

        // Stylesheet and assets
        .nest_service("/static", static_files)

        .fallback(pages::not_found)

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

async fn redirect_to_locale(headers: HeaderMap) -> Redirect {
    let header = headers.get(ACCEPT_LANGUAGE).and_then(|v| v.to_str().ok());
    let locale = negotiate(header);
    tracing::debug!("Redirecting / to /{} (Accept-Language: {:?})", locale, header);
    Redirect::temporary(&format!("/{}", locale.code()))
}
