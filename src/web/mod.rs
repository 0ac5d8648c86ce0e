//! Web Layer
//!
//! - `router`: routes, static files, middleware
//! - `handlers`: one async fn per page plus health
//! - `state`: shared catalog/translator, page cache, render pipeline
//! - `templates`: askama structs over `templates/`
//! - `error`: `AppError` and the no-locale fallback pages

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
pub mod templates;

pub use error::AppError;
pub use router::create_router;
pub use state::AppState;
