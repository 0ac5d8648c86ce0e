// Web-layer errors
//
// Wraps content errors and template failures and maps them onto status codes.
// The localized not-found and error pages are built in `AppState`; the
// `IntoResponse` impl here is the last-resort rendering with no locale.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::error::SiteError;
use crate::pages::StandaloneView;
use crate::web::templates::StandaloneTemplate;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Site(#[from] SiteError),

    #[error("template rendering failed: {0}")]
    Template(#[from] askama::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Site(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            AppError::Site(_) | AppError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == StatusCode::NOT_FOUND
    }
}

/// Render a page that needs neither a locale nor the message tables
pub fn standalone_response(status: StatusCode, view: StandaloneView) -> Response {
    let html = StandaloneTemplate { page: view }.render().unwrap_or_else(|e| {
        tracing::error!("Standalone template failed: {}", e);
        "<!doctype html><title>HC-1</title><h1>HC-1</h1>".to_string()
    });
    (status, Html(html)).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let view = if status == StatusCode::NOT_FOUND {
            StandaloneView::not_found()
        } else {
            tracing::error!("Request failed: {}", self);
            StandaloneView::error("/")
        };
        standalone_response(status, view)
    }
}
