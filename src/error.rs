//! Site Errors
//!
//! One error enum for the content layer. The web layer maps these onto
//! status codes (see `web::error`); binaries wrap them with `anyhow`.

use std::fmt;

use thiserror::Error;

use crate::i18n::Locale;

/// Which catalog collection a slug was looked up in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Sector,
    Capability,
    Insight,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Sector => "sector",
            ContentKind::Capability => "capability",
            ContentKind::Insight => "insight",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum SiteError {
    /// URL locale segment outside the supported set
    #[error("unsupported locale '{0}'")]
    InvalidLocale(String),

    #[error("no {kind} with slug '{slug}'")]
    SlugNotFound { kind: ContentKind, slug: String },

    #[error("no route for '{0}'")]
    RouteNotFound(String),

    /// Key absent in both the requested and the default locale
    #[error("missing translation '{path}' for locale {locale}")]
    MissingTranslation { locale: Locale, path: String },

    #[error("duplicate {kind} slug '{slug}'")]
    DuplicateSlug { kind: ContentKind, slug: String },

    #[error("message table for {locale} is not valid JSON")]
    MessageTable {
        locale: Locale,
        #[source]
        source: serde_json::Error,
    },

    #[error("message table for {locale} must be a JSON object at the top level")]
    MessageShape { locale: Locale },
}

impl SiteError {
    /// Errors a visitor can cause by typing a bad URL
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            SiteError::InvalidLocale(_) | SiteError::SlugNotFound { .. } | SiteError::RouteNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
