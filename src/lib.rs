//! HC-1 Corporate Site
//!
//! Server-rendered, multi-locale marketing site.
//!
//! - `catalog/`: sectors, capabilities, insights and home page groups
//! - `i18n/`: locales, message tables, typed keys
//! - `pages/`: view models built from the catalog and the messages
//! - `web/`: axum router, askama templates, page cache (feature `web`)

pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod pages;

#[cfg(feature = "web")]
pub mod web;

// Re-export commonly used types
pub use catalog::{Catalog, IntegrityIssue};
pub use config::SiteConfig;
pub use error::{ContentKind, SiteError};
pub use i18n::{is_valid_locale, switch_locale_path, Locale, Translator};
pub use pages::PageBuilder;

#[cfg(feature = "web")]
pub use web::{create_router, AppState};
