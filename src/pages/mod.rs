//! Page Composition
//!
//! - `builder`: catalog + messages -> view models, one method per route
//! - `view_models`: owned, template-ready data

pub mod builder;
pub mod view_models;

pub use builder::{localized_date, PageBuilder, PageMeta};
pub use view_models::*;
