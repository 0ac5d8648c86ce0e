// Shared application state
//
// Catalog and translator are built once and shared read-only; rendered HTML
// is memoised per path in a moka cache.

use std::sync::Arc;

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use moka::future::Cache;

use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::i18n::{required_paths, Locale, Translator};
use crate::pages::{PageBuilder, StandaloneView};
use crate::web::error::{standalone_response, AppError};
use crate::web::templates::{ErrorTemplate, NotFoundTemplate};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub translator: Arc<Translator>,
    /// Rendered HTML keyed by `/{locale}{suffix}`
    pub page_cache: Cache<String, String>,
    pub config: Arc<SiteConfig>,
}

impl AppState {
    pub async fn new(config: SiteConfig) -> anyhow::Result<Self> {
        tracing::info!("Building content catalog...");
        let catalog = Catalog::builtin()?;
        tracing::info!(
            "Catalog ready: {} sectors, {} capabilities, {} insights",
            catalog.all_sectors().len(),
            catalog.all_capabilities().len(),
            catalog.insights().len()
        );

        let issues = catalog.integrity_issues();
        if !issues.is_empty() {
            for issue in &issues {
                tracing::error!("Content integrity: {}", issue);
            }
            anyhow::bail!("content catalog has {} integrity issue(s)", issues.len());
        }

        tracing::info!("Loading message tables...");
        let translator = Translator::builtin()?;

        let missing = translator.missing_required(&required_paths(&catalog));
        if !missing.is_empty() {
            for path in &missing {
                tracing::error!("Missing required message: {}", path);
            }
            anyhow::bail!("{} required message(s) missing from the default locale", missing.len());
        }

        for coverage in translator.coverage().locales {
            if !coverage.fallbacks.is_empty() {
                tracing::warn!(
                    "Locale {} falls back to {} for {} message(s)",
                    coverage.locale,
                    Locale::DEFAULT,
                    coverage.fallbacks.len()
                );
            }
            tracing::info!("Locale {}: {:.1}% translated", coverage.locale, coverage.percent());
        }

        tracing::info!(
            "Initializing page cache (capacity {}, ttl {:?})...",
            config.page_cache_capacity,
            config.page_cache_ttl
        );

        Ok(Self::with_content(catalog, translator, config))
    }

    /// Assemble state from already-built content, without validation
    pub fn with_content(catalog: Catalog, translator: Translator, config: SiteConfig) -> Self {
        let page_cache = Cache::builder()
            .max_capacity(config.page_cache_capacity)
            .time_to_live(config.page_cache_ttl)
            .build();

        Self {
            catalog: Arc::new(catalog),
            translator: Arc::new(translator),
            page_cache,
            config: Arc::new(config),
        }
    }

    pub fn pages(&self, locale: Locale) -> PageBuilder<'_> {
        PageBuilder::new(&self.catalog, &self.translator, locale)
    }

    /// Guard the locale segment, then serve `/{locale}{suffix}` from the cache
    /// or build and render it. Failures become localized 404/500 pages.
    pub async fn render_page<T, F>(&self, raw_locale: &str, suffix: &str, build: F) -> Response
    where
        T: Template,
        F: FnOnce(&PageBuilder<'_>) -> crate::error::Result<T>,
    {
        let Some(locale) = Locale::from_code(raw_locale) else {
            tracing::debug!("Unsupported locale segment '{}'", raw_locale);
            return standalone_response(StatusCode::NOT_FOUND, StandaloneView::not_found());
        };

        let cache_key = format!("/{}{}", locale.code(), suffix);
        if let Some(html) = self.page_cache.get(&cache_key).await {
            tracing::debug!("Cache hit for {}", cache_key);
            return Html(html).into_response();
        }

        let rendered = build(&self.pages(locale))
            .map_err(AppError::from)
            .and_then(|template| template.render().map_err(AppError::from));

        match rendered {
            Ok(html) => {
                self.page_cache.insert(cache_key, html.clone()).await;
                Html(html).into_response()
            }
            Err(err) => self.error_response(locale, suffix, err),
        }
    }

    /// Localized 404 or 500 for a path under `locale`
    pub fn error_response(&self, locale: Locale, suffix: &str, err: AppError) -> Response {
        let pages = self.pages(locale);

        if err.is_not_found() {
            tracing::debug!("Not found: /{}{} ({})", locale, suffix, err);
            let rendered = pages
                .not_found(suffix)
                .map_err(AppError::from)
                .and_then(|page| NotFoundTemplate::from(page).render().map_err(AppError::from));
            return match rendered {
                Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
                Err(e) => {
                    tracing::error!("Localized not-found page failed: {}", e);
                    standalone_response(StatusCode::NOT_FOUND, StandaloneView::not_found())
                }
            };
        }

        tracing::error!("Rendering /{}{} failed: {}", locale, suffix, err);
        let rendered = pages
            .error_page(suffix)
            .map_err(AppError::from)
            .and_then(|page| ErrorTemplate::from(page).render().map_err(AppError::from));
        match rendered {
            Ok(html) => (StatusCode::INTERNAL_SERVER_ERROR, Html(html)).into_response(),
            Err(e) => {
                tracing::error!("Localized error page failed: {}", e);
                let retry = format!("/{}{}", locale, suffix);
                standalone_response(StatusCode::INTERNAL_SERVER_ERROR, StandaloneView::error(&retry))
            }
        }
    }

    /// 404 for a path no route matched
    pub fn route_not_found(&self, path: &str) -> Response {
        let trimmed = path.trim_start_matches('/');
        let (first, rest) = match trimmed.split_once('/') {
            Some((first, rest)) => (first, format!("/{}", rest)),
            None => (trimmed, String::new()),
        };

        match Locale::from_code(first) {
            Some(locale) => self.error_response(locale, &rest, SiteError::RouteNotFound(path.to_string()).into()),
            None => standalone_response(StatusCode::NOT_FOUND, StandaloneView::not_found()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::templates::AboutTemplate;

    fn state() -> AppState {
        AppState::with_content(
            Catalog::builtin().unwrap(),
            Translator::builtin().unwrap(),
            SiteConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_new_accepts_builtin_content() {
        let state = AppState::new(SiteConfig::default()).await.unwrap();
        assert_eq!(state.catalog.all_sectors().len(), 6);
    }

    #[tokio::test]
    async fn test_render_page_caches_success() {
        let state = state();
        let resp = state
            .render_page("en", "/about", |pages| pages.about().map(AboutTemplate::from))
            .await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(state.page_cache.get("/en/about").await.is_some());
    }

    #[tokio::test]
    async fn test_invalid_locale_skips_builder() {
        let state = state();
        let resp = state
            .render_page::<AboutTemplate, _>("de", "/about", |_| panic!("builder must not run"))
            .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(state.page_cache.entry_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_messages_render_generic_error() {
        let state = AppState::with_content(Catalog::builtin().unwrap(), Translator::default(), SiteConfig::default());
        let resp = state
            .render_page("fr", "/about", |pages| pages.about().map(AboutTemplate::from))
            .await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(state.page_cache.get("/fr/about").await.is_none());
    }

    #[test]
    fn test_route_not_found_splits_locale() {
        let state = state();
        assert_eq!(state.route_not_found("/en/nowhere").status(), StatusCode::NOT_FOUND);
        assert_eq!(state.route_not_found("/xx/nowhere").status(), StatusCode::NOT_FOUND);
        assert_eq!(state.route_not_found("/").status(), StatusCode::NOT_FOUND);
    }
}
