//! Message Tables
//!
//! Each locale's JSON document is flattened into `dot.path -> string` at
//! startup. Objects join keys with `.`, arrays use their index, so
//! `{"items": [{"label": "x"}]}` becomes `items.0.label`.
//!
//! Lookup falls back to the default locale. An empty string counts as absent.

use rustc_hash::FxHashMap;
use serde::Serialize;
use serde_json::Value;

use super::Locale;
use crate::error::{Result, SiteError};

static BUILTIN_MESSAGES: &[(Locale, &str)] = &[
    (Locale::En, include_str!("../../messages/en.json")),
    (Locale::Fr, include_str!("../../messages/fr.json")),
    (Locale::Pt, include_str!("../../messages/pt.json")),
];

#[derive(Debug, Clone, Default)]
pub struct Translator {
    tables: [FxHashMap<String, String>; 3],
}

impl Translator {
    /// Message tables compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::from_json_sources(BUILTIN_MESSAGES.iter().copied())
    }

    /// Build from `(locale, json)` pairs. Locales without a source get an empty table.
    pub fn from_json_sources<'a, I>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Locale, &'a str)>,
    {
        let mut translator = Translator::default();

        for (locale, source) in sources {
            let document: Value = serde_json::from_str(source)
                .map_err(|source| SiteError::MessageTable { locale, source })?;
            if !document.is_object() {
                return Err(SiteError::MessageShape { locale });
            }

            let table = &mut translator.tables[locale.index()];
            flatten_into(table, String::new(), &document);
            tracing::debug!("Loaded {} messages for {}", table.len(), locale);
        }

        Ok(translator)
    }

    /// The locale's own entry, without fallback
    fn own(&self, locale: Locale, path: &str) -> Option<&str> {
        self.tables[locale.index()]
            .get(path)
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    pub fn has_entry(&self, locale: Locale, path: &str) -> bool {
        self.own(locale, path).is_some()
    }

    pub fn resolve(&self, locale: Locale, path: &str) -> Result<&str> {
        if let Some(text) = self.own(locale, path) {
            return Ok(text);
        }
        if !locale.is_default() {
            if let Some(text) = self.own(Locale::DEFAULT, path) {
                tracing::debug!("'{}' falls back from {} to {}", path, locale, Locale::DEFAULT);
                return Ok(text);
            }
        }
        Err(SiteError::MissingTranslation {
            locale,
            path: path.to_string(),
        })
    }

    /// `{prefix}.0`, `{prefix}.1`, ... up to `count`, stopping at the first gap
    pub fn resolve_all(&self, locale: Locale, prefix: &str, count: usize) -> Vec<&str> {
        (0..count)
            .map_while(|i| self.resolve(locale, &format!("{}.{}", prefix, i)).ok())
            .collect()
    }

    /// `{prefix}.{i}.{field}` for each index, stopping at the first gap
    pub fn resolve_all_field(&self, locale: Locale, prefix: &str, count: usize, field: &str) -> Vec<&str> {
        (0..count)
            .map_while(|i| {
                self.resolve(locale, &format!("{}.{}.{}", prefix, i, field)).ok()
            })
            .collect()
    }

    /// A view rooted at one namespace: `scope(l, "home").t("hero.title")`
    pub fn scope(&self, locale: Locale, namespace: impl Into<String>) -> Scope<'_> {
        Scope {
            translator: self,
            locale,
            prefix: namespace.into(),
        }
    }

    /// Paths of one locale's table, sorted
    pub fn paths(&self, locale: Locale) -> Vec<&str> {
        let mut paths: Vec<&str> = self.tables[locale.index()]
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, _)| k.as_str())
            .collect();
        paths.sort_unstable();
        paths
    }

    /// Required paths the default locale cannot resolve. Empty means every
    /// locale renders, since everything else falls back to the default.
    pub fn missing_required<S: AsRef<str>>(&self, required: &[S]) -> Vec<String> {
        required
            .iter()
            .map(AsRef::as_ref)
            .filter(|path| !self.has_entry(Locale::DEFAULT, path))
            .map(str::to_string)
            .collect()
    }

    /// Per non-default locale: which default paths fall back, and which
    /// paths exist only in that locale
    pub fn coverage(&self) -> CoverageReport {
        let defaults = self.paths(Locale::DEFAULT);

        let locales = Locale::ALL
            .into_iter()
            .filter(|l| !l.is_default())
            .map(|locale| {
                let fallbacks: Vec<String> = defaults
                    .iter()
                    .filter(|p| !self.has_entry(locale, p))
                    .map(|p| p.to_string())
                    .collect();
                let orphans: Vec<String> = self
                    .paths(locale)
                    .into_iter()
                    .filter(|p| !self.has_entry(Locale::DEFAULT, p))
                    .map(str::to_string)
                    .collect();

                LocaleCoverage {
                    locale,
                    total: defaults.len(),
                    translated: defaults.len() - fallbacks.len(),
                    fallbacks,
                    orphans,
                }
            })
            .collect();

        CoverageReport { locales }
    }
}

fn flatten_into(table: &mut FxHashMap<String, String>, prefix: String, value: &Value) {
    let join = |key: &str| {
        if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", prefix, key)
        }
    };

    match value {
        Value::Object(map) => {
            for (key, child) in map {
                flatten_into(table, join(key), child);
            }
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                flatten_into(table, join(&i.to_string()), child);
            }
        }
        Value::String(s) => {
            table.insert(prefix, s.clone());
        }
        Value::Number(n) => {
            table.insert(prefix, n.to_string());
        }
        Value::Bool(b) => {
            table.insert(prefix, b.to_string());
        }
        Value::Null => {}
    }
}

// ============================================================================
// Scoped lookups
// ============================================================================

#[derive(Debug, Clone)]
pub struct Scope<'a> {
    translator: &'a Translator,
    locale: Locale,
    prefix: String,
}

impl<'a> Scope<'a> {
    fn path(&self, key: &str) -> String {
        if self.prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.prefix, key)
        }
    }

    pub fn t(&self, key: &str) -> Result<&'a str> {
        self.translator.resolve(self.locale, &self.path(key))
    }

    /// Owned copy, for view models
    pub fn s(&self, key: &str) -> Result<String> {
        self.t(key).map(str::to_string)
    }

    pub fn list(&self, key: &str, count: usize) -> Vec<String> {
        self.translator
            .resolve_all(self.locale, &self.path(key), count)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn list_field(&self, key: &str, count: usize, field: &str) -> Vec<String> {
        self.translator
            .resolve_all_field(self.locale, &self.path(key), count, field)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn nested(&self, key: &str) -> Scope<'a> {
        Scope {
            translator: self.translator,
            locale: self.locale,
            prefix: self.path(key),
        }
    }
}

// ============================================================================
// Coverage report
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct LocaleCoverage {
    pub locale: Locale,
    pub total: usize,
    pub translated: usize,
    pub fallbacks: Vec<String>,
    pub orphans: Vec<String>,
}

impl LocaleCoverage {
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            self.translated as f64 * 100.0 / self.total as f64
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CoverageReport {
    pub locales: Vec<LocaleCoverage>,
}

impl CoverageReport {
    pub fn is_complete(&self) -> bool {
        self.locales
            .iter()
            .all(|c| c.fallbacks.is_empty() && c.orphans.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Translator {
        Translator::from_json_sources([
            (
                Locale::En,
                r#"{
                    "home": {"hero": {"title": "Welcome", "subtitle": "Sub"}},
                    "risks": {"items": [{"label": "A"}, {"label": "B"}, {"label": "C"}]},
                    "months": ["January", "February"]
                }"#,
            ),
            (
                Locale::Fr,
                r#"{
                    "home": {"hero": {"title": "Bienvenue", "subtitle": ""}},
                    "risks": {"items": [{"label": "A-fr"}]},
                    "extra": "seulement en français"
                }"#,
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_resolve_prefers_own_locale() {
        let t = sample();
        assert_eq!(t.resolve(Locale::Fr, "home.hero.title").unwrap(), "Bienvenue");
        assert_eq!(t.resolve(Locale::En, "home.hero.title").unwrap(), "Welcome");
    }

    #[test]
    fn test_empty_string_falls_back() {
        let t = sample();
        assert_eq!(t.resolve(Locale::Fr, "home.hero.subtitle").unwrap(), "Sub");
        assert!(!t.has_entry(Locale::Fr, "home.hero.subtitle"));
    }

    #[test]
    fn test_missing_locale_table_falls_back() {
        let t = sample();
        assert_eq!(t.resolve(Locale::Pt, "months.1").unwrap(), "February");
    }

    #[test]
    fn test_missing_everywhere_is_an_error() {
        let t = sample();
        match t.resolve(Locale::Fr, "home.hero.nope") {
            Err(SiteError::MissingTranslation { locale, path }) => {
                assert_eq!(locale, Locale::Fr);
                assert_eq!(path, "home.hero.nope");
            }
            other => panic!("expected MissingTranslation, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_all_mixes_fallback_and_stops_at_gap() {
        let t = sample();
        assert_eq!(t.resolve_all_field(Locale::Fr, "risks.items", 3, "label"), vec!["A-fr", "B", "C"]);
        assert_eq!(t.resolve_all_field(Locale::En, "risks.items", 5, "label").len(), 3);
        assert_eq!(t.resolve_all(Locale::En, "months", 12), vec!["January", "February"]);
    }

    #[test]
    fn test_scope_nests_prefixes() {
        let t = sample();
        let home = t.scope(Locale::Fr, "home");
        assert_eq!(home.t("hero.title").unwrap(), "Bienvenue");
        assert_eq!(home.nested("hero").t("subtitle").unwrap(), "Sub");
        assert_eq!(t.scope(Locale::En, "risks").list_field("items", 3, "label").len(), 3);
    }

    #[test]
    fn test_coverage_lists_fallbacks_and_orphans() {
        let report = sample().coverage();
        assert!(!report.is_complete());

        let fr = report.locales.iter().find(|c| c.locale == Locale::Fr).unwrap();
        assert!(fr.fallbacks.contains(&"home.hero.subtitle".to_string()));
        assert!(fr.fallbacks.contains(&"months.0".to_string()));
        assert_eq!(fr.orphans, vec!["extra".to_string()]);

        let pt = report.locales.iter().find(|c| c.locale == Locale::Pt).unwrap();
        assert_eq!(pt.translated, 0);
    }

    #[test]
    fn test_missing_required_checks_default_locale() {
        let t = sample();
        let missing = t.missing_required(&["home.hero.title", "home.cta.title"]);
        assert_eq!(missing, vec!["home.cta.title".to_string()]);
    }

    #[test]
    fn test_bad_json_is_a_table_error() {
        let err = Translator::from_json_sources([(Locale::Fr, "{not json")]).unwrap_err();
        assert!(matches!(err, SiteError::MessageTable { locale: Locale::Fr, .. }));

        let err = Translator::from_json_sources([(Locale::En, "[1, 2]")]).unwrap_err();
        assert!(matches!(err, SiteError::MessageShape { locale: Locale::En }));
    }

    #[test]
    fn test_builtin_tables_are_complete() {
        let t = Translator::builtin().unwrap();
        assert!(t.coverage().is_complete(), "{:#?}", t.coverage());
        assert_eq!(t.resolve(Locale::Pt, "nav.home").unwrap(), "Início");
    }
}
