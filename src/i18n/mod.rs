//! Locales and Translation Lookup
//!
//! - `Locale`: the closed set of supported site languages
//! - `translator`: flattened message tables with default-locale fallback
//! - `keys`: typed namespaces and the required-key list derived from the catalog
//!
//! URL locale segments are matched case-sensitively; `Accept-Language`
//! negotiation is case-insensitive.

pub mod keys;
pub mod translator;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::SiteError;

pub use keys::{required_paths, Namespace};
pub use translator::{CoverageReport, Scope, Translator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Fr,
    Pt,
}

impl Locale {
    /// Declaration order drives the language switcher and hreflang alternates
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Fr, Locale::Pt];

    pub const DEFAULT: Locale = Locale::En;

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
            Locale::Pt => "pt",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Fr => "Français",
            Locale::Pt => "Português",
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            Locale::En => "🇬🇧",
            Locale::Fr => "🇫🇷",
            Locale::Pt => "🇵🇹",
        }
    }

    /// BCP 47 tag for `<html lang>` and Open Graph
    pub fn og_locale(&self) -> &'static str {
        match self {
            Locale::En => "en_GB",
            Locale::Fr => "fr_FR",
            Locale::Pt => "pt_PT",
        }
    }

    /// Exact match only: "EN" and "en-GB" are not locales
    pub fn from_code(candidate: &str) -> Option<Locale> {
        Locale::ALL.into_iter().find(|l| l.code() == candidate)
    }

    pub fn is_default(&self) -> bool {
        *self == Locale::DEFAULT
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Locale::En => 0,
            Locale::Fr => 1,
            Locale::Pt => 2,
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::DEFAULT
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_code(s).ok_or_else(|| SiteError::InvalidLocale(s.to_string()))
    }
}

pub fn is_valid_locale(candidate: &str) -> bool {
    Locale::from_code(candidate).is_some()
}

/// Replace the leading path segment with `target`; everything after it passes through.
///
/// The first segment is replaced whether or not it was a locale, so `/` and
/// `""` both become `/{target}`.
pub fn switch_locale_path(path: &str, target: Locale) -> String {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    match trimmed.split_once('/') {
        Some((_, rest)) => format!("/{}/{}", target.code(), rest),
        None => format!("/{}", target.code()),
    }
}

/// Pick the best supported locale from an `Accept-Language` header value.
///
/// Highest q-value wins, ties go to the earlier entry. Region subtags are
/// ignored (`fr-CA` counts as `fr`), `*` matches the default locale.
/// Entries with `q=0` or a q-value that is not a number in `0..=1` are skipped.
pub fn negotiate(accept_language: Option<&str>) -> Locale {
    let Some(header) = accept_language else {
        return Locale::DEFAULT;
    };

    let mut best: Option<(Locale, f32)> = None;

    for entry in header.split(',') {
        let mut parts = entry.split(';');
        let tag = parts.next().unwrap_or("").trim();
        if tag.is_empty() {
            continue;
        }

        let quality = match parts.find_map(|p| p.trim().strip_prefix("q=")) {
            Some(raw) => match raw.trim().parse::<f32>() {
                Ok(q) if q.is_finite() && (0.0..=1.0).contains(&q) => q,
                _ => continue,
            },
            None => 1.0,
        };
        if quality <= 0.0 {
            continue;
        }

        let locale = if tag == "*" {
            Some(Locale::DEFAULT)
        } else {
            let primary = tag.split(['-', '_']).next().unwrap_or(tag).to_ascii_lowercase();
            Locale::from_code(&primary)
        };

        if let Some(locale) = locale {
            match best {
                Some((_, q)) if q >= quality => {}
                _ => best = Some((locale, quality)),
            }
        }
    }

    best.map(|(l, _)| l).unwrap_or(Locale::DEFAULT)
}
