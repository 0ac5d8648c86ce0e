// Content integrity tests
//
// Catalog relations and message tables, checked the same way the server
// does at startup. No web feature needed.

use hc1_site::i18n::required_paths;
use hc1_site::{Catalog, ContentKind, Locale, PageBuilder, SiteError, Translator};

fn content() -> (Catalog, Translator) {
    (Catalog::builtin().unwrap(), Translator::builtin().unwrap())
}

// =========================================================================
// Section 1: Catalog
// =========================================================================

#[test]
fn test_builtin_catalog_has_no_integrity_issues() {
    let (catalog, _) = content();
    let issues = catalog.integrity_issues();
    assert!(issues.is_empty(), "integrity issues: {:?}", issues);
}

#[test]
fn test_every_slug_round_trips() {
    let (catalog, _) = content();

    for sector in catalog.all_sectors() {
        assert_eq!(catalog.find_sector_by_slug(sector.slug).unwrap().id, sector.id);
    }
    for capability in catalog.all_capabilities() {
        assert_eq!(catalog.find_capability_by_slug(capability.slug).unwrap().id, capability.id);
    }
    for insight in catalog.insights() {
        assert_eq!(catalog.find_insight_by_slug(insight.slug).unwrap().slug, insight.slug);
    }
}

#[test]
fn test_unknown_slug_is_typed_not_found() {
    let (catalog, _) = content();
    match catalog.find_sector_by_slug("unknown-sector") {
        Err(SiteError::SlugNotFound { kind, slug }) => {
            assert_eq!(kind, ContentKind::Sector);
            assert_eq!(slug, "unknown-sector");
        }
        other => panic!("expected SlugNotFound, got {:?}", other.map(|s| s.slug)),
    }
}

#[test]
fn test_sector_capabilities_resolve_in_order() {
    let (catalog, _) = content();
    for sector in catalog.all_sectors() {
        let resolved: Vec<&str> = catalog
            .capabilities_for_sector(sector)
            .iter()
            .map(|c| c.slug)
            .collect();
        assert_eq!(resolved, sector.capabilities.to_vec(), "sector {}", sector.slug);
    }
}

#[test]
fn test_every_sector_has_section_row() {
    let (catalog, _) = content();
    for sector in catalog.all_sectors() {
        let sections = catalog
            .sections_for(sector)
            .unwrap_or_else(|| panic!("no sections for {}", sector.slug));
        assert_eq!(sections.overview_columns.len(), 3);
        assert_eq!(sections.risk_groups.len(), 2);
        assert_eq!(sections.approach_tabs.len(), 3);
        assert_eq!(sections.value_metrics.len(), 3);
        assert_eq!(sections.use_cases.len(), 3);
    }
}

// =========================================================================
// Section 2: Message tables
// =========================================================================

#[test]
fn test_required_messages_present_in_every_locale() {
    let (catalog, translator) = content();
    let required = required_paths(&catalog);
    assert!(required.len() > 100, "suspiciously few required paths: {}", required.len());

    for locale in Locale::ALL {
        let missing: Vec<&String> = required
            .iter()
            .filter(|path| !translator.has_entry(locale, path))
            .collect();
        assert!(missing.is_empty(), "{} is missing {:?}", locale, missing);
    }
}

#[test]
fn test_locales_share_one_key_set() {
    let (_, translator) = content();
    let report = translator.coverage();
    for coverage in &report.locales {
        assert!(coverage.fallbacks.is_empty(), "{} falls back: {:?}", coverage.locale, coverage.fallbacks);
        assert!(coverage.orphans.is_empty(), "{} orphans: {:?}", coverage.locale, coverage.orphans);
    }
    assert!(report.is_complete());
}

#[test]
fn test_catalog_english_matches_default_messages() {
    let (catalog, translator) = content();
    let en = |path: String| translator.resolve(Locale::En, &path).unwrap().to_string();

    for sector in catalog.all_sectors() {
        let base = format!("sectors.{}", sector.i18n_key);
        assert_eq!(sector.title, en(format!("{}.title", base)));
        assert_eq!(sector.short_title, en(format!("{}.shortTitle", base)));
        assert_eq!(sector.description, en(format!("{}.description", base)));
        assert_eq!(sector.long_description, en(format!("{}.longDescription", base)));
        for (i, challenge) in sector.challenges.iter().enumerate() {
            assert_eq!(*challenge, en(format!("{}.challenges.{}", base, i)));
        }
        for (i, outcome) in sector.outcomes.iter().enumerate() {
            assert_eq!(*outcome, en(format!("{}.outcomes.{}", base, i)));
        }
    }

    for capability in catalog.all_capabilities() {
        let base = format!("capabilities.{}", capability.i18n_key);
        assert_eq!(capability.name, en(format!("{}.name", base)));
        assert_eq!(capability.tagline, en(format!("{}.tagline", base)));
        assert_eq!(capability.description, en(format!("{}.description", base)));
        for feature in capability.features {
            let feature_base = format!("{}.features.{}", base, feature.key);
            assert_eq!(feature.title, en(format!("{}.title", feature_base)));
            assert_eq!(feature.description, en(format!("{}.description", feature_base)));
        }
        for (i, use_case) in capability.use_cases.iter().enumerate() {
            let case_base = format!("{}.useCases.{}", base, i);
            assert_eq!(use_case.title, en(format!("{}.title", case_base)));
            assert_eq!(use_case.description, en(format!("{}.description", case_base)));
            assert_eq!(use_case.outcome, en(format!("{}.outcome", case_base)));
        }
    }
}

// =========================================================================
// Section 3: Page building without templates
// =========================================================================

#[test]
fn test_every_page_builds_in_every_locale() {
    let (catalog, translator) = content();

    for locale in Locale::ALL {
        let pages = PageBuilder::new(&catalog, &translator, locale);
        pages.home().unwrap();
        pages.about().unwrap();
        pages.sectors().unwrap();
        pages.capabilities().unwrap();
        pages.contact().unwrap();
        pages.insights().unwrap();
        pages.not_found("/missing").unwrap();
        pages.error_page("/about").unwrap();

        for sector in catalog.all_sectors() {
            let page = pages.sector(sector.slug).unwrap();
            assert_eq!(page.layout.lang, locale.code());
            assert_eq!(page.body.risk_groups.len(), 2);
            assert_eq!(page.body.overview_columns.len(), 3);
            assert_eq!(page.body.value_metrics.len(), 3);
            assert_eq!(page.body.use_cases.len(), 3);
        }
        for capability in catalog.all_capabilities() {
            let page = pages.capability(capability.slug).unwrap();
            assert_eq!(page.body.related.len(), capability.integrations.len());
        }
    }
}
