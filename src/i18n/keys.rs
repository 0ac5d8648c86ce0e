//! Typed Message Keys
//!
//! Page code reads messages through a `Namespace` plus a relative key. The
//! fixed keys each namespace must provide are listed here; per-record keys
//! (sector copy and page sections, capability features) are
//! generated from the catalog. `required_paths` is the full list the default
//! locale must resolve before the server will start.

use crate::catalog::{Catalog, InsightCategory, INQUIRY_TYPES, OVERVIEW_POINTS_PER_COLUMN, RISK_ITEMS_PER_GROUP};

/// Fixed-length lists in the message tables
pub const MONTHS: usize = 12;
pub const MISSION_PARAGRAPHS: usize = 2;
pub const ABOUT_PILLARS: usize = 3;
pub const ABOUT_VALUES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    Meta,
    Nav,
    Footer,
    Common,
    Home,
    About,
    Sectors,
    Capabilities,
    CapabilityDetail,
    Contact,
    Insights,
    NotFound,
    Error,
}

impl Namespace {
    pub const ALL: [Namespace; 13] = [
        Namespace::Meta,
        Namespace::Nav,
        Namespace::Footer,
        Namespace::Common,
        Namespace::Home,
        Namespace::About,
        Namespace::Sectors,
        Namespace::Capabilities,
        Namespace::CapabilityDetail,
        Namespace::Contact,
        Namespace::Insights,
        Namespace::NotFound,
        Namespace::Error,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::Meta => "meta",
            Namespace::Nav => "nav",
            Namespace::Footer => "footer",
            Namespace::Common => "common",
            Namespace::Home => "home",
            Namespace::About => "about",
            Namespace::Sectors => "sectors",
            Namespace::Capabilities => "capabilities",
            Namespace::CapabilityDetail => "capabilityDetail",
            Namespace::Contact => "contact",
            Namespace::Insights => "insights",
            Namespace::NotFound => "notFound",
            Namespace::Error => "error",
        }
    }

    /// Keys read by name (not generated from the catalog), relative to the namespace
    pub fn fixed_keys(&self) -> &'static [&'static str] {
        match self {
            Namespace::Meta => &["title", "description", "titleSuffix"],
            Namespace::Nav => &[
                "home", "about", "sectors", "capabilities", "insights", "contact", "language", "skipToContent",
            ],
            Namespace::Footer => &[
                "tagline", "sectors", "capabilities", "company", "careers", "legal", "privacy", "terms",
                "security", "compliance", "copyright",
            ],
            Namespace::Common => &["learnMore", "outcome"],
            Namespace::Home => &[
                "hero.title",
                "hero.subtitle",
                "hero.statement",
                "hero.primaryCta",
                "hero.secondaryCta",
                "whatWeDo.title",
                "sectorGrid.title",
                "sectorGrid.description",
                "operatingModel.title",
                "operatingModel.description",
                "trustSignals.title",
                "cta.title",
                "cta.description",
                "cta.button",
            ],
            Namespace::About => &[
                "meta.title",
                "meta.description",
                "hero.title",
                "hero.tagline",
                "hero.description",
                "mission.heading",
                "values.heading",
            ],
            Namespace::Sectors => &[
                "index.title",
                "index.tagline",
                "index.description",
                "detail.tagline",
                "detail.challengesHeading",
                "detail.challengesIntro",
                "detail.outcomesHeading",
                "detail.outcomesIntro",
                "detail.capabilitiesHeading",
                "detail.ctaTitle",
                "detail.ctaDescription",
                "detail.ctaButton",
            ],
            Namespace::Capabilities => &["index.title", "index.tagline", "index.description"],
            Namespace::CapabilityDetail => &[
                "keyFeatures",
                "useCases",
                "integratesWith",
                "integratesDescription",
                "learnMore",
                "learnMoreDescription",
                "requestInfo",
            ],
            Namespace::Contact => &[
                "meta.title",
                "meta.description",
                "hero.title",
                "hero.tagline",
                "hero.description",
                "form.name",
                "form.namePlaceholder",
                "form.email",
                "form.emailPlaceholder",
                "form.organization",
                "form.organizationPlaceholder",
                "form.role",
                "form.rolePlaceholder",
                "form.inquiryType",
                "form.sector",
                "form.selectPlaceholder",
                "form.message",
                "form.messagePlaceholder",
                "form.consent",
                "form.submit",
                "form.notice",
            ],
            Namespace::Insights => &[
                "meta.title",
                "meta.description",
                "hero.title",
                "hero.tagline",
                "hero.description",
                "featured",
                "minRead",
                "comingSoon",
            ],
            Namespace::NotFound => &["title", "heading", "description", "home"],
            Namespace::Error => &["title", "description", "retry", "home"],
        }
    }

    /// `{namespace}.{key}`
    pub fn path(&self, key: &str) -> String {
        format!("{}.{}", self.as_str(), key)
    }
}

impl From<Namespace> for String {
    fn from(ns: Namespace) -> Self {
        ns.as_str().to_string()
    }
}

/// Every message path a page can ask for, given this catalog
pub fn required_paths(catalog: &Catalog) -> Vec<String> {
    let mut paths = Vec::new();

    for ns in Namespace::ALL {
        paths.extend(ns.fixed_keys().iter().map(|k| ns.path(k)));
    }

    paths.extend((0..MONTHS).map(|i| format!("common.months.{}", i)));
    paths.extend((0..MISSION_PARAGRAPHS).map(|i| format!("about.mission.paragraphs.{}", i)));
    for i in 0..ABOUT_PILLARS {
        paths.push(format!("about.pillars.{}.title", i));
        paths.push(format!("about.pillars.{}.description", i));
    }
    for i in 0..ABOUT_VALUES {
        paths.push(format!("about.values.items.{}.title", i));
        paths.push(format!("about.values.items.{}.description", i));
    }

    for service in catalog.services() {
        for field in ["title", "description"] {
            paths.push(format!("home.whatWeDo.services.{}.{}", service.id, field));
        }
    }
    for step in catalog.operating_steps() {
        for field in ["label", "description"] {
            paths.push(format!("home.operatingModel.steps.{}.{}", step.id, field));
        }
    }
    for signal in catalog.trust_signals() {
        for field in ["title", "description"] {
            paths.push(format!("home.trustSignals.signals.{}.{}", signal.id, field));
        }
    }

    for sector in catalog.all_sectors() {
        let base = format!("sectors.{}", sector.i18n_key);
        for field in ["title", "shortTitle", "description", "longDescription"] {
            paths.push(format!("{}.{}", base, field));
        }
        paths.extend((0..sector.challenges.len()).map(|i| format!("{}.challenges.{}", base, i)));
        paths.extend((0..sector.outcomes.len()).map(|i| format!("{}.outcomes.{}", base, i)));

        if let Some(sections) = catalog.sections_for(sector) {
            paths.push(format!("{}.overview.heading", base));
            paths.push(format!("{}.overview.intro", base));
            for column in sections.overview_columns {
                let column_base = format!("{}.overview.{}", base, column.key());
                paths.push(format!("{}.title", column_base));
                paths.extend((0..OVERVIEW_POINTS_PER_COLUMN).map(|i| format!("{}.points.{}", column_base, i)));
            }

            paths.push(format!("{}.risks.heading", base));
            for group in sections.risk_groups {
                let group_base = format!("{}.risks.{}", base, group.key());
                paths.push(format!("{}.title", group_base));
                for i in 0..RISK_ITEMS_PER_GROUP {
                    paths.push(format!("{}.items.{}.label", group_base, i));
                    paths.push(format!("{}.items.{}.details", group_base, i));
                }
            }

            paths.push(format!("{}.approach.heading", base));
            paths.push(format!("{}.approach.intro", base));
            for tab in sections.approach_tabs {
                for field in ["title", "description", "outcome"] {
                    paths.push(format!("{}.approach.{}.{}", base, tab.key(), field));
                }
            }

            paths.push(format!("{}.value.heading", base));
            for metric in sections.value_metrics {
                for field in ["metric", "label", "impact", "method"] {
                    paths.push(format!("{}.value.{}.{}", base, metric.key(), field));
                }
            }

            paths.push(format!("{}.useCases.heading", base));
            for case in sections.use_cases {
                for field in ["title", "description"] {
                    paths.push(format!("{}.useCases.{}.{}", base, case.key(), field));
                }
            }
        }
    }

    for capability in catalog.all_capabilities() {
        let base = format!("capabilities.{}", capability.i18n_key);
        for field in ["name", "tagline", "description"] {
            paths.push(format!("{}.{}", base, field));
        }
        for feature in capability.features {
            paths.push(format!("{}.features.{}.title", base, feature.key));
            paths.push(format!("{}.features.{}.description", base, feature.key));
        }
        for i in 0..capability.use_cases.len() {
            for field in ["title", "description", "outcome"] {
                paths.push(format!("{}.useCases.{}.{}", base, i, field));
            }
        }
    }

    for category in InsightCategory::ALL {
        paths.push(format!("insights.categories.{}", category.as_str()));
    }
    for inquiry in INQUIRY_TYPES {
        paths.push(format!("contact.inquiryTypes.{}", inquiry));
    }

    paths
}
