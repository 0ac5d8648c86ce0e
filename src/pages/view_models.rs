//! View Models
//!
//! Fully resolved, owned data for templates. Nothing here touches the
//! catalog or the translator; templates only format what they are given.

use serde::Serialize;

// ============================================================================
// Shared pieces
// ============================================================================

#[derive(Debug, Clone, Serialize, Default)]
pub struct LinkView {
    pub label: String,
    pub href: String,
}

impl LinkView {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Hero button; `primary` picks the filled style
#[derive(Debug, Clone, Serialize, Default)]
pub struct ActionView {
    pub label: String,
    pub href: String,
    pub primary: bool,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct HeroView {
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub actions: Vec<ActionView>,
}

/// Generic titled card (services, trust signals, pillars, values, features)
#[derive(Debug, Clone, Serialize, Default)]
pub struct CardView {
    pub id: String,
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct CtaView {
    pub title: String,
    pub description: String,
    pub button: LinkView,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct SectorCard {
    pub slug: String,
    pub href: String,
    pub icon: String,
    pub title: String,
    pub short_title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct CapabilityCard {
    pub slug: String,
    pub href: String,
    pub name: String,
    pub tagline: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct OptionView {
    pub value: String,
    pub label: String,
}

// ============================================================================
// Layout
// ============================================================================

#[derive(Debug, Clone, Serialize, Default)]
pub struct NavItemView {
    pub label: String,
    pub href: String,
    pub active: bool,
    pub children: Vec<NavChildView>,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct NavChildView {
    pub label: String,
    pub href: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct LanguageOption {
    pub code: String,
    pub name: String,
    pub flag: String,
    pub href: String,
    pub current: bool,
}

/// `<link rel="alternate" hreflang=...>`
#[derive(Debug, Clone, Serialize, Default)]
pub struct AlternateLink {
    pub hreflang: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct FooterSection {
    pub title: String,
    pub links: Vec<LinkView>,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct FooterView {
    pub tagline: String,
    pub sections: Vec<FooterSection>,
    pub legal_title: String,
    pub legal: Vec<LinkView>,
    pub copyright: String,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct LayoutView {
    pub lang: String,
    pub og_locale: String,
    pub site_name: String,
    /// Full `<title>` text
    pub title: String,
    pub description: String,
    /// Comma-separated, empty when the page has none
    pub keywords: String,
    pub canonical_url: String,
    pub og_image: String,
    pub twitter_handle: String,
    pub path: String,
    pub home_href: String,
    pub skip_to_content: String,
    pub nav: Vec<NavItemView>,
    pub language_label: String,
    pub current_language: String,
    pub languages: Vec<LanguageOption>,
    pub alternates: Vec<AlternateLink>,
    pub footer: FooterView,
}

/// A page: shared layout plus a page-specific body
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub layout: LayoutView,
    pub body: T,
}

// ============================================================================
// Home / About
// ============================================================================

#[derive(Debug, Clone, Serialize, Default)]
pub struct StepView {
    pub number: String,
    pub label: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct HomeView {
    pub hero: HeroView,
    pub what_we_do_title: String,
    pub services: Vec<CardView>,
    pub sector_grid_title: String,
    pub sector_grid_description: String,
    pub sectors: Vec<SectorCard>,
    pub operating_model_title: String,
    pub operating_model_description: String,
    pub steps: Vec<StepView>,
    pub trust_title: String,
    pub signals: Vec<CardView>,
    pub cta: CtaView,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct AboutView {
    pub hero: HeroView,
    pub mission_heading: String,
    pub mission_paragraphs: Vec<String>,
    pub pillars: Vec<CardView>,
    pub values_heading: String,
    pub values: Vec<CardView>,
    pub cta: CtaView,
}

// ============================================================================
// Sectors
// ============================================================================

#[derive(Debug, Clone, Serialize, Default)]
pub struct SectorIndexView {
    pub hero: HeroView,
    pub sectors: Vec<SectorCard>,
    pub learn_more: String,
    pub cta: CtaView,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct RiskItemView {
    pub label: String,
    pub details: String,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct RiskGroupView {
    pub key: String,
    pub title: String,
    pub items: Vec<RiskItemView>,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct ApproachTabView {
    pub key: String,
    pub title: String,
    pub description: String,
    pub outcome: String,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct OverviewColumnView {
    pub key: String,
    pub icon: String,
    pub title: String,
    pub points: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct ValueMetricView {
    pub key: String,
    pub icon: String,
    /// Headline figure, e.g. `99.9%`
    pub metric: String,
    pub label: String,
    pub impact: String,
    pub method: String,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct SectorUseCaseView {
    pub key: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct SectorDetailView {
    pub slug: String,
    pub icon: String,
    pub hero: HeroView,
    pub challenges_heading: String,
    pub challenges_intro: String,
    pub challenges: Vec<String>,
    pub outcomes_heading: String,
    pub outcomes_intro: String,
    pub outcomes: Vec<String>,
    pub overview_heading: String,
    pub overview_intro: String,
    pub overview_columns: Vec<OverviewColumnView>,
    pub risks_heading: String,
    pub risk_groups: Vec<RiskGroupView>,
    pub approach_heading: String,
    pub approach_intro: String,
    pub approach_tabs: Vec<ApproachTabView>,
    pub outcome_label: String,
    pub value_heading: String,
    pub value_metrics: Vec<ValueMetricView>,
    pub use_cases_heading: String,
    pub use_cases: Vec<SectorUseCaseView>,
    pub capabilities_heading: String,
    pub capabilities: Vec<CapabilityCard>,
    pub cta: CtaView,
}

// ============================================================================
// Capabilities
// ============================================================================

#[derive(Debug, Clone, Serialize, Default)]
pub struct CapabilityIndexView {
    pub hero: HeroView,
    pub capabilities: Vec<CapabilityCard>,
    pub learn_more: String,
    pub cta: CtaView,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct UseCaseView {
    pub title: String,
    pub description: String,
    pub outcome: String,
    /// Empty when the use case points at an unknown sector
    pub sector_label: String,
    pub sector_href: String,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct CapabilityDetailView {
    pub slug: String,
    pub hero: HeroView,
    pub features_heading: String,
    pub features: Vec<CardView>,
    pub use_cases_heading: String,
    pub use_cases: Vec<UseCaseView>,
    pub outcome_label: String,
    pub integrates_heading: String,
    pub integrates_description: String,
    pub related: Vec<CapabilityCard>,
    pub cta: CtaView,
}

// ============================================================================
// Contact
// ============================================================================

#[derive(Debug, Clone, Serialize, Default)]
pub struct ContactFormView {
    pub name_label: String,
    pub name_placeholder: String,
    pub email_label: String,
    pub email_placeholder: String,
    pub organization_label: String,
    pub organization_placeholder: String,
    pub role_label: String,
    pub role_placeholder: String,
    pub inquiry_label: String,
    pub inquiry_types: Vec<OptionView>,
    pub sector_label: String,
    pub sectors: Vec<OptionView>,
    pub select_placeholder: String,
    pub message_label: String,
    pub message_placeholder: String,
    pub consent: String,
    pub submit: String,
    pub notice: String,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct ContactView {
    pub hero: HeroView,
    pub form: ContactFormView,
}

// ============================================================================
// Insights
// ============================================================================

#[derive(Debug, Clone, Serialize, Default)]
pub struct InsightCard {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub category_label: String,
    /// ISO date for `<time datetime>`
    pub date: String,
    pub date_label: String,
    pub reading_time: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct InsightsView {
    pub hero: HeroView,
    pub featured_label: String,
    /// Zero or one entry
    pub featured: Vec<InsightCard>,
    pub insights: Vec<InsightCard>,
    pub coming_soon: String,
}

// ============================================================================
// Not found / error
// ============================================================================

#[derive(Debug, Clone, Serialize, Default)]
pub struct NotFoundView {
    pub title: String,
    pub heading: String,
    pub description: String,
    pub home: LinkView,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct ErrorView {
    pub title: String,
    pub description: String,
    pub retry: LinkView,
    pub home: LinkView,
}

/// Page rendered without the site layout, when no locale (or no message
/// table) can be trusted
#[derive(Debug, Clone, Serialize, Default)]
pub struct StandaloneView {
    pub lang: String,
    pub title: String,
    pub heading: String,
    pub description: String,
    pub links: Vec<LinkView>,
}

impl StandaloneView {
    /// Non-translated 404 for unsupported locale segments
    pub fn not_found() -> Self {
        Self {
            lang: "en".to_string(),
            title: "Page Not Found".to_string(),
            heading: "404".to_string(),
            description: "The page you are looking for does not exist or has been moved.".to_string(),
            links: vec![LinkView::new("Return Home", "/")],
        }
    }

    /// Generic failure page used when the localized one cannot be built
    pub fn error(retry_href: &str) -> Self {
        Self {
            lang: "en".to_string(),
            title: "Something went wrong".to_string(),
            heading: "Something went wrong".to_string(),
            description: "An unexpected error occurred. Please try again.".to_string(),
            links: vec![LinkView::new("Try Again", retry_href), LinkView::new("Return Home", "/")],
        }
    }
}
