//! Catalog record types
//!
//! Every record is `'static` data declared in the sibling modules. The English
//! strings here are the catalog's canonical copy (used for metadata and as
//! the fallback documentation of each record); localized display strings come
//! from the message tables via `i18n_key`.

use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PageMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
}

// ============================================================================
// Sectors
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectorIcon {
    Government,
    Infrastructure,
    Energy,
    Logistics,
    Cyber,
    Ai,
}

impl SectorIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectorIcon::Government => "government",
            SectorIcon::Infrastructure => "infrastructure",
            SectorIcon::Energy => "energy",
            SectorIcon::Logistics => "logistics",
            SectorIcon::Cyber => "cyber",
            SectorIcon::Ai => "ai",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Sector {
    pub id: &'static str,
    pub slug: &'static str,
    /// Namespace under `sectors.` in the message tables
    pub i18n_key: &'static str,
    pub title: &'static str,
    pub short_title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub icon: SectorIcon,
    /// Capability slugs, display order
    pub capabilities: &'static [&'static str],
    pub challenges: &'static [&'static str],
    pub outcomes: &'static [&'static str],
    pub metadata: PageMetadata,
}

// ============================================================================
// Capabilities
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Feature {
    /// Key under `capabilities.{i18n_key}.features.`
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct UseCase {
    pub title: &'static str,
    /// Sector slug
    pub sector: &'static str,
    pub description: &'static str,
    pub outcome: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Capability {
    pub id: &'static str,
    pub slug: &'static str,
    pub i18n_key: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub features: &'static [Feature],
    pub use_cases: &'static [UseCase],
    /// Capability slugs this one works with
    pub integrations: &'static [&'static str],
    pub metadata: PageMetadata,
}

// ============================================================================
// Home page groups
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ServiceStep {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ModelStep {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TrustSignal {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

// ============================================================================
// Insights
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsightCategory {
    StrategicAnalysis,
    Technology,
    Governance,
    CaseStudy,
    Whitepaper,
}

impl InsightCategory {
    pub const ALL: [InsightCategory; 5] = [
        InsightCategory::StrategicAnalysis,
        InsightCategory::Technology,
        InsightCategory::Governance,
        InsightCategory::CaseStudy,
        InsightCategory::Whitepaper,
    ];

    /// Also the key under `insights.categories.`
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightCategory::StrategicAnalysis => "strategic-analysis",
            InsightCategory::Technology => "technology",
            InsightCategory::Governance => "governance",
            InsightCategory::CaseStudy => "case-study",
            InsightCategory::Whitepaper => "whitepaper",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Insight {
    pub id: &'static str,
    pub slug: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub category: InsightCategory,
    /// ISO date, `YYYY-MM-DD`
    pub published_at: &'static str,
    pub reading_minutes: u32,
    pub featured: bool,
    pub tags: &'static [&'static str],
    pub related_sectors: &'static [&'static str],
    pub related_capabilities: &'static [&'static str],
}

impl Insight {
    /// `None` when `published_at` is not a valid ISO date
    pub fn published_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.published_at, "%Y-%m-%d").ok()
    }
}

// ============================================================================
// Site-wide metadata
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SiteMetadata {
    pub site_name: &'static str,
    pub site_url: &'static str,
    pub default_title: &'static str,
    pub default_description: &'static str,
    pub default_og_image: &'static str,
    pub twitter_handle: &'static str,
}
