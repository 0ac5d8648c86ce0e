//! Content Catalog
//!
//! Fixed, in-memory registry of the site's records:
//! - `sectors` / `capabilities`: the two linked collections
//! - `content`: home page groups, insights, navigation
//! - `sections`: per-sector risk groups and approach tabs
//!
//! Built once at startup and shared read-only. Slug uniqueness is checked at
//! construction; relation arrays are only checked by `integrity_issues`, and
//! a dangling relation is skipped at lookup time instead of failing the page.

mod capabilities;
pub mod content;
pub mod sections;
mod sectors;
pub mod types;

use std::fmt;

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::error::{ContentKind, Result, SiteError};

pub use content::{NavChildren, NavLink, COMPANY_LINKS, INQUIRY_TYPES, LEGAL_LINKS, MAIN_NAV, SITE_METADATA};
pub use sections::{
    ApproachTab, OverviewColumn, RiskGroup, SectorSections, SectorUseCase, ValueMetric, OVERVIEW_POINTS_PER_COLUMN,
    RISK_ITEMS_PER_GROUP,
};
pub use types::{
    Capability, Feature, Insight, InsightCategory, ModelStep, PageMetadata, Sector, SectorIcon, ServiceStep,
    SiteMetadata, TrustSignal, UseCase,
};

#[derive(Debug, Clone)]
pub struct Catalog {
    sectors: &'static [Sector],
    capabilities: &'static [Capability],
    insights: &'static [Insight],
    sections: &'static [SectorSections],
    sector_index: FxHashMap<&'static str, usize>,
    capability_index: FxHashMap<&'static str, usize>,
    insight_index: FxHashMap<&'static str, usize>,
}

fn index_slugs<T>(
    kind: ContentKind,
    records: &'static [T],
    slug: impl Fn(&T) -> &'static str,
) -> Result<FxHashMap<&'static str, usize>> {
    let mut index = FxHashMap::default();
    for (i, record) in records.iter().enumerate() {
        if index.insert(slug(record), i).is_some() {
            return Err(SiteError::DuplicateSlug {
                kind,
                slug: slug(record).to_string(),
            });
        }
    }
    Ok(index)
}

impl Catalog {
    /// The site's compiled-in content
    pub fn builtin() -> Result<Self> {
        let catalog = Self::from_parts(sectors::SECTORS, capabilities::CAPABILITIES, content::INSIGHTS)?;
        tracing::debug!(
            "Catalog: {} sectors, {} capabilities, {} insights",
            catalog.sectors.len(),
            catalog.capabilities.len(),
            catalog.insights.len()
        );
        Ok(catalog)
    }

    pub fn from_parts(
        sectors: &'static [Sector],
        capabilities: &'static [Capability],
        insights: &'static [Insight],
    ) -> Result<Self> {
        Ok(Self {
            sector_index: index_slugs(ContentKind::Sector, sectors, |s| s.slug)?,
            capability_index: index_slugs(ContentKind::Capability, capabilities, |c| c.slug)?,
            insight_index: index_slugs(ContentKind::Insight, insights, |i| i.slug)?,
            sectors,
            capabilities,
            insights,
            sections: sections::SECTOR_SECTIONS,
        })
    }

    /// Swap the sector section table
    pub fn with_sections(mut self, sections: &'static [SectorSections]) -> Self {
        self.sections = sections;
        self
    }

    // ========================================================================
    // Lookups
    // ========================================================================

    pub fn find_sector_by_slug(&self, slug: &str) -> Result<&'static Sector> {
        let sectors = self.sectors;
        self.sector_index
            .get(slug)
            .map(|&i| &sectors[i])
            .ok_or_else(|| SiteError::SlugNotFound {
                kind: ContentKind::Sector,
                slug: slug.to_string(),
            })
    }

    pub fn find_capability_by_slug(&self, slug: &str) -> Result<&'static Capability> {
        let capabilities = self.capabilities;
        self.capability_index
            .get(slug)
            .map(|&i| &capabilities[i])
            .ok_or_else(|| SiteError::SlugNotFound {
                kind: ContentKind::Capability,
                slug: slug.to_string(),
            })
    }

    pub fn find_insight_by_slug(&self, slug: &str) -> Result<&'static Insight> {
        let insights = self.insights;
        self.insight_index
            .get(slug)
            .map(|&i| &insights[i])
            .ok_or_else(|| SiteError::SlugNotFound {
                kind: ContentKind::Insight,
                slug: slug.to_string(),
            })
    }

    pub fn all_sectors(&self) -> &'static [Sector] {
        self.sectors
    }

    pub fn all_capabilities(&self) -> &'static [Capability] {
        self.capabilities
    }

    pub fn insights(&self) -> &'static [Insight] {
        self.insights
    }

    /// Featured insights first, declaration order otherwise
    pub fn insights_featured_first(&self) -> Vec<&'static Insight> {
        let mut list: Vec<&'static Insight> = self.insights.iter().collect();
        list.sort_by_key(|i| !i.featured);
        list
    }

    pub fn services(&self) -> &'static [ServiceStep] {
        content::SERVICES
    }

    pub fn operating_steps(&self) -> &'static [ModelStep] {
        content::OPERATING_STEPS
    }

    pub fn trust_signals(&self) -> &'static [TrustSignal] {
        content::TRUST_SIGNALS
    }

    pub fn sections_for(&self, sector: &Sector) -> Option<&'static SectorSections> {
        self.sections.iter().find(|s| s.sector == sector.i18n_key)
    }

    // ========================================================================
    // Relations
    // ========================================================================

    /// Capabilities named in `integrations`, minus the capability itself.
    /// Unknown slugs are skipped.
    pub fn related_capabilities(&self, capability: &Capability) -> Vec<&'static Capability> {
        capability
            .integrations
            .iter()
            .filter(|slug| **slug != capability.slug)
            .filter_map(|slug| match self.find_capability_by_slug(slug) {
                Ok(c) => Some(c),
                Err(_) => {
                    tracing::warn!("{} integrates with unknown capability '{}'", capability.slug, slug);
                    None
                }
            })
            .collect()
    }

    /// Capabilities named in `sector.capabilities`; unknown slugs are skipped
    pub fn capabilities_for_sector(&self, sector: &Sector) -> Vec<&'static Capability> {
        sector
            .capabilities
            .iter()
            .filter_map(|slug| match self.find_capability_by_slug(slug) {
                Ok(c) => Some(c),
                Err(_) => {
                    tracing::warn!("{} lists unknown capability '{}'", sector.slug, slug);
                    None
                }
            })
            .collect()
    }

    // ========================================================================
    // Integrity
    // ========================================================================

    /// Every dangling reference and missing section row, in catalog order
    pub fn integrity_issues(&self) -> Vec<IntegrityIssue> {
        let mut issues = Vec::new();

        for sector in self.sectors {
            for slug in sector.capabilities {
                if !self.capability_index.contains_key(slug) {
                    issues.push(IntegrityIssue::DanglingSectorCapability {
                        sector: sector.slug,
                        capability: *slug,
                    });
                }
            }
            if self.sections_for(sector).is_none() {
                issues.push(IntegrityIssue::MissingSectorSections { sector: sector.slug });
            }
        }

        for capability in self.capabilities {
            for slug in capability.integrations {
                if *slug != capability.slug && !self.capability_index.contains_key(slug) {
                    issues.push(IntegrityIssue::DanglingIntegration {
                        capability: capability.slug,
                        integration: *slug,
                    });
                }
            }
            for use_case in capability.use_cases {
                if !self.sector_index.contains_key(use_case.sector) {
                    issues.push(IntegrityIssue::DanglingUseCaseSector {
                        capability: capability.slug,
                        sector: use_case.sector,
                    });
                }
            }
        }

        for insight in self.insights {
            if insight.published_date().is_none() {
                issues.push(IntegrityIssue::InvalidInsightDate {
                    insight: insight.slug,
                    value: insight.published_at,
                });
            }
            for slug in insight.related_sectors {
                if !self.sector_index.contains_key(slug) {
                    issues.push(IntegrityIssue::DanglingInsightSector { insight: insight.slug, sector: *slug });
                }
            }
            for slug in insight.related_capabilities {
                if !self.capability_index.contains_key(slug) {
                    issues.push(IntegrityIssue::DanglingInsightCapability {
                        insight: insight.slug,
                        capability: *slug,
                    });
                }
            }
        }

        issues
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IntegrityIssue {
    DanglingSectorCapability { sector: &'static str, capability: &'static str },
    DanglingIntegration { capability: &'static str, integration: &'static str },
    DanglingUseCaseSector { capability: &'static str, sector: &'static str },
    DanglingInsightSector { insight: &'static str, sector: &'static str },
    DanglingInsightCapability { insight: &'static str, capability: &'static str },
    MissingSectorSections { sector: &'static str },
    InvalidInsightDate { insight: &'static str, value: &'static str },
}

impl fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityIssue::DanglingSectorCapability { sector, capability } => {
                write!(f, "sector '{}' lists unknown capability '{}'", sector, capability)
            }
            IntegrityIssue::DanglingIntegration { capability, integration } => {
                write!(f, "capability '{}' integrates with unknown capability '{}'", capability, integration)
            }
            IntegrityIssue::DanglingUseCaseSector { capability, sector } => {
                write!(f, "capability '{}' has a use case in unknown sector '{}'", capability, sector)
            }
            IntegrityIssue::DanglingInsightSector { insight, sector } => {
                write!(f, "insight '{}' relates to unknown sector '{}'", insight, sector)
            }
            IntegrityIssue::DanglingInsightCapability { insight, capability } => {
                write!(f, "insight '{}' relates to unknown capability '{}'", insight, capability)
            }
            IntegrityIssue::MissingSectorSections { sector } => {
                write!(f, "sector '{}' has no risk/approach section row", sector)
            }
            IntegrityIssue::InvalidInsightDate { insight, value } => {
                write!(f, "insight '{}' has invalid date '{}'", insight, value)
            }
        }
    }
}
