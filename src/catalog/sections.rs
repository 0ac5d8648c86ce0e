//! Sector Section Table
//!
//! Which overview columns, risk groups, approach tabs, value metrics and
//! use cases each sector page shows, in order. Keyed by the sector's
//! `i18n_key`; every entry listed here must have message content under
//! `sectors.{key}.overview.{column}`, `.risks.{group}`, `.approach.{tab}`,
//! `.value.{metric}` and `.useCases.{case}` (enforced by
//! `i18n::required_paths`).

use serde::Serialize;

/// Risk items rendered per group
pub const RISK_ITEMS_PER_GROUP: usize = 3;

/// Bullet points rendered per overview column
pub const OVERVIEW_POINTS_PER_COLUMN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OverviewColumn {
    Revenue,
    Risks,
    Exposure,
    Sovereignty,
    Continuity,
    Threats,
    Dependency,
    Regulation,
    Landscape,
    Gaps,
    Impact,
    Economic,
    Complexity,
    DataVolume,
    Latency,
    Integration,
}

impl OverviewColumn {
    pub fn key(&self) -> &'static str {
        match self {
            OverviewColumn::Revenue => "revenue",
            OverviewColumn::Risks => "risks",
            OverviewColumn::Exposure => "exposure",
            OverviewColumn::Sovereignty => "sovereignty",
            OverviewColumn::Continuity => "continuity",
            OverviewColumn::Threats => "threats",
            OverviewColumn::Dependency => "dependency",
            OverviewColumn::Regulation => "regulation",
            OverviewColumn::Landscape => "landscape",
            OverviewColumn::Gaps => "gaps",
            OverviewColumn::Impact => "impact",
            OverviewColumn::Economic => "economic",
            OverviewColumn::Complexity => "complexity",
            OverviewColumn::DataVolume => "dataVolume",
            OverviewColumn::Latency => "latency",
            OverviewColumn::Integration => "integration",
        }
    }

    /// Icon class suffix
    pub fn icon(&self) -> &'static str {
        match self {
            OverviewColumn::Revenue | OverviewColumn::Sovereignty | OverviewColumn::Economic => "shield",
            OverviewColumn::Risks | OverviewColumn::Impact | OverviewColumn::DataVolume => "trending-down",
            OverviewColumn::Exposure
            | OverviewColumn::Landscape
            | OverviewColumn::Complexity
            | OverviewColumn::Latency => "globe",
            OverviewColumn::Continuity | OverviewColumn::Dependency | OverviewColumn::Integration => "link",
            OverviewColumn::Threats | OverviewColumn::Gaps => "alert",
            OverviewColumn::Regulation => "file",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RiskGroup {
    Production,
    RevenueGaps,
    Operational,
    Compliance,
    Threats,
}

impl RiskGroup {
    pub fn key(&self) -> &'static str {
        match self {
            RiskGroup::Production => "production",
            RiskGroup::RevenueGaps => "revenueGaps",
            RiskGroup::Operational => "operational",
            RiskGroup::Compliance => "compliance",
            RiskGroup::Threats => "threats",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ApproachTab {
    Architecture,
    Integration,
    Continuity,
    Assurance,
    Modeling,
    Hardening,
    Monitoring,
    ZeroTrust,
    Soc,
    Intelligence,
    Surveillance,
    Coordination,
    Fusion,
    Prediction,
    Autonomy,
}

impl ApproachTab {
    pub fn key(&self) -> &'static str {
        match self {
            ApproachTab::Architecture => "architecture",
            ApproachTab::Integration => "integration",
            ApproachTab::Continuity => "continuity",
            ApproachTab::Assurance => "assurance",
            ApproachTab::Modeling => "modeling",
            ApproachTab::Hardening => "hardening",
            ApproachTab::Monitoring => "monitoring",
            ApproachTab::ZeroTrust => "zerotrust",
            ApproachTab::Soc => "soc",
            ApproachTab::Intelligence => "intelligence",
            ApproachTab::Surveillance => "surveillance",
            ApproachTab::Coordination => "coordination",
            ApproachTab::Fusion => "fusion",
            ApproachTab::Prediction => "prediction",
            ApproachTab::Autonomy => "autonomy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ValueMetric {
    Uptime,
    Downtime,
    Confidence,
}

impl ValueMetric {
    pub fn key(&self) -> &'static str {
        match self {
            ValueMetric::Uptime => "uptime",
            ValueMetric::Downtime => "downtime",
            ValueMetric::Confidence => "confidence",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ValueMetric::Uptime => "trending-up",
            ValueMetric::Downtime => "dollar",
            ValueMetric::Confidence => "award",
        }
    }
}

/// Use case slots on a sector page; each sector words them for its own domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SectorUseCase {
    Offshore,
    Mining,
    Pipeline,
}

impl SectorUseCase {
    pub fn key(&self) -> &'static str {
        match self {
            SectorUseCase::Offshore => "offshore",
            SectorUseCase::Mining => "mining",
            SectorUseCase::Pipeline => "pipeline",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SectorSections {
    pub sector: &'static str,
    pub overview_columns: &'static [OverviewColumn],
    pub risk_groups: &'static [RiskGroup],
    pub approach_tabs: &'static [ApproachTab],
    pub value_metrics: &'static [ValueMetric],
    pub use_cases: &'static [SectorUseCase],
}

use ApproachTab as T;
use OverviewColumn as O;
use RiskGroup as R;

const VALUE_METRICS: &[ValueMetric] = &[ValueMetric::Uptime, ValueMetric::Downtime, ValueMetric::Confidence];
const USE_CASES: &[SectorUseCase] = &[SectorUseCase::Offshore, SectorUseCase::Mining, SectorUseCase::Pipeline];

pub static SECTOR_SECTIONS: &[SectorSections] = &[
    SectorSections {
        sector: "energyMining",
        overview_columns: &[O::Revenue, O::Risks, O::Exposure],
        risk_groups: &[R::Production, R::RevenueGaps],
        approach_tabs: &[T::Architecture, T::Integration, T::Continuity],
        value_metrics: VALUE_METRICS,
        use_cases: USE_CASES,
    },
    SectorSections {
        sector: "governmentPrograms",
        overview_columns: &[O::Sovereignty, O::Continuity, O::Threats],
        risk_groups: &[R::Operational, R::Compliance],
        approach_tabs: &[T::Architecture, T::Integration, T::Assurance],
        value_metrics: VALUE_METRICS,
        use_cases: USE_CASES,
    },
    SectorSections {
        sector: "criticalInfra",
        overview_columns: &[O::Dependency, O::Exposure, O::Regulation],
        risk_groups: &[R::Operational, R::Threats],
        approach_tabs: &[T::Modeling, T::Hardening, T::Monitoring],
        value_metrics: VALUE_METRICS,
        use_cases: USE_CASES,
    },
    SectorSections {
        sector: "cyberResilience",
        overview_columns: &[O::Landscape, O::Gaps, O::Impact],
        risk_groups: &[R::Threats, R::Compliance],
        approach_tabs: &[T::ZeroTrust, T::Soc, T::Intelligence],
        value_metrics: VALUE_METRICS,
        use_cases: USE_CASES,
    },
    SectorSections {
        sector: "portsLogistics",
        overview_columns: &[O::Economic, O::Threats, O::Complexity],
        risk_groups: &[R::Operational, R::RevenueGaps],
        approach_tabs: &[T::Surveillance, T::Intelligence, T::Coordination],
        value_metrics: VALUE_METRICS,
        use_cases: USE_CASES,
    },
    SectorSections {
        sector: "aiFusion",
        overview_columns: &[O::DataVolume, O::Latency, O::Integration],
        risk_groups: &[R::Threats, R::Operational],
        approach_tabs: &[T::Fusion, T::Prediction, T::Autonomy],
        value_metrics: VALUE_METRICS,
        use_cases: USE_CASES,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use std::collections::HashSet;

    #[test]
    fn test_every_row_is_unique_and_populated() {
        let mut seen = HashSet::new();
        for row in SECTOR_SECTIONS {
            assert!(seen.insert(row.sector), "{} listed twice", row.sector);
            assert_eq!(row.overview_columns.len(), 3, "{} should have 3 overview columns", row.sector);
            assert!(!row.risk_groups.is_empty(), "{} has no risk groups", row.sector);
            assert_eq!(row.approach_tabs.len(), 3, "{} should have 3 tabs", row.sector);
            assert_eq!(row.value_metrics.len(), 3, "{} should have 3 value metrics", row.sector);
            assert_eq!(row.use_cases.len(), 3, "{} should have 3 use cases", row.sector);

            let columns: HashSet<_> = row.overview_columns.iter().collect();
            assert_eq!(columns.len(), row.overview_columns.len(), "{} repeats a column", row.sector);
            let tabs: HashSet<_> = row.approach_tabs.iter().collect();
            assert_eq!(tabs.len(), row.approach_tabs.len(), "{} repeats a tab", row.sector);
        }
    }

    #[test]
    fn test_lookup_preserves_order() {
        let catalog = Catalog::builtin().unwrap();
        let sections = |slug: &str| catalog.sections_for(catalog.find_sector_by_slug(slug).unwrap()).unwrap();

        let energy = sections("energy-mining");
        let groups: Vec<_> = energy.risk_groups.iter().map(|g| g.key()).collect();
        assert_eq!(groups, vec!["production", "revenueGaps"]);
        let columns: Vec<_> = energy.overview_columns.iter().map(|c| c.key()).collect();
        assert_eq!(columns, vec!["revenue", "risks", "exposure"]);

        let cyber = sections("cyber-resilience");
        let tabs: Vec<_> = cyber.approach_tabs.iter().map(|t| t.key()).collect();
        assert_eq!(tabs, vec!["zerotrust", "soc", "intelligence"]);

        let ai = sections("ai-fusion-intelligence");
        let columns: Vec<_> = ai.overview_columns.iter().map(|c| c.key()).collect();
        assert_eq!(columns, vec!["dataVolume", "latency", "integration"]);
        let metrics: Vec<_> = ai.value_metrics.iter().map(|m| m.key()).collect();
        assert_eq!(metrics, vec!["uptime", "downtime", "confidence"]);
    }

    #[test]
    fn test_icons_cover_every_column() {
        for row in SECTOR_SECTIONS {
            for column in row.overview_columns {
                assert!(!column.icon().is_empty());
            }
        }
        assert_eq!(OverviewColumn::Regulation.icon(), "file");
    }
}
