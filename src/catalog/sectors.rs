//! Sector records, declaration order is display order.

use super::types::{PageMetadata, Sector, SectorIcon};

pub(super) static SECTORS: &[Sector] = &[
    Sector {
        id: "sector-gov",
        slug: "government-national-programs",
        i18n_key: "governmentPrograms",
        title: "Government & National Programs",
        short_title: "Government",
        description: "Sovereign digital transformation and national security programs",
        long_description: "HC-1 partners with governments to deliver secure, sovereign digital infrastructure that protects national interests while enabling modernization at scale.",
        icon: SectorIcon::Government,
        capabilities: &["hybrid-vector", "hybrid-nexus", "hybrid-axis"],
        challenges: &[
            "Legacy system modernization",
            "Cross-agency interoperability",
            "Sovereign data protection",
            "Citizen service delivery",
        ],
        outcomes: &[
            "Unified national security posture",
            "Accelerated digital transformation",
            "Enhanced citizen trust",
        ],
        metadata: PageMetadata {
            title: "Government & National Programs | HC-1",
            description: "Sovereign digital transformation and national security programs for governments worldwide.",
            keywords: &["government security", "national programs", "digital transformation", "sovereign infrastructure"],
        },
    },
    Sector {
        id: "sector-infra",
        slug: "critical-infrastructure",
        i18n_key: "criticalInfra",
        title: "Critical Infrastructure",
        short_title: "Infrastructure",
        description: "Protection and resilience for essential services",
        long_description: "We secure the systems that societies depend on: power grids, water systems, telecommunications, and transportation networks.",
        icon: SectorIcon::Infrastructure,
        capabilities: &["hybrid-cyber", "hybrid-nexus", "hybrid-iris"],
        challenges: &[
            "OT/IT convergence security",
            "Legacy SCADA protection",
            "Supply chain vulnerabilities",
            "Regulatory compliance",
        ],
        outcomes: &[
            "Zero-downtime operations",
            "Regulatory compliance",
            "Threat-resilient infrastructure",
        ],
        metadata: PageMetadata {
            title: "Critical Infrastructure Protection | HC-1",
            description: "Comprehensive protection and resilience solutions for critical infrastructure and essential services.",
            keywords: &["critical infrastructure", "OT security", "SCADA", "infrastructure protection"],
        },
    },
    Sector {
        id: "sector-energy",
        slug: "energy-mining",
        i18n_key: "energyMining",
        title: "Energy & Mining",
        short_title: "Energy",
        description: "Operational technology security and asset protection",
        long_description: "From offshore platforms to remote mining operations, HC-1 delivers security solutions that operate in the most demanding environments.",
        icon: SectorIcon::Energy,
        capabilities: &["hybrid-cyber", "hybrid-iris", "hybrid-axis"],
        challenges: &[
            "Remote site security",
            "Industrial control systems",
            "Environmental monitoring",
            "Workforce safety",
        ],
        outcomes: &[
            "Operational continuity",
            "Asset protection",
            "Safety compliance",
        ],
        metadata: PageMetadata {
            title: "Energy & Mining Security | HC-1",
            description: "Operational technology security and asset protection for energy and mining operations.",
            keywords: &["energy security", "mining security", "OT security", "industrial control"],
        },
    },
    Sector {
        id: "sector-ports",
        slug: "ports-borders-logistics",
        i18n_key: "portsLogistics",
        title: "Ports, Borders & Logistics",
        short_title: "Ports & Borders",
        description: "Supply chain security and border management",
        long_description: "HC-1 enables secure, efficient movement of goods and people across borders while maintaining sovereign control.",
        icon: SectorIcon::Logistics,
        capabilities: &["hybrid-iris", "hybrid-nexus", "hybrid-vector"],
        challenges: &[
            "Cargo screening efficiency",
            "Border threat detection",
            "Multi-agency coordination",
            "Trade facilitation",
        ],
        outcomes: &[
            "Enhanced border security",
            "Streamlined trade flows",
            "Reduced contraband",
        ],
        metadata: PageMetadata {
            title: "Ports, Borders & Logistics | HC-1",
            description: "Supply chain security and border management solutions for ports and logistics operations.",
            keywords: &["border security", "port security", "supply chain", "logistics security"],
        },
    },
    Sector {
        id: "sector-cyber",
        slug: "cyber-resilience",
        i18n_key: "cyberResilience",
        title: "Cyber Resilience",
        short_title: "Cyber",
        description: "Enterprise-grade cyber defense and incident response",
        long_description: "Our cyber resilience practice combines threat intelligence, defensive operations, and incident response to protect organizations from sophisticated adversaries.",
        icon: SectorIcon::Cyber,
        capabilities: &["hybrid-cyber", "hybrid-vector", "hybrid-nexus"],
        challenges: &[
            "Advanced persistent threats",
            "Ransomware defense",
            "Insider threats",
            "Cloud security",
        ],
        outcomes: &[
            "Reduced attack surface",
            "Rapid incident response",
            "Continuous threat monitoring",
        ],
        metadata: PageMetadata {
            title: "Cyber Resilience | HC-1",
            description: "Enterprise-grade cyber defense, threat intelligence, and incident response capabilities.",
            keywords: &["cyber security", "threat intelligence", "incident response", "cyber defense"],
        },
    },
    Sector {
        id: "sector-ai",
        slug: "ai-fusion-intelligence",
        i18n_key: "aiFusion",
        title: "AI Fusion & Intelligence",
        short_title: "AI & Intelligence",
        description: "Advanced analytics and decision intelligence",
        long_description: "HC-1 harnesses artificial intelligence to fuse disparate data sources into actionable intelligence for strategic decision-making.",
        icon: SectorIcon::Ai,
        capabilities: &["hybrid-iris", "hybrid-vector", "hybrid-axis"],
        challenges: &[
            "Data silos",
            "Real-time analysis",
            "Predictive modeling",
            "Decision automation",
        ],
        outcomes: &[
            "Unified intelligence picture",
            "Predictive threat detection",
            "Accelerated decision cycles",
        ],
        metadata: PageMetadata {
            title: "AI Fusion & Intelligence | HC-1",
            description: "Advanced analytics, AI fusion, and decision intelligence for strategic operations.",
            keywords: &["AI", "artificial intelligence", "data fusion", "decision intelligence"],
        },
    },
];
