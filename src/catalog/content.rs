//! Home page groups, insights, site metadata and navigation structure.

use serde::Serialize;

use super::types::{Insight, InsightCategory, ModelStep, ServiceStep, SiteMetadata, TrustSignal};

pub static SITE_METADATA: SiteMetadata = SiteMetadata {
    site_name: "HC-1 | Hybrid Concepts",
    site_url: "https://hc-1.com",
    default_title: "HC-1 | Strategic Command & Integration Authority",
    default_description: "HC-1 delivers sovereign security, systems integration, and operational continuity for governments and critical infrastructure worldwide.",
    default_og_image: "/og-image.jpg",
    twitter_handle: "@hc1_official",
};

// ============================================================================
// WHAT WE DO / OPERATING MODEL / TRUST SIGNALS
// ============================================================================

pub(super) static SERVICES: &[ServiceStep] = &[
    ServiceStep {
        id: "plan",
        title: "Plan",
        description: "Strategic architecture and risk anticipation upstream to prevent operational disruption.",
        icon: "plan",
    },
    ServiceStep {
        id: "integrate",
        title: "Integrate",
        description: "Sovereign systems integration with zero-trust architecture and full traceability.",
        icon: "integrate",
    },
    ServiceStep {
        id: "assure",
        title: "Assure",
        description: "Continuous monitoring, SLA-based governance, and mission-critical continuity.",
        icon: "assure",
    },
];

pub(super) static OPERATING_STEPS: &[ModelStep] = &[
    ModelStep { id: "anticipate", label: "Anticipate", description: "Identify and model risk upstream" },
    ModelStep { id: "assure", label: "Assure", description: "Architect and integrate secure systems" },
    ModelStep { id: "continuity", label: "Continuity", description: "Monitor and maintain operational uptime" },
    ModelStep { id: "revenue", label: "Revenue", description: "Protect and maximize financial outcomes" },
];

pub(super) static TRUST_SIGNALS: &[TrustSignal] = &[
    TrustSignal {
        id: "sovereignty",
        title: "Data Sovereignty",
        description: "Full control over data residency and operational sovereignty.",
        icon: "shield",
    },
    TrustSignal {
        id: "zero-trust",
        title: "Zero-Trust Architecture",
        description: "Every access verified, every transaction authenticated.",
        icon: "lock",
    },
    TrustSignal {
        id: "sla",
        title: "SLA-Based Assurance",
        description: "Guaranteed uptime and performance commitments.",
        icon: "check",
    },
    TrustSignal {
        id: "traceability",
        title: "Full Traceability",
        description: "Complete audit trails and accountability.",
        icon: "document",
    },
    TrustSignal {
        id: "compliance",
        title: "Regulatory Compliance",
        description: "ISO 27001, SOC 2, and sector-specific certifications.",
        icon: "certificate",
    },
];

// ============================================================================
// INSIGHTS
// ============================================================================

pub(super) static INSIGHTS: &[Insight] = &[
    Insight {
        id: "insight-cip-evolution",
        slug: "evolution-of-critical-infrastructure-protection",
        title: "The Evolution of Critical Infrastructure Protection",
        excerpt: "How converging threats are reshaping security strategies for essential services.",
        category: InsightCategory::StrategicAnalysis,
        published_at: "2024-12-15",
        reading_minutes: 8,
        featured: true,
        tags: &["critical infrastructure", "OT security", "resilience"],
        related_sectors: &["critical-infrastructure", "energy-mining"],
        related_capabilities: &["hybrid-cyber", "hybrid-iris"],
    },
    Insight {
        id: "insight-ai-governance",
        slug: "ai-in-national-security",
        title: "AI in National Security: Opportunities and Governance",
        excerpt: "Balancing innovation with responsible deployment in sensitive environments.",
        category: InsightCategory::Technology,
        published_at: "2024-12-01",
        reading_minutes: 12,
        featured: false,
        tags: &["artificial intelligence", "governance", "national security"],
        related_sectors: &["ai-fusion-intelligence", "government-national-programs"],
        related_capabilities: &["hybrid-vector", "hybrid-iris"],
    },
    Insight {
        id: "insight-energy-cyber",
        slug: "cyber-resilience-in-the-energy-sector",
        title: "Building Cyber Resilience in the Energy Sector",
        excerpt: "Lessons learned from securing operational technology in complex environments.",
        category: InsightCategory::CaseStudy,
        published_at: "2024-11-20",
        reading_minutes: 10,
        featured: false,
        tags: &["energy", "cyber resilience", "operational technology"],
        related_sectors: &["energy-mining", "cyber-resilience"],
        related_capabilities: &["hybrid-cyber", "hybrid-nexus"],
    },
];

// ============================================================================
// NAVIGATION
// ============================================================================

/// Which catalog collection fills a nav item's dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NavChildren {
    None,
    Sectors,
    Capabilities,
}

/// A locale-relative link: `path` is appended to `/{locale}`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NavLink {
    /// Full message path of the label
    pub label_key: &'static str,
    pub path: &'static str,
    pub children: NavChildren,
}

pub static MAIN_NAV: &[NavLink] = &[
    NavLink { label_key: "nav.home", path: "", children: NavChildren::None },
    NavLink { label_key: "nav.about", path: "/about", children: NavChildren::None },
    NavLink { label_key: "nav.sectors", path: "/sectors", children: NavChildren::Sectors },
    NavLink { label_key: "nav.capabilities", path: "/capabilities", children: NavChildren::Capabilities },
    NavLink { label_key: "nav.insights", path: "/insights", children: NavChildren::None },
    NavLink { label_key: "nav.contact", path: "/contact", children: NavChildren::None },
];

pub static COMPANY_LINKS: &[NavLink] = &[
    NavLink { label_key: "nav.about", path: "/about", children: NavChildren::None },
    NavLink { label_key: "nav.insights", path: "/insights", children: NavChildren::None },
    NavLink { label_key: "nav.contact", path: "/contact", children: NavChildren::None },
    NavLink { label_key: "footer.careers", path: "/careers", children: NavChildren::None },
];

pub static LEGAL_LINKS: &[NavLink] = &[
    NavLink { label_key: "footer.privacy", path: "/privacy", children: NavChildren::None },
    NavLink { label_key: "footer.terms", path: "/terms", children: NavChildren::None },
    NavLink { label_key: "footer.security", path: "/security", children: NavChildren::None },
    NavLink { label_key: "footer.compliance", path: "/compliance", children: NavChildren::None },
];

/// Contact form inquiry options, keys under `contact.inquiryTypes.`
pub static INQUIRY_TYPES: &[&str] = &["general", "partnership", "media", "careers", "security"];
