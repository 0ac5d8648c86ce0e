//! Capability records, declaration order is display order.

use super::types::{Capability, Feature, PageMetadata, UseCase};

pub(super) static CAPABILITIES: &[Capability] = &[
    Capability {
        id: "cap-vector",
        slug: "hybrid-vector",
        i18n_key: "hybridVector",
        name: "HC-1 | Hybrid Vector",
        tagline: "Strategic Threat Assessment",
        description: "Hybrid Vector delivers comprehensive threat modeling and risk assessment capabilities, enabling organizations to anticipate and prepare for emerging threats.",
        features: &[
            Feature { key: "threatModeling", title: "Threat Modeling", description: "Advanced threat landscape analysis and scenario planning" },
            Feature { key: "riskQuantification", title: "Risk Quantification", description: "Data-driven risk scoring and prioritization" },
            Feature { key: "strategicForecasting", title: "Strategic Forecasting", description: "Predictive intelligence for long-term planning" },
        ],
        use_cases: &[UseCase {
            title: "National Security Assessment",
            sector: "government-national-programs",
            description: "Comprehensive threat assessment for national security agencies",
            outcome: "Unified threat picture across all domains",
        }],
        integrations: &["hybrid-nexus", "hybrid-cyber"],
        metadata: PageMetadata {
            title: "Hybrid Vector | Strategic Threat Assessment | HC-1",
            description: "Strategic threat assessment and risk modeling platform for enterprise and government.",
            keywords: &["threat assessment", "risk modeling", "strategic forecasting"],
        },
    },
    Capability {
        id: "cap-nexus",
        slug: "hybrid-nexus",
        i18n_key: "hybridNexus",
        name: "HC-1 | Hybrid Nexus",
        tagline: "Systems Integration Platform",
        description: "Hybrid Nexus is our enterprise integration platform, connecting disparate systems into a unified operational fabric.",
        features: &[
            Feature { key: "apiGateway", title: "API Gateway", description: "Secure, scalable API management and orchestration" },
            Feature { key: "dataFabric", title: "Data Fabric", description: "Unified data layer across legacy and modern systems" },
            Feature { key: "workflowEngine", title: "Workflow Engine", description: "Automated process orchestration and event handling" },
        ],
        use_cases: &[UseCase {
            title: "Multi-Agency Integration",
            sector: "government-national-programs",
            description: "Connecting government agencies for seamless information sharing",
            outcome: "Real-time cross-agency collaboration",
        }],
        integrations: &["hybrid-vector", "hybrid-axis", "hybrid-cyber", "hybrid-iris"],
        metadata: PageMetadata {
            title: "Hybrid Nexus | Systems Integration Platform | HC-1",
            description: "Enterprise systems integration and interoperability platform.",
            keywords: &["systems integration", "interoperability", "data fabric"],
        },
    },
    Capability {
        id: "cap-axis",
        slug: "hybrid-axis",
        i18n_key: "hybridAxis",
        name: "HC-1 | Hybrid Axis",
        tagline: "Command & Control Infrastructure",
        description: "Hybrid Axis provides the command and control backbone for coordinated operations across distributed environments.",
        features: &[
            Feature { key: "operationalDashboard", title: "Operational Dashboard", description: "Real-time situational awareness and command interface" },
            Feature { key: "resourceOrchestration", title: "Resource Orchestration", description: "Dynamic allocation and coordination of assets" },
            Feature { key: "communicationHub", title: "Communication Hub", description: "Secure, resilient communications infrastructure" },
        ],
        use_cases: &[UseCase {
            title: "National Operations Center",
            sector: "government-national-programs",
            description: "Unified command center for national security operations",
            outcome: "Coordinated response across all agencies",
        }],
        integrations: &["hybrid-nexus", "hybrid-iris"],
        metadata: PageMetadata {
            title: "Hybrid Axis | Command & Control | HC-1",
            description: "Command and control infrastructure for coordinated operations.",
            keywords: &["command and control", "operations center", "situational awareness"],
        },
    },
    Capability {
        id: "cap-cyber",
        slug: "hybrid-cyber",
        i18n_key: "hybridCyber",
        name: "HC-1 | Hybrid Cyber",
        tagline: "Cyber Defense Platform",
        description: "Hybrid Cyber delivers comprehensive cyber defense capabilities, from threat detection to incident response.",
        features: &[
            Feature { key: "threatDetection", title: "Threat Detection", description: "AI-powered threat detection and analysis" },
            Feature { key: "incidentResponse", title: "Incident Response", description: "Automated and orchestrated incident handling" },
            Feature { key: "threatIntelligence", title: "Threat Intelligence", description: "Global threat intelligence feeds and analysis" },
        ],
        use_cases: &[UseCase {
            title: "Critical Infrastructure Defense",
            sector: "critical-infrastructure",
            description: "Protecting essential services from cyber threats",
            outcome: "Zero-day threat detection and rapid response",
        }],
        integrations: &["hybrid-nexus", "hybrid-vector"],
        metadata: PageMetadata {
            title: "Hybrid Cyber | Cyber Defense Platform | HC-1",
            description: "Enterprise cyber defense, threat intelligence, and incident response platform.",
            keywords: &["cyber defense", "threat intelligence", "incident response"],
        },
    },
    Capability {
        id: "cap-iris",
        slug: "hybrid-iris",
        i18n_key: "hybridIris",
        name: "HC-1 | Hybrid Iris",
        tagline: "Surveillance & Awareness",
        description: "Hybrid Iris provides comprehensive surveillance and situational awareness capabilities across physical and digital domains.",
        features: &[
            Feature { key: "sensorFusion", title: "Sensor Fusion", description: "Multi-source sensor integration and correlation" },
            Feature { key: "patternRecognition", title: "Pattern Recognition", description: "AI-driven anomaly and pattern detection" },
            Feature { key: "geospatialIntelligence", title: "Geospatial Intelligence", description: "Location-based intelligence and mapping" },
        ],
        use_cases: &[UseCase {
            title: "Border Surveillance",
            sector: "ports-borders-logistics",
            description: "Comprehensive border monitoring and threat detection",
            outcome: "Enhanced border security with reduced false positives",
        }],
        integrations: &["hybrid-nexus", "hybrid-axis"],
        metadata: PageMetadata {
            title: "Hybrid Iris | Surveillance & Awareness | HC-1",
            description: "Surveillance and situational awareness platform for physical and digital domains.",
            keywords: &["surveillance", "sensor fusion", "geospatial intelligence"],
        },
    },
    Capability {
        id: "cap-coe",
        slug: "centers-of-excellence",
        i18n_key: "centersOfExcellence",
        name: "Centers of Excellence",
        tagline: "Regional Expertise & Training",
        description: "Our Centers of Excellence provide regional expertise, training, and support to ensure successful deployment and operation of HC-1 solutions.",
        features: &[
            Feature { key: "trainingPrograms", title: "Training Programs", description: "Comprehensive certification and training curricula" },
            Feature { key: "regionalSupport", title: "Regional Support", description: "Local expertise and 24/7 support capabilities" },
            Feature { key: "researchDevelopment", title: "Research & Development", description: "Continuous innovation and capability development" },
        ],
        use_cases: &[UseCase {
            title: "National Cyber Academy",
            sector: "government-national-programs",
            description: "Building national cyber defense capabilities through training",
            outcome: "Self-sufficient national cyber defense workforce",
        }],
        integrations: &[],
        metadata: PageMetadata {
            title: "Centers of Excellence | HC-1",
            description: "Regional expertise, training, and support facilities for HC-1 solutions.",
            keywords: &["training", "centers of excellence", "regional support"],
        },
    },
];
