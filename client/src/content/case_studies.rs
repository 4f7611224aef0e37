//! Showcase case studies, one per card.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
}

/// Steps and closing note revealed when a card's blueprint is opened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Blueprint {
    pub steps: &'static [&'static str],
    pub insight: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaseStudy {
    pub id: u32,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub tags: &'static [&'static str],
    pub metrics: &'static [Metric],
    pub blueprint: Blueprint,
}

impl CaseStudy {
    /// Card ordinal as printed in the corner, e.g. `01`.
    pub fn ordinal(&self) -> String {
        format!("{:02}", self.id)
    }
}

pub const SHOWCASE_SUMMARY: &str = "90% Conv. • 0 Errors • +200% Rev";

pub const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        id: 1,
        title: "Zeal Global Infra",
        subtitle: "Multi-entity user center & compliance routing for global expansion.",
        tags: &["Compliance", "Backend"],
        metrics: &[
            Metric { label: "Compliance", value: "100%" },
            Metric { label: "Verifications", value: "+30%" },
        ],
        blueprint: Blueprint {
            steps: &["User Residency Check", "Dynamic License Routing", "FCA/SFC Rules Engine", "Entity Assignment"],
            insight: "The challenge was ensuring strict regulatory isolation while maintaining a unified user experience.",
        },
    },
    CaseStudy {
        id: 2,
        title: "Futu Malaysia 0-1",
        subtitle: "High-speed onboarding engine for SEA market penetration.",
        tags: &["Growth", "0-1"],
        metrics: &[
            Metric { label: "Conversion", value: "90%" },
            Metric { label: "Speed", value: "-50%" },
        ],
        blueprint: Blueprint {
            steps: &["User Input", "Local Reg Check", "eKYC & AML Screening", "Bank API Integration", "Auto Activation"],
            insight: "We parallelized the KYC and AML processes to reduce wait times by half.",
        },
    },
    CaseStudy {
        id: 3,
        title: "Taobao Tokenomics",
        subtitle: "Gamified incentive system balancing liquidity and inflation.",
        tags: &["Web2 Scale", "Economy"],
        metrics: &[
            Metric { label: "Task Completion", value: "+40%" },
            Metric { label: "ROI Boost", value: "+25%" },
        ],
        blueprint: Blueprint {
            steps: &["Task Definition", "Token Minting", "Liquidity Control", "Sink/Burn Mech", "Reward Dist."],
            insight: "Applying macro-economic principles to user behavior to prevent point inflation.",
        },
    },
    CaseStudy {
        id: 4,
        title: "Seasun Game Economy",
        subtitle: "Anti-inflation auction system driving revenue through scarcity.",
        tags: &["Monetization", "Psychology"],
        metrics: &[
            Metric { label: "Revenue", value: "+200%" },
            Metric { label: "Penetration", value: "40%" },
        ],
        blueprint: Blueprint {
            steps: &["Scarcity Modeling", "Auction Logic", "Dynamic Recycling", "LTV Optimization"],
            insight: "Using scarcity psychology to drive higher engagement from high-net-worth users.",
        },
    },
];
