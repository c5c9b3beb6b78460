//! Demo ideas loaded into an empty store when `SEED_DEMO_DATA` is on.
//! Assessments go through `submit_assessment`, so their scores and quadrants
//! are always computed, never written by hand.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::ideas::assessment::{submit_assessment, Rationales};
use crate::ideas::lifecycle::IdeaStatus;
use crate::ideas::models::{AiCapabilityArea, BusinessFunction, Idea};
use crate::ideas::scoring::{
    Dimension, FeasibilityDimension, Ratings, ScoreLevel, ScoreLevel::*, ValueDimension,
};

struct SeedIdea {
    title: &'static str,
    description: &'static str,
    area: AiCapabilityArea,
    function: BusinessFunction,
    benefits: &'static str,
    submitter: (&'static str, &'static str),
    created: (u32, u32, u32),
    status: IdeaStatus,
    /// Value ratings then feasibility ratings, in dimension order.
    ratings: Option<([ScoreLevel; 4], [ScoreLevel; 3])>,
    rationales: &'static [(&'static str, &'static str)],
}

const SEED_IDEAS: &[SeedIdea] = &[
    SeedIdea {
        title: "Automated Audit Evidence Analysis",
        description: "Use AI to automatically analyze and categorize audit evidence documents, extracting key financial data and flagging anomalies for auditor review.",
        area: AiCapabilityArea::DocumentIntelligence,
        function: BusinessFunction::Audit,
        benefits: "Reduce manual document review time by 60% and let auditors focus on judgment tasks.",
        submitter: ("Sarah Chen", "sarah.chen@example.com"),
        created: (1, 15, 9),
        status: IdeaStatus::Prioritized,
        ratings: Some(([Medium, High, High, High], [High, High, Medium])),
        rationales: &[
            ("cost_efficiency", "Significant time savings in document review process"),
            ("technical_feasibility", "Document AI technologies are mature and proven"),
        ],
    },
    SeedIdea {
        title: "Tax Regulation Change Detector",
        description: "Monitor global tax regulation changes, automatically summarize updates, and alert relevant teams about impacts to client portfolios.",
        area: AiCapabilityArea::NaturalLanguageProcessing,
        function: BusinessFunction::Tax,
        benefits: "Stay ahead of regulatory changes and reduce compliance risk.",
        submitter: ("Michael Roberts", "michael.roberts@example.com"),
        created: (1, 14, 11),
        status: IdeaStatus::Prioritized,
        ratings: Some(([High, Medium, High, High], [Medium, Medium, High])),
        rationales: &[
            ("business_growth", "Can differentiate our tax advisory services"),
            ("technical_feasibility", "Requires integration with multiple regulatory data sources"),
        ],
    },
    SeedIdea {
        title: "AI-Powered Deal Valuation Assistant",
        description: "Generative assistant that drafts valuation models and comparable-company analyses from deal data rooms for advisory teams.",
        area: AiCapabilityArea::GenerativeAi,
        function: BusinessFunction::DealAdvisory,
        benefits: "Faster first-draft valuations and more time for negotiation strategy.",
        submitter: ("Jennifer Park", "jennifer.park@example.com"),
        created: (1, 13, 8),
        status: IdeaStatus::Assessment,
        ratings: Some(([High, High, Medium, High], [Medium, Low, Medium])),
        rationales: &[
            ("business_growth", "High revenue potential in deal advisory"),
            ("internal_readiness", "Team needs training on AI-assisted valuation workflows"),
        ],
    },
    SeedIdea {
        title: "Employee Onboarding Chatbot",
        description: "Conversational assistant answering new-joiner questions about policies, tooling and benefits during the first ninety days.",
        area: AiCapabilityArea::ConversationalAi,
        function: BusinessFunction::HumanResources,
        benefits: "Fewer repetitive HR tickets and a smoother onboarding experience.",
        submitter: ("David Thompson", "david.thompson@example.com"),
        created: (1, 12, 14),
        status: IdeaStatus::Development,
        ratings: Some(([Low, High, Medium, Medium], [High, High, High])),
        rationales: &[
            ("business_growth", "Internal tool with limited revenue impact"),
            ("technical_feasibility", "Chatbot technology is well-established"),
        ],
    },
    SeedIdea {
        title: "Predictive Client Churn Analysis",
        description: "Machine learning model predicting which advisory clients are at risk of churning, based on engagement and billing signals.",
        area: AiCapabilityArea::PredictiveAnalytics,
        function: BusinessFunction::Advisory,
        benefits: "Earlier retention conversations with at-risk clients.",
        submitter: ("Lisa Wang", "lisa.wang@example.com"),
        created: (1, 11, 10),
        status: IdeaStatus::OnHold,
        ratings: Some(([High, Medium, High, Medium], [Medium, Medium, Low])),
        rationales: &[(
            "external_readiness",
            "Data privacy considerations with client behavioral data",
        )],
    },
    SeedIdea {
        title: "Intelligent Contract Review",
        description: "Extract obligations, renewal dates and non-standard clauses from contracts and highlight them for legal reviewers.",
        area: AiCapabilityArea::DocumentIntelligence,
        function: BusinessFunction::Legal,
        benefits: "Shorter contract review cycles.",
        submitter: ("Robert Kim", "robert.kim@example.com"),
        created: (1, 18, 9),
        status: IdeaStatus::Submitted,
        ratings: None,
        rationales: &[],
    },
    SeedIdea {
        title: "Meeting Notes Automation",
        description: "Automatically transcribe internal meetings and produce summaries with action items assigned to owners.",
        area: AiCapabilityArea::GenerativeAi,
        function: BusinessFunction::Operations,
        benefits: "Consistent meeting records without manual note taking.",
        submitter: ("Amanda Foster", "amanda.foster@example.com"),
        created: (1, 19, 15),
        status: IdeaStatus::Screening,
        ratings: None,
        rationales: &[],
    },
    SeedIdea {
        title: "Financial Fraud Detection System",
        description: "Anomaly detection over transaction ledgers to surface potential fraud patterns for the risk and compliance team.",
        area: AiCapabilityArea::MachineLearning,
        function: BusinessFunction::RiskAndCompliance,
        benefits: "Earlier detection of fraudulent activity.",
        submitter: ("James Wilson", "james.wilson@example.com"),
        created: (1, 20, 11),
        status: IdeaStatus::Submitted,
        ratings: None,
        rationales: &[],
    },
];

pub fn demo_ideas(assessor: &str) -> Vec<Idea> {
    SEED_IDEAS.iter().map(|seed| build(seed, assessor)).collect()
}

fn build(seed: &SeedIdea, assessor: &str) -> Idea {
    let (month, day, hour) = seed.created;
    let created_at: DateTime<Utc> = Utc
        .with_ymd_and_hms(2026, month, day, hour, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);
    let id = Uuid::new_v4();

    let assessment = seed.ratings.and_then(|(value, feasibility)| {
        let value_ratings: Ratings<ValueDimension> =
            ValueDimension::ALL.iter().copied().zip(value).collect();
        let feasibility_ratings: Ratings<FeasibilityDimension> =
            FeasibilityDimension::ALL.iter().copied().zip(feasibility).collect();
        submit_assessment(
            id,
            value_ratings,
            feasibility_ratings,
            rationales(seed.rationales),
            assessor,
        )
        .ok()
    });

    Idea {
        id,
        title: seed.title.to_string(),
        description: seed.description.to_string(),
        ai_capability_area: seed.area,
        business_function: seed.function,
        expected_benefits: seed.benefits.to_string(),
        submitter_name: seed.submitter.0.to_string(),
        submitter_email: seed.submitter.1.to_string(),
        status: seed.status,
        assessment,
        created_at,
        updated_at: created_at,
    }
}

fn rationales(pairs: &[(&str, &str)]) -> Rationales {
    let mut value = BTreeMap::new();
    let mut feasibility = BTreeMap::new();
    for &(key, text) in pairs {
        if let Some(d) = ValueDimension::ALL.iter().find(|d| d.key() == key) {
            value.insert(*d, text.to_string());
        } else if let Some(d) = FeasibilityDimension::ALL.iter().find(|d| d.key() == key) {
            feasibility.insert(*d, text.to_string());
        }
    }
    Rationales { value, feasibility }
}
