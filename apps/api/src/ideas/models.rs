use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ideas::assessment::Assessment;
use crate::ideas::lifecycle::IdeaStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AiCapabilityArea {
    GenerativeAi,
    MachineLearning,
    NaturalLanguageProcessing,
    ComputerVision,
    RoboticProcessAutomation,
    PredictiveAnalytics,
    ConversationalAi,
    DocumentIntelligence,
}

impl AiCapabilityArea {
    pub fn label(self) -> &'static str {
        match self {
            AiCapabilityArea::GenerativeAi => "Generative AI",
            AiCapabilityArea::MachineLearning => "Machine Learning",
            AiCapabilityArea::NaturalLanguageProcessing => "Natural Language Processing",
            AiCapabilityArea::ComputerVision => "Computer Vision",
            AiCapabilityArea::RoboticProcessAutomation => "Robotic Process Automation",
            AiCapabilityArea::PredictiveAnalytics => "Predictive Analytics",
            AiCapabilityArea::ConversationalAi => "Conversational AI",
            AiCapabilityArea::DocumentIntelligence => "Document Intelligence",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessFunction {
    Audit,
    Tax,
    Advisory,
    DealAdvisory,
    It,
    Operations,
    HumanResources,
    Finance,
    Marketing,
    Legal,
    RiskAndCompliance,
}

impl BusinessFunction {
    pub fn label(self) -> &'static str {
        match self {
            BusinessFunction::Audit => "Audit",
            BusinessFunction::Tax => "Tax",
            BusinessFunction::Advisory => "Advisory",
            BusinessFunction::DealAdvisory => "Deal Advisory",
            BusinessFunction::It => "IT",
            BusinessFunction::Operations => "Operations",
            BusinessFunction::HumanResources => "Human Resources",
            BusinessFunction::Finance => "Finance",
            BusinessFunction::Marketing => "Marketing",
            BusinessFunction::Legal => "Legal",
            BusinessFunction::RiskAndCompliance => "Risk & Compliance",
        }
    }
}

/// Form payload for a new idea. Status, id and timestamps are assigned on
/// submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdeaSubmission {
    pub title: String,
    pub description: String,
    pub ai_capability_area: AiCapabilityArea,
    pub business_function: BusinessFunction,
    #[serde(default)]
    pub expected_benefits: String,
    pub submitter_name: String,
    pub submitter_email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Idea {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub ai_capability_area: AiCapabilityArea,
    pub business_function: BusinessFunction,
    pub expected_benefits: String,
    pub submitter_name: String,
    pub submitter_email: String,
    pub status: IdeaStatus,
    pub assessment: Option<Assessment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Idea {
    pub fn from_submission(submission: IdeaSubmission) -> Self {
        let now = Utc::now();
        Idea {
            id: Uuid::new_v4(),
            title: submission.title.trim().to_string(),
            description: submission.description.trim().to_string(),
            ai_capability_area: submission.ai_capability_area,
            business_function: submission.business_function,
            expected_benefits: submission.expected_benefits.trim().to_string(),
            submitter_name: submission.submitter_name.trim().to_string(),
            submitter_email: submission.submitter_email.trim().to_string(),
            status: IdeaStatus::Submitted,
            assessment: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attaches an assessment, replacing any previous one wholesale.
    pub fn with_assessment(&self, assessment: Assessment) -> Self {
        Idea {
            assessment: Some(assessment),
            ..self.clone()
        }
    }
}
