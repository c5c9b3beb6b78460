use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    ClientDeliverables,
    InternalProductivity,
    ResearchAndAnalysis,
    DataAndFinance,
    CreativeAndMarketing,
    Technical,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::ClientDeliverables,
        Category::InternalProductivity,
        Category::ResearchAndAnalysis,
        Category::DataAndFinance,
        Category::CreativeAndMarketing,
        Category::Technical,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::ClientDeliverables => "Client Deliverables",
            Category::InternalProductivity => "Internal Productivity",
            Category::ResearchAndAnalysis => "Research & Analysis",
            Category::DataAndFinance => "Data & Finance",
            Category::CreativeAndMarketing => "Creative & Marketing",
            Category::Technical => "Technical",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Category::ClientDeliverables => {
                "Executive summaries, proposal outlines, market analysis reports, project roadmaps"
            }
            Category::InternalProductivity => {
                "Email drafting, meeting note summaries, project status updates, stakeholder communications"
            }
            Category::ResearchAndAnalysis => {
                "Competitive intelligence, industry trends, regulatory analysis, technology assessments"
            }
            Category::DataAndFinance => {
                "KPI analysis, risk assessment, scenario modeling, financial summaries"
            }
            Category::CreativeAndMarketing => {
                "Tagline creation, content ideation, workshop design, presentation narratives"
            }
            Category::Technical => {
                "Code documentation, architecture descriptions, API specifications, test case generation"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    BulletPoints,
    Table,
    Narrative,
    StructuredNarrative,
    Code,
    Json,
    Markdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityLevel {
    Beginner,
    Intermediate,
    Expert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AiTool {
    #[serde(rename = "chatgpt")]
    ChatGpt,
    MicrosoftCopilot,
    GoogleGemini,
    Claude,
    InternalAi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptStatus {
    Draft,
    Pending,
    Approved,
    Rejected,
    Archived,
}

impl PromptStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PromptStatus::Draft => "draft",
            PromptStatus::Pending => "pending",
            PromptStatus::Approved => "approved",
            PromptStatus::Rejected => "rejected",
            PromptStatus::Archived => "archived",
        }
    }
}

impl std::fmt::Display for PromptStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reusable prompt in the library. Only `approved` entries are visible to
/// search and the listing endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptEntry {
    pub id: Uuid,
    pub title: String,
    pub category: Category,
    pub prompt_text: String,
    pub output_format: OutputFormat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_input: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_output: Option<String>,
    pub complexity_level: ComplexityLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_practices: Option<String>,
    pub owner: String,
    pub tags: Vec<String>,
    pub ai_tools: Vec<AiTool>,
    pub version: String,
    pub last_modified: NaiveDate,
    pub usage_count: u64,
    /// Average of all ratings, one decimal place. `0.0` until first rated.
    pub rating: f64,
    pub rating_count: u32,
    pub status: PromptStatus,
}

/// Form payload for proposing a new prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptDraft {
    pub title: String,
    pub category: Category,
    pub prompt_text: String,
    pub output_format: OutputFormat,
    #[serde(default)]
    pub example_input: Option<String>,
    #[serde(default)]
    pub example_output: Option<String>,
    pub complexity_level: ComplexityLevel,
    #[serde(default)]
    pub best_practices: Option<String>,
    pub owner: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub ai_tools: Vec<AiTool>,
    pub submitter_name: String,
    pub submitter_email: String,
}

/// A proposed prompt awaiting (or past) moderation. The entry's `status`
/// is the moderation state; once approved, the entry is published to the
/// library under the same id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptSubmission {
    #[serde(flatten)]
    pub entry: PromptEntry,
    pub submitter_name: String,
    pub submitter_email: String,
    pub submitted_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_feedback: Option<String>,
}

impl PromptSubmission {
    pub fn id(&self) -> Uuid {
        self.entry.id
    }

    pub fn status(&self) -> PromptStatus {
        self.entry.status
    }
}
