//! Demo prompt library and review queue loaded into an empty store when
//! `SEED_DEMO_DATA` is on.

use chrono::{NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use crate::prompts::models::{
    AiTool::{self, *},
    Category, ComplexityLevel, OutputFormat, PromptEntry, PromptStatus, PromptSubmission,
};

struct SeedPrompt {
    title: &'static str,
    category: Category,
    text: &'static str,
    format: OutputFormat,
    example: Option<(&'static str, &'static str)>,
    complexity: ComplexityLevel,
    best_practices: &'static str,
    owner: &'static str,
    tags: &'static [&'static str],
    tools: &'static [AiTool],
    version: &'static str,
    modified: (u32, u32),
    usage: u64,
    rating: (f64, u32),
}

const SEED_PROMPTS: &[SeedPrompt] = &[
    SeedPrompt {
        title: "Executive Summary Generator",
        category: Category::ClientDeliverables,
        text: "You are a senior management consultant. Summarize the following document into an executive summary for C-suite stakeholders. Include key findings (3-5 bullet points), strategic recommendations, immediate next steps and potential risks. Limit to 500 words.\n\nDocument to summarize:\n[PASTE DOCUMENT HERE]",
        format: OutputFormat::StructuredNarrative,
        example: Some((
            "Annual performance report with financial data and market analysis",
            "Executive Overview: The FY2025 performance demonstrates strong growth... Key Findings: Revenue increased by 15%...",
        )),
        complexity: ComplexityLevel::Beginner,
        best_practices: "Provide context about the audience. For board presentations, focus on strategic implications.",
        owner: "Strategy & Operations Practice",
        tags: &["executive summary", "client deliverable", "board presentation", "strategy"],
        tools: &[ChatGpt, MicrosoftCopilot, GoogleGemini],
        version: "1.2.0",
        modified: (1, 15),
        usage: 1247,
        rating: (4.8, 156),
    },
    SeedPrompt {
        title: "Proposal Outline Builder",
        category: Category::ClientDeliverables,
        text: "Create a comprehensive proposal outline for a consulting engagement covering executive summary, understanding of client needs, approach and methodology, timeline and milestones, team, investment summary and next steps.\n\nClient Industry: [INDUSTRY]\nEngagement Type: [TYPE]\nKey Challenges: [CHALLENGES]",
        format: OutputFormat::StructuredNarrative,
        example: None,
        complexity: ComplexityLevel::Intermediate,
        best_practices: "Tailor the tone to match client culture. Include specific deliverables for each phase.",
        owner: "Business Development Team",
        tags: &["proposal", "sales", "client engagement", "business development"],
        tools: &[ChatGpt, MicrosoftCopilot],
        version: "2.0.0",
        modified: (1, 10),
        usage: 892,
        rating: (4.6, 98),
    },
    SeedPrompt {
        title: "Market Analysis Report",
        category: Category::ClientDeliverables,
        text: "Conduct a comprehensive market analysis for [INDUSTRY/MARKET]: market overview, competitive landscape, industry trends, opportunities and threats, and strategic recommendations. Use data-driven language and cite industry benchmarks where applicable.",
        format: OutputFormat::StructuredNarrative,
        example: None,
        complexity: ComplexityLevel::Expert,
        best_practices: "Request specific data sources or ranges. Validate outputs against recent industry reports.",
        owner: "Strategy Practice",
        tags: &["market analysis", "competitive intelligence", "strategy", "industry research"],
        tools: &[ChatGpt, GoogleGemini, Claude],
        version: "1.1.0",
        modified: (1, 12),
        usage: 654,
        rating: (4.7, 73),
    },
    SeedPrompt {
        title: "Professional Email Composer",
        category: Category::InternalProductivity,
        text: "Draft a professional email.\n\nPurpose: [REQUEST/UPDATE/FOLLOW-UP]\nRecipient: [NAME & ROLE]\nTone: [FORMAL/SEMI-FORMAL]\nKey Message: [MAIN POINT]\nAction Required: [SPECIFIC ASK]\n\nKeep it under 200 words, clear and actionable, with a compelling subject line.",
        format: OutputFormat::Narrative,
        example: None,
        complexity: ComplexityLevel::Beginner,
        best_practices: "Always review generated emails for appropriate tone. Personalize greetings.",
        owner: "Corporate Communications",
        tags: &["email", "communication", "productivity", "professional writing"],
        tools: &[ChatGpt, MicrosoftCopilot, GoogleGemini, Claude],
        version: "1.0.0",
        modified: (1, 8),
        usage: 2156,
        rating: (4.5, 234),
    },
    SeedPrompt {
        title: "Meeting Notes Summarizer",
        category: Category::InternalProductivity,
        text: "Transform the following meeting notes into a structured summary with key discussion points, decisions made, action items (with owner and deadline), open issues and next steps.\n\nMeeting Notes:\n[PASTE CONTENT HERE]",
        format: OutputFormat::BulletPoints,
        example: None,
        complexity: ComplexityLevel::Beginner,
        best_practices: "Include speaker attributions for accountability. Flag unclear decisions for follow-up.",
        owner: "Project Management Office",
        tags: &["meeting notes", "productivity", "action items", "documentation"],
        tools: &[ChatGpt, MicrosoftCopilot, GoogleGemini],
        version: "1.3.0",
        modified: (1, 14),
        usage: 1893,
        rating: (4.9, 201),
    },
    SeedPrompt {
        title: "Status Report Generator",
        category: Category::InternalProductivity,
        text: "Generate a weekly project status report from the accomplishments, planned activities and risks below. Include a RAG status with justification, progress percentage, milestones achieved and stakeholder communications needed.\n\n[PROJECT DETAILS]",
        format: OutputFormat::StructuredNarrative,
        example: None,
        complexity: ComplexityLevel::Beginner,
        best_practices: "Be honest about RAG status. Include quantifiable metrics where possible.",
        owner: "Project Management Office",
        tags: &["status report", "project management", "reporting", "weekly update"],
        tools: &[ChatGpt, MicrosoftCopilot],
        version: "1.0.0",
        modified: (1, 5),
        usage: 1432,
        rating: (4.4, 167),
    },
    SeedPrompt {
        title: "Competitive Intelligence Analyzer",
        category: Category::ResearchAndAnalysis,
        text: "Analyze the competitive landscape for [COMPANY/PRODUCT] in the [INDUSTRY] sector: top five direct competitors, a SWOT analysis, price and feature positioning, and recent strategic moves worth watching.",
        format: OutputFormat::Table,
        example: None,
        complexity: ComplexityLevel::Intermediate,
        best_practices: "Cross-reference with recent earnings calls and press releases. Note data freshness limitations.",
        owner: "Strategy Practice",
        tags: &["competitive analysis", "SWOT", "market research", "strategy"],
        tools: &[ChatGpt, GoogleGemini, Claude],
        version: "1.0.0",
        modified: (1, 11),
        usage: 567,
        rating: (4.6, 65),
    },
    SeedPrompt {
        title: "Regulatory Impact Assessment",
        category: Category::ResearchAndAnalysis,
        text: "Assess the impact of [REGULATION] on [ORGANIZATION TYPE]: summary of requirements, affected business areas, compliance gaps, implementation timeline and estimated cost of compliance.",
        format: OutputFormat::StructuredNarrative,
        example: None,
        complexity: ComplexityLevel::Expert,
        best_practices: "Always verify regulatory details with legal counsel. Include jurisdiction-specific considerations.",
        owner: "Risk & Compliance Practice",
        tags: &["regulatory", "compliance", "risk assessment", "policy analysis"],
        tools: &[ChatGpt, Claude],
        version: "1.0.0",
        modified: (1, 9),
        usage: 234,
        rating: (4.3, 28),
    },
    SeedPrompt {
        title: "Financial Summary Narrator",
        category: Category::DataAndFinance,
        text: "Turn the following financial figures into a narrative for CFO reporting. Explain revenue and margin trends, significant variances against budget and prior period, and the drivers behind them.\n\n[FINANCIAL DATA]",
        format: OutputFormat::Narrative,
        example: None,
        complexity: ComplexityLevel::Intermediate,
        best_practices: "Verify all calculations independently. Never rely solely on generated text for financial reporting.",
        owner: "Finance Transformation Practice",
        tags: &["financial analysis", "CFO reporting", "variance analysis", "performance"],
        tools: &[ChatGpt, MicrosoftCopilot],
        version: "1.1.0",
        modified: (1, 13),
        usage: 445,
        rating: (4.5, 52),
    },
    SeedPrompt {
        title: "KPI Dashboard Interpreter",
        category: Category::DataAndFinance,
        text: "Interpret the KPI dashboard data below. Highlight metrics that are off target, likely root causes, correlations between indicators and three recommended actions for leadership.\n\n[KPI DATA]",
        format: OutputFormat::BulletPoints,
        example: None,
        complexity: ComplexityLevel::Intermediate,
        best_practices: "Combine quantitative insights with qualitative context from stakeholder conversations.",
        owner: "Performance Improvement Team",
        tags: &["KPI", "dashboard", "performance metrics", "analysis"],
        tools: &[ChatGpt, GoogleGemini],
        version: "1.0.0",
        modified: (1, 7),
        usage: 389,
        rating: (4.4, 41),
    },
    SeedPrompt {
        title: "Thought Leadership Article Creator",
        category: Category::CreativeAndMarketing,
        text: "Write a thought leadership article on [TOPIC] for [AUDIENCE]. Open with a provocative insight, support it with three evidence-backed arguments and close with a clear call to action. Target 800 words.",
        format: OutputFormat::Narrative,
        example: None,
        complexity: ComplexityLevel::Intermediate,
        best_practices: "Include data points to support claims. Have subject matter experts review before publication.",
        owner: "Marketing & Communications",
        tags: &["thought leadership", "content marketing", "article", "brand"],
        tools: &[ChatGpt, Claude, GoogleGemini],
        version: "1.0.0",
        modified: (1, 6),
        usage: 312,
        rating: (4.7, 38),
    },
    SeedPrompt {
        title: "Presentation Narrative Builder",
        category: Category::CreativeAndMarketing,
        text: "Build a presentation narrative for [TOPIC] aimed at [AUDIENCE]. Structure it as situation, complication, resolution, with a headline and speaker notes for each slide.",
        format: OutputFormat::StructuredNarrative,
        example: None,
        complexity: ComplexityLevel::Beginner,
        best_practices: "Practice the narrative out loud. Adjust for natural pauses and emphasis.",
        owner: "Learning & Development",
        tags: &["presentation", "storytelling", "public speaking", "communication"],
        tools: &[ChatGpt, MicrosoftCopilot],
        version: "1.0.0",
        modified: (1, 4),
        usage: 678,
        rating: (4.6, 82),
    },
    SeedPrompt {
        title: "Code Documentation Generator",
        category: Category::Technical,
        text: "Generate documentation for the following code: purpose, parameters, return values, error conditions and a usage example. Follow the documentation conventions of [LANGUAGE].\n\n[PASTE CODE HERE]",
        format: OutputFormat::Markdown,
        example: None,
        complexity: ComplexityLevel::Beginner,
        best_practices: "Review generated docs for accuracy. Include edge cases that may be missed.",
        owner: "Technology Practice",
        tags: &["documentation", "code", "developer", "technical writing"],
        tools: &[ChatGpt, Claude, GoogleGemini],
        version: "1.0.0",
        modified: (1, 10),
        usage: 523,
        rating: (4.5, 64),
    },
    SeedPrompt {
        title: "API Specification Writer",
        category: Category::Technical,
        text: "Write an OpenAPI 3.0 specification for the API described below, including an info section with description and version, paths with request and response schemas, and error responses.\n\n[API DESCRIPTION]",
        format: OutputFormat::Json,
        example: None,
        complexity: ComplexityLevel::Expert,
        best_practices: "Validate the generated document with OpenAPI tools. Include realistic example values.",
        owner: "Technology Practice",
        tags: &["API", "OpenAPI", "Swagger", "specification", "REST"],
        tools: &[ChatGpt, Claude],
        version: "1.0.0",
        modified: (1, 8),
        usage: 267,
        rating: (4.4, 31),
    },
    SeedPrompt {
        title: "Test Case Generator",
        category: Category::Technical,
        text: "Generate test cases for the feature described below. Cover happy paths, boundary values, negative cases and security considerations, with preconditions, steps and expected results for each.\n\n[FEATURE DESCRIPTION]",
        format: OutputFormat::Table,
        example: None,
        complexity: ComplexityLevel::Intermediate,
        best_practices: "Combine generated cases with domain expertise. Prioritize based on risk.",
        owner: "Quality Assurance Team",
        tags: &["testing", "QA", "test cases", "quality assurance"],
        tools: &[ChatGpt, Claude, GoogleGemini],
        version: "1.0.0",
        modified: (1, 12),
        usage: 356,
        rating: (4.6, 42),
    },
    SeedPrompt {
        title: "Architecture Decision Record",
        category: Category::Technical,
        text: "Write an architecture decision record for [DECISION]: context, the options considered with their trade-offs, the decision taken, and its consequences for cost, operability and future change.",
        format: OutputFormat::Markdown,
        example: None,
        complexity: ComplexityLevel::Expert,
        best_practices: "Include the names of stakeholders who approved. Link to relevant design documents.",
        owner: "Enterprise Architecture",
        tags: &["architecture", "ADR", "decision record", "technical design"],
        tools: &[ChatGpt, Claude],
        version: "1.0.0",
        modified: (1, 11),
        usage: 189,
        rating: (4.7, 23),
    },
];

struct SeedSubmission {
    title: &'static str,
    category: Category,
    text: &'static str,
    format: OutputFormat,
    complexity: ComplexityLevel,
    best_practices: Option<&'static str>,
    owner: &'static str,
    tags: &'static [&'static str],
    tools: &'static [AiTool],
    submitter: (&'static str, &'static str),
    submitted: (u32, u32, u32, u32),
}

const SEED_SUBMISSIONS: &[SeedSubmission] = &[
    SeedSubmission {
        title: "Interview Question Generator",
        category: Category::InternalProductivity,
        text: "Generate behavioral interview questions for a [ROLE] position focusing on [COMPETENCIES], with follow-up probes and what a strong answer looks like.",
        format: OutputFormat::BulletPoints,
        complexity: ComplexityLevel::Beginner,
        best_practices: Some("Customize questions based on role level and team culture."),
        owner: "Human Resources",
        tags: &["HR", "interview", "recruitment", "hiring"],
        tools: &[ChatGpt, MicrosoftCopilot],
        submitter: ("Sarah Johnson", "sarah.johnson@example.com"),
        submitted: (1, 17, 9, 30),
    },
    SeedSubmission {
        title: "Risk Assessment Matrix",
        category: Category::DataAndFinance,
        text: "Create a risk assessment matrix for [PROJECT/INITIATIVE] evaluating probability and impact of each risk, with an owner and mitigation for every high-priority item.",
        format: OutputFormat::Table,
        complexity: ComplexityLevel::Intermediate,
        best_practices: Some("Include mitigation strategies for high-priority risks."),
        owner: "Risk Advisory",
        tags: &["risk", "assessment", "matrix", "project management"],
        tools: &[ChatGpt, Claude],
        submitter: ("Michael Chen", "michael.chen@example.com"),
        submitted: (1, 16, 14, 15),
    },
    SeedSubmission {
        title: "Client Onboarding Checklist",
        category: Category::ClientDeliverables,
        text: "Generate a comprehensive client onboarding checklist for [ENGAGEMENT TYPE], grouped by week, covering contracts, access, kickoff logistics and stakeholder introductions.",
        format: OutputFormat::BulletPoints,
        complexity: ComplexityLevel::Beginner,
        best_practices: None,
        owner: "Client Services",
        tags: &["onboarding", "checklist", "client", "engagement"],
        tools: &[ChatGpt, MicrosoftCopilot],
        submitter: ("Emily Rodriguez", "emily.rodriguez@example.com"),
        submitted: (1, 15, 11, 45),
    },
];

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, month, day).unwrap_or(NaiveDate::MIN)
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn demo_prompts() -> Vec<PromptEntry> {
    SEED_PROMPTS
        .iter()
        .map(|seed| PromptEntry {
            id: Uuid::new_v4(),
            title: seed.title.to_string(),
            category: seed.category,
            prompt_text: seed.text.to_string(),
            output_format: seed.format,
            example_input: seed.example.map(|(input, _)| input.to_string()),
            example_output: seed.example.map(|(_, output)| output.to_string()),
            complexity_level: seed.complexity,
            best_practices: Some(seed.best_practices.to_string()),
            owner: seed.owner.to_string(),
            tags: strings(seed.tags),
            ai_tools: seed.tools.to_vec(),
            version: seed.version.to_string(),
            last_modified: date(seed.modified.0, seed.modified.1),
            usage_count: seed.usage,
            rating: seed.rating.0,
            rating_count: seed.rating.1,
            status: PromptStatus::Approved,
        })
        .collect()
}

pub fn demo_submissions() -> Vec<PromptSubmission> {
    SEED_SUBMISSIONS
        .iter()
        .map(|seed| {
            let (month, day, hour, minute) = seed.submitted;
            let submitted_at = Utc
                .with_ymd_and_hms(2026, month, day, hour, minute, 0)
                .single()
                .unwrap_or_else(Utc::now);
            PromptSubmission {
                entry: PromptEntry {
                    id: Uuid::new_v4(),
                    title: seed.title.to_string(),
                    category: seed.category,
                    prompt_text: seed.text.to_string(),
                    output_format: seed.format,
                    example_input: None,
                    example_output: None,
                    complexity_level: seed.complexity,
                    best_practices: seed.best_practices.map(str::to_string),
                    owner: seed.owner.to_string(),
                    tags: strings(seed.tags),
                    ai_tools: seed.tools.to_vec(),
                    version: "1.0.0".to_string(),
                    last_modified: submitted_at.date_naive(),
                    usage_count: 0,
                    rating: 0.0,
                    rating_count: 0,
                    status: PromptStatus::Pending,
                },
                submitter_name: seed.submitter.0.to_string(),
                submitter_email: seed.submitter.1.to_string(),
                submitted_at,
                review_feedback: None,
            }
        })
        .collect()
}
