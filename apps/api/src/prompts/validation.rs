use crate::prompts::models::PromptDraft;
use crate::validation::FormErrors;

pub const MIN_PROMPT_TEXT_CHARS: usize = 50;

pub fn validate_prompt_draft(draft: &PromptDraft) -> FormErrors {
    let mut errors = FormErrors::new();

    errors.require("title", &draft.title, "Title is required");
    errors.require_min_chars(
        "prompt_text",
        &draft.prompt_text,
        MIN_PROMPT_TEXT_CHARS,
        "Prompt text",
    );
    errors.require("owner", &draft.owner, "Owner/Team is required");
    if draft.ai_tools.is_empty() {
        errors.push("ai_tools", "Select at least one AI tool");
    }
    errors.require("submitter_name", &draft.submitter_name, "Your name is required");
    errors.require_email("submitter_email", &draft.submitter_email);

    errors
}

/// Trims every tag and drops the empty ones; duplicates are kept once.
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags.iter().map(|t| t.trim()).filter(|t| !t.is_empty()) {
        if !normalized.iter().any(|seen| seen == tag) {
            normalized.push(tag.to_string());
        }
    }
    normalized
}

/// Optional free-text fields: blank means absent.
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts::models::{AiTool, Category, ComplexityLevel, OutputFormat};

    fn draft() -> PromptDraft {
        PromptDraft {
            title: "Interview Question Generator".to_string(),
            category: Category::InternalProductivity,
            prompt_text: "Generate behavioral interview questions for a [ROLE] position focusing on [COMPETENCIES]."
                .to_string(),
            output_format: OutputFormat::BulletPoints,
            example_input: None,
            example_output: None,
            complexity_level: ComplexityLevel::Beginner,
            best_practices: None,
            owner: "Human Resources".to_string(),
            tags: vec!["HR".to_string(), "hiring".to_string()],
            ai_tools: vec![AiTool::ChatGpt],
            submitter_name: "Sarah Johnson".to_string(),
            submitter_email: "sarah.johnson@example.com".to_string(),
        }
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        assert!(validate_prompt_draft(&draft()).is_empty());
    }

    #[test]
    fn test_all_errors_reported_together() {
        let mut bad = draft();
        bad.title = "  ".to_string();
        bad.prompt_text = "Too short".to_string();
        bad.owner = String::new();
        bad.ai_tools.clear();
        bad.submitter_email = "sarah at example".to_string();

        let errors = validate_prompt_draft(&bad);
        for field in ["title", "prompt_text", "owner", "ai_tools", "submitter_email"] {
            assert!(errors.has(field), "expected an error on {field}");
        }
        assert!(!errors.has("submitter_name"));
        assert_eq!(errors.errors.len(), 5);
    }

    #[test]
    fn test_prompt_text_length_message() {
        let mut bad = draft();
        bad.prompt_text = "x".repeat(MIN_PROMPT_TEXT_CHARS - 1);
        let errors = validate_prompt_draft(&bad);
        assert_eq!(
            errors.errors[0].message,
            "Prompt text must be at least 50 characters"
        );
    }

    #[test]
    fn test_normalize_tags() {
        let tags = vec![
            " risk ".to_string(),
            String::new(),
            "matrix".to_string(),
            "   ".to_string(),
            "risk".to_string(),
        ];
        assert_eq!(normalize_tags(&tags), vec!["risk", "matrix"]);
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("  ")), None);
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some(" tip ")), Some("tip".to_string()));
    }
}
