use crate::ideas::models::IdeaSubmission;
use crate::validation::FormErrors;

pub const MIN_DESCRIPTION_CHARS: usize = 50;

/// Checks an idea submission form. Capability area and business function are
/// closed enums, so a payload that deserialized already carries valid ones.
pub fn validate_idea_submission(submission: &IdeaSubmission) -> FormErrors {
    let mut errors = FormErrors::new();

    errors.require("title", &submission.title, "Idea name is required");
    errors.require_min_chars(
        "description",
        &submission.description,
        MIN_DESCRIPTION_CHARS,
        "Description",
    );
    errors.require("submitter_name", &submission.submitter_name, "Your name is required");
    errors.require_email("submitter_email", &submission.submitter_email);

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ideas::models::{AiCapabilityArea, BusinessFunction};

    fn valid_submission() -> IdeaSubmission {
        IdeaSubmission {
            title: "Tax Regulation Change Detector".to_string(),
            description: "Monitor global tax regulation changes and alert teams about client impact."
                .to_string(),
            ai_capability_area: AiCapabilityArea::NaturalLanguageProcessing,
            business_function: BusinessFunction::Tax,
            expected_benefits: "Reduce compliance risk".to_string(),
            submitter_name: "Michael Roberts".to_string(),
            submitter_email: "michael.roberts@example.com".to_string(),
        }
    }

    #[test]
    fn test_valid_submission_passes() {
        assert!(validate_idea_submission(&valid_submission()).is_empty());
    }

    #[test]
    fn test_short_description_fails() {
        let mut submission = valid_submission();
        submission.description = "Too short".to_string();
        let errors = validate_idea_submission(&submission);
        assert!(errors.has("description"));
        assert_eq!(errors.errors.len(), 1);
    }

    #[test]
    fn test_reports_every_missing_field() {
        let mut submission = valid_submission();
        submission.title = " ".to_string();
        submission.submitter_name = String::new();
        submission.submitter_email = "not-an-email".to_string();

        let errors = validate_idea_submission(&submission);
        assert!(errors.has("title"));
        assert!(errors.has("submitter_name"));
        assert!(errors.has("submitter_email"));
        assert_eq!(errors.errors.len(), 3);
    }

    #[test]
    fn test_expected_benefits_optional() {
        let mut submission = valid_submission();
        submission.expected_benefits = String::new();
        assert!(validate_idea_submission(&submission).is_empty());
    }
}
