//! Review queue: proposed prompts enter as `pending` and are either approved
//! (published to the library under the same id) or rejected with feedback.
//! Only a pending submission can be moderated.

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::prompts::models::{PromptDraft, PromptEntry, PromptStatus, PromptSubmission};
use crate::prompts::repository::PromptRepository;
use crate::prompts::validation::{non_blank, normalize_tags, validate_prompt_draft};
use crate::validation::FormErrors;

pub const INITIAL_VERSION: &str = "1.0.0";

/// Validates the draft and builds a pending submission stamped at `now`.
pub fn new_submission(draft: PromptDraft, now: DateTime<Utc>) -> Result<PromptSubmission, AppError> {
    validate_prompt_draft(&draft).into_result()?;

    Ok(PromptSubmission {
        entry: PromptEntry {
            id: Uuid::new_v4(),
            title: draft.title.trim().to_string(),
            category: draft.category,
            prompt_text: draft.prompt_text.trim().to_string(),
            output_format: draft.output_format,
            example_input: non_blank(draft.example_input.as_deref()),
            example_output: non_blank(draft.example_output.as_deref()),
            complexity_level: draft.complexity_level,
            best_practices: non_blank(draft.best_practices.as_deref()),
            owner: draft.owner.trim().to_string(),
            tags: normalize_tags(&draft.tags),
            ai_tools: draft.ai_tools,
            version: INITIAL_VERSION.to_string(),
            last_modified: now.date_naive(),
            usage_count: 0,
            rating: 0.0,
            rating_count: 0,
            status: PromptStatus::Pending,
        },
        submitter_name: draft.submitter_name.trim().to_string(),
        submitter_email: draft.submitter_email.trim().to_string(),
        submitted_at: now,
        review_feedback: None,
    })
}

fn ensure_pending(submission: &PromptSubmission) -> Result<(), AppError> {
    match submission.status() {
        PromptStatus::Pending => Ok(()),
        status => Err(AppError::Conflict(format!(
            "Submission {} is {status}; only pending submissions can be reviewed",
            submission.id()
        ))),
    }
}

/// Returns the approved submission and the library entry to publish.
pub fn approve(
    submission: &PromptSubmission,
    now: DateTime<Utc>,
) -> Result<(PromptSubmission, PromptEntry), AppError> {
    ensure_pending(submission)?;

    let mut reviewed = submission.clone();
    reviewed.entry.status = PromptStatus::Approved;
    reviewed.entry.last_modified = now.date_naive();

    let published = reviewed.entry.clone();
    Ok((reviewed, published))
}

pub fn reject(submission: &PromptSubmission, feedback: &str) -> Result<PromptSubmission, AppError> {
    let mut errors = FormErrors::new();
    errors.require(
        "feedback",
        feedback,
        "Please provide feedback for rejection",
    );
    errors.into_result()?;
    ensure_pending(submission)?;

    let mut reviewed = submission.clone();
    reviewed.entry.status = PromptStatus::Rejected;
    reviewed.review_feedback = Some(feedback.trim().to_string());
    Ok(reviewed)
}

// ────────────────────────────────────────────────────────────────────────────
// Workflows
// ────────────────────────────────────────────────────────────────────────────

pub async fn submit_prompt(
    repo: &dyn PromptRepository,
    draft: PromptDraft,
) -> Result<PromptSubmission, AppError> {
    let submission = new_submission(draft, Utc::now())?;
    repo.upsert_submission(&submission).await?;

    info!(
        submission_id = %submission.id(),
        title = %submission.entry.title,
        "Prompt submitted for review"
    );
    Ok(submission)
}

pub async fn pending_submissions(
    repo: &dyn PromptRepository,
) -> Result<Vec<PromptSubmission>, AppError> {
    Ok(repo
        .list_submissions()
        .await?
        .into_iter()
        .filter(|s| s.status() == PromptStatus::Pending)
        .collect())
}

async fn load_submission(repo: &dyn PromptRepository, id: Uuid) -> Result<PromptSubmission, AppError> {
    repo.get_submission(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Submission {id} not found")))
}

async fn store_review(repo: &dyn PromptRepository, reviewed: &PromptSubmission) -> Result<(), AppError> {
    if repo
        .compare_and_swap_submission(reviewed, PromptStatus::Pending)
        .await?
    {
        Ok(())
    } else {
        Err(concurrent_review(reviewed.id()))
    }
}

fn concurrent_review(id: Uuid) -> AppError {
    AppError::Conflict(format!("Submission {id} was reviewed concurrently"))
}

pub async fn approve_submission(
    repo: &dyn PromptRepository,
    id: Uuid,
) -> Result<PromptEntry, AppError> {
    let submission = load_submission(repo, id).await?;
    let (reviewed, published) = approve(&submission, Utc::now())?;

    if !repo.publish_submission(&reviewed, &published).await? {
        return Err(concurrent_review(id));
    }

    info!(prompt_id = %published.id, title = %published.title, "Prompt approved and published");
    Ok(published)
}

pub async fn reject_submission(
    repo: &dyn PromptRepository,
    id: Uuid,
    feedback: &str,
) -> Result<PromptSubmission, AppError> {
    let submission = load_submission(repo, id).await?;
    let reviewed = reject(&submission, feedback)?;

    store_review(repo, &reviewed).await?;

    info!(submission_id = %id, "Prompt submission rejected");
    Ok(reviewed)
}
