//! Idea workflows: submission, assessment and status transitions.
//!
//! Scoring and lifecycle stay pure; this module loads the idea, applies the
//! pure step and writes the result back through a status compare-and-swap so
//! that two concurrent writers cannot both act on the same prior status.
//! Transitions write only the status, so an assessment recorded between the
//! read and the write survives.

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::ideas::assessment::{submit_assessment, AssessmentInput};
use crate::ideas::lifecycle::{self, IdeaStatus, Transition};
use crate::ideas::models::{Idea, IdeaSubmission};
use crate::ideas::repository::IdeaRepository;
use crate::ideas::validation::validate_idea_submission;

pub async fn submit_idea(
    repo: &dyn IdeaRepository,
    submission: IdeaSubmission,
) -> Result<Idea, AppError> {
    validate_idea_submission(&submission).into_result()?;

    let idea = Idea::from_submission(submission);
    repo.upsert(&idea).await?;

    info!(idea_id = %idea.id, title = %idea.title, "Idea submitted");
    Ok(idea)
}

pub async fn get_idea(repo: &dyn IdeaRepository, id: Uuid) -> Result<Idea, AppError> {
    repo.get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Idea {id} not found")))
}

/// Scores the ratings and attaches the assessment, replacing any earlier one.
/// The idea's status is not changed.
pub async fn record_assessment(
    repo: &dyn IdeaRepository,
    id: Uuid,
    input: AssessmentInput,
    default_assessor: &str,
) -> Result<Idea, AppError> {
    let idea = get_idea(repo, id).await?;

    let assessed_by = input
        .assessed_by
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(default_assessor);

    let assessment = submit_assessment(
        id,
        input.value_ratings,
        input.feasibility_ratings,
        input.rationales,
        assessed_by,
    )?;

    let mut updated = idea.with_assessment(assessment);
    updated.updated_at = Utc::now();
    store_if_unchanged(repo, &idea, &updated).await?;

    if let Some(assessment) = &updated.assessment {
        info!(
            idea_id = %assessment.idea_id(),
            value_score = assessment.value_score(),
            feasibility_score = assessment.feasibility_score(),
            quadrant = ?assessment.quadrant(),
            "Assessment recorded"
        );
    }
    Ok(updated)
}

pub async fn apply_transition(
    repo: &dyn IdeaRepository,
    id: Uuid,
    transition: Transition,
) -> Result<Idea, AppError> {
    let idea = get_idea(repo, id).await?;
    let updated = lifecycle::apply(transition, &idea)?;

    if updated.status == idea.status {
        debug!(idea_id = %id, status = %idea.status, transition = transition.as_str(), "Transition is a no-op");
        return Ok(idea);
    }

    let moved = swap_status(repo, &idea, updated.status).await?;

    info!(
        idea_id = %id,
        from = %idea.status,
        to = %moved.status,
        transition = transition.as_str(),
        "Idea status changed"
    );
    Ok(moved)
}

/// Applies a status change decided against `before`, then returns the stored
/// idea as it now stands.
async fn swap_status(
    repo: &dyn IdeaRepository,
    before: &Idea,
    next: IdeaStatus,
) -> Result<Idea, AppError> {
    if !repo
        .compare_and_swap_status(before.id, before.status, next, Utc::now())
        .await?
    {
        return Err(status_conflict(before));
    }
    get_idea(repo, before.id).await
}

async fn store_if_unchanged(
    repo: &dyn IdeaRepository,
    before: &Idea,
    after: &Idea,
) -> Result<(), AppError> {
    if repo.replace_if_status(after, before.status).await? {
        Ok(())
    } else {
        Err(status_conflict(before))
    }
}

fn status_conflict(before: &Idea) -> AppError {
    AppError::StatusConflict {
        id: before.id,
        expected: before.status,
    }
}
