use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::prompts::analytics::{compute_analytics, PromptAnalytics};
use crate::prompts::library::{copy_prompt, get_published_prompt, rate_prompt, search_prompts};
use crate::prompts::models::{PromptDraft, PromptEntry, PromptSubmission};
use crate::prompts::moderation::{
    approve_submission, pending_submissions, reject_submission, submit_prompt,
};
use crate::prompts::search::{
    categories_with_counts, featured, suggestions, top_rated, CategoryCount, SearchQuery,
    DEFAULT_LIST_LIMIT,
};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LimitQuery {
    pub limit: Option<usize>,
}

#[derive(Deserialize)]
pub struct SuggestionQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Deserialize)]
pub struct RatingRequest {
    pub rating: u8,
}

#[derive(Deserialize)]
pub struct RejectRequest {
    #[serde(default)]
    pub feedback: String,
}

/// GET /api/v1/prompts
pub async fn handle_search_prompts(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<PromptEntry>>, AppError> {
    let filters = query.into_filters()?;
    Ok(Json(search_prompts(state.prompts.as_ref(), &filters).await?))
}

/// GET /api/v1/prompts/:id
pub async fn handle_get_prompt(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PromptEntry>, AppError> {
    Ok(Json(get_published_prompt(state.prompts.as_ref(), id).await?))
}

/// POST /api/v1/prompts/:id/copy
pub async fn handle_copy_prompt(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PromptEntry>, AppError> {
    Ok(Json(copy_prompt(state.prompts.as_ref(), id).await?))
}

/// POST /api/v1/prompts/:id/rating
pub async fn handle_rate_prompt(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<RatingRequest>,
) -> Result<Json<PromptEntry>, AppError> {
    Ok(Json(rate_prompt(state.prompts.as_ref(), id, req.rating).await?))
}

/// GET /api/v1/prompts/categories
pub async fn handle_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryCount>>, AppError> {
    let prompts = state.prompts.list_prompts().await?;
    Ok(Json(categories_with_counts(&prompts)))
}

/// GET /api/v1/prompts/featured
pub async fn handle_featured(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<Vec<PromptEntry>>, AppError> {
    let prompts = state.prompts.list_prompts().await?;
    Ok(Json(featured(
        &prompts,
        query.limit.unwrap_or(DEFAULT_LIST_LIMIT),
    )))
}

/// GET /api/v1/prompts/top-rated
pub async fn handle_top_rated(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<Vec<PromptEntry>>, AppError> {
    let prompts = state.prompts.list_prompts().await?;
    Ok(Json(top_rated(
        &prompts,
        query.limit.unwrap_or(DEFAULT_LIST_LIMIT),
    )))
}

/// GET /api/v1/prompts/suggestions?q=
pub async fn handle_suggestions(
    State(state): State<AppState>,
    Query(query): Query<SuggestionQuery>,
) -> Result<Json<Vec<String>>, AppError> {
    let prompts = state.prompts.list_prompts().await?;
    Ok(Json(suggestions(&prompts, &query.q)))
}

/// GET /api/v1/prompts/analytics
pub async fn handle_prompt_analytics(
    State(state): State<AppState>,
) -> Result<Json<PromptAnalytics>, AppError> {
    let prompts = state.prompts.list_prompts().await?;
    let submissions = state.prompts.list_submissions().await?;
    Ok(Json(compute_analytics(&prompts, &submissions)))
}

/// POST /api/v1/prompts/submissions
pub async fn handle_submit_prompt(
    State(state): State<AppState>,
    Json(draft): Json<PromptDraft>,
) -> Result<(StatusCode, Json<PromptSubmission>), AppError> {
    let submission = submit_prompt(state.prompts.as_ref(), draft).await?;
    Ok((StatusCode::CREATED, Json(submission)))
}

/// GET /api/v1/prompts/submissions/pending
pub async fn handle_pending_submissions(
    State(state): State<AppState>,
) -> Result<Json<Vec<PromptSubmission>>, AppError> {
    Ok(Json(pending_submissions(state.prompts.as_ref()).await?))
}

/// POST /api/v1/prompts/submissions/:id/approve
pub async fn handle_approve_submission(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PromptEntry>, AppError> {
    Ok(Json(approve_submission(state.prompts.as_ref(), id).await?))
}

/// POST /api/v1/prompts/submissions/:id/reject
pub async fn handle_reject_submission(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<RejectRequest>,
) -> Result<Json<PromptSubmission>, AppError> {
    Ok(Json(
        reject_submission(state.prompts.as_ref(), id, &req.feedback).await?,
    ))
}
