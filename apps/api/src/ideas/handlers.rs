use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::ideas::analytics::{
    compute_analytics, pipeline_board, priority_matrix, IdeasAnalytics, MatrixPoint,
    PipelineBoard,
};
use crate::ideas::assessment::AssessmentInput;
use crate::ideas::filter::{filter_ideas, IdeaFilter};
use crate::ideas::lifecycle::{IdeaStatus, Transition};
use crate::ideas::models::{Idea, IdeaSubmission};
use crate::ideas::pipeline::{apply_transition, get_idea, record_assessment, submit_idea};
use crate::ideas::scoring::{Dimension, FeasibilityDimension, Quadrant, ValueDimension};
use crate::state::AppState;

#[derive(Serialize)]
pub struct StageInfo {
    pub status: IdeaStatus,
    pub label: &'static str,
    pub description: &'static str,
    pub order: u8,
    pub pipeline_position: Option<u8>,
    pub reachable: Vec<IdeaStatus>,
}

#[derive(Serialize)]
pub struct DimensionInfo {
    pub key: &'static str,
    pub label: &'static str,
    pub weight: f64,
    pub description: &'static str,
}

#[derive(Serialize)]
pub struct QuadrantInfo {
    pub quadrant: Quadrant,
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Serialize)]
pub struct ScoringModelResponse {
    pub value: Vec<DimensionInfo>,
    pub feasibility: Vec<DimensionInfo>,
    pub quadrants: Vec<QuadrantInfo>,
    pub threshold: f64,
}

/// GET /api/v1/ideas
pub async fn handle_list_ideas(
    State(state): State<AppState>,
    Query(filter): Query<IdeaFilter>,
) -> Result<Json<Vec<Idea>>, AppError> {
    let ideas = state.ideas.list().await?;
    Ok(Json(filter_ideas(ideas, &filter)))
}

/// POST /api/v1/ideas
pub async fn handle_submit_idea(
    State(state): State<AppState>,
    Json(submission): Json<IdeaSubmission>,
) -> Result<(StatusCode, Json<Idea>), AppError> {
    let idea = submit_idea(state.ideas.as_ref(), submission).await?;
    Ok((StatusCode::CREATED, Json(idea)))
}

/// GET /api/v1/ideas/:id
pub async fn handle_get_idea(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Idea>, AppError> {
    Ok(Json(get_idea(state.ideas.as_ref(), id).await?))
}

/// POST /api/v1/ideas/:id/assessment
///
/// Scores the ratings and attaches the assessment. Does not move the idea
/// through the pipeline; call `/advance` for that.
pub async fn handle_submit_assessment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<AssessmentInput>,
) -> Result<Json<Idea>, AppError> {
    let idea = record_assessment(
        state.ideas.as_ref(),
        id,
        input,
        &state.config.default_assessor,
    )
    .await?;
    Ok(Json(idea))
}

async fn transition(state: &AppState, id: Uuid, transition: Transition) -> Result<Json<Idea>, AppError> {
    Ok(Json(apply_transition(state.ideas.as_ref(), id, transition).await?))
}

/// POST /api/v1/ideas/:id/advance
pub async fn handle_advance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Idea>, AppError> {
    transition(&state, id, Transition::Advance).await
}

/// POST /api/v1/ideas/:id/hold
pub async fn handle_hold(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Idea>, AppError> {
    transition(&state, id, Transition::Hold).await
}

/// POST /api/v1/ideas/:id/reject
pub async fn handle_reject(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Idea>, AppError> {
    transition(&state, id, Transition::Reject).await
}

/// POST /api/v1/ideas/:id/archive
pub async fn handle_archive(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Idea>, AppError> {
    transition(&state, id, Transition::Archive).await
}

/// GET /api/v1/ideas/analytics
pub async fn handle_ideas_analytics(
    State(state): State<AppState>,
) -> Result<Json<IdeasAnalytics>, AppError> {
    let ideas = state.ideas.list().await?;
    Ok(Json(compute_analytics(&ideas)))
}

/// GET /api/v1/ideas/matrix
///
/// Accepts the same filters as the list endpoint.
pub async fn handle_priority_matrix(
    State(state): State<AppState>,
    Query(filter): Query<IdeaFilter>,
) -> Result<Json<Vec<MatrixPoint>>, AppError> {
    let ideas = filter_ideas(state.ideas.list().await?, &filter);
    Ok(Json(priority_matrix(&ideas)))
}

/// GET /api/v1/ideas/pipeline
pub async fn handle_pipeline_board(
    State(state): State<AppState>,
) -> Result<Json<PipelineBoard>, AppError> {
    let ideas = state.ideas.list().await?;
    Ok(Json(pipeline_board(&ideas)))
}

/// GET /api/v1/ideas/stages
pub async fn handle_stages() -> Json<Vec<StageInfo>> {
    Json(
        IdeaStatus::ALL
            .into_iter()
            .map(|status| StageInfo {
                status,
                label: status.label(),
                description: status.description(),
                order: status.display_order(),
                pipeline_position: status.pipeline_position(),
                reachable: status.reachable(),
            })
            .collect(),
    )
}

fn dimension_info<D: Dimension>() -> Vec<DimensionInfo> {
    D::ALL
        .iter()
        .map(|d| DimensionInfo {
            key: d.key(),
            label: d.label(),
            weight: d.weight(),
            description: d.description(),
        })
        .collect()
}

/// GET /api/v1/ideas/dimensions
pub async fn handle_scoring_model() -> Json<ScoringModelResponse> {
    Json(ScoringModelResponse {
        value: dimension_info::<ValueDimension>(),
        feasibility: dimension_info::<FeasibilityDimension>(),
        quadrants: Quadrant::ALL
            .into_iter()
            .map(|quadrant| QuadrantInfo {
                quadrant,
                label: quadrant.label(),
                description: quadrant.description(),
            })
            .collect(),
        threshold: crate::ideas::scoring::QUADRANT_THRESHOLD,
    })
}
