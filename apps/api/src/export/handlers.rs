use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::export::{export_all, import_bundle, parse_bundle, ExportBundle, ImportSummary};
use crate::state::AppState;

/// GET /api/v1/export
pub async fn handle_export(State(state): State<AppState>) -> Result<Json<ExportBundle>, AppError> {
    let bundle = export_all(state.ideas.as_ref(), state.prompts.as_ref()).await?;
    Ok(Json(bundle))
}

/// POST /api/v1/import
///
/// Takes the raw body rather than `Json<ExportBundle>` so a malformed file is
/// reported with the import error message instead of axum's rejection.
pub async fn handle_import(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<ImportSummary>, AppError> {
    let bundle = parse_bundle(&body)?;
    let summary = import_bundle(state.ideas.as_ref(), state.prompts.as_ref(), bundle).await?;
    Ok(Json(summary))
}
