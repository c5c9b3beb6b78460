//! Whole-catalog export and import as a single JSON bundle.
//!
//! Import is an upsert: entities in the bundle replace stored ones with the
//! same id, everything else is left alone. Idea assessments are rescored on
//! the way in, so a hand-edited bundle cannot carry a stale quadrant.

pub mod handlers;

use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::ideas::models::Idea;
use crate::ideas::repository::IdeaRepository;
use crate::prompts::models::{PromptEntry, PromptSubmission};
use crate::prompts::repository::PromptRepository;

pub const BUNDLE_VERSION: &str = "1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportBundle {
    #[serde(default)]
    pub version: String,
    #[serde(default = "Utc::now")]
    pub exported_at: DateTime<Utc>,
    #[serde(default)]
    pub ideas: Vec<Idea>,
    #[serde(default)]
    pub prompts: Vec<PromptEntry>,
    #[serde(default)]
    pub submissions: Vec<PromptSubmission>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub ideas: usize,
    pub prompts: usize,
    pub submissions: usize,
}

pub async fn export_all(
    ideas: &dyn IdeaRepository,
    prompts: &dyn PromptRepository,
) -> Result<ExportBundle, AppError> {
    Ok(ExportBundle {
        version: BUNDLE_VERSION.to_string(),
        exported_at: Utc::now(),
        ideas: ideas.list().await?,
        prompts: prompts.list_prompts().await?,
        submissions: prompts.list_submissions().await?,
    })
}

/// Parses and checks an import file. Every failure is a validation error.
pub fn parse_bundle(raw: &str) -> Result<ExportBundle, AppError> {
    let bundle: ExportBundle = serde_json::from_str(raw)
        .map_err(|e| AppError::Validation(format!("Failed to parse import file: {e}")))?;

    if bundle.version.trim().is_empty() {
        return Err(AppError::Validation(
            "Invalid import file: missing version".to_string(),
        ));
    }

    // An assessment belongs to exactly one idea.
    if let Some(idea) = bundle.ideas.iter().find(|idea| {
        idea.assessment
            .as_ref()
            .is_some_and(|assessment| assessment.idea_id() != idea.id)
    }) {
        return Err(AppError::Validation(format!(
            "Invalid import file: idea {} carries another idea's assessment",
            idea.id
        )));
    }
    Ok(bundle)
}

pub async fn import_bundle(
    ideas: &dyn IdeaRepository,
    prompts: &dyn PromptRepository,
    bundle: ExportBundle,
) -> Result<ImportSummary, AppError> {
    for idea in &bundle.ideas {
        ideas.upsert(idea).await?;
    }
    for prompt in &bundle.prompts {
        prompts.upsert_prompt(prompt).await?;
    }
    for submission in &bundle.submissions {
        prompts.upsert_submission(submission).await?;
    }

    let summary = ImportSummary {
        ideas: bundle.ideas.len(),
        prompts: bundle.prompts.len(),
        submissions: bundle.submissions.len(),
    };
    info!(
        version = %bundle.version,
        ideas = summary.ideas,
        prompts = summary.prompts,
        submissions = summary.submissions,
        "Import complete"
    );
    Ok(summary)
}

#[cfg(test)]
pub async fn write_bundle(path: &Path, bundle: &ExportBundle) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(bundle).context("Failed to serialize export")?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write export to {}", path.display()))?;
    Ok(())
}

pub async fn read_bundle(path: &Path) -> Result<ExportBundle, AppError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read import file {}", path.display()))?;
    parse_bundle(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ideas::repository::InMemoryIdeaRepository;
    use crate::ideas::seed::demo_ideas;
    use crate::ideas::scoring::Quadrant;
    use crate::prompts::repository::InMemoryPromptRepository;
    use crate::prompts::seed::{demo_prompts, demo_submissions};

    async fn seeded() -> (InMemoryIdeaRepository, InMemoryPromptRepository) {
        let ideas = InMemoryIdeaRepository::new();
        let prompts = InMemoryPromptRepository::new();
        for idea in demo_ideas("Assessment Team") {
            ideas.upsert(&idea).await.unwrap();
        }
        for prompt in demo_prompts() {
            prompts.upsert_prompt(&prompt).await.unwrap();
        }
        for submission in demo_submissions() {
            prompts.upsert_submission(&submission).await.unwrap();
        }
        (ideas, prompts)
    }

    #[test]
    fn test_malformed_json_is_reported() {
        let err = parse_bundle("{ not json").unwrap_err();
        match err {
            AppError::Validation(msg) => assert!(msg.starts_with("Failed to parse import file")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_version_is_rejected() {
        let err = parse_bundle(r#"{"ideas": [], "prompts": []}"#).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("missing version")));
        assert!(parse_bundle(r#"{"version": "1.0"}"#).is_ok());
    }

    #[tokio::test]
    async fn test_export_then_import_into_empty_stores() {
        let (ideas, prompts) = seeded().await;
        let bundle = export_all(&ideas, &prompts).await.unwrap();
        assert_eq!(bundle.version, BUNDLE_VERSION);

        let raw = serde_json::to_string(&bundle).unwrap();
        let parsed = parse_bundle(&raw).unwrap();

        let fresh_ideas = InMemoryIdeaRepository::new();
        let fresh_prompts = InMemoryPromptRepository::new();
        let summary = import_bundle(&fresh_ideas, &fresh_prompts, parsed).await.unwrap();

        assert_eq!(
            summary,
            ImportSummary {
                ideas: bundle.ideas.len(),
                prompts: bundle.prompts.len(),
                submissions: bundle.submissions.len(),
            }
        );
        assert_eq!(fresh_ideas.list().await.unwrap(), bundle.ideas);
        assert_eq!(fresh_prompts.list_submissions().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_import_rescores_tampered_assessment() {
        let (ideas, prompts) = seeded().await;
        let bundle = export_all(&ideas, &prompts).await.unwrap();

        let mut value = serde_json::to_value(&bundle).unwrap();
        let first_assessed = value["ideas"]
            .as_array_mut()
            .unwrap()
            .iter_mut()
            .find(|i| !i["assessment"].is_null())
            .unwrap();
        let expected = first_assessed["assessment"]["quadrant"].clone();
        first_assessed["assessment"]["quadrant"] = serde_json::json!("avoid");
        first_assessed["assessment"]["value_score"] = serde_json::json!(1.0);

        let parsed = parse_bundle(&value.to_string()).unwrap();
        let assessed = parsed
            .ideas
            .iter()
            .find_map(|i| i.assessment.as_ref())
            .unwrap();
        assert_eq!(serde_json::to_value(assessed.quadrant()).unwrap(), expected);
        assert_ne!(assessed.quadrant(), Quadrant::Avoid);
    }

    #[tokio::test]
    async fn test_assessment_moved_to_another_idea_is_rejected() {
        let (ideas, prompts) = seeded().await;
        let bundle = export_all(&ideas, &prompts).await.unwrap();

        let mut value = serde_json::to_value(&bundle).unwrap();
        let list = value["ideas"].as_array_mut().unwrap();
        let donor = list.iter().position(|i| !i["assessment"].is_null()).unwrap();
        let target = list.iter().position(|i| i["assessment"].is_null()).unwrap();
        list[target]["assessment"] = list[donor]["assessment"].clone();
        let target_id = list[target]["id"].as_str().unwrap().to_string();

        let err = parse_bundle(&value.to_string()).unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(msg) if msg.contains("another idea's assessment") && msg.contains(&target_id)
        ));
    }

    #[tokio::test]
    async fn test_file_round_trip() {
        let (ideas, prompts) = seeded().await;
        let bundle = export_all(&ideas, &prompts).await.unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog-export.json");
        write_bundle(&path, &bundle).await.unwrap();

        let read = read_bundle(&path).await.unwrap();
        assert_eq!(read.ideas, bundle.ideas);
        assert_eq!(read.prompts, bundle.prompts);
    }

    #[tokio::test]
    async fn test_missing_file_is_internal_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_bundle(&dir.path().join("absent.json")).await;
        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
