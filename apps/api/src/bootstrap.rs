//! Startup data loading: demo seed data and the optional import file.

use std::path::Path;

use tracing::info;

use crate::errors::AppError;
use crate::export::{import_bundle, read_bundle, ImportSummary};
use crate::ideas::repository::IdeaRepository;
use crate::ideas::seed::demo_ideas;
use crate::prompts::repository::PromptRepository;
use crate::prompts::seed::{demo_prompts, demo_submissions};

/// Seeds each store only when it holds nothing, so restarts against a
/// database never duplicate or overwrite real data.
pub async fn seed_if_empty(
    ideas: &dyn IdeaRepository,
    prompts: &dyn PromptRepository,
    assessor: &str,
) -> Result<(), AppError> {
    if ideas.list().await?.is_empty() {
        let seeded = demo_ideas(assessor);
        for idea in &seeded {
            ideas.upsert(idea).await?;
        }
        info!(count = seeded.len(), "Seeded demo ideas");
    }

    if prompts.list_prompts().await?.is_empty() && prompts.list_submissions().await?.is_empty() {
        let library = demo_prompts();
        let queue = demo_submissions();
        for prompt in &library {
            prompts.upsert_prompt(prompt).await?;
        }
        for submission in &queue {
            prompts.upsert_submission(submission).await?;
        }
        info!(
            prompts = library.len(),
            submissions = queue.len(),
            "Seeded demo prompt library"
        );
    }
    Ok(())
}

pub async fn import_file(
    ideas: &dyn IdeaRepository,
    prompts: &dyn PromptRepository,
    path: &Path,
) -> Result<ImportSummary, AppError> {
    info!(path = %path.display(), "Importing bundle");
    let bundle = read_bundle(path).await?;
    import_bundle(ideas, prompts, bundle).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{write_bundle, ExportBundle, BUNDLE_VERSION};
    use crate::ideas::repository::InMemoryIdeaRepository;
    use crate::prompts::repository::InMemoryPromptRepository;

    #[tokio::test]
    async fn test_seed_only_fills_empty_stores() {
        let ideas = InMemoryIdeaRepository::new();
        let prompts = InMemoryPromptRepository::new();

        seed_if_empty(&ideas, &prompts, "Assessment Team").await.unwrap();
        let idea_count = ideas.list().await.unwrap().len();
        let prompt_count = prompts.list_prompts().await.unwrap().len();
        assert!(idea_count > 0);
        assert!(prompt_count > 0);

        seed_if_empty(&ideas, &prompts, "Assessment Team").await.unwrap();
        assert_eq!(ideas.list().await.unwrap().len(), idea_count);
        assert_eq!(prompts.list_prompts().await.unwrap().len(), prompt_count);
    }

    #[tokio::test]
    async fn test_import_file() {
        let ideas = InMemoryIdeaRepository::new();
        let prompts = InMemoryPromptRepository::new();

        let bundle = ExportBundle {
            version: BUNDLE_VERSION.to_string(),
            exported_at: chrono::Utc::now(),
            ideas: demo_ideas("Review Board"),
            prompts: Vec::new(),
            submissions: demo_submissions(),
        };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("import.json");
        write_bundle(&path, &bundle).await.unwrap();

        let summary = import_file(&ideas, &prompts, &path).await.unwrap();
        assert_eq!(summary.ideas, bundle.ideas.len());
        assert_eq!(summary.prompts, 0);
        assert_eq!(summary.submissions, 3);
        assert_eq!(ideas.list().await.unwrap().len(), bundle.ideas.len());
    }
}
