//! Library reads and the two counters users drive: copies and ratings.

use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::prompts::models::{PromptEntry, PromptStatus};
use crate::prompts::rating::{apply_rating, record_copy, validate_rating};
use crate::prompts::repository::PromptRepository;
use crate::prompts::search::{search, SearchFilters};

pub async fn get_prompt(repo: &dyn PromptRepository, id: Uuid) -> Result<PromptEntry, AppError> {
    repo.get_prompt(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Prompt {id} not found")))
}

/// Approved prompts only. Anything else is a 404 to library users.
pub async fn get_published_prompt(
    repo: &dyn PromptRepository,
    id: Uuid,
) -> Result<PromptEntry, AppError> {
    let prompt = get_prompt(repo, id).await?;
    if prompt.status != PromptStatus::Approved {
        return Err(AppError::NotFound(format!("Prompt {id} not found")));
    }
    Ok(prompt)
}

pub async fn search_prompts(
    repo: &dyn PromptRepository,
    filters: &SearchFilters,
) -> Result<Vec<PromptEntry>, AppError> {
    let prompts = repo.list_prompts().await?;
    let results = search(&prompts, filters);
    debug!(results = results.len(), "Prompt search");
    Ok(results)
}

pub async fn copy_prompt(repo: &dyn PromptRepository, id: Uuid) -> Result<PromptEntry, AppError> {
    get_published_prompt(repo, id).await?;
    let prompt = repo.update_prompt(id, Box::new(record_copy)).await?;
    debug!(prompt_id = %id, usage_count = prompt.usage_count, "Prompt copied");
    Ok(prompt)
}

pub async fn rate_prompt(
    repo: &dyn PromptRepository,
    id: Uuid,
    rating: u8,
) -> Result<PromptEntry, AppError> {
    let rating = validate_rating(rating)?;
    get_published_prompt(repo, id).await?;

    let prompt = repo
        .update_prompt(id, Box::new(move |p| apply_rating(p, rating)))
        .await?;
    info!(
        prompt_id = %id,
        rating,
        average = prompt.rating,
        rating_count = prompt.rating_count,
        "Prompt rated"
    );
    Ok(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts::repository::InMemoryPromptRepository;
    use crate::prompts::seed::{demo_prompts, demo_submissions};

    async fn seeded() -> (InMemoryPromptRepository, PromptEntry) {
        let repo = InMemoryPromptRepository::new();
        let prompts = demo_prompts();
        for prompt in &prompts {
            repo.upsert_prompt(prompt).await.unwrap();
        }
        (repo, prompts[0].clone())
    }

    #[tokio::test]
    async fn test_copy_increments_usage() {
        let (repo, prompt) = seeded().await;
        copy_prompt(&repo, prompt.id).await.unwrap();
        let copied = copy_prompt(&repo, prompt.id).await.unwrap();
        assert_eq!(copied.usage_count, prompt.usage_count + 2);
    }

    #[tokio::test]
    async fn test_rate_updates_average() {
        let repo = InMemoryPromptRepository::new();
        let mut prompt = demo_prompts().remove(0);
        prompt.rating = 0.0;
        prompt.rating_count = 0;
        repo.upsert_prompt(&prompt).await.unwrap();

        rate_prompt(&repo, prompt.id, 5).await.unwrap();
        let rated = rate_prompt(&repo, prompt.id, 4).await.unwrap();
        assert_eq!(rated.rating, 4.5);
        assert_eq!(rated.rating_count, 2);
    }

    #[tokio::test]
    async fn test_out_of_range_rating_changes_nothing() {
        let (repo, prompt) = seeded().await;
        let result = rate_prompt(&repo, prompt.id, 6).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(get_prompt(&repo, prompt.id).await.unwrap(), prompt);
    }

    #[tokio::test]
    async fn test_unpublished_prompts_are_hidden() {
        let repo = InMemoryPromptRepository::new();
        let pending = demo_submissions().remove(0).entry;
        repo.upsert_prompt(&pending).await.unwrap();

        assert!(matches!(
            get_published_prompt(&repo, pending.id).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            copy_prompt(&repo, pending.id).await,
            Err(AppError::NotFound(_))
        ));
        assert!(search_prompts(&repo, &SearchFilters::default())
            .await
            .unwrap()
            .is_empty());
    }
}
