//! Idea persistence.
//!
//! `AppState` holds an `Arc<dyn IdeaRepository>`: `InMemoryIdeaRepository`
//! when no database is configured (and in tests), `PgIdeaRepository` otherwise.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::ideas::lifecycle::IdeaStatus;
use crate::ideas::models::Idea;

#[async_trait]
pub trait IdeaRepository: Send + Sync {
    async fn get(&self, id: Uuid) -> Result<Option<Idea>, AppError>;

    /// All ideas, oldest first.
    async fn list(&self) -> Result<Vec<Idea>, AppError>;

    async fn upsert(&self, idea: &Idea) -> Result<(), AppError>;

    /// Moves the stored idea from `expected` to `next`, touching nothing but
    /// the status and `updated_at`. Returns `false` when another writer
    /// changed the status first.
    async fn compare_and_swap_status(
        &self,
        id: Uuid,
        expected: IdeaStatus,
        next: IdeaStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, AppError>;

    /// Stores the whole of `updated` only if the stored idea's status is
    /// still `expected`.
    async fn replace_if_status(
        &self,
        updated: &Idea,
        expected: IdeaStatus,
    ) -> Result<bool, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory backend
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct InMemoryIdeaRepository {
    ideas: RwLock<HashMap<Uuid, Idea>>,
}

impl InMemoryIdeaRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IdeaRepository for InMemoryIdeaRepository {
    async fn get(&self, id: Uuid) -> Result<Option<Idea>, AppError> {
        Ok(self.ideas.read().await.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Idea>, AppError> {
        let mut ideas: Vec<Idea> = self.ideas.read().await.values().cloned().collect();
        ideas.sort_by_key(|i| (i.created_at, i.id));
        Ok(ideas)
    }

    async fn upsert(&self, idea: &Idea) -> Result<(), AppError> {
        self.ideas.write().await.insert(idea.id, idea.clone());
        Ok(())
    }

    async fn compare_and_swap_status(
        &self,
        id: Uuid,
        expected: IdeaStatus,
        next: IdeaStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        let mut ideas = self.ideas.write().await;
        let current = ideas
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Idea {id} not found")))?;

        if current.status != expected {
            return Ok(false);
        }
        current.status = next;
        current.updated_at = updated_at;
        Ok(true)
    }

    async fn replace_if_status(
        &self,
        updated: &Idea,
        expected: IdeaStatus,
    ) -> Result<bool, AppError> {
        let mut ideas = self.ideas.write().await;
        let current = ideas
            .get_mut(&updated.id)
            .ok_or_else(|| AppError::NotFound(format!("Idea {} not found", updated.id)))?;

        if current.status != expected {
            return Ok(false);
        }
        *current = updated.clone();
        Ok(true)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// PostgreSQL backend
// ────────────────────────────────────────────────────────────────────────────

/// Each idea is one JSONB document; `status` is duplicated into its own
/// column so the compare-and-swap can be a single conditional UPDATE.
pub struct PgIdeaRepository {
    pool: PgPool,
}

impl PgIdeaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdeaRepository for PgIdeaRepository {
    async fn get(&self, id: Uuid) -> Result<Option<Idea>, AppError> {
        let row: Option<Json<Idea>> = sqlx::query_scalar("SELECT data FROM ideas WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|Json(idea)| idea))
    }

    async fn list(&self) -> Result<Vec<Idea>, AppError> {
        let rows: Vec<Json<Idea>> =
            sqlx::query_scalar("SELECT data FROM ideas ORDER BY created_at ASC, id ASC")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(|Json(idea)| idea).collect())
    }

    async fn upsert(&self, idea: &Idea) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO ideas (id, status, data, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE
            SET status = EXCLUDED.status,
                data = EXCLUDED.data,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(idea.id)
        .bind(idea.status.as_str())
        .bind(Json(idea))
        .bind(idea.created_at)
        .bind(idea.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn compare_and_swap_status(
        &self,
        id: Uuid,
        expected: IdeaStatus,
        next: IdeaStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE ideas
            SET status = $2,
                data = jsonb_set(
                    jsonb_set(data, '{status}', to_jsonb($2::text)),
                    '{updated_at}', to_jsonb($3::timestamptz)
                ),
                updated_at = $3
            WHERE id = $1 AND status = $4
            "#,
        )
        .bind(id)
        .bind(next.as_str())
        .bind(updated_at)
        .bind(expected.as_str())
        .execute(&self.pool)
        .await?;

        self.swapped_or_missing(id, result.rows_affected()).await
    }

    async fn replace_if_status(
        &self,
        updated: &Idea,
        expected: IdeaStatus,
    ) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE ideas
            SET status = $2, data = $3, updated_at = $4
            WHERE id = $1 AND status = $5
            "#,
        )
        .bind(updated.id)
        .bind(updated.status.as_str())
        .bind(Json(updated))
        .bind(updated.updated_at)
        .bind(expected.as_str())
        .execute(&self.pool)
        .await?;

        self.swapped_or_missing(updated.id, result.rows_affected()).await
    }
}

impl PgIdeaRepository {
    /// A conditional UPDATE that matched nothing either lost the race or hit
    /// a missing row; only the latter is an error.
    async fn swapped_or_missing(&self, id: Uuid, rows_affected: u64) -> Result<bool, AppError> {
        if rows_affected == 1 {
            return Ok(true);
        }

        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM ideas WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        if !exists {
            return Err(AppError::NotFound(format!("Idea {id} not found")));
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ideas::lifecycle;
    use crate::ideas::seed::demo_ideas;

    #[tokio::test]
    async fn test_upsert_get_and_list() {
        let repo = InMemoryIdeaRepository::new();
        let ideas = demo_ideas("Assessment Team");
        for idea in &ideas {
            repo.upsert(idea).await.unwrap();
        }

        let fetched = repo.get(ideas[0].id).await.unwrap().unwrap();
        assert_eq!(fetched, ideas[0]);
        assert_eq!(repo.list().await.unwrap().len(), ideas.len());
        assert!(repo.get(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_is_oldest_first() {
        let repo = InMemoryIdeaRepository::new();
        for idea in demo_ideas("Assessment Team") {
            repo.upsert(&idea).await.unwrap();
        }
        let listed = repo.list().await.unwrap();
        assert!(listed.windows(2).all(|w| w[0].created_at <= w[1].created_at));
    }

    #[tokio::test]
    async fn test_compare_and_swap_rejects_stale_status() {
        let repo = InMemoryIdeaRepository::new();
        let idea = demo_ideas("Assessment Team").remove(0);
        repo.upsert(&idea).await.unwrap();
        let now = Utc::now();

        assert!(repo
            .compare_and_swap_status(idea.id, idea.status, IdeaStatus::OnHold, now)
            .await
            .unwrap());

        // A second writer still believing the old status loses.
        assert!(!repo
            .compare_and_swap_status(idea.id, idea.status, IdeaStatus::Rejected, now)
            .await
            .unwrap());
        let stored = repo.get(idea.id).await.unwrap().unwrap();
        assert_eq!(stored.status, IdeaStatus::OnHold);
        assert_eq!(stored.updated_at, now);
    }

    #[tokio::test]
    async fn test_status_swap_keeps_the_rest_of_the_document() {
        let repo = InMemoryIdeaRepository::new();
        let idea = demo_ideas("Assessment Team")
            .into_iter()
            .find(|i| i.assessment.is_some())
            .unwrap();
        repo.upsert(&idea).await.unwrap();

        let next = idea.status.next_stage().unwrap_or(IdeaStatus::Archived);
        repo.compare_and_swap_status(idea.id, idea.status, next, Utc::now())
            .await
            .unwrap();

        let stored = repo.get(idea.id).await.unwrap().unwrap();
        assert_eq!(stored.status, next);
        assert_eq!(stored.assessment, idea.assessment);
        assert_eq!(stored.title, idea.title);
    }

    #[tokio::test]
    async fn test_replace_if_status_rejects_stale_status() {
        let repo = InMemoryIdeaRepository::new();
        let idea = demo_ideas("Assessment Team").remove(0);
        repo.upsert(&idea).await.unwrap();

        let held = lifecycle::hold(&idea);
        assert!(repo.replace_if_status(&held, idea.status).await.unwrap());
        let rejected = lifecycle::reject(&idea);
        assert!(!repo.replace_if_status(&rejected, idea.status).await.unwrap());
        assert_eq!(
            repo.get(idea.id).await.unwrap().unwrap().status,
            IdeaStatus::OnHold
        );
    }

    #[tokio::test]
    async fn test_compare_and_swap_unknown_idea_is_not_found() {
        let repo = InMemoryIdeaRepository::new();
        let result = repo
            .compare_and_swap_status(Uuid::new_v4(), IdeaStatus::Submitted, IdeaStatus::Screening, Utc::now())
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
