//! Prompt library and review-queue persistence.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::prompts::models::{PromptEntry, PromptStatus, PromptSubmission};

/// In-place edit applied to a stored prompt under the repository's lock (or
/// row lock), so concurrent copies and ratings are never lost.
pub type PromptEdit = Box<dyn FnOnce(&mut PromptEntry) + Send>;

#[async_trait]
pub trait PromptRepository: Send + Sync {
    async fn get_prompt(&self, id: Uuid) -> Result<Option<PromptEntry>, AppError>;

    /// Every prompt regardless of status, ordered by title.
    async fn list_prompts(&self) -> Result<Vec<PromptEntry>, AppError>;

    async fn upsert_prompt(&self, prompt: &PromptEntry) -> Result<(), AppError>;

    /// Applies `edit` atomically and returns the updated prompt.
    async fn update_prompt(&self, id: Uuid, edit: PromptEdit) -> Result<PromptEntry, AppError>;

    async fn get_submission(&self, id: Uuid) -> Result<Option<PromptSubmission>, AppError>;

    /// Every submission, oldest first.
    async fn list_submissions(&self) -> Result<Vec<PromptSubmission>, AppError>;

    async fn upsert_submission(&self, submission: &PromptSubmission) -> Result<(), AppError>;

    /// Stores `updated` only if the stored submission is still in `expected`.
    async fn compare_and_swap_submission(
        &self,
        updated: &PromptSubmission,
        expected: PromptStatus,
    ) -> Result<bool, AppError>;

    /// Marks a pending submission reviewed and publishes `published` in one
    /// step. Returns `false`, writing nothing, when the submission is no
    /// longer pending.
    async fn publish_submission(
        &self,
        reviewed: &PromptSubmission,
        published: &PromptEntry,
    ) -> Result<bool, AppError>;
}

const UPSERT_PROMPT: &str = r#"
    INSERT INTO prompts (id, title, status, data)
    VALUES ($1, $2, $3, $4)
    ON CONFLICT (id) DO UPDATE
    SET title = EXCLUDED.title,
        status = EXCLUDED.status,
        data = EXCLUDED.data
"#;

const SWAP_SUBMISSION: &str =
    "UPDATE prompt_submissions SET status = $2, data = $3 WHERE id = $1 AND status = $4";

fn prompt_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Prompt {id} not found"))
}

fn submission_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Submission {id} not found"))
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory backend
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct InMemoryPromptRepository {
    prompts: RwLock<HashMap<Uuid, PromptEntry>>,
    submissions: RwLock<HashMap<Uuid, PromptSubmission>>,
}

impl InMemoryPromptRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PromptRepository for InMemoryPromptRepository {
    async fn get_prompt(&self, id: Uuid) -> Result<Option<PromptEntry>, AppError> {
        Ok(self.prompts.read().await.get(&id).cloned())
    }

    async fn list_prompts(&self) -> Result<Vec<PromptEntry>, AppError> {
        let mut prompts: Vec<PromptEntry> = self.prompts.read().await.values().cloned().collect();
        prompts.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)));
        Ok(prompts)
    }

    async fn upsert_prompt(&self, prompt: &PromptEntry) -> Result<(), AppError> {
        self.prompts.write().await.insert(prompt.id, prompt.clone());
        Ok(())
    }

    async fn update_prompt(&self, id: Uuid, edit: PromptEdit) -> Result<PromptEntry, AppError> {
        let mut prompts = self.prompts.write().await;
        let prompt = prompts.get_mut(&id).ok_or_else(|| prompt_not_found(id))?;
        edit(prompt);
        Ok(prompt.clone())
    }

    async fn get_submission(&self, id: Uuid) -> Result<Option<PromptSubmission>, AppError> {
        Ok(self.submissions.read().await.get(&id).cloned())
    }

    async fn list_submissions(&self) -> Result<Vec<PromptSubmission>, AppError> {
        let mut submissions: Vec<PromptSubmission> =
            self.submissions.read().await.values().cloned().collect();
        submissions.sort_by_key(|s| (s.submitted_at, s.id()));
        Ok(submissions)
    }

    async fn upsert_submission(&self, submission: &PromptSubmission) -> Result<(), AppError> {
        self.submissions
            .write()
            .await
            .insert(submission.id(), submission.clone());
        Ok(())
    }

    async fn compare_and_swap_submission(
        &self,
        updated: &PromptSubmission,
        expected: PromptStatus,
    ) -> Result<bool, AppError> {
        let mut submissions = self.submissions.write().await;
        let current = submissions
            .get_mut(&updated.id())
            .ok_or_else(|| submission_not_found(updated.id()))?;

        if current.status() != expected {
            return Ok(false);
        }
        *current = updated.clone();
        Ok(true)
    }

    async fn publish_submission(
        &self,
        reviewed: &PromptSubmission,
        published: &PromptEntry,
    ) -> Result<bool, AppError> {
        // Submissions before prompts, held together.
        let mut submissions = self.submissions.write().await;
        let mut prompts = self.prompts.write().await;
        let current = submissions
            .get_mut(&reviewed.id())
            .ok_or_else(|| submission_not_found(reviewed.id()))?;

        if current.status() != PromptStatus::Pending {
            return Ok(false);
        }
        *current = reviewed.clone();
        prompts.insert(published.id, published.clone());
        Ok(true)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// PostgreSQL backend
// ────────────────────────────────────────────────────────────────────────────

pub struct PgPromptRepository {
    pool: PgPool,
}

impl PgPromptRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PromptRepository for PgPromptRepository {
    async fn get_prompt(&self, id: Uuid) -> Result<Option<PromptEntry>, AppError> {
        let row: Option<Json<PromptEntry>> =
            sqlx::query_scalar("SELECT data FROM prompts WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(|Json(prompt)| prompt))
    }

    async fn list_prompts(&self) -> Result<Vec<PromptEntry>, AppError> {
        let rows: Vec<Json<PromptEntry>> =
            sqlx::query_scalar("SELECT data FROM prompts ORDER BY title ASC, id ASC")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(|Json(prompt)| prompt).collect())
    }

    async fn upsert_prompt(&self, prompt: &PromptEntry) -> Result<(), AppError> {
        sqlx::query(UPSERT_PROMPT)
            .bind(prompt.id)
            .bind(&prompt.title)
            .bind(prompt.status.as_str())
            .bind(Json(prompt))
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn update_prompt(&self, id: Uuid, edit: PromptEdit) -> Result<PromptEntry, AppError> {
        let mut tx = self.pool.begin().await?;

        let row: Option<Json<PromptEntry>> =
            sqlx::query_scalar("SELECT data FROM prompts WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        let Json(mut prompt) = row.ok_or_else(|| prompt_not_found(id))?;

        edit(&mut prompt);

        sqlx::query("UPDATE prompts SET status = $2, data = $3 WHERE id = $1")
            .bind(id)
            .bind(prompt.status.as_str())
            .bind(Json(&prompt))
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(prompt)
    }

    async fn get_submission(&self, id: Uuid) -> Result<Option<PromptSubmission>, AppError> {
        let row: Option<Json<PromptSubmission>> =
            sqlx::query_scalar("SELECT data FROM prompt_submissions WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(|Json(submission)| submission))
    }

    async fn list_submissions(&self) -> Result<Vec<PromptSubmission>, AppError> {
        let rows: Vec<Json<PromptSubmission>> = sqlx::query_scalar(
            "SELECT data FROM prompt_submissions ORDER BY submitted_at ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(|Json(submission)| submission).collect())
    }

    async fn upsert_submission(&self, submission: &PromptSubmission) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO prompt_submissions (id, status, data, submitted_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE
            SET status = EXCLUDED.status,
                data = EXCLUDED.data
            "#,
        )
        .bind(submission.id())
        .bind(submission.status().as_str())
        .bind(Json(submission))
        .bind(submission.submitted_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn compare_and_swap_submission(
        &self,
        updated: &PromptSubmission,
        expected: PromptStatus,
    ) -> Result<bool, AppError> {
        let result = sqlx::query(SWAP_SUBMISSION)
            .bind(updated.id())
            .bind(updated.status().as_str())
            .bind(Json(updated))
            .bind(expected.as_str())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 1 {
            return Ok(true);
        }
        self.ensure_submission_exists(updated.id()).await?;
        Ok(false)
    }

    async fn publish_submission(
        &self,
        reviewed: &PromptSubmission,
        published: &PromptEntry,
    ) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(SWAP_SUBMISSION)
            .bind(reviewed.id())
            .bind(reviewed.status().as_str())
            .bind(Json(reviewed))
            .bind(PromptStatus::Pending.as_str())
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() != 1 {
            tx.rollback().await?;
            self.ensure_submission_exists(reviewed.id()).await?;
            return Ok(false);
        }

        sqlx::query(UPSERT_PROMPT)
            .bind(published.id)
            .bind(&published.title)
            .bind(published.status.as_str())
            .bind(Json(published))
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(true)
    }
}

impl PgPromptRepository {
    async fn ensure_submission_exists(&self, id: Uuid) -> Result<(), AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM prompt_submissions WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        if !exists {
            return Err(submission_not_found(id));
        }
        Ok(())
    }
}
