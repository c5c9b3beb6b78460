use std::sync::Arc;

use crate::config::Config;
use crate::ideas::repository::{IdeaRepository, InMemoryIdeaRepository};
use crate::prompts::repository::{InMemoryPromptRepository, PromptRepository};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Idea catalog. Postgres-backed when `DATABASE_URL` is set, in-memory otherwise.
    pub ideas: Arc<dyn IdeaRepository>,
    pub prompts: Arc<dyn PromptRepository>,
    pub config: Config,
}

impl AppState {
    pub fn in_memory(config: Config) -> Self {
        AppState {
            ideas: Arc::new(InMemoryIdeaRepository::new()),
            prompts: Arc::new(InMemoryPromptRepository::new()),
            config,
        }
    }
}
