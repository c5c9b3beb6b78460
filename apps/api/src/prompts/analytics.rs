use serde::Serialize;
use uuid::Uuid;

use crate::prompts::models::{PromptEntry, PromptStatus, PromptSubmission};
use crate::prompts::search::{categories_with_counts, CategoryCount};

pub const TOP_PROMPTS_LIMIT: usize = 10;

#[derive(Debug, Clone, Serialize)]
pub struct TopPrompt {
    pub id: Uuid,
    pub title: String,
    pub copies: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PromptAnalytics {
    pub total_prompts: usize,
    pub total_submissions: usize,
    pub pending_submissions: usize,
    pub total_copies: u64,
    /// Mean of the per-prompt averages over rated prompts, two decimals.
    pub average_rating: f64,
    pub category_distribution: Vec<CategoryCount>,
    pub top_prompts: Vec<TopPrompt>,
}

pub fn compute_analytics(
    prompts: &[PromptEntry],
    submissions: &[PromptSubmission],
) -> PromptAnalytics {
    let published: Vec<&PromptEntry> = prompts
        .iter()
        .filter(|p| p.status == PromptStatus::Approved)
        .collect();

    let rated: Vec<f64> = published
        .iter()
        .filter(|p| p.rating_count > 0)
        .map(|p| p.rating)
        .collect();
    let average_rating = if rated.is_empty() {
        0.0
    } else {
        let mean = rated.iter().sum::<f64>() / rated.len() as f64;
        (mean * 100.0).round() / 100.0
    };

    let mut top_prompts: Vec<TopPrompt> = published
        .iter()
        .map(|p| TopPrompt {
            id: p.id,
            title: p.title.clone(),
            copies: p.usage_count,
        })
        .collect();
    top_prompts.sort_by(|a, b| b.copies.cmp(&a.copies));
    top_prompts.truncate(TOP_PROMPTS_LIMIT);

    PromptAnalytics {
        total_prompts: published.len(),
        total_submissions: submissions.len(),
        pending_submissions: submissions
            .iter()
            .filter(|s| s.status() == PromptStatus::Pending)
            .count(),
        total_copies: published.iter().map(|p| p.usage_count).sum(),
        average_rating,
        category_distribution: categories_with_counts(prompts),
        top_prompts,
    }
}
