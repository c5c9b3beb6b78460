use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::errors::AppError;
use crate::prompts::models::{AiTool, Category, ComplexityLevel, PromptEntry, PromptStatus};

pub const DEFAULT_LIST_LIMIT: usize = 6;
pub const MIN_RATINGS_FOR_TOP_RATED: u32 = 10;
pub const MIN_SUGGESTION_CHARS: usize = 2;
pub const MAX_SUGGESTIONS: usize = 8;

/// Library search filters. Empty lists mean "any"; set filters are ANDed,
/// values inside one list are ORed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    pub query: Option<String>,
    pub categories: Vec<Category>,
    pub complexity_levels: Vec<ComplexityLevel>,
    pub ai_tools: Vec<AiTool>,
    pub min_rating: Option<f64>,
}

/// Query-string form of [`SearchFilters`]. List filters are comma separated,
/// e.g. `?category=technical,data_and_finance&ai_tool=claude`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub complexity: Option<String>,
    pub ai_tool: Option<String>,
    pub min_rating: Option<f64>,
}

fn parse_list<T: DeserializeOwned>(field: &str, raw: Option<&str>) -> Result<Vec<T>, AppError> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };
    raw.split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| {
            serde_json::from_value(serde_json::Value::String(v.to_string()))
                .map_err(|_| AppError::Validation(format!("Unknown {field} '{v}'")))
        })
        .collect()
}

impl SearchQuery {
    pub fn into_filters(self) -> Result<SearchFilters, AppError> {
        Ok(SearchFilters {
            categories: parse_list("category", self.category.as_deref())?,
            complexity_levels: parse_list("complexity", self.complexity.as_deref())?,
            ai_tools: parse_list("ai_tool", self.ai_tool.as_deref())?,
            query: self.q,
            min_rating: self.min_rating,
        })
    }
}

fn is_published(prompt: &PromptEntry) -> bool {
    prompt.status == PromptStatus::Approved
}

fn matches_query(prompt: &PromptEntry, query: &str) -> bool {
    prompt.title.to_lowercase().contains(query)
        || prompt.prompt_text.to_lowercase().contains(query)
        || prompt.tags.iter().any(|t| t.to_lowercase().contains(query))
        || prompt.category.label().to_lowercase().contains(query)
}

impl SearchFilters {
    pub fn matches(&self, prompt: &PromptEntry) -> bool {
        if let Some(query) = self.query.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            if !matches_query(prompt, &query.to_lowercase()) {
                return false;
            }
        }
        if !self.categories.is_empty() && !self.categories.contains(&prompt.category) {
            return false;
        }
        if !self.complexity_levels.is_empty()
            && !self.complexity_levels.contains(&prompt.complexity_level)
        {
            return false;
        }
        if !self.ai_tools.is_empty() && !prompt.ai_tools.iter().any(|t| self.ai_tools.contains(t)) {
            return false;
        }
        match self.min_rating {
            Some(min) if min > 0.0 => prompt.rating >= min,
            _ => true,
        }
    }
}

/// Approved prompts matching every set filter, in library order.
pub fn search(prompts: &[PromptEntry], filters: &SearchFilters) -> Vec<PromptEntry> {
    prompts
        .iter()
        .filter(|p| is_published(p) && filters.matches(p))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub label: &'static str,
    pub description: &'static str,
    pub count: usize,
}

/// Categories that have at least one approved prompt, most populated first.
pub fn categories_with_counts(prompts: &[PromptEntry]) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Category::ALL
        .into_iter()
        .map(|category| CategoryCount {
            category,
            label: category.label(),
            description: category.description(),
            count: prompts
                .iter()
                .filter(|p| is_published(p) && p.category == category)
                .count(),
        })
        .filter(|c| c.count > 0)
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Most copied approved prompts.
pub fn featured(prompts: &[PromptEntry], limit: usize) -> Vec<PromptEntry> {
    let mut published: Vec<PromptEntry> =
        prompts.iter().filter(|p| is_published(p)).cloned().collect();
    published.sort_by(|a, b| b.usage_count.cmp(&a.usage_count));
    published.truncate(limit);
    published
}

/// Highest rated approved prompts, counting only those with enough ratings
/// for the average to mean something.
pub fn top_rated(prompts: &[PromptEntry], limit: usize) -> Vec<PromptEntry> {
    let mut rated: Vec<PromptEntry> = prompts
        .iter()
        .filter(|p| is_published(p) && p.rating_count >= MIN_RATINGS_FOR_TOP_RATED)
        .cloned()
        .collect();
    rated.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    rated.truncate(limit);
    rated
}

/// Autocomplete: titles and tags of approved prompts containing `query`,
/// first occurrence wins.
pub fn suggestions(prompts: &[PromptEntry], query: &str) -> Vec<String> {
    let query = query.trim();
    if query.chars().count() < MIN_SUGGESTION_CHARS {
        return Vec::new();
    }
    let query = query.to_lowercase();

    let mut found: Vec<String> = Vec::new();
    let mut offer = |candidate: &str| {
        if candidate.to_lowercase().contains(&query) && !found.iter().any(|f| f == candidate) {
            found.push(candidate.to_string());
        }
    };
    for prompt in prompts.iter().filter(|p| is_published(p)) {
        offer(&prompt.title);
        for tag in &prompt.tags {
            offer(tag);
        }
    }

    found.truncate(MAX_SUGGESTIONS);
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts::seed::demo_prompts;

    #[test]
    fn test_empty_filters_return_only_approved() {
        let mut prompts = demo_prompts();
        prompts[0].status = PromptStatus::Archived;
        let results = search(&prompts, &SearchFilters::default());
        assert_eq!(results.len(), prompts.len() - 1);
        assert!(results.iter().all(|p| p.status == PromptStatus::Approved));
    }

    #[test]
    fn test_query_matches_tags_and_category_label() {
        let prompts = demo_prompts();
        let by_tag = search(
            &prompts,
            &SearchFilters {
                query: Some("SWOT".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(by_tag.len(), 1);
        assert_eq!(by_tag[0].title, "Competitive Intelligence Analyzer");

        let by_category = search(
            &prompts,
            &SearchFilters {
                query: Some("data & finance".to_string()),
                ..Default::default()
            },
        );
        assert!(!by_category.is_empty());
        assert!(by_category
            .iter()
            .all(|p| p.category == Category::DataAndFinance
                || p.prompt_text.to_lowercase().contains("data & finance")));
    }

    #[test]
    fn test_ai_tool_filter_is_any_of() {
        let prompts = demo_prompts();
        let filters = SearchFilters {
            ai_tools: vec![AiTool::Claude, AiTool::InternalAi],
            ..Default::default()
        };
        let results = search(&prompts, &filters);
        assert!(!results.is_empty());
        assert!(results.iter().all(|p| p.ai_tools.contains(&AiTool::Claude)));
    }

    #[test]
    fn test_min_rating_and_complexity() {
        let filters = SearchFilters {
            complexity_levels: vec![ComplexityLevel::Expert],
            min_rating: Some(4.5),
            ..Default::default()
        };
        let results = search(&demo_prompts(), &filters);
        assert!(!results.is_empty());
        assert!(results
            .iter()
            .all(|p| p.complexity_level == ComplexityLevel::Expert && p.rating >= 4.5));
    }

    #[test]
    fn test_query_string_parsing() {
        let query = SearchQuery {
            category: Some("technical, data_and_finance".to_string()),
            ai_tool: Some("chatgpt".to_string()),
            ..Default::default()
        };
        let filters = query.into_filters().unwrap();
        assert_eq!(
            filters.categories,
            vec![Category::Technical, Category::DataAndFinance]
        );
        assert_eq!(filters.ai_tools, vec![AiTool::ChatGpt]);

        let bad = SearchQuery {
            complexity: Some("guru".to_string()),
            ..Default::default()
        };
        assert!(matches!(bad.into_filters(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_categories_sorted_by_count() {
        let counts = categories_with_counts(&demo_prompts());
        assert!(counts.windows(2).all(|w| w[0].count >= w[1].count));
        assert!(counts.iter().all(|c| c.count > 0));
        assert_eq!(counts[0].category, Category::Technical);
    }

    #[test]
    fn test_featured_orders_by_usage() {
        let top = featured(&demo_prompts(), DEFAULT_LIST_LIMIT);
        assert_eq!(top.len(), DEFAULT_LIST_LIMIT);
        assert_eq!(top[0].title, "Professional Email Composer");
        assert!(top.windows(2).all(|w| w[0].usage_count >= w[1].usage_count));
    }

    #[test]
    fn test_top_rated_requires_enough_ratings() {
        let mut prompts = demo_prompts();
        prompts[0].rating = 5.0;
        prompts[0].rating_count = MIN_RATINGS_FOR_TOP_RATED - 1;

        let top = top_rated(&prompts, 100);
        assert!(top.iter().all(|p| p.rating_count >= MIN_RATINGS_FOR_TOP_RATED));
        assert!(!top.iter().any(|p| p.id == prompts[0].id));
        assert_eq!(top[0].title, "Meeting Notes Summarizer");
    }

    #[test]
    fn test_suggestions() {
        let prompts = demo_prompts();
        assert!(suggestions(&prompts, "s").is_empty());

        let found = suggestions(&prompts, "strat");
        assert!(found.contains(&"strategy".to_string()));
        assert_eq!(
            found.iter().filter(|s| s.as_str() == "strategy").count(),
            1,
            "duplicates collapse"
        );

        assert!(suggestions(&prompts, "e").is_empty());
        assert!(suggestions(&prompts, "re").len() <= MAX_SUGGESTIONS);
    }
}
