use serde::Deserialize;

use crate::ideas::lifecycle::IdeaStatus;
use crate::ideas::models::{AiCapabilityArea, BusinessFunction, Idea};
use crate::ideas::scoring::Quadrant;

/// Dashboard filters. Every field is optional; set fields are ANDed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdeaFilter {
    pub status: Option<IdeaStatus>,
    pub quadrant: Option<Quadrant>,
    pub business_function: Option<BusinessFunction>,
    pub capability_area: Option<AiCapabilityArea>,
    /// Case-insensitive text match over title, description, function and area.
    pub q: Option<String>,
    #[serde(default)]
    pub assessed_only: bool,
}

impl IdeaFilter {
    pub fn matches(&self, idea: &Idea) -> bool {
        if self.status.is_some_and(|s| s != idea.status) {
            return false;
        }
        if self.business_function.is_some_and(|f| f != idea.business_function) {
            return false;
        }
        if self.capability_area.is_some_and(|a| a != idea.ai_capability_area) {
            return false;
        }
        if self.assessed_only && idea.assessment.is_none() {
            return false;
        }
        if let Some(quadrant) = self.quadrant {
            let idea_quadrant = idea.assessment.as_ref().map(|a| a.quadrant());
            if idea_quadrant != Some(quadrant) {
                return false;
            }
        }
        match self.q.as_deref().map(str::trim) {
            Some(query) if !query.is_empty() => matches_text(idea, &query.to_lowercase()),
            _ => true,
        }
    }
}

fn matches_text(idea: &Idea, query: &str) -> bool {
    [
        idea.title.as_str(),
        idea.description.as_str(),
        idea.business_function.label(),
        idea.ai_capability_area.label(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(query))
}

pub fn filter_ideas(ideas: Vec<Idea>, filter: &IdeaFilter) -> Vec<Idea> {
    ideas.into_iter().filter(|i| filter.matches(i)).collect()
}
