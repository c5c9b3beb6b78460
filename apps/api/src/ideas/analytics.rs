use std::collections::BTreeMap;

use serde::Serialize;
use uuid::Uuid;

use crate::ideas::lifecycle::{IdeaStatus, MAIN_SEQUENCE};
use crate::ideas::models::{AiCapabilityArea, BusinessFunction, Idea};
use crate::ideas::scoring::Quadrant;

#[derive(Debug, Clone, Serialize)]
pub struct StatusCount {
    pub status: IdeaStatus,
    pub label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuadrantCount {
    pub quadrant: Quadrant,
    pub label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct FunctionCount {
    pub business_function: BusinessFunction,
    pub label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AreaCount {
    pub capability_area: AiCapabilityArea,
    pub label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedIdea {
    pub id: Uuid,
    pub title: String,
    pub value_score: f64,
    pub feasibility_score: f64,
    pub quadrant: Quadrant,
}

#[derive(Debug, Clone, Serialize)]
pub struct IdeasAnalytics {
    pub total_ideas: usize,
    pub active_ideas: usize,
    pub assessed_ideas: usize,
    pub by_status: Vec<StatusCount>,
    pub by_quadrant: Vec<QuadrantCount>,
    pub by_business_function: Vec<FunctionCount>,
    pub by_capability_area: Vec<AreaCount>,
    /// Assessed ideas, highest value score first.
    pub ranked_by_value: Vec<RankedIdea>,
}

/// One dot on the priority matrix. `x`/`y` are percentages of the plot area.
#[derive(Debug, Clone, Serialize)]
pub struct MatrixPoint {
    pub id: Uuid,
    pub title: String,
    pub value_score: f64,
    pub feasibility_score: f64,
    pub quadrant: Quadrant,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct IdeaCard {
    pub id: Uuid,
    pub title: String,
    pub status: IdeaStatus,
    pub business_function: BusinessFunction,
    pub quadrant: Option<Quadrant>,
    pub next_stage: Option<IdeaStatus>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StageColumn {
    pub status: IdeaStatus,
    pub label: &'static str,
    pub position: u8,
    pub ideas: Vec<IdeaCard>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PipelineBoard {
    pub active_count: usize,
    pub stages: Vec<StageColumn>,
    pub on_hold: Vec<IdeaCard>,
    pub rejected: Vec<IdeaCard>,
    pub archived_count: usize,
}

/// Maps a [1, 3] score onto the 10–90% band of the plot.
fn score_to_position(score: f64) -> f64 {
    ((score - 1.0) / 2.0) * 80.0 + 10.0
}

/// Plot coordinates: feasibility on x, value on y inverted so that higher
/// value is nearer the top.
pub fn matrix_position(value_score: f64, feasibility_score: f64) -> (f64, f64) {
    (
        score_to_position(feasibility_score),
        100.0 - score_to_position(value_score),
    )
}

pub fn priority_matrix(ideas: &[Idea]) -> Vec<MatrixPoint> {
    ideas
        .iter()
        .filter_map(|idea| {
            let assessment = idea.assessment.as_ref()?;
            let (x, y) = matrix_position(assessment.value_score(), assessment.feasibility_score());
            Some(MatrixPoint {
                id: idea.id,
                title: idea.title.clone(),
                value_score: assessment.value_score(),
                feasibility_score: assessment.feasibility_score(),
                quadrant: assessment.quadrant(),
                x,
                y,
            })
        })
        .collect()
}

pub fn compute_analytics(ideas: &[Idea]) -> IdeasAnalytics {
    let by_status = IdeaStatus::ALL
        .into_iter()
        .map(|status| StatusCount {
            status,
            label: status.label(),
            count: ideas.iter().filter(|i| i.status == status).count(),
        })
        .collect();

    let by_quadrant = Quadrant::ALL
        .into_iter()
        .map(|quadrant| QuadrantCount {
            quadrant,
            label: quadrant.label(),
            count: ideas
                .iter()
                .filter(|i| i.assessment.as_ref().map(|a| a.quadrant()) == Some(quadrant))
                .count(),
        })
        .collect();

    let mut function_counts: BTreeMap<BusinessFunction, usize> = BTreeMap::new();
    let mut area_counts: BTreeMap<AiCapabilityArea, usize> = BTreeMap::new();
    for idea in ideas {
        *function_counts.entry(idea.business_function).or_default() += 1;
        *area_counts.entry(idea.ai_capability_area).or_default() += 1;
    }

    let mut by_business_function: Vec<FunctionCount> = function_counts
        .into_iter()
        .map(|(business_function, count)| FunctionCount {
            business_function,
            label: business_function.label(),
            count,
        })
        .collect();
    by_business_function.sort_by(|a, b| b.count.cmp(&a.count));

    let mut by_capability_area: Vec<AreaCount> = area_counts
        .into_iter()
        .map(|(capability_area, count)| AreaCount {
            capability_area,
            label: capability_area.label(),
            count,
        })
        .collect();
    by_capability_area.sort_by(|a, b| b.count.cmp(&a.count));

    let mut ranked_by_value: Vec<RankedIdea> = ideas
        .iter()
        .filter_map(|idea| {
            let assessment = idea.assessment.as_ref()?;
            Some(RankedIdea {
                id: idea.id,
                title: idea.title.clone(),
                value_score: assessment.value_score(),
                feasibility_score: assessment.feasibility_score(),
                quadrant: assessment.quadrant(),
            })
        })
        .collect();
    ranked_by_value.sort_by(|a, b| b.value_score.total_cmp(&a.value_score));

    IdeasAnalytics {
        total_ideas: ideas.len(),
        active_ideas: ideas.iter().filter(|i| i.status.is_active()).count(),
        assessed_ideas: ranked_by_value.len(),
        by_status,
        by_quadrant,
        by_business_function,
        by_capability_area,
        ranked_by_value,
    }
}

fn card(idea: &Idea) -> IdeaCard {
    IdeaCard {
        id: idea.id,
        title: idea.title.clone(),
        status: idea.status,
        business_function: idea.business_function,
        quadrant: idea.assessment.as_ref().map(|a| a.quadrant()),
        next_stage: idea.status.next_stage(),
    }
}

pub fn pipeline_board(ideas: &[Idea]) -> PipelineBoard {
    let cards_in = |status: IdeaStatus| -> Vec<IdeaCard> {
        ideas.iter().filter(|i| i.status == status).map(card).collect()
    };

    let stages = MAIN_SEQUENCE
        .into_iter()
        .map(|status| StageColumn {
            status,
            label: status.label(),
            position: status.pipeline_position().unwrap_or_default(),
            ideas: cards_in(status),
        })
        .collect();

    PipelineBoard {
        active_count: ideas.iter().filter(|i| i.status.is_active()).count(),
        stages,
        on_hold: cards_in(IdeaStatus::OnHold),
        rejected: cards_in(IdeaStatus::Rejected),
        archived_count: ideas
            .iter()
            .filter(|i| i.status == IdeaStatus::Archived)
            .count(),
    }
}
