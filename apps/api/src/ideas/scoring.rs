//! Weighted value/feasibility scoring and priority-quadrant classification.
//!
//! Each dimension carries a fixed weight; a group's weights sum to 1.0, so a
//! complete set of ratings always lands in [1.0, 3.0]. Weights are held in
//! hundredths and summed as integers so that uniform ratings produce exact
//! results (all-low is exactly 1.0, all-high exactly 3.0).

use std::collections::BTreeMap;
use std::fmt::Debug;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Both axes split "high" from "low" at this score; `>= 2.0` counts as high.
pub const QUADRANT_THRESHOLD: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreLevel {
    Low,
    Medium,
    High,
}

impl ScoreLevel {
    pub fn value(self) -> u32 {
        match self {
            ScoreLevel::Low => 1,
            ScoreLevel::Medium => 2,
            ScoreLevel::High => 3,
        }
    }
}

/// A scored axis belonging to one weighted group.
pub trait Dimension: Copy + Ord + Debug + Send + Sync + 'static {
    /// Every dimension of the group, in display order.
    const ALL: &'static [Self];

    /// Relative weight in hundredths. Weights of a group sum to 100.
    fn weight_pct(self) -> u32;
    fn key(self) -> &'static str;
    fn label(self) -> &'static str;
    fn description(self) -> &'static str;

    fn weight(self) -> f64 {
        self.weight_pct() as f64 / 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueDimension {
    BusinessGrowth,
    CostEfficiency,
    BusinessResilience,
    BusinessAgility,
}

impl Dimension for ValueDimension {
    const ALL: &'static [Self] = &[
        ValueDimension::BusinessGrowth,
        ValueDimension::CostEfficiency,
        ValueDimension::BusinessResilience,
        ValueDimension::BusinessAgility,
    ];

    fn weight_pct(self) -> u32 {
        match self {
            ValueDimension::BusinessGrowth => 20,
            ValueDimension::CostEfficiency => 20,
            ValueDimension::BusinessResilience => 30,
            ValueDimension::BusinessAgility => 30,
        }
    }

    fn key(self) -> &'static str {
        match self {
            ValueDimension::BusinessGrowth => "business_growth",
            ValueDimension::CostEfficiency => "cost_efficiency",
            ValueDimension::BusinessResilience => "business_resilience",
            ValueDimension::BusinessAgility => "business_agility",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ValueDimension::BusinessGrowth => "Business Growth",
            ValueDimension::CostEfficiency => "Cost & Operational Efficiency",
            ValueDimension::BusinessResilience => "Business Resilience",
            ValueDimension::BusinessAgility => "Business Agility",
        }
    }

    fn description(self) -> &'static str {
        match self {
            ValueDimension::BusinessGrowth => {
                "Potential to support market expansion, new products/services, and customer experience enhancements"
            }
            ValueDimension::CostEfficiency => {
                "Potential to realize cost optimization, process automation, and reduced activity times across business and IT"
            }
            ValueDimension::BusinessResilience => {
                "Potential to enable organizational and IT resilience, cyber security, and regulatory compliance"
            }
            ValueDimension::BusinessAgility => {
                "Potential to adapt, transform, and execute at pace in response to changes in strategy and opportunities"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeasibilityDimension {
    TechnicalFeasibility,
    InternalReadiness,
    ExternalReadiness,
}

impl Dimension for FeasibilityDimension {
    const ALL: &'static [Self] = &[
        FeasibilityDimension::TechnicalFeasibility,
        FeasibilityDimension::InternalReadiness,
        FeasibilityDimension::ExternalReadiness,
    ];

    fn weight_pct(self) -> u32 {
        match self {
            FeasibilityDimension::TechnicalFeasibility => 50,
            FeasibilityDimension::InternalReadiness => 30,
            FeasibilityDimension::ExternalReadiness => 20,
        }
    }

    fn key(self) -> &'static str {
        match self {
            FeasibilityDimension::TechnicalFeasibility => "technical_feasibility",
            FeasibilityDimension::InternalReadiness => "internal_readiness",
            FeasibilityDimension::ExternalReadiness => "external_readiness",
        }
    }

    fn label(self) -> &'static str {
        match self {
            FeasibilityDimension::TechnicalFeasibility => "Technical Feasibility",
            FeasibilityDimension::InternalReadiness => "Internal Readiness",
            FeasibilityDimension::ExternalReadiness => "External Readiness",
        }
    }

    fn description(self) -> &'static str {
        match self {
            FeasibilityDimension::TechnicalFeasibility => {
                "Maturity and availability of AI capabilities, infrastructure, and integration technologies"
            }
            FeasibilityDimension::InternalReadiness => {
                "Organizational AI literacy, data readiness, and willingness to adopt AI-driven solutions"
            }
            FeasibilityDimension::ExternalReadiness => {
                "Alignment with legal, regulatory requirements, and market/vendor ecosystem maturity"
            }
        }
    }
}

pub type Ratings<D> = BTreeMap<D, ScoreLevel>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("Incomplete assessment: missing ratings for {}", .missing.join(", "))]
    IncompleteAssessment { missing: Vec<&'static str> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    LikelyWins,
    CalculatedRisks,
    MarginalGains,
    Avoid,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::LikelyWins,
        Quadrant::CalculatedRisks,
        Quadrant::MarginalGains,
        Quadrant::Avoid,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Quadrant::LikelyWins => "Likely Wins",
            Quadrant::CalculatedRisks => "Calculated Risks",
            Quadrant::MarginalGains => "Marginal Gains",
            Quadrant::Avoid => "Avoid",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Quadrant::LikelyWins => "High value with high feasibility - prioritize these",
            Quadrant::CalculatedRisks => "High value but low feasibility - strategic bets",
            Quadrant::MarginalGains => "Low value with variable feasibility - selective pursuit",
            Quadrant::Avoid => "Low value and low feasibility - deprioritize",
        }
    }
}

/// Keys of the group's dimensions that have no rating, in display order.
pub fn missing_dimensions<D: Dimension>(ratings: &Ratings<D>) -> Vec<&'static str> {
    D::ALL
        .iter()
        .filter(|d| !ratings.contains_key(d))
        .map(|d| d.key())
        .collect()
}

/// Σ score_value(rating) × weight over every dimension of the group.
/// All-or-nothing: a single missing dimension fails the whole computation.
pub fn weighted_score<D: Dimension>(ratings: &Ratings<D>) -> Result<f64, ScoreError> {
    let missing = missing_dimensions(ratings);
    if !missing.is_empty() {
        return Err(ScoreError::IncompleteAssessment { missing });
    }

    let hundredths: u32 = ratings
        .iter()
        .map(|(dimension, level)| level.value() * dimension.weight_pct())
        .sum();
    Ok(hundredths as f64 / 100.0)
}

pub fn compute_value_score(ratings: &Ratings<ValueDimension>) -> Result<f64, ScoreError> {
    weighted_score(ratings)
}

pub fn compute_feasibility_score(
    ratings: &Ratings<FeasibilityDimension>,
) -> Result<f64, ScoreError> {
    weighted_score(ratings)
}

pub fn classify_quadrant(value_score: f64, feasibility_score: f64) -> Quadrant {
    let high_value = value_score >= QUADRANT_THRESHOLD;
    let high_feasibility = feasibility_score >= QUADRANT_THRESHOLD;

    match (high_value, high_feasibility) {
        (true, true) => Quadrant::LikelyWins,
        (true, false) => Quadrant::CalculatedRisks,
        (false, true) => Quadrant::MarginalGains,
        (false, false) => Quadrant::Avoid,
    }
}
