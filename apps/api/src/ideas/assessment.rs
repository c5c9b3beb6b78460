use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ideas::scoring::{
    classify_quadrant, compute_feasibility_score, compute_value_score, FeasibilityDimension,
    Quadrant, Ratings, ScoreError, ValueDimension,
};

/// Free-text justification per dimension. Unconstrained; may be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rationales {
    #[serde(default)]
    pub value: BTreeMap<ValueDimension, String>,
    #[serde(default)]
    pub feasibility: BTreeMap<FeasibilityDimension, String>,
}

/// Ratings as submitted by the assessment form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssessmentInput {
    #[serde(default)]
    pub value_ratings: Ratings<ValueDimension>,
    #[serde(default)]
    pub feasibility_ratings: Ratings<FeasibilityDimension>,
    #[serde(default)]
    pub rationales: Rationales,
    pub assessed_by: Option<String>,
}

/// A scored assessment. Scores and quadrant are only ever derived from the
/// ratings: there is no constructor or setter that accepts them, and
/// deserialization recomputes them from the stored ratings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AssessmentRecord")]
pub struct Assessment {
    idea_id: Uuid,
    value_ratings: Ratings<ValueDimension>,
    feasibility_ratings: Ratings<FeasibilityDimension>,
    rationales: Rationales,
    value_score: f64,
    feasibility_score: f64,
    quadrant: Quadrant,
    assessed_by: String,
    assessed_at: DateTime<Utc>,
}

/// Wire/storage shape of an assessment. Any score or quadrant fields present
/// in the input are ignored.
#[derive(Debug, Deserialize)]
struct AssessmentRecord {
    idea_id: Uuid,
    value_ratings: Ratings<ValueDimension>,
    feasibility_ratings: Ratings<FeasibilityDimension>,
    #[serde(default)]
    rationales: Rationales,
    assessed_by: String,
    assessed_at: DateTime<Utc>,
}

impl TryFrom<AssessmentRecord> for Assessment {
    type Error = ScoreError;

    fn try_from(record: AssessmentRecord) -> Result<Self, Self::Error> {
        Assessment::score(
            record.idea_id,
            record.value_ratings,
            record.feasibility_ratings,
            record.rationales,
            record.assessed_by,
            record.assessed_at,
        )
    }
}

impl Assessment {
    fn score(
        idea_id: Uuid,
        value_ratings: Ratings<ValueDimension>,
        feasibility_ratings: Ratings<FeasibilityDimension>,
        rationales: Rationales,
        assessed_by: String,
        assessed_at: DateTime<Utc>,
    ) -> Result<Self, ScoreError> {
        let (value_score, feasibility_score) = match (
            compute_value_score(&value_ratings),
            compute_feasibility_score(&feasibility_ratings),
        ) {
            (Ok(value), Ok(feasibility)) => (value, feasibility),
            (value, feasibility) => {
                // Report both groups at once so a form can flag every gap.
                let missing = [value.err(), feasibility.err()]
                    .into_iter()
                    .flatten()
                    .flat_map(|ScoreError::IncompleteAssessment { missing }| missing)
                    .collect();
                return Err(ScoreError::IncompleteAssessment { missing });
            }
        };

        Ok(Assessment {
            idea_id,
            value_ratings,
            feasibility_ratings,
            rationales,
            value_score,
            feasibility_score,
            quadrant: classify_quadrant(value_score, feasibility_score),
            assessed_by,
            assessed_at,
        })
    }

    pub fn idea_id(&self) -> Uuid {
        self.idea_id
    }

    pub fn value_score(&self) -> f64 {
        self.value_score
    }

    pub fn feasibility_score(&self) -> f64 {
        self.feasibility_score
    }

    pub fn quadrant(&self) -> Quadrant {
        self.quadrant
    }

    pub fn assessed_by(&self) -> &str {
        &self.assessed_by
    }
}

/// Scores a complete rating sheet for an idea and stamps the assessor and
/// time. Leaves the idea's status alone; moving it through the pipeline is a
/// separate, explicit lifecycle step.
pub fn submit_assessment(
    idea_id: Uuid,
    value_ratings: Ratings<ValueDimension>,
    feasibility_ratings: Ratings<FeasibilityDimension>,
    rationales: Rationales,
    assessed_by: impl Into<String>,
) -> Result<Assessment, ScoreError> {
    Assessment::score(
        idea_id,
        value_ratings,
        feasibility_ratings,
        rationales,
        assessed_by.into(),
        Utc::now(),
    )
}
