//! Idea pipeline state machine.
//!
//! ```text
//! submitted → screening → assessment → prioritized → development → pilot → deployed → scaling
//!     └──────────────┬──────── any state ──────────────┬──────────────────┘
//!                on_hold / rejected                 archived (terminal)
//! ```
//!
//! Transitions are pure: each takes the current idea and returns a new value.
//! Persisting the result is the caller's job (see `pipeline::apply_transition`,
//! which guards it with a compare-and-swap on the previous status).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ideas::models::Idea;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdeaStatus {
    Submitted,
    Screening,
    Assessment,
    Prioritized,
    Development,
    Pilot,
    Deployed,
    Scaling,
    OnHold,
    Rejected,
    Archived,
}

/// The forward-only pipeline, in order.
pub const MAIN_SEQUENCE: [IdeaStatus; 8] = [
    IdeaStatus::Submitted,
    IdeaStatus::Screening,
    IdeaStatus::Assessment,
    IdeaStatus::Prioritized,
    IdeaStatus::Development,
    IdeaStatus::Pilot,
    IdeaStatus::Deployed,
    IdeaStatus::Scaling,
];

impl IdeaStatus {
    pub const ALL: [IdeaStatus; 11] = [
        IdeaStatus::Submitted,
        IdeaStatus::Screening,
        IdeaStatus::Assessment,
        IdeaStatus::Prioritized,
        IdeaStatus::Development,
        IdeaStatus::Pilot,
        IdeaStatus::Deployed,
        IdeaStatus::Scaling,
        IdeaStatus::OnHold,
        IdeaStatus::Rejected,
        IdeaStatus::Archived,
    ];

    /// 1-based position in the main sequence; `None` for side and terminal states.
    pub fn pipeline_position(self) -> Option<u8> {
        match self {
            IdeaStatus::Submitted => Some(1),
            IdeaStatus::Screening => Some(2),
            IdeaStatus::Assessment => Some(3),
            IdeaStatus::Prioritized => Some(4),
            IdeaStatus::Development => Some(5),
            IdeaStatus::Pilot => Some(6),
            IdeaStatus::Deployed => Some(7),
            IdeaStatus::Scaling => Some(8),
            IdeaStatus::OnHold | IdeaStatus::Rejected | IdeaStatus::Archived => None,
        }
    }

    /// Ordering used when listing every status; side states sort after the pipeline.
    pub fn display_order(self) -> u8 {
        match self {
            IdeaStatus::OnHold => 99,
            IdeaStatus::Rejected => 100,
            IdeaStatus::Archived => 101,
            other => other.pipeline_position().unwrap_or(0),
        }
    }

    pub fn is_main_sequence(self) -> bool {
        self.pipeline_position().is_some()
    }

    pub fn is_terminal(self) -> bool {
        self == IdeaStatus::Archived
    }

    /// Active ideas are those still moving through the main sequence.
    pub fn is_active(self) -> bool {
        self.is_main_sequence()
    }

    pub fn next_stage(self) -> Option<IdeaStatus> {
        match self {
            IdeaStatus::Submitted => Some(IdeaStatus::Screening),
            IdeaStatus::Screening => Some(IdeaStatus::Assessment),
            IdeaStatus::Assessment => Some(IdeaStatus::Prioritized),
            IdeaStatus::Prioritized => Some(IdeaStatus::Development),
            IdeaStatus::Development => Some(IdeaStatus::Pilot),
            IdeaStatus::Pilot => Some(IdeaStatus::Deployed),
            IdeaStatus::Deployed => Some(IdeaStatus::Scaling),
            IdeaStatus::Scaling
            | IdeaStatus::OnHold
            | IdeaStatus::Rejected
            | IdeaStatus::Archived => None,
        }
    }

    /// Every status a single transition can lead to from here.
    pub fn reachable(self) -> Vec<IdeaStatus> {
        if self.is_terminal() {
            return Vec::new();
        }
        let mut targets: Vec<IdeaStatus> = self.next_stage().into_iter().collect();
        targets.extend([IdeaStatus::OnHold, IdeaStatus::Rejected, IdeaStatus::Archived]);
        targets.retain(|&target| target != self);
        targets
    }

    pub fn as_str(self) -> &'static str {
        match self {
            IdeaStatus::Submitted => "submitted",
            IdeaStatus::Screening => "screening",
            IdeaStatus::Assessment => "assessment",
            IdeaStatus::Prioritized => "prioritized",
            IdeaStatus::Development => "development",
            IdeaStatus::Pilot => "pilot",
            IdeaStatus::Deployed => "deployed",
            IdeaStatus::Scaling => "scaling",
            IdeaStatus::OnHold => "on_hold",
            IdeaStatus::Rejected => "rejected",
            IdeaStatus::Archived => "archived",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            IdeaStatus::Submitted => "Submitted",
            IdeaStatus::Screening => "Screening",
            IdeaStatus::Assessment => "Assessment",
            IdeaStatus::Prioritized => "Prioritized",
            IdeaStatus::Development => "Development",
            IdeaStatus::Pilot => "Pilot",
            IdeaStatus::Deployed => "Deployed",
            IdeaStatus::Scaling => "Scaling",
            IdeaStatus::OnHold => "On Hold",
            IdeaStatus::Rejected => "Rejected",
            IdeaStatus::Archived => "Archived",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            IdeaStatus::Submitted => "Raw idea captured, awaiting initial review",
            IdeaStatus::Screening => "Initial review for strategic alignment and viability",
            IdeaStatus::Assessment => "Detailed value and feasibility scoring in progress",
            IdeaStatus::Prioritized => "Ranked and selected for implementation",
            IdeaStatus::Development => "Building MVP or prototype solution",
            IdeaStatus::Pilot => "Testing with limited users to validate",
            IdeaStatus::Deployed => "Full production rollout complete",
            IdeaStatus::Scaling => "Optimization and organizational expansion",
            IdeaStatus::OnHold => "Paused due to resources or timing",
            IdeaStatus::Rejected => "Did not pass a stage gate",
            IdeaStatus::Archived => "Completed lifecycle or deprecated",
        }
    }
}

impl fmt::Display for IdeaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown idea status '{0}'")]
pub struct UnknownStatus(pub String);

impl FromStr for IdeaStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IdeaStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifecycleError {
    #[error("No next stage: idea is '{status}' and cannot advance")]
    NoNextStage { status: IdeaStatus },
}

/// A requested status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    Advance,
    Hold,
    Reject,
    Archive,
}

impl Transition {
    pub fn as_str(self) -> &'static str {
        match self {
            Transition::Advance => "advance",
            Transition::Hold => "hold",
            Transition::Reject => "reject",
            Transition::Archive => "archive",
        }
    }
}

/// Moves an idea exactly one stage forward along the main sequence.
pub fn advance(idea: &Idea) -> Result<Idea, LifecycleError> {
    let next = idea
        .status
        .next_stage()
        .ok_or(LifecycleError::NoNextStage {
            status: idea.status,
        })?;
    Ok(with_status(idea, next))
}

/// Parks an idea. Total over every state; an archived idea stays archived.
pub fn hold(idea: &Idea) -> Idea {
    side_exit(idea, IdeaStatus::OnHold)
}

/// Rejects an idea. Total over every state; an archived idea stays archived.
pub fn reject(idea: &Idea) -> Idea {
    side_exit(idea, IdeaStatus::Rejected)
}

/// Ends an idea's life. Reachable from any state.
pub fn archive(idea: &Idea) -> Idea {
    with_status(idea, IdeaStatus::Archived)
}

pub fn apply(transition: Transition, idea: &Idea) -> Result<Idea, LifecycleError> {
    match transition {
        Transition::Advance => advance(idea),
        Transition::Hold => Ok(hold(idea)),
        Transition::Reject => Ok(reject(idea)),
        Transition::Archive => Ok(archive(idea)),
    }
}

fn side_exit(idea: &Idea, target: IdeaStatus) -> Idea {
    if idea.status.is_terminal() {
        return idea.clone();
    }
    with_status(idea, target)
}

fn with_status(idea: &Idea, status: IdeaStatus) -> Idea {
    Idea {
        status,
        ..idea.clone()
    }
}
