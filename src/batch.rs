use crate::config::PlannerConfig;
use crate::input::TripRequest;
use crate::schedule::{ScheduleResult, compute};
use crate::trip::TripLabels;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BatchOutcome {
    Planned {
        index: usize,
        labels: TripLabels,
        result: ScheduleResult,
    },
    Rejected {
        index: usize,
        message: String,
    },
}

impl BatchOutcome {
    pub fn index(&self) -> usize {
        match self {
            BatchOutcome::Planned { index, .. } | BatchOutcome::Rejected { index, .. } => *index,
        }
    }

    pub fn result(&self) -> Option<&ScheduleResult> {
        match self {
            BatchOutcome::Planned { result, .. } => Some(result),
            BatchOutcome::Rejected { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub planned: usize,
    pub rejected: usize,
}

impl BatchSummary {
    pub fn from_outcomes(outcomes: &[BatchOutcome]) -> Self {
        outcomes.iter().fold(Self::default(), |mut acc, outcome| {
            match outcome {
                BatchOutcome::Planned { .. } => acc.planned += 1,
                BatchOutcome::Rejected { .. } => acc.rejected += 1,
            }
            acc
        })
    }

    pub fn to_cli_summary(&self) -> String {
        format!("planned={}, rejected={}", self.planned, self.rejected)
    }
}

/// Plan every trip independently. Outcomes come back in input order; a
/// trip that fails to parse is reported without stopping the others.
pub fn compute_batch(requests: &[TripRequest], config: &PlannerConfig) -> Vec<BatchOutcome> {
    let outcomes: Vec<BatchOutcome> = requests
        .par_iter()
        .enumerate()
        .map(|(index, request)| match request.parse_with_defaults(config) {
            Ok((input, labels)) => BatchOutcome::Planned {
                index,
                labels,
                result: compute(&input),
            },
            Err(err) => {
                warn!(index, %err, "skipping trip");
                BatchOutcome::Rejected {
                    index,
                    message: err.to_string(),
                }
            }
        })
        .collect();

    let summary = BatchSummary::from_outcomes(&outcomes);
    info!(planned = summary.planned, rejected = summary.rejected, "batch complete");
    outcomes
}
