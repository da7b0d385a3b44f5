use std::fmt;

use super::timer::DeployTimer;
use crate::models::deployment::DeploymentResult;

/// Where the simulated deployment currently is.
///
/// `Idle -> Deploying -> Completed -> Idle`. There is no failure phase: the
/// simulation cannot fail.
#[derive(Debug, Clone, Default)]
pub enum DeployPhase {
    #[default]
    Idle,
    Deploying {
        /// Snapshot taken at trigger time; later edits do not reach it
        token_name: String,
        timer: DeployTimer,
    },
    Completed(DeploymentResult),
}

impl DeployPhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, DeployPhase::Idle)
    }

    pub fn is_deploying(&self) -> bool {
        matches!(self, DeployPhase::Deploying { .. })
    }
}

impl fmt::Display for DeployPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeployPhase::Idle => write!(f, "idle"),
            DeployPhase::Deploying { token_name, .. } => write!(f, "deploying {}", token_name),
            DeployPhase::Completed(result) => write!(f, "completed at {}", result.address),
        }
    }
}
