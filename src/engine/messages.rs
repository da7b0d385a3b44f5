use std::fmt;

/// What happened when deploy was pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployTrigger {
    /// Timer started, phase is now `Deploying`
    Started,
    /// Name, symbol or supply is empty
    NotEligible,
    /// Re-entry while a deployment is pending
    AlreadyDeploying,
    /// The previous result has not been dismissed yet
    AwaitingDismiss,
}

impl DeployTrigger {
    pub fn is_started(self) -> bool {
        self == DeployTrigger::Started
    }
}

impl fmt::Display for DeployTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeployTrigger::Started => write!(f, "deployment started"),
            DeployTrigger::NotEligible => write!(f, "name, symbol and supply are required"),
            DeployTrigger::AlreadyDeploying => write!(f, "a deployment is already in flight"),
            DeployTrigger::AwaitingDismiss => write!(f, "previous deployment not dismissed"),
        }
    }
}
