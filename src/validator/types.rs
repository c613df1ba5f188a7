use serde::{Deserialize, Serialize};

/// What the caller should do with a validated execution.
///
/// `AskUser` is reserved for future policy rules (e.g. ambiguous plans);
/// the current safety policy only ever produces `Accept` or `Revise`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendedAction {
    Accept,
    Revise,
    AskUser,
}

/// Validator stage output: the safety-policy verdict on an execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub valid: bool,
    pub issues: Vec<String>,
    pub recommended_action: RecommendedAction,
}

impl Verdict {
    pub fn accept() -> Self {
        Self {
            valid: true,
            issues: Vec::new(),
            recommended_action: RecommendedAction::Accept,
        }
    }
}
