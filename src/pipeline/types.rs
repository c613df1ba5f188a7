use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical stages of the pipeline.
///
/// `Request` is not a runnable stage: it tags failures that happen outside
/// any single stage, such as a whole-pipeline timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageKind {
    Router,
    Planner,
    Executor,
    Validator,
    Request,
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StageKind::Router => "router",
            StageKind::Planner => "planner",
            StageKind::Executor => "executor",
            StageKind::Validator => "validator",
            StageKind::Request => "request",
        };
        write!(f, "{label}")
    }
}
