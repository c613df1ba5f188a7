#![allow(dead_code)]

use thiserror::Error;

pub const VALIDATION_ERROR_TYPE: &str = "validation_error";
pub const AGENT_ERROR_TYPE: &str = "agent_error";
pub const INTERNAL_ERROR_TYPE: &str = "internal_error";
pub const TIMEOUT_ERROR_TYPE: &str = "timeout";

/// Typed faults a stage can raise. Anything else a stage returns is
/// treated as an unexpected internal error by the orchestrator.
#[derive(Debug, Error)]
pub enum StageError {
    /// A stage received or produced data that violates a contract invariant.
    #[error("{0}")]
    Contract(String),

    /// A stage's internal logic faulted.
    #[error("{0}")]
    Agent(String),
}

impl StageError {
    pub fn contract(message: impl Into<String>) -> Self {
        Self::Contract(message.into())
    }

    pub fn agent(message: impl Into<String>) -> Self {
        Self::Agent(message.into())
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            StageError::Contract(_) => VALIDATION_ERROR_TYPE,
            StageError::Agent(_) => AGENT_ERROR_TYPE,
        }
    }
}

/// Map a stage failure onto the error-type tag recorded in the run.
pub fn error_type_of(error: &anyhow::Error) -> &'static str {
    match error.downcast_ref::<StageError>() {
        Some(stage_error) => stage_error.error_type(),
        None => INTERNAL_ERROR_TYPE,
    }
}
