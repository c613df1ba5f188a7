mod checker;
mod types;

pub use types::{RecommendedAction, Verdict};

use anyhow::{Context, Result};

use crate::executor::Execution;

/// Run the safety policy over an execution result.
///
/// The whole output payload is serialized and scanned so that keywords are
/// caught no matter which field carries them. Every match produces its own
/// issue, plus one summary issue when anything matched at all.
pub fn validate(execution: &Execution) -> Result<Verdict> {
    let content = serde_json::to_string(&execution.output)
        .context("Failed to serialize execution output for safety scan")?;

    let matched = checker::scan(&content);
    if matched.is_empty() {
        return Ok(Verdict::accept());
    }

    let mut issues: Vec<String> = matched
        .iter()
        .map(|keyword| format!("Safety Violation: Detected dangerous keyword '{keyword}'"))
        .collect();
    issues.push("Action blocked by Safety Protocol Level 1.".to_string());

    Ok(Verdict {
        valid: false,
        issues,
        recommended_action: RecommendedAction::Revise,
    })
}

#[cfg(test)]
mod tests;
