use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// One unit of work inside a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub step_number: u32,
    pub description: String,
    pub requires_clarification: bool,
}

impl Step {
    pub fn new(step_number: u32, description: impl Into<String>) -> Self {
        Self {
            step_number,
            description: description.into(),
            requires_clarification: false,
        }
    }

    pub fn needing_clarification(step_number: u32, description: impl Into<String>) -> Self {
        Self {
            step_number,
            description: description.into(),
            requires_clarification: true,
        }
    }
}

/// Planner stage output: an ordered task breakdown for a classified intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub goal: String,
    pub steps: Vec<Step>,
    pub blocking_questions: Vec<String>,
}

impl Plan {
    /// Check the structural invariants every plan must satisfy:
    /// step numbers contiguous from 1, and any step that requires
    /// clarification implies at least one blocking question.
    pub fn check_invariants(&self) -> Result<()> {
        for (idx, step) in self.steps.iter().enumerate() {
            let expected = idx as u32 + 1;
            if step.step_number != expected {
                bail!(
                    "plan step {} is numbered {}, expected {expected}",
                    idx,
                    step.step_number
                );
            }
        }

        let needs_clarification = self.steps.iter().any(|step| step.requires_clarification);
        if needs_clarification && self.blocking_questions.is_empty() {
            bail!("plan has steps requiring clarification but no blocking questions");
        }

        Ok(())
    }
}
