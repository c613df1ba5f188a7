mod types;

pub use types::{Plan, Step};

use crate::classifier::{Classification, IntentKind};

/// Expand a classified intent into an ordered plan.
///
/// The branch on intent category is a deterministic stub: a real planner
/// replaces this body but must keep producing plans that satisfy
/// [`Plan::check_invariants`].
pub fn plan(classification: &Classification) -> Plan {
    let intent = &classification.intent;

    let (steps, blocking_questions) = match classification.classification {
        IntentKind::Plan => (
            vec![
                Step::new(1, "Analyze requirements"),
                Step::new(2, "Draft implementation plan"),
                Step::new(3, "Execute first phase"),
                Step::new(4, "Verify results"),
            ],
            Vec::new(),
        ),
        IntentKind::Question => (
            vec![Step::needing_clarification(1, "Answer user question")],
            vec!["Could you provide more context?".to_string()],
        ),
        _ => (vec![Step::new(1, format!("Execute: {intent}"))], Vec::new()),
    };

    Plan {
        goal: format!("Fulfil intent: {intent}"),
        steps,
        blocking_questions,
    }
}

#[cfg(test)]
mod tests;
