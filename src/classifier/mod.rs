use serde::{Deserialize, Serialize};
use std::fmt;

const INTENT_PREVIEW_CHARS: usize = 50;

/// Closed set of intent categories the router can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IntentKind {
    Task,
    Plan,
    Summary,
    Question,
    NoOp,
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            IntentKind::Task => "task",
            IntentKind::Plan => "plan",
            IntentKind::Summary => "summary",
            IntentKind::Question => "question",
            IntentKind::NoOp => "no-op",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        };
        write!(f, "{label}")
    }
}

/// Router stage output: a derived intent summary plus its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub intent: String,
    pub classification: IntentKind,
    pub confidence: Confidence,
}

/// Classify free-text input into an intent category.
///
/// Total over all inputs: empty or whitespace-only text classifies as
/// `no-op`, everything unmatched falls through to `task`. Keyword sets are
/// tested in priority order, so "what is the plan?" routes to `plan`, not
/// `question`. Confidence is a fixed `high` until a real scoring function
/// replaces this keyword policy.
pub fn classify(input: &str) -> Classification {
    let lowered = input.to_lowercase();

    let classification = if lowered.contains("plan") || lowered.contains("strategy") {
        IntentKind::Plan
    } else if lowered.contains('?') || lowered.contains("what") || lowered.contains("how") {
        IntentKind::Question
    } else if lowered.contains("summary") || lowered.contains("summarize") {
        IntentKind::Summary
    } else if input.trim().is_empty() {
        IntentKind::NoOp
    } else {
        IntentKind::Task
    };

    let preview: String = input.chars().take(INTENT_PREVIEW_CHARS).collect();

    Classification {
        intent: format!("Processed: {preview}..."),
        classification,
        confidence: Confidence::High,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_keyword_routes_to_plan() {
        let result = classify("draft a plan for the migration");
        assert_eq!(result.classification, IntentKind::Plan);
        assert_eq!(result.confidence, Confidence::High);
    }

    #[test]
    fn strategy_keyword_routes_to_plan() {
        let result = classify("outline the rollout strategy");
        assert_eq!(result.classification, IntentKind::Plan);
    }

    #[test]
    fn plan_keyword_wins_over_question_marker() {
        // Priority order is a tie-break: "plan" is tested before "?".
        let result = classify("what is the plan for launch?");
        assert_eq!(result.classification, IntentKind::Plan);
    }

    #[test]
    fn question_markers_route_to_question() {
        for input in ["why is the sky blue?", "what time is it", "how does this work"] {
            let result = classify(input);
            assert_eq!(result.classification, IntentKind::Question, "input: {input}");
        }
    }

    #[test]
    fn summarize_keyword_routes_to_summary() {
        let result = classify("summarize the release notes");
        assert_eq!(result.classification, IntentKind::Summary);
    }

    #[test]
    fn blank_input_routes_to_noop() {
        assert_eq!(classify("").classification, IntentKind::NoOp);
        assert_eq!(classify("   \t\n").classification, IntentKind::NoOp);
    }

    #[test]
    fn unmatched_input_defaults_to_task() {
        let result = classify("deploy the service");
        assert_eq!(result.classification, IntentKind::Task);
    }

    #[test]
    fn intent_preview_is_truncated() {
        let long_input = "x".repeat(200);
        let result = classify(&long_input);
        assert_eq!(result.intent, format!("Processed: {}...", "x".repeat(50)));
    }

    #[test]
    fn intent_kind_serializes_with_kebab_case() {
        let json = serde_json::to_string(&IntentKind::NoOp).unwrap();
        assert_eq!(json, "\"no-op\"");
    }
}
