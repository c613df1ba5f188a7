use super::*;
use serde_json::{Map, json};

use crate::executor::{Execution, ExecutionStatus, ExecutionType};

fn execution_with_output(entries: &[(&str, serde_json::Value)]) -> Execution {
    let mut output = Map::new();
    for (key, value) in entries {
        output.insert(key.to_string(), value.clone());
    }
    Execution {
        execution_type: ExecutionType::Task,
        status: ExecutionStatus::Simulated,
        output,
    }
}

#[test]
fn clean_output_is_accepted() {
    let execution = execution_with_output(&[
        ("result", json!("Success")),
        ("goal", json!("Fulfil intent: Processed: list files...")),
    ]);

    let verdict = validate(&execution).unwrap();

    assert!(verdict.valid);
    assert!(verdict.issues.is_empty());
    assert_eq!(verdict.recommended_action, RecommendedAction::Accept);
}

#[test]
fn dangerous_keyword_forces_revise() {
    let execution = execution_with_output(&[("goal", json!("DROP TABLE users"))]);

    let verdict = validate(&execution).unwrap();

    assert!(!verdict.valid);
    assert_eq!(verdict.recommended_action, RecommendedAction::Revise);
    assert_eq!(
        verdict.issues,
        vec![
            "Safety Violation: Detected dangerous keyword 'drop'".to_string(),
            "Action blocked by Safety Protocol Level 1.".to_string(),
        ]
    );
}

#[test]
fn one_issue_per_matched_keyword_plus_summary() {
    let execution = execution_with_output(&[
        ("goal", json!("delete old rows, truncate the log table")),
        ("message", json!("then shutdown the replica")),
    ]);

    let verdict = validate(&execution).unwrap();

    assert!(!verdict.valid);
    // delete, shutdown, truncate, plus the summary line.
    assert_eq!(verdict.issues.len(), 4);
    assert_eq!(
        verdict.issues.last().unwrap(),
        "Action blocked by Safety Protocol Level 1."
    );
}

#[test]
fn keywords_in_nested_values_are_caught() {
    let execution = execution_with_output(&[(
        "details",
        json!({ "commands": ["rm -rf /var/data", "echo done"] }),
    )]);

    let verdict = validate(&execution).unwrap();

    assert!(!verdict.valid);
    assert!(
        verdict
            .issues
            .iter()
            .any(|issue| issue.contains("'rm '"))
    );
}

#[test]
fn invalid_verdict_always_carries_issues() {
    let clean = validate(&execution_with_output(&[("result", json!("ok"))])).unwrap();
    let flagged = validate(&execution_with_output(&[("result", json!("drop it"))])).unwrap();

    assert_eq!(clean.valid, clean.issues.is_empty());
    assert_eq!(flagged.valid, flagged.issues.is_empty());
}

#[test]
fn ask_user_serializes_with_snake_case() {
    let json = serde_json::to_string(&RecommendedAction::AskUser).unwrap();
    assert_eq!(json, "\"ask_user\"");
}
