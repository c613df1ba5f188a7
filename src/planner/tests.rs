use super::*;
use crate::classifier::{Classification, Confidence, IntentKind};

fn classification(kind: IntentKind) -> Classification {
    Classification {
        intent: "Processed: sample input...".to_string(),
        classification: kind,
        confidence: Confidence::High,
    }
}

#[test]
fn plan_intent_yields_four_fixed_steps() {
    let result = plan(&classification(IntentKind::Plan));

    assert_eq!(result.steps.len(), 4);
    let numbers: Vec<u32> = result.steps.iter().map(|s| s.step_number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4]);
    assert!(result.steps.iter().all(|s| !s.requires_clarification));
    assert!(result.blocking_questions.is_empty());
}

#[test]
fn question_intent_yields_one_step_with_blocking_question() {
    let result = plan(&classification(IntentKind::Question));

    assert_eq!(result.steps.len(), 1);
    assert!(result.steps[0].requires_clarification);
    assert_eq!(
        result.blocking_questions,
        vec!["Could you provide more context?".to_string()]
    );
}

#[test]
fn other_intents_yield_single_direct_step() {
    for kind in [IntentKind::Task, IntentKind::Summary, IntentKind::NoOp] {
        let result = plan(&classification(kind));

        assert_eq!(result.steps.len(), 1, "intent kind: {kind}");
        assert!(!result.steps[0].requires_clarification);
        assert!(result.steps[0].description.starts_with("Execute: "));
        assert!(result.blocking_questions.is_empty());
    }
}

#[test]
fn goal_echoes_original_intent() {
    let result = plan(&classification(IntentKind::Task));
    assert_eq!(result.goal, "Fulfil intent: Processed: sample input...");
}

#[test]
fn stub_plans_satisfy_invariants() {
    for kind in [
        IntentKind::Task,
        IntentKind::Plan,
        IntentKind::Summary,
        IntentKind::Question,
        IntentKind::NoOp,
    ] {
        plan(&classification(kind)).check_invariants().unwrap();
    }
}

#[test]
fn invariant_check_rejects_gapped_step_numbers() {
    let broken = Plan {
        goal: "Fulfil intent: x".to_string(),
        steps: vec![Step::new(1, "first"), Step::new(3, "third")],
        blocking_questions: Vec::new(),
    };

    let err = broken.check_invariants().unwrap_err();
    assert!(err.to_string().contains("expected 2"));
}

#[test]
fn invariant_check_rejects_clarification_without_questions() {
    let broken = Plan {
        goal: "Fulfil intent: x".to_string(),
        steps: vec![Step::needing_clarification(1, "ambiguous step")],
        blocking_questions: Vec::new(),
    };

    assert!(broken.check_invariants().is_err());
}
