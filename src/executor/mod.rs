use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::fmt;

use crate::planner::Plan;

/// Whether the execution covered a single direct task or a multi-step plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionType {
    Task,
    Plan,
}

impl fmt::Display for ExecutionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExecutionType::Task => "task",
            ExecutionType::Plan => "plan",
        };
        write!(f, "{label}")
    }
}

/// Outcome state of an execution backend.
///
/// The stub backend only produces `Simulated`; the remaining values define
/// the vocabulary a real executor reports so that the validator and
/// response consumers have something concrete to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    Simulated,
    Succeeded,
    Failed,
    Partial,
}

impl fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExecutionStatus::Simulated => "simulated",
            ExecutionStatus::Succeeded => "succeeded",
            ExecutionStatus::Failed => "failed",
            ExecutionStatus::Partial => "partial",
        };
        write!(f, "{label}")
    }
}

/// Executor stage output: a type tag, an outcome status, and an open
/// key/value payload carrying backend-specific result data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Execution {
    pub execution_type: ExecutionType,
    pub status: ExecutionStatus,
    pub output: Map<String, Value>,
}

/// Simulate carrying out a plan.
///
/// `execution_type` is a pure function of the plan's arity: exactly one
/// step is a direct task, anything more is a plan. The payload shape
/// (result, echoed goal, step count, message) is the contract a real
/// backend keeps while replacing the body.
pub fn execute(plan: &Plan) -> Execution {
    let execution_type = if plan.steps.len() == 1 {
        ExecutionType::Task
    } else {
        ExecutionType::Plan
    };

    let mut output = Map::new();
    output.insert("result".to_string(), json!("Success"));
    output.insert("goal".to_string(), json!(plan.goal));
    output.insert("steps_processed".to_string(), json!(plan.steps.len()));
    output.insert("message".to_string(), json!("Stub execution completed."));

    Execution {
        execution_type,
        status: ExecutionStatus::Simulated,
        output,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::Step;

    fn plan_with_steps(count: u32) -> Plan {
        Plan {
            goal: "Fulfil intent: Processed: test...".to_string(),
            steps: (1..=count).map(|n| Step::new(n, format!("step {n}"))).collect(),
            blocking_questions: Vec::new(),
        }
    }

    #[test]
    fn single_step_plan_executes_as_task() {
        let result = execute(&plan_with_steps(1));
        assert_eq!(result.execution_type, ExecutionType::Task);
    }

    #[test]
    fn multi_step_plan_executes_as_plan() {
        for count in [2, 4, 9] {
            let result = execute(&plan_with_steps(count));
            assert_eq!(result.execution_type, ExecutionType::Plan, "steps: {count}");
        }
    }

    #[test]
    fn stub_execution_is_simulated() {
        let result = execute(&plan_with_steps(3));
        assert_eq!(result.status, ExecutionStatus::Simulated);
    }

    #[test]
    fn output_echoes_goal_and_step_count() {
        let plan = plan_with_steps(4);
        let result = execute(&plan);

        assert_eq!(result.output["result"], "Success");
        assert_eq!(result.output["goal"], plan.goal.as_str());
        assert_eq!(result.output["steps_processed"], 4);
        assert_eq!(result.output["message"], "Stub execution completed.");
    }

    #[test]
    fn execution_serializes_with_lowercase_tags() {
        let result = execute(&plan_with_steps(2));
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["execution_type"], "plan");
        assert_eq!(value["status"], "simulated");
    }
}
