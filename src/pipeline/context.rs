use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::classifier::{Classification, IntentKind};
use crate::executor::{Execution, ExecutionStatus};
use crate::planner::Plan;
use crate::validator::{RecommendedAction, Verdict};

use super::types::StageKind;

/// Immutable request passed into the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineRequest {
    pub input: String,
}

impl PipelineRequest {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

/// Mutable state threaded through the stages of one run.
///
/// Each stage reads only its predecessor's output and records its own;
/// nothing reaches further back, keeping the pipeline a strict linear
/// chain.
#[derive(Debug, Clone)]
pub struct PipelineContext {
    pub request: PipelineRequest,
    pub request_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub classification: Option<Classification>,
    pub plan: Option<Plan>,
    pub execution: Option<Execution>,
    pub validation: Option<Verdict>,
    events: Vec<PipelineEvent>,
}

impl PipelineContext {
    pub fn new(request: PipelineRequest) -> Self {
        Self {
            request,
            request_id: Uuid::new_v4(),
            started_at: Utc::now(),
            classification: None,
            plan: None,
            execution: None,
            validation: None,
            events: Vec::new(),
        }
    }

    pub fn record_event(&mut self, event: PipelineEvent) {
        self.events.push(event);
    }

    pub fn record_stage_start(&mut self, stage: StageKind) {
        self.record_event(PipelineEvent::StageStarted(stage));
    }

    pub fn record_stage_end(&mut self, stage: StageKind) {
        self.record_event(PipelineEvent::StageCompleted(stage));
    }

    pub fn record_stage_failure(&mut self, stage: StageKind, error: impl Into<String>) {
        self.record_event(PipelineEvent::StageFailed {
            stage,
            error: error.into(),
        });
    }

    pub fn record_classification(&mut self, classification: Classification) {
        let kind = classification.classification;
        self.classification = Some(classification);
        self.record_event(PipelineEvent::IntentClassified { kind });
    }

    pub fn record_plan(&mut self, plan: Plan) {
        let steps = plan.steps.len();
        let blocked = !plan.blocking_questions.is_empty();
        self.plan = Some(plan);
        self.record_event(PipelineEvent::PlanReady { steps, blocked });
    }

    pub fn record_execution(&mut self, execution: Execution) {
        let status = execution.status;
        self.execution = Some(execution);
        self.record_event(PipelineEvent::ExecutionFinished { status });
    }

    pub fn record_validation(&mut self, verdict: Verdict) {
        let valid = verdict.valid;
        let action = verdict.recommended_action;
        self.validation = Some(verdict);
        self.record_event(PipelineEvent::ValidationFinished { valid, action });
    }

    pub fn into_run(self) -> PipelineRun {
        self.into_run_inner(None)
    }

    pub fn into_run_with_error(self, error: RunError) -> PipelineRun {
        self.into_run_inner(Some(error))
    }

    fn into_run_inner(self, error: Option<RunError>) -> PipelineRun {
        let PipelineContext {
            request_id,
            started_at,
            classification,
            plan,
            execution,
            validation,
            events,
            ..
        } = self;

        PipelineRun {
            request_id,
            timestamp: started_at,
            router: classification,
            planner: plan,
            executor: execution,
            validator: validation,
            error,
            events,
        }
    }
}

/// The auditable record of one end-to-end pipeline invocation.
///
/// Stage fields are populated strictly in order; if a stage is absent,
/// everything after it is absent too. `error` is set only when the run
/// terminated early.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineRun {
    pub request_id: Uuid,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub router: Option<Classification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planner: Option<Plan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executor: Option<Execution>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validator: Option<Verdict>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RunError>,
    /// In-memory stage trace; not part of the serialized record.
    #[serde(skip)]
    pub events: Vec<PipelineEvent>,
}

impl PipelineRun {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Failure details for a run that terminated early.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunError {
    pub stage: StageKind,
    pub error_type: String,
    pub message: String,
}

/// Structured trace events emitted while progressing through a run.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineEvent {
    StageStarted(StageKind),
    StageCompleted(StageKind),
    StageFailed { stage: StageKind, error: String },
    IntentClassified { kind: IntentKind },
    PlanReady { steps: usize, blocked: bool },
    ExecutionFinished { status: ExecutionStatus },
    ValidationFinished { valid: bool, action: RecommendedAction },
    AuditWarning(String),
}
