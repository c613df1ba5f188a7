use std::sync::Arc;
use std::time::Duration;

use tokio::time;
use tracing::{debug, error, info, warn};

use crate::audit::AuditLog;
use crate::config::{Config, DEFAULT_TIMEOUT_SECS};

use super::adapters::{
    KeywordRouterAdapter, SafetyValidationAdapter, SimulatedExecutionAdapter, StaticPlannerAdapter,
};
use super::context::{PipelineContext, PipelineEvent, PipelineRequest, PipelineRun, RunError};
use super::error::{TIMEOUT_ERROR_TYPE, error_type_of};
use super::stages::{ExecutionStage, PipelineStage, PlanningStage, RouterStage, ValidationStage};
use super::types::StageKind;

/// Drives a request through the stages in order, short-circuiting on the
/// first failure, then hands the assembled run to the audit log.
pub struct PipelineOrchestrator {
    stages: Vec<Box<dyn PipelineStage>>,
    audit: Option<Arc<AuditLog>>,
    timeout: Duration,
}

impl PipelineOrchestrator {
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// Standard pipeline wired from configuration: stub adapters, the
    /// configured audit log, and the configured latency budget.
    pub fn from_config(config: &Config) -> Self {
        Self::builder()
            .with_default_adapters()
            .with_audit(Arc::new(AuditLog::new(&config.audit.path)))
            .with_timeout(Duration::from_secs(config.pipeline.timeout_secs))
            .build()
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Run the pipeline to completion. Never fails from the caller's view:
    /// stage errors, timeouts, and audit-append problems all surface on the
    /// returned run itself.
    pub async fn run(&self, request: PipelineRequest) -> PipelineRun {
        let mut context = PipelineContext::new(request);
        let request_id = context.request_id;
        info!(%request_id, "Pipeline started");

        let outcome = time::timeout(self.timeout, self.drive(&mut context)).await;
        let mut run = match outcome {
            Ok(Ok(())) => context.into_run(),
            Ok(Err(failure)) => context.into_run_with_error(failure),
            Err(_) => {
                error!(%request_id, "Pipeline timed out after {:?}", self.timeout);
                context.into_run_with_error(RunError {
                    stage: StageKind::Request,
                    error_type: TIMEOUT_ERROR_TYPE.to_string(),
                    message: format!(
                        "Pipeline exceeded its {}s latency budget",
                        self.timeout.as_secs()
                    ),
                })
            }
        };

        if let Some(audit) = &self.audit {
            // A failed append degrades to a warning on the run; the request
            // itself still succeeds.
            if let Err(append_error) = audit.append(&run) {
                warn!(%request_id, "Audit append failed: {append_error:#}");
                run.events
                    .push(PipelineEvent::AuditWarning(format!("{append_error:#}")));
            }
        }

        run
    }

    async fn drive(&self, context: &mut PipelineContext) -> Result<(), RunError> {
        for stage in &self.stages {
            let kind = stage.kind();
            debug!(request_id = %context.request_id, stage = %kind, "Running stage");
            context.record_stage_start(kind);

            match stage.execute(context).await {
                Ok(()) => context.record_stage_end(kind),
                Err(stage_error) => {
                    let message = format!("{stage_error:#}");
                    error!(
                        request_id = %context.request_id,
                        stage = %kind,
                        "Stage failed: {message}"
                    );
                    context.record_stage_failure(kind, &message);
                    return Err(RunError {
                        stage: kind,
                        error_type: error_type_of(&stage_error).to_string(),
                        message,
                    });
                }
            }
        }

        Ok(())
    }
}

impl Default for PipelineOrchestrator {
    fn default() -> Self {
        PipelineBuilder::new().with_default_adapters().build()
    }
}

pub struct PipelineBuilder {
    stages: Vec<Box<dyn PipelineStage>>,
    audit: Option<Arc<AuditLog>>,
    timeout: Duration,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self {
            stages: Vec::new(),
            audit: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn add_stage<S>(mut self, stage: S) -> Self
    where
        S: PipelineStage + 'static,
    {
        self.stages.push(Box::new(stage));
        self
    }

    pub fn with_router_adapter<C>(self, adapter: C) -> Self
    where
        C: super::adapters::ClassifyAdapter + Send + Sync + 'static,
    {
        self.add_stage(RouterStage::new(adapter))
    }

    pub fn with_planner_adapter<P>(self, adapter: P) -> Self
    where
        P: super::adapters::PlanAdapter + Send + Sync + 'static,
    {
        self.add_stage(PlanningStage::new(adapter))
    }

    pub fn with_executor_adapter<E>(self, adapter: E) -> Self
    where
        E: super::adapters::ExecuteAdapter + Send + Sync + 'static,
    {
        self.add_stage(ExecutionStage::new(adapter))
    }

    pub fn with_validator_adapter<V>(self, adapter: V) -> Self
    where
        V: super::adapters::ValidateAdapter + Send + Sync + 'static,
    {
        self.add_stage(ValidationStage::new(adapter))
    }

    pub fn with_default_adapters(self) -> Self {
        self.with_router_adapter(KeywordRouterAdapter)
            .with_planner_adapter(StaticPlannerAdapter)
            .with_executor_adapter(SimulatedExecutionAdapter)
            .with_validator_adapter(SafetyValidationAdapter)
    }

    pub fn with_audit(mut self, audit: Arc<AuditLog>) -> Self {
        self.audit = Some(audit);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> PipelineOrchestrator {
        PipelineOrchestrator {
            stages: self.stages,
            audit: self.audit,
            timeout: self.timeout,
        }
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
