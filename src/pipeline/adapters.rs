use anyhow::Result;
use async_trait::async_trait;

use crate::classifier::{self, Classification};
use crate::executor::{self, Execution};
use crate::planner::{self, Plan};
use crate::validator::{self, Verdict};

use super::context::PipelineContext;

/// Capability interfaces behind each stage. The stub rules below are one
/// concrete implementation each; real decision engines substitute without
/// touching the orchestrator.
#[async_trait]
pub trait ClassifyAdapter {
    async fn classify(&self, context: &PipelineContext) -> Result<Classification>;
}

#[async_trait]
pub trait PlanAdapter {
    async fn plan(
        &self,
        context: &PipelineContext,
        classification: &Classification,
    ) -> Result<Plan>;
}

#[async_trait]
pub trait ExecuteAdapter {
    async fn execute(&self, context: &PipelineContext, plan: &Plan) -> Result<Execution>;
}

#[async_trait]
pub trait ValidateAdapter {
    async fn validate(&self, context: &PipelineContext, execution: &Execution) -> Result<Verdict>;
}

/// Adapter over the keyword-rule classifier.
#[derive(Default)]
pub struct KeywordRouterAdapter;

#[async_trait]
impl ClassifyAdapter for KeywordRouterAdapter {
    async fn classify(&self, context: &PipelineContext) -> Result<Classification> {
        Ok(classifier::classify(&context.request.input))
    }
}

/// Adapter over the fixed-branch stub planner.
#[derive(Default)]
pub struct StaticPlannerAdapter;

#[async_trait]
impl PlanAdapter for StaticPlannerAdapter {
    async fn plan(
        &self,
        _context: &PipelineContext,
        classification: &Classification,
    ) -> Result<Plan> {
        Ok(planner::plan(classification))
    }
}

/// Adapter that simulates execution instead of running anything.
#[derive(Default)]
pub struct SimulatedExecutionAdapter;

#[async_trait]
impl ExecuteAdapter for SimulatedExecutionAdapter {
    async fn execute(&self, _context: &PipelineContext, plan: &Plan) -> Result<Execution> {
        Ok(executor::execute(plan))
    }
}

/// Adapter over the denylist safety policy.
#[derive(Default)]
pub struct SafetyValidationAdapter;

#[async_trait]
impl ValidateAdapter for SafetyValidationAdapter {
    async fn validate(&self, _context: &PipelineContext, execution: &Execution) -> Result<Verdict> {
        validator::validate(execution)
    }
}
