use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use super::adapters::{ClassifyAdapter, ExecuteAdapter, PlanAdapter, ValidateAdapter};
use super::context::PipelineContext;
use super::error::StageError;
use super::types::StageKind;

#[async_trait]
pub trait PipelineStage: Send + Sync {
    fn kind(&self) -> StageKind;

    async fn execute(&self, context: &mut PipelineContext) -> Result<()>;
}

pub struct RouterStage<C> {
    adapter: Arc<C>,
}

impl<C> RouterStage<C> {
    pub fn new(adapter: C) -> Self {
        Self {
            adapter: Arc::new(adapter),
        }
    }
}

#[async_trait]
impl<C> PipelineStage for RouterStage<C>
where
    C: ClassifyAdapter + Send + Sync + 'static,
{
    fn kind(&self) -> StageKind {
        StageKind::Router
    }

    async fn execute(&self, context: &mut PipelineContext) -> Result<()> {
        let classification = self.adapter.classify(context).await?;
        context.record_classification(classification);
        Ok(())
    }
}

pub struct PlanningStage<P> {
    adapter: Arc<P>,
}

impl<P> PlanningStage<P> {
    pub fn new(adapter: P) -> Self {
        Self {
            adapter: Arc::new(adapter),
        }
    }
}

#[async_trait]
impl<P> PipelineStage for PlanningStage<P>
where
    P: PlanAdapter + Send + Sync + 'static,
{
    fn kind(&self) -> StageKind {
        StageKind::Planner
    }

    async fn execute(&self, context: &mut PipelineContext) -> Result<()> {
        let Some(classification) = context.classification.clone() else {
            return Err(StageError::contract("no classification available for planning").into());
        };

        let plan = self.adapter.plan(context, &classification).await?;
        // Every adapter's output goes through the invariant check, not just
        // the stub's.
        plan.check_invariants()
            .map_err(|error| StageError::contract(error.to_string()))?;
        context.record_plan(plan);
        Ok(())
    }
}

pub struct ExecutionStage<E> {
    adapter: Arc<E>,
}

impl<E> ExecutionStage<E> {
    pub fn new(adapter: E) -> Self {
        Self {
            adapter: Arc::new(adapter),
        }
    }
}

#[async_trait]
impl<E> PipelineStage for ExecutionStage<E>
where
    E: ExecuteAdapter + Send + Sync + 'static,
{
    fn kind(&self) -> StageKind {
        StageKind::Executor
    }

    async fn execute(&self, context: &mut PipelineContext) -> Result<()> {
        let Some(plan) = context.plan.clone() else {
            return Err(StageError::contract("no plan available for execution").into());
        };

        let execution = self.adapter.execute(context, &plan).await?;
        context.record_execution(execution);
        Ok(())
    }
}

pub struct ValidationStage<V> {
    adapter: Arc<V>,
}

impl<V> ValidationStage<V> {
    pub fn new(adapter: V) -> Self {
        Self {
            adapter: Arc::new(adapter),
        }
    }
}

#[async_trait]
impl<V> PipelineStage for ValidationStage<V>
where
    V: ValidateAdapter + Send + Sync + 'static,
{
    fn kind(&self) -> StageKind {
        StageKind::Validator
    }

    async fn execute(&self, context: &mut PipelineContext) -> Result<()> {
        let Some(execution) = context.execution.clone() else {
            return Err(StageError::contract("no execution result available for validation").into());
        };

        let verdict = self.adapter.validate(context, &execution).await?;
        context.record_validation(verdict);
        Ok(())
    }
}
