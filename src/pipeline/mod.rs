pub mod adapters;
pub mod context;
pub mod error;
pub mod orchestrator;
pub mod stages;
pub mod types;

#[allow(unused_imports)]
pub use adapters::{
    ClassifyAdapter, ExecuteAdapter, KeywordRouterAdapter, PlanAdapter, SafetyValidationAdapter,
    SimulatedExecutionAdapter, StaticPlannerAdapter, ValidateAdapter,
};
#[allow(unused_imports)]
pub use context::{PipelineContext, PipelineEvent, PipelineRequest, PipelineRun, RunError};
#[allow(unused_imports)]
pub use error::StageError;
#[allow(unused_imports)]
pub use orchestrator::{PipelineBuilder, PipelineOrchestrator};
#[allow(unused_imports)]
pub use stages::{ExecutionStage, PipelineStage, PlanningStage, RouterStage, ValidationStage};
#[allow(unused_imports)]
pub use types::StageKind;
