//! Configuration for the stagehand pipeline.
//!
//! Settings resolve in three layers: built-in defaults, then the JSON
//! config file, then environment variable overrides. The result is
//! validated before use.

mod builder;
mod constants;
mod defaults;
mod environment;
mod loader;
mod types;
mod validation;

pub use builder::ConfigBuilder;
pub use constants::DEFAULT_TIMEOUT_SECS;
pub use types::{AuditSettings, Config, PipelineSettings};

#[cfg(test)]
mod tests;
