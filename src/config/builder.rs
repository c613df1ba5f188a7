use anyhow::Result;

use super::types::{AuditSettings, Config, PipelineSettings};

#[derive(Debug)]
pub struct ConfigBuilder {
    pub(super) audit: AuditSettings,
    pub(super) pipeline: PipelineSettings,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            audit: AuditSettings::default(),
            pipeline: PipelineSettings::default(),
        }
    }

    pub fn with_audit<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut AuditSettings),
    {
        update(&mut self.audit);
        self
    }

    pub fn with_pipeline<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut PipelineSettings),
    {
        update(&mut self.pipeline);
        self
    }

    pub fn build(self) -> Result<Config> {
        Ok(Config {
            audit: self.audit,
            pipeline: self.pipeline,
        })
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
