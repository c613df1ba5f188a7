use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub audit: AuditSettings,
    pub pipeline: PipelineSettings,
}

#[derive(Debug, Clone)]
pub struct AuditSettings {
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct PipelineSettings {
    pub timeout_secs: u64,
}

// File configuration types
#[derive(Debug, Deserialize)]
pub(super) struct FileConfig {
    #[serde(default)]
    pub audit: Option<FileAuditSettings>,
    #[serde(default)]
    pub pipeline: Option<FilePipelineSettings>,
}

#[derive(Debug, Deserialize)]
pub(super) struct FileAuditSettings {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
pub(super) struct FilePipelineSettings {
    pub timeout_secs: Option<u64>,
}

// Serialization helpers
#[derive(Serialize)]
pub(super) struct PersistedConfig<'a> {
    pub audit: PersistedAudit<'a>,
    pub pipeline: PersistedPipeline,
}

#[derive(Serialize)]
pub(super) struct PersistedAudit<'a> {
    pub path: &'a std::path::Path,
}

#[derive(Serialize)]
pub(super) struct PersistedPipeline {
    pub timeout_secs: u64,
}

impl<'a> From<&'a Config> for PersistedConfig<'a> {
    fn from(config: &'a Config) -> Self {
        PersistedConfig {
            audit: PersistedAudit {
                path: &config.audit.path,
            },
            pipeline: PersistedPipeline {
                timeout_secs: config.pipeline.timeout_secs,
            },
        }
    }
}
