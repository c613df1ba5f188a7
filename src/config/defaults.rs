use std::path::PathBuf;

use super::constants::*;
use super::types::{AuditSettings, PipelineSettings};

pub fn default_audit_path() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(CONFIG_DIR).join(AUDIT_LOG_FILE),
        None => PathBuf::from(AUDIT_LOG_FILE),
    }
}

impl Default for AuditSettings {
    fn default() -> Self {
        Self {
            path: default_audit_path(),
        }
    }
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
