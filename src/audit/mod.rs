use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::pipeline::PipelineRun;

/// One persisted audit record: a pipeline run plus the time it was saved.
///
/// `saved_at` is stamped server-side on append and is distinct from the
/// run's own `timestamp`, which marks when the pipeline started.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub saved_at: DateTime<Utc>,
    #[serde(flatten)]
    pub run: PipelineRun,
}

/// Append-only, newest-first store of pipeline runs backed by a JSON file.
///
/// The file is read-modify-written as a whole on every append, so all
/// access serializes through one mutex. Entries are never mutated or
/// deleted once written.
pub struct AuditLog {
    path: PathBuf,
    lock: Mutex<()>,
}

impl AuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Prepend a run to the store, stamping it with the current time.
    pub fn append(&self, run: &PipelineRun) -> Result<()> {
        let _guard = self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        let mut entries = read_entries(&self.path);
        entries.insert(
            0,
            AuditEntry {
                saved_at: Utc::now(),
                run: run.clone(),
            },
        );

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Unable to create audit log directory {}", parent.display())
            })?;
        }

        let json = serde_json::to_string_pretty(&entries)
            .context("Failed to serialize audit log entries")?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write audit log to {}", self.path.display()))?;
        Ok(())
    }

    /// Every stored entry, newest first. A missing or unreadable store
    /// reads as empty rather than failing.
    pub fn list_all(&self) -> Vec<AuditEntry> {
        let _guard = self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        read_entries(&self.path)
    }
}

fn read_entries(path: &Path) -> Vec<AuditEntry> {
    let Ok(contents) = fs::read_to_string(path) else {
        return Vec::new();
    };
    serde_json::from_str(&contents).unwrap_or_default()
}
