use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use super::builder::ConfigBuilder;

pub fn apply_env_overrides(mut builder: ConfigBuilder) -> Result<ConfigBuilder> {
    if let Some(path) = env_string("STAGEHAND_AUDIT_PATH") {
        builder = builder.with_audit(|audit| audit.path = PathBuf::from(&path));
    }

    if let Some(raw) = env_string("STAGEHAND_TIMEOUT_SECS") {
        let timeout_secs: u64 = raw
            .parse()
            .with_context(|| format!("Failed to parse STAGEHAND_TIMEOUT_SECS value '{raw}'"))?;
        builder = builder.with_pipeline(|pipeline| pipeline.timeout_secs = timeout_secs);
    }

    Ok(builder)
}

fn env_string(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}
