use anyhow::{Result, anyhow};

use super::types::Config;

pub fn validate(config: &Config) -> Result<()> {
    if config.pipeline.timeout_secs == 0 {
        return Err(anyhow!(
            "Pipeline timeout must be at least one second. Set STAGEHAND_TIMEOUT_SECS or fix {}",
            Config::config_path()?.display()
        ));
    }

    if config.audit.path.as_os_str().is_empty() {
        return Err(anyhow!("Audit log path cannot be empty"));
    }

    Ok(())
}
