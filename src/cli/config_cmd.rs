use anyhow::Result;
use colored::*;

use crate::config::Config;

use super::args::ConfigArgs;

pub(crate) fn handle_config(args: ConfigArgs, config: &Config) -> Result<()> {
    if args.timeout.is_none() && args.audit_path.is_none() {
        show_config(config)?;
        return Ok(());
    }

    let mut updated = config.clone();
    if let Some(timeout_secs) = args.timeout {
        updated.pipeline.timeout_secs = timeout_secs;
    }
    if let Some(path) = args.audit_path {
        updated.audit.path = path;
    }

    updated.validate()?;
    updated.save()?;
    println!(
        "{} {}",
        "Configuration saved to".green(),
        Config::config_path()?.display()
    );
    Ok(())
}

fn show_config(config: &Config) -> Result<()> {
    println!("{}", "Current configuration".bold());
    println!("  config file:  {}", Config::config_path()?.display());
    println!("  audit path:   {}", config.audit.path.display());
    println!("  timeout:      {}s", config.pipeline.timeout_secs);
    Ok(())
}
