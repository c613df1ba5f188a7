use anyhow::{Context, Result};
use colored::*;

use crate::audit::{AuditEntry, AuditLog};
use crate::config::Config;

use super::args::HistoryArgs;

pub(crate) fn handle_history(args: HistoryArgs, config: &Config) -> Result<()> {
    let log = AuditLog::new(&config.audit.path);
    let mut entries = log.list_all();

    if let Some(limit) = args.limit {
        entries.truncate(limit);
    }

    if args.json {
        let json =
            serde_json::to_string_pretty(&entries).context("Failed to serialize audit entries")?;
        println!("{json}");
        return Ok(());
    }

    if entries.is_empty() {
        println!("No audited runs yet.");
        return Ok(());
    }

    for entry in &entries {
        render_entry(entry);
    }
    Ok(())
}

fn render_entry(entry: &AuditEntry) {
    let run = &entry.run;
    let status = match &run.error {
        Some(error) => format!("failed at {} ({})", error.stage, error.error_type)
            .red()
            .to_string(),
        None => "completed".green().to_string(),
    };

    let classification = run
        .router
        .as_ref()
        .map(|router| router.classification.to_string())
        .unwrap_or_else(|| "-".to_string());

    println!(
        "{}  {}  {}  {}",
        entry.saved_at.format("%Y-%m-%d %H:%M:%S"),
        run.request_id,
        classification.cyan(),
        status
    );
}
