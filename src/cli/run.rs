use anyhow::{Context, Result};
use colored::*;

use crate::config::Config;
use crate::pipeline::{PipelineOrchestrator, PipelineRequest, PipelineRun};

use super::args::RunArgs;

pub(crate) async fn handle_run(args: RunArgs, config: &Config) -> Result<()> {
    let input = args.input.join(" ");

    let orchestrator = PipelineOrchestrator::from_config(config);
    let run = orchestrator.run(PipelineRequest::new(input)).await;

    if args.json {
        let json =
            serde_json::to_string_pretty(&run).context("Failed to serialize pipeline run")?;
        println!("{json}");
        return Ok(());
    }

    render_run(&run);
    Ok(())
}

fn render_run(run: &PipelineRun) {
    println!("{} {}", "Request".bold(), run.request_id);

    if let Some(router) = &run.router {
        println!(
            "  {} {} (confidence: {})",
            "router:".cyan(),
            router.classification,
            router.confidence
        );
    }

    if let Some(planner) = &run.planner {
        println!("  {} {}", "goal:".cyan(), planner.goal);
        for step in &planner.steps {
            let marker = if step.requires_clarification {
                "?".yellow()
            } else {
                "-".normal()
            };
            println!("    {} {}. {}", marker, step.step_number, step.description);
        }
        for question in &planner.blocking_questions {
            println!("    {} {}", "blocked:".yellow(), question);
        }
    }

    if let Some(executor) = &run.executor {
        println!(
            "  {} {} ({})",
            "executor:".cyan(),
            executor.status,
            executor.execution_type
        );
    }

    if let Some(validator) = &run.validator {
        if validator.valid {
            println!("  {} {}", "validator:".cyan(), "accepted".green());
        } else {
            println!("  {} {}", "validator:".cyan(), "flagged".red().bold());
            for issue in &validator.issues {
                println!("    {} {}", "!".red(), issue);
            }
        }
    }

    if let Some(error) = &run.error {
        println!(
            "  {} [{}] {} ({})",
            "error:".red().bold(),
            error.stage,
            error.message,
            error.error_type
        );
    }

    let summary = if run.succeeded() {
        "Pipeline completed.".green()
    } else {
        "Pipeline terminated early.".red()
    };
    println!("{summary}");
}
