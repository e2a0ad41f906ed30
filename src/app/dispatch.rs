use crate::cli::{Cli, Commands, WellnessArgs};
use crate::config::Config;
use crate::core::gateway::BackendGateway;
use crate::core::models::samples::{
    sample_assignments, sample_preferences, sample_wellness_input,
};
use crate::core::models::{Assignment, WellnessInput, load_assignments};
use crate::error::GatewayError;
use crate::ui::notify::{self, Notification};
use crate::ui::render;
use anyhow::{Context, Result, bail};
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;
use tracing::info;

use crate::app::status::render_status;

fn assignments_from(file: Option<&Path>) -> Result<Vec<Assignment>> {
    match file {
        Some(path) => load_assignments(path),
        None => Ok(sample_assignments()),
    }
}

/// Overlay CLI flags on the backend defaults; no flags means the demo input.
fn wellness_from(args: &WellnessArgs) -> WellnessInput {
    if args.is_empty() {
        return sample_wellness_input();
    }
    let defaults = WellnessInput::default();
    WellnessInput {
        mood: args.mood.clone().unwrap_or(defaults.mood),
        stress_level: args.stress.unwrap_or(defaults.stress_level),
        sleep_hours: args.sleep.unwrap_or(defaults.sleep_hours),
        energy_level: args.energy.unwrap_or(defaults.energy_level),
    }
}

fn notice(note: &Notification) {
    eprintln!("{note}");
}

fn emit<T: Serialize>(json: bool, payload: &T, view: impl FnOnce() -> String) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(payload).context("Failed to encode payload")?
        );
    } else {
        print!("{}", view());
    }
    Ok(())
}

/// Report a call's outcome; failures become a banner and a non-zero exit.
fn finish<T>(
    gateway: &BackendGateway,
    result: Result<T, GatewayError>,
    on_success: impl FnOnce(T) -> Result<()>,
) -> Result<ExitCode> {
    match result {
        Ok(value) => {
            on_success(value)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            notice(&notify::for_error(&e, gateway.base_url()));
            Ok(ExitCode::FAILURE)
        }
    }
}

pub async fn dispatch(cli: Cli, config: Config) -> Result<ExitCode> {
    let base_url = cli
        .base_url
        .clone()
        .unwrap_or_else(|| config.backend.base_url.clone());
    let gateway = BackendGateway::with_timeout(
        &base_url,
        config.backend.request_timeout_secs.map(Duration::from_secs),
    )?;
    let json = cli.json;
    info!(backend = gateway.base_url(), "dispatching command");

    match cli.command {
        Commands::Status => {
            println!("{}", render_status(&config, gateway.base_url()));
            Ok(ExitCode::SUCCESS)
        }

        Commands::Health => {
            let result = gateway.health_check().await;
            finish(&gateway, result, |health| {
                notice(&notify::connected(&health));
                emit(json, &health, || {
                    render::render_health(&health, gateway.base_url())
                })
            })
        }

        Commands::Analyze { file, id } => {
            let assignments = load_assignments(&file)?;
            let assignment = match id {
                Some(id) => assignments
                    .into_iter()
                    .find(|a| a.id == id)
                    .with_context(|| format!("No assignment with id {id:?} in {}", file.display()))?,
                None => match assignments.into_iter().next() {
                    Some(first) => first,
                    None => bail!("{} contains no assignments", file.display()),
                },
            };

            notice(&Notification::info(format!(
                "Analyzing {} with the assignment analyzer...",
                assignment.title
            )));
            let result = gateway.analyze_assignment(&assignment).await;
            finish(&gateway, result, |reply| {
                emit(json, &reply, || render::render_assignment_analysis(&reply))
            })
        }

        Commands::Workload { file } => {
            let assignments = assignments_from(file.as_deref())?;
            notice(&Notification::info("Analyzing assignments with AI agents..."));
            let result = gateway.analyze_workload(&assignments).await;
            finish(&gateway, result, |reply| {
                notice(&notify::workload_complete(&reply.data));
                emit(json, &reply, || render::render_workload(&reply.data))
            })
        }

        Commands::Schedule {
            file,
            default_preferences,
        } => {
            let assignments = assignments_from(file.as_deref())?;
            let preferences = (!default_preferences).then(sample_preferences);
            notice(&Notification::info("Creating optimized schedule with AI..."));
            let result = gateway
                .create_schedule(&assignments, preferences.as_ref())
                .await;
            finish(&gateway, result, |reply| {
                notice(&Notification::success("Schedule created successfully!"));
                emit(json, &reply, || render::render_schedule(&reply.data))
            })
        }

        Commands::Wellness { file, wellness } => {
            let assignments = assignments_from(file.as_deref())?;
            let preferences = sample_preferences();
            let input = wellness_from(&wellness);
            notice(&Notification::info("Running wellness check..."));
            let result = gateway
                .wellness_check(&assignments, Some(&preferences), Some(&input))
                .await;
            finish(&gateway, result, |reply| {
                emit(json, &reply, || render::render_wellness(&reply.data))
            })
        }

        Commands::Full { file, wellness } => {
            let assignments = assignments_from(file.as_deref())?;
            let preferences = sample_preferences();
            let input = wellness_from(&wellness);
            notice(&Notification::info("Running full multi-agent analysis..."));
            let result = gateway
                .full_analysis(&assignments, Some(&preferences), Some(&input))
                .await;
            finish(&gateway, result, |analysis| {
                notice(&notify::full_analysis_complete(&analysis.summary));
                for comm in analysis.actions_required() {
                    notice(&Notification::warning(format!(
                        "{} flagged {} for your attention",
                        comm.agent, comm.message_type
                    )));
                }
                emit(json, &analysis, || render::render_full_analysis(&analysis))
            })
        }

        Commands::Break { activity, minutes } => {
            let result = gateway.suggest_break(&activity, minutes).await;
            finish(&gateway, result, |reply| {
                emit(json, &reply, || render::render_break(&reply))
            })
        }
    }
}
