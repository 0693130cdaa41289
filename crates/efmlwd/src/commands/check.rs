//! Check command
//!
//! Runs one update check against the configured release feed and records
//! the outcome in the update state file. The file is only rewritten when
//! the check produced a descriptor.

use anyhow::{Context, Result};
use chrono::Utc;
use efmlwd_core::types::PluginConfig;
use efmlwd_update::{StateFile, Unchanged, UpdateChecker, UpdateResult, UpdateSource};
use serde_json::json;

use crate::cli::CheckArgs;
use crate::output;

use super::load_config;

pub async fn run(args: CheckArgs) -> Result<()> {
    let (loader, mut config) = load_config()?;

    if let Some(version) = args.current_version {
        config.plugin.version = version;
        config
            .validate()
            .context("Invalid --current-version")?;
    }

    let state_file = StateFile::new(args.state.unwrap_or_else(|| loader.state_file(&config)));
    let checker = UpdateChecker::from_config(&config).context("Failed to create release feed")?;

    let spinner = (!args.json).then(|| output::spinner("Checking for updates..."));
    let outcome = check_and_record(&checker, checker.installed_version(), &state_file).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let CheckOutcome {
        result,
        state_written: changed,
    } = outcome?;

    if args.json {
        let report = json!({
            "outcome": outcome_label(&result),
            "reason": reason(&result),
            "installed_version": checker.installed_version(),
            "descriptor": result.descriptor(),
            "state_file": state_file.path().as_str(),
            "state_written": changed,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_result(&result, &config.plugin);
    if changed {
        output::kv("State", state_file.path().as_str());
    }
    Ok(())
}

/// What one recorded check did
#[derive(Debug)]
pub(crate) struct CheckOutcome {
    pub result: UpdateResult,
    pub state_written: bool,
}

/// Run one check against the state on disk
///
/// The file is rewritten only when the check produced a descriptor; any
/// other outcome leaves it untouched, including when it does not exist.
pub(crate) async fn check_and_record<S>(
    source: &S,
    current_version: &str,
    state_file: &StateFile,
) -> Result<CheckOutcome>
where
    S: UpdateSource + ?Sized,
{
    let mut state = state_file
        .load()
        .with_context(|| format!("Failed to read update state {}", state_file.path()))?;

    let result = source.check(current_version, &state).await;

    let state_written = result.apply(&mut state, source.plugin_id());
    if state_written {
        state.touch(Utc::now().timestamp());
        state_file
            .save(&state)
            .with_context(|| format!("Failed to write update state {}", state_file.path()))?;
    }

    Ok(CheckOutcome {
        result,
        state_written,
    })
}

fn print_result(result: &UpdateResult, plugin: &PluginConfig) {
    match result {
        UpdateResult::Available(descriptor) => {
            output::success(&format!(
                "Update available: {} -> {}",
                plugin.version, descriptor.new_version
            ));
            output::kv("Package", &descriptor.package);
            output::kv("Tested up to", &descriptor.tested);
        }
        UpdateResult::UpToDate(_) => {
            output::success(&format!("Already on the latest version ({})", plugin.version));
        }
        UpdateResult::Unchanged(Unchanged::Failed(err)) => {
            output::warning(&format!("No update recorded: {}", err));
        }
        UpdateResult::Unchanged(reason) => {
            output::info(&format!("Check skipped: {}", reason));
        }
    }
}

/// Stable machine-readable name of an outcome
fn outcome_label(result: &UpdateResult) -> &'static str {
    match result {
        UpdateResult::Available(_) => "available",
        UpdateResult::UpToDate(_) => "up-to-date",
        UpdateResult::Unchanged(_) => "unchanged",
    }
}

fn reason(result: &UpdateResult) -> Option<String> {
    match result {
        UpdateResult::Unchanged(reason) => Some(reason.to_string()),
        _ => None,
    }
}
