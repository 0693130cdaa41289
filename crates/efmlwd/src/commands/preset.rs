//! Preset commands

use anyhow::{Context, Result};
use efmlwd_services::{
    services_from_config, ConfigurationPreset, JsonFileOptionStore, WebDavOnlyPreset,
};

use crate::cli::{PresetApplyArgs, PresetCommands};
use crate::output;

use super::load_config;

pub fn run(cmd: PresetCommands) -> Result<()> {
    match cmd {
        PresetCommands::Show => show(),
        PresetCommands::Apply(args) => apply(args),
    }
}

fn show() -> Result<()> {
    let (_, config) = load_config()?;
    let preset = WebDavOnlyPreset::new(config.services);

    output::header(preset.title());
    output::kv("Name", preset.name());
    for hint in preset.dialog_hints() {
        output::info(&hint);
    }

    Ok(())
}

fn apply(args: PresetApplyArgs) -> Result<()> {
    let (loader, config) = load_config()?;

    let names = if args.services.is_empty() {
        config.services.known.clone()
    } else {
        args.services
    };
    let services = services_from_config(&config.services, &names);

    let path = args.options.unwrap_or_else(|| loader.options_file(&config));
    let mut store = JsonFileOptionStore::open(path.clone())
        .with_context(|| format!("Failed to open option store {}", path))?;

    let preset = WebDavOnlyPreset::new(config.services);
    let report = preset
        .run(&services, &mut store)
        .with_context(|| format!("Failed to apply preset {}", preset.name()))?;

    output::success(&format!("Applied \"{}\"", preset.title()));
    output::kv("Enabled", &report.enabled.join(", "));
    output::kv("Disabled", &report.disabled.join(", "));
    if !report.skipped.is_empty() {
        output::warning(&format!(
            "Skipped services without a name: {}",
            report.skipped.join(", ")
        ));
    }
    output::kv("Options", path.as_str());

    Ok(())
}
