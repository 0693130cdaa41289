//! Addon commands

use anyhow::{Context, Result};
use efmlwd_services::{Addon, JsonFileOptionStore, OptionStore};

use crate::cli::{AddonCommands, AddonStatusArgs};
use crate::output;

use super::load_config;

pub fn run(cmd: AddonCommands) -> Result<()> {
    match cmd {
        AddonCommands::Status(args) => status(args),
    }
}

fn status(args: AddonStatusArgs) -> Result<()> {
    let (loader, config) = load_config()?;
    let addon = Addon::from_config(&config);

    let site_path = args.options.unwrap_or_else(|| loader.options_file(&config));
    let site = JsonFileOptionStore::open(site_path.clone())
        .with_context(|| format!("Failed to open option store {}", site_path))?;

    let network = match args.network_options {
        Some(path) => Some(
            JsonFileOptionStore::open(path.clone())
                .with_context(|| format!("Failed to open network option store {}", path))?,
        ),
        None => None,
    };

    output::header("Registration");
    output::kv("Services", &addon.extend_services(Vec::new()).join(", "));
    output::kv(
        "Configurations",
        &addon.extend_configurations(Vec::new()).join(", "),
    );

    output::header("Parent plugin");
    output::kv("Plugin", addon.parent_plugin());

    let network_ref = network.as_ref().map(|n| n as &dyn OptionStore);
    if addon.is_parent_plugin_active(&site, network_ref) {
        output::success("Parent plugin is active");
    } else {
        output::warning("Parent plugin is not active");
    }

    Ok(())
}
