//! Config commands

use anyhow::Result;

use crate::cli::{ConfigCommands, ConfigShowArgs};

use super::load_config;

pub fn run(cmd: ConfigCommands) -> Result<()> {
    match cmd {
        ConfigCommands::Show(args) => show(args),
    }
}

fn show(args: ConfigShowArgs) -> Result<()> {
    let (_, config) = load_config()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        println!("{}", serde_yaml_ng::to_string(&config)?);
    }

    Ok(())
}
