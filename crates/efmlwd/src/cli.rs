//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

/// efmlwd - update checks and configuration for the WebDav add-on
#[derive(Parser, Debug)]
#[command(name = "efmlwd")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show version information
    Version(VersionArgs),

    /// Check the release feed for a newer version
    Check(CheckArgs),

    /// Configuration presets
    #[command(subcommand)]
    Preset(PresetCommands),

    /// Registration with the parent plugin
    #[command(subcommand)]
    Addon(AddonCommands),

    /// Runtime configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

// Version command
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// Check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Installed version to compare against (defaults to the configured version)
    #[arg(long)]
    pub current_version: Option<String>,

    /// Update state file (defaults to ~/.efmlwd/update-state.json)
    #[arg(long)]
    pub state: Option<Utf8PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// Preset commands
#[derive(Subcommand, Debug)]
pub enum PresetCommands {
    /// Show the WebDav-only preset
    Show,

    /// Apply the WebDav-only preset
    Apply(PresetApplyArgs),
}

#[derive(Args, Debug)]
pub struct PresetApplyArgs {
    /// Option store file (defaults to ~/.efmlwd/options.json)
    #[arg(long)]
    pub options: Option<Utf8PathBuf>,

    /// Sibling service names (defaults to the configured services)
    #[arg(long = "service", value_name = "NAME")]
    pub services: Vec<String>,
}

// Addon commands
#[derive(Subcommand, Debug)]
pub enum AddonCommands {
    /// Show registration and whether the parent plugin is active
    Status(AddonStatusArgs),
}

#[derive(Args, Debug)]
pub struct AddonStatusArgs {
    /// Site option store file (defaults to ~/.efmlwd/options.json)
    #[arg(long)]
    pub options: Option<Utf8PathBuf>,

    /// Network option store file, for multisite installs
    #[arg(long)]
    pub network_options: Option<Utf8PathBuf>,
}

// Config commands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show resolved configuration
    Show(ConfigShowArgs),
}

#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check() {
        let cli = Cli::try_parse_from([
            "efmlwd",
            "-vv",
            "check",
            "--current-version",
            "2.0.0",
            "--state",
            "/tmp/state.json",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        let Commands::Check(args) = cli.command else {
            panic!("expected check");
        };
        assert_eq!(args.current_version.as_deref(), Some("2.0.0"));
        assert_eq!(args.state.as_deref().map(|p| p.as_str()), Some("/tmp/state.json"));
        assert!(args.json);
    }

    #[test]
    fn test_parse_preset_apply_services() {
        let cli = Cli::try_parse_from([
            "efmlwd", "preset", "apply", "--service", "local", "--service", "ftp",
        ])
        .unwrap();

        let Commands::Preset(PresetCommands::Apply(args)) = cli.command else {
            panic!("expected preset apply");
        };
        assert_eq!(args.services, vec!["local", "ftp"]);
        assert!(args.options.is_none());
    }

    #[test]
    fn test_parse_addon_status() {
        let cli = Cli::try_parse_from([
            "efmlwd",
            "--quiet",
            "addon",
            "status",
            "--network-options",
            "net.json",
        ])
        .unwrap();

        assert!(cli.quiet);
        let Commands::Addon(AddonCommands::Status(args)) = cli.command else {
            panic!("expected addon status");
        };
        assert_eq!(args.network_options.as_deref().map(|p| p.as_str()), Some("net.json"));
    }

    #[test]
    fn test_unknown_command_is_rejected() {
        assert!(Cli::try_parse_from(["efmlwd", "upgrade"]).is_err());
    }
}
