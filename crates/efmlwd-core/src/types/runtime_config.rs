//! Runtime configuration types for operational parameters
//!
//! These types define configuration that controls how the add-on talks to
//! the release feed, how it identifies itself to the host and which
//! services the configuration preset touches.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Complete runtime configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RuntimeConfig {
    /// Network and HTTP configuration
    #[serde(default)]
    pub network: NetworkConfig,

    /// GitHub repository settings
    #[serde(default)]
    pub github: GitHubConfig,

    /// Identity of the installed add-on
    #[serde(default)]
    pub plugin: PluginConfig,

    /// Service preset settings
    #[serde(default)]
    pub services: ServicesConfig,

    /// Local state locations
    #[serde(default)]
    pub storage: StorageConfig,
}

impl RuntimeConfig {
    /// Check the fields the update checker cannot work without
    pub fn validate(&self) -> Result<()> {
        if self.plugin.id.trim().is_empty() {
            return Err(Error::missing_field("plugin.id"));
        }
        if self.github.repo_owner.trim().is_empty() {
            return Err(Error::missing_field("github.repo-owner"));
        }
        if self.github.repo_name.trim().is_empty() {
            return Err(Error::missing_field("github.repo-name"));
        }

        let version = &self.plugin.version;
        let dotted_numeric = !version.is_empty()
            && version
                .split('.')
                .all(|segment| !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()));
        if !dotted_numeric {
            return Err(Error::invalid_version(version.clone()));
        }

        let base = &self.plugin.asset_base_url;
        if !(base.starts_with("https://") || base.starts_with("http://")) {
            return Err(Error::invalid_config(format!(
                "plugin.asset-base-url must be an absolute http(s) URL, got {:?}",
                base
            )));
        }

        Ok(())
    }
}

/// Network and HTTP configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NetworkConfig {
    /// HTTP timeout in seconds
    #[serde(default = "default_http_timeout")]
    pub http_timeout_secs: u64,

    /// User agent string for HTTP requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            http_timeout_secs: default_http_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_http_timeout() -> u64 {
    30
}
fn default_user_agent() -> String {
    format!(
        "efmlwd/{} ({}; {})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

/// GitHub repository configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GitHubConfig {
    /// Repository owner
    #[serde(default = "default_repo_owner")]
    pub repo_owner: String,

    /// Repository name, also used as the plugin slug
    #[serde(default = "default_repo_name")]
    pub repo_name: String,

    /// Base URL for GitHub API
    #[serde(default = "default_github_api_url")]
    pub api_url: String,
}

impl GitHubConfig {
    /// URL of the latest-release endpoint for the configured repository
    pub fn latest_release_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/releases/latest",
            self.api_url.trim_end_matches('/'),
            self.repo_owner,
            self.repo_name
        )
    }
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            repo_owner: default_repo_owner(),
            repo_name: default_repo_name(),
            api_url: default_github_api_url(),
        }
    }
}

fn default_repo_owner() -> String {
    "threadi".to_string()
}
fn default_repo_name() -> String {
    "external-files-from-webdav".to_string()
}
fn default_github_api_url() -> String {
    "https://api.github.com".to_string()
}

/// Identity of the installed add-on as the host platform knows it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PluginConfig {
    /// Plugin basename, the key of the host's update cache entries
    #[serde(default = "default_plugin_id")]
    pub id: String,

    /// Currently installed version
    #[serde(default = "default_plugin_version")]
    pub version: String,

    /// Skip update checks entirely while developing
    #[serde(default)]
    pub development_mode: bool,

    /// Host version the packaged releases are tested against
    #[serde(default = "default_tested")]
    pub tested: String,

    /// Base URL the icon path is resolved against (the parent plugin's directory)
    #[serde(default = "default_asset_base_url")]
    pub asset_base_url: String,

    /// Icon path relative to the asset base URL
    #[serde(default = "default_icon_path")]
    pub icon_path: String,

    /// Basename of the parent plugin this add-on extends
    #[serde(default = "default_parent_plugin")]
    pub parent_plugin: String,
}

impl PluginConfig {
    /// Icon URL advertised in update descriptors
    pub fn icon_url(&self) -> String {
        let path = self.icon_path.trim_start_matches('/');
        if self.asset_base_url.is_empty() {
            return path.to_string();
        }
        format!("{}/{}", self.asset_base_url.trim_end_matches('/'), path)
    }
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            id: default_plugin_id(),
            version: default_plugin_version(),
            development_mode: false,
            tested: default_tested(),
            asset_base_url: default_asset_base_url(),
            icon_path: default_icon_path(),
            parent_plugin: default_parent_plugin(),
        }
    }
}

fn default_plugin_id() -> String {
    "external-files-from-webdav/external-files-from-webdav.php".to_string()
}
fn default_plugin_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
fn default_tested() -> String {
    "6.9".to_string()
}
fn default_asset_base_url() -> String {
    "https://plugins.svn.wordpress.org/external-files-in-media-library/trunk".to_string()
}
fn default_icon_path() -> String {
    "gfx/logo.png".to_string()
}
fn default_parent_plugin() -> String {
    "external-files-in-media-library/external-files-in-media-library.php".to_string()
}

/// Settings for the service configuration preset
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ServicesConfig {
    /// Name of the service this add-on provides
    #[serde(default = "default_own_service")]
    pub own_service: String,

    /// Roles allowed to use the own service after the preset runs
    #[serde(default = "default_roles")]
    pub default_roles: Vec<String>,

    /// Sibling services registered with the host
    #[serde(default)]
    pub known: Vec<String>,

    /// Prefix of the per-service allowed-roles option
    #[serde(default = "default_option_prefix")]
    pub option_prefix: String,

    /// Option that disables hints for other plugins
    #[serde(default = "default_hints_option")]
    pub hints_option: String,
}

impl ServicesConfig {
    /// Option key holding the allowed roles of a service
    pub fn allowed_roles_option(&self, service: &str) -> String {
        format!("{}{}_allowed_roles", self.option_prefix, service)
    }
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            own_service: default_own_service(),
            default_roles: default_roles(),
            known: Vec::new(),
            option_prefix: default_option_prefix(),
            hints_option: default_hints_option(),
        }
    }
}

fn default_own_service() -> String {
    "webdav".to_string()
}
fn default_roles() -> Vec<String> {
    vec!["administrator".to_string(), "editor".to_string()]
}
fn default_option_prefix() -> String {
    "eml_service_".to_string()
}
fn default_hints_option() -> String {
    "eml_disable_plugin_hints".to_string()
}

/// Local state file locations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct StorageConfig {
    /// Update cache file (defaults to ~/.efmlwd/update-state.json)
    #[serde(default)]
    pub state_file: Option<String>,

    /// Option store file (defaults to ~/.efmlwd/options.json)
    #[serde(default)]
    pub options_file: Option<String>,
}
