//! Registration of the add-on with its parent plugin
//!
//! The parent plugin asks each add-on to extend a few lists at startup. The
//! add-on answers with the lists it was given plus its own entries.

use efmlwd_core::RuntimeConfig;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::options::OptionStore;

/// Identifier of the WebDav service class in the parent plugin's service list
pub const SERVICE_ID: &str = "ExternalFilesFromWebDav\\WebDav";

/// Identifier of the WebDav-only preset in the parent plugin's preset list
pub const PRESET_ID: &str = "\\ExternalFilesFromWebDav\\Plugin\\Configuration";

/// Key of this add-on in the parent plugin's list of promoted add-ons
pub const PROMOTION_KEY: &str = "external-files-from-webdav";

/// Option listing the plugins active on the current site
pub const ACTIVE_PLUGINS_OPTION: &str = "active_plugins";

/// Network option mapping network-activated plugins to activation time
pub const SITEWIDE_PLUGINS_OPTION: &str = "active_sitewide_plugins";

/// The add-on as its parent plugin sees it
#[derive(Debug, Clone)]
pub struct Addon {
    parent_plugin: String,
}

impl Addon {
    pub fn new(parent_plugin: impl Into<String>) -> Self {
        Self {
            parent_plugin: parent_plugin.into(),
        }
    }

    pub fn from_config(config: &RuntimeConfig) -> Self {
        Self::new(config.plugin.parent_plugin.clone())
    }

    /// Basename of the parent plugin
    pub fn parent_plugin(&self) -> &str {
        &self.parent_plugin
    }

    /// Add the WebDav service to the supported services
    pub fn extend_services(&self, mut services: Vec<String>) -> Vec<String> {
        services.push(SERVICE_ID.to_string());
        services
    }

    /// Drop this add-on from the promoted add-ons; it is installed already
    pub fn remove_service_plugin<V>(
        &self,
        mut plugins: BTreeMap<String, V>,
    ) -> BTreeMap<String, V> {
        plugins.remove(PROMOTION_KEY);
        plugins
    }

    /// Add the WebDav-only preset to the available configurations
    pub fn extend_configurations(&self, mut configurations: Vec<String>) -> Vec<String> {
        configurations.push(PRESET_ID.to_string());
        configurations
    }

    /// Whether the parent plugin is active on the site or, given a network
    /// store, across the network
    pub fn is_parent_plugin_active(
        &self,
        site: &dyn OptionStore,
        network: Option<&dyn OptionStore>,
    ) -> bool {
        let active_on_site = match site.get(ACTIVE_PLUGINS_OPTION) {
            Some(Value::Array(plugins)) => plugins
                .iter()
                .any(|p| p.as_str() == Some(self.parent_plugin.as_str())),
            Some(Value::Object(plugins)) => plugins
                .values()
                .any(|p| p.as_str() == Some(self.parent_plugin.as_str())),
            Some(Value::String(plugin)) => plugin == self.parent_plugin,
            _ => false,
        };

        if active_on_site {
            return true;
        }

        let Some(network) = network else {
            return false;
        };

        match network.get(SITEWIDE_PLUGINS_OPTION) {
            Some(Value::Object(plugins)) => plugins.contains_key(&self.parent_plugin),
            _ => false,
        }
    }
}

impl Default for Addon {
    fn default() -> Self {
        Self::from_config(&RuntimeConfig::default())
    }
}
