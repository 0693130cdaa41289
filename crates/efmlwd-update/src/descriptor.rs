//! Update descriptors read by the host's plugin-update screen

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One plugin entry of the host's update cache
///
/// The same shape is used for "update available" (stored under
/// `response`) and "already current" (stored under `no_update`); the
/// latter has empty `package`, `url` and `icons`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateDescriptor {
    /// Plugin basename
    #[serde(default)]
    pub id: String,

    /// Plugin slug (the repository name)
    #[serde(default)]
    pub slug: String,

    /// Plugin basename, duplicated as the host expects
    #[serde(default)]
    pub plugin: String,

    /// Version offered by this entry
    #[serde(default)]
    pub new_version: String,

    /// Plugin homepage
    #[serde(default)]
    pub url: String,

    /// Download URL of the ZIP package
    #[serde(default)]
    pub package: String,

    /// Icons keyed by size ("default", "1x", ...)
    #[serde(default)]
    pub icons: BTreeMap<String, String>,

    /// Banners keyed by size
    #[serde(default)]
    pub banners: BTreeMap<String, String>,

    /// Right-to-left banners keyed by size
    #[serde(default)]
    pub banners_rtl: BTreeMap<String, String>,

    /// Host version the release is tested up to
    #[serde(default)]
    pub tested: String,

    /// Minimum PHP version of the host
    #[serde(default)]
    pub requires_php: String,

    /// Compatibility details, always an object
    #[serde(default)]
    pub compatibility: serde_json::Map<String, serde_json::Value>,
}

impl UpdateDescriptor {
    /// Entry announcing a newer packaged release
    pub fn available(
        plugin_id: &str,
        slug: &str,
        new_version: &str,
        package_url: &str,
        icon_url: &str,
        tested: &str,
    ) -> Self {
        let mut icons = BTreeMap::new();
        icons.insert("default".to_string(), icon_url.to_string());

        Self {
            id: plugin_id.to_string(),
            slug: slug.to_string(),
            plugin: plugin_id.to_string(),
            new_version: new_version.to_string(),
            package: package_url.to_string(),
            icons,
            tested: tested.to_string(),
            ..Default::default()
        }
    }

    /// Entry stating that the installed version is current
    pub fn up_to_date(plugin_id: &str, slug: &str, current_version: &str) -> Self {
        Self {
            id: plugin_id.to_string(),
            slug: slug.to_string(),
            plugin: plugin_id.to_string(),
            new_version: current_version.to_string(),
            ..Default::default()
        }
    }

    /// Whether this entry points at a downloadable package
    pub fn has_package(&self) -> bool {
        !self.package.is_empty()
    }
}
