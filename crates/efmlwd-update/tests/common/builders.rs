//! Builder patterns for test data construction
//!
//! Release bodies are built as JSON values so they go over the wire exactly
//! as the releases API would send them.

use efmlwd_core::RuntimeConfig;
use serde_json::{json, Value};
use wiremock::MockServer;

use super::constants::*;

/// Builder for latest-release response bodies
#[derive(Debug, Clone)]
pub struct ReleaseBodyBuilder {
    tag_name: Option<String>,
    assets: Vec<Value>,
}

impl ReleaseBodyBuilder {
    /// Create a new builder tagged `v2.1.0` without assets
    pub fn new() -> Self {
        Self {
            tag_name: Some(TAG_V2_1_0.to_string()),
            assets: Vec::new(),
        }
    }

    /// Set the tag name
    pub fn tag(mut self, tag: &str) -> Self {
        self.tag_name = Some(tag.to_string());
        self
    }

    /// Drop the tag name
    pub fn without_tag(mut self) -> Self {
        self.tag_name = None;
        self
    }

    /// Add an asset
    pub fn asset(mut self, content_type: &str, url: &str) -> Self {
        let name = url.rsplit('/').next().unwrap_or(url).to_string();
        self.assets.push(json!({
            "name": name,
            "content_type": content_type,
            "browser_download_url": url,
            "size": 1024
        }));
        self
    }

    /// Add an asset whose fields are all null
    pub fn null_asset(mut self) -> Self {
        self.assets.push(json!({
            "name": null,
            "content_type": null,
            "browser_download_url": null,
            "size": null
        }));
        self
    }

    /// Add the standard ZIP package
    pub fn with_zip(self) -> Self {
        self.asset(CT_ZIP, PACKAGE_URL)
    }

    /// Build the JSON body
    pub fn build(self) -> Value {
        let mut body = json!({
            "name": "Release",
            "prerelease": false,
            "published_at": "2025-11-02T10:00:00Z",
            "assets": self.assets,
        });
        if let Some(tag) = self.tag_name {
            body["tag_name"] = Value::String(tag);
        }
        body
    }
}

impl Default for ReleaseBodyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Runtime configuration pointing the feed at a mock server
pub fn config_for(server: &MockServer, installed_version: &str) -> RuntimeConfig {
    let mut config = RuntimeConfig::default();
    config.github.api_url = server.uri();
    config.github.repo_owner = REPO_OWNER.to_string();
    config.github.repo_name = SLUG.to_string();
    config.network.http_timeout_secs = 5;
    config.plugin.id = PLUGIN_ID.to_string();
    config.plugin.version = installed_version.to_string();
    config.plugin.asset_base_url = ASSET_BASE_URL.to_string();
    config
}
