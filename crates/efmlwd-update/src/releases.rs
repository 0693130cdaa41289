//! GitHub releases feed

use async_trait::async_trait;
use efmlwd_core::types::{GitHubConfig, NetworkConfig};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::redirect::Policy;
use reqwest::StatusCode;
use serde::{Deserialize, Deserializer};
use std::time::Duration;
use tracing::debug;

use crate::error::CheckError;

/// Release information
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Release {
    /// Release tag (e.g., "v2.1.0"), may carry arbitrary non-numeric characters
    #[serde(default)]
    pub tag_name: Option<String>,

    /// Release name
    #[serde(default)]
    pub name: Option<String>,

    /// Whether this is a prerelease
    #[serde(default)]
    pub prerelease: bool,

    /// Release assets
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,

    /// Published date
    #[serde(default)]
    pub published_at: Option<String>,
}

/// Release asset
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReleaseAsset {
    /// Asset name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// MIME type reported by GitHub
    #[serde(default, deserialize_with = "null_as_default")]
    pub content_type: String,

    /// Download URL
    #[serde(default, deserialize_with = "null_as_default")]
    pub browser_download_url: String,

    /// Asset size in bytes
    #[serde(default, deserialize_with = "null_as_default")]
    pub size: u64,
}

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Release {
    /// Decode a feed body
    ///
    /// Anything but a JSON object is rejected. Missing `assets` decode as
    /// an empty list so the caller can tell "no assets" from "garbage".
    pub fn from_json(body: &str) -> Result<Self, CheckError> {
        let value: serde_json::Value =
            serde_json::from_str(body).map_err(|e| CheckError::UnparsableBody(e.to_string()))?;

        if !value.is_object() {
            return Err(CheckError::UnparsableBody(
                "expected a JSON object".to_string(),
            ));
        }

        serde_json::from_value(value).map_err(|e| CheckError::UnparsableBody(e.to_string()))
    }

    /// Tag name, or an empty string when the release has none
    pub fn tag(&self) -> &str {
        self.tag_name.as_deref().unwrap_or_default()
    }

    /// First asset with exactly the given content type
    pub fn first_asset_of_type(&self, content_type: &str) -> Option<&ReleaseAsset> {
        self.assets.iter().find(|a| a.content_type == content_type)
    }
}

/// Source of the latest packaged release
#[async_trait]
pub trait ReleaseFeed: Send + Sync {
    /// Fetch the latest release
    async fn latest(&self) -> Result<Release, CheckError>;
}

/// Latest-release endpoint of a GitHub repository
pub struct GitHubReleaseFeed {
    /// HTTP client
    client: reqwest::Client,

    /// Fully templated latest-release URL
    url: String,
}

impl GitHubReleaseFeed {
    /// Create a feed for the configured repository
    pub fn new(github: &GitHubConfig, network: &NetworkConfig) -> Result<Self, CheckError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .user_agent(&network.user_agent)
            .default_headers(headers)
            .timeout(Duration::from_secs(network.http_timeout_secs))
            .redirect(Policy::none())
            .build()?;

        Ok(Self {
            client,
            url: github.latest_release_url(),
        })
    }

    /// The URL this feed queries
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ReleaseFeed for GitHubReleaseFeed {
    async fn latest(&self) -> Result<Release, CheckError> {
        debug!("Fetching latest release from: {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(CheckError::NonSuccessStatus(status.as_u16()));
        }

        let body = response.text().await?;
        Release::from_json(&body)
    }
}
