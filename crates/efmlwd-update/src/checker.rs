//! Update checker
//!
//! Decides, per check, whether the release feed offers a newer packaged
//! release than the installed version:
//! 1. Skip when development mode is on or an update is already pending
//! 2. Fetch the latest release (one request, no redirects, fixed timeout)
//! 3. Skip when the body is unusable or the release has no assets
//! 4. Normalise the tag and compare it with the installed version
//! 5. Newer: describe the first `application/zip` asset
//! 6. Not newer: describe the installed version as current
//!
//! No failure is surfaced as an error. Every short-circuit is reported as
//! [`UpdateResult::Unchanged`] with its reason, and leaves the update
//! state exactly as it was.

use async_trait::async_trait;
use efmlwd_core::types::PluginConfig;
use efmlwd_core::RuntimeConfig;
use tracing::{debug, info, warn};

use crate::descriptor::UpdateDescriptor;
use crate::error::CheckError;
use crate::releases::{GitHubReleaseFeed, Release, ReleaseFeed};
use crate::state::UpdateState;
use crate::version::{is_newer, normalize_tag};
use crate::ZIP_CONTENT_TYPE;

/// Why a check left the update state alone
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unchanged {
    /// Development mode is on; the feed was not contacted
    DevelopmentMode,

    /// The state already holds a pending update for this plugin
    AlreadyPending,

    /// The feed could not be used
    Failed(CheckError),
}

impl std::fmt::Display for Unchanged {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DevelopmentMode => write!(f, "development mode is enabled"),
            Self::AlreadyPending => write!(f, "an update is already pending"),
            Self::Failed(err) => write!(f, "{}", err),
        }
    }
}

/// Outcome of a single check
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateResult {
    /// A newer packaged release exists
    Available(UpdateDescriptor),

    /// The installed version is current
    UpToDate(UpdateDescriptor),

    /// Nothing to record
    Unchanged(Unchanged),
}

impl UpdateResult {
    /// Write the outcome into the host's update state
    ///
    /// Returns whether the state was modified.
    pub fn apply(&self, state: &mut UpdateState, plugin_id: &str) -> bool {
        match self {
            Self::Available(descriptor) => {
                state.set_available(plugin_id, descriptor);
                true
            }
            Self::UpToDate(descriptor) => {
                state.set_up_to_date(plugin_id, descriptor);
                true
            }
            Self::Unchanged(_) => false,
        }
    }

    /// The descriptor produced by the check, if any
    pub fn descriptor(&self) -> Option<&UpdateDescriptor> {
        match self {
            Self::Available(d) | Self::UpToDate(d) => Some(d),
            Self::Unchanged(_) => None,
        }
    }

    /// Whether the check left the state alone
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged(_))
    }
}

/// Capability the host composes against to learn about updates
#[async_trait]
pub trait UpdateSource: Send + Sync {
    /// Key of this plugin in the update state
    fn plugin_id(&self) -> &str;

    /// Version currently installed
    fn installed_version(&self) -> &str;

    /// Decide whether an update exists without touching the state
    async fn check(&self, current_version: &str, state: &UpdateState) -> UpdateResult;

    /// Check against the installed version and return the updated state
    async fn refresh(&self, mut state: UpdateState) -> UpdateState {
        let result = self.check(self.installed_version(), &state).await;
        result.apply(&mut state, self.plugin_id());
        state
    }
}

/// Update checker backed by a release feed
pub struct UpdateChecker<F = GitHubReleaseFeed> {
    /// Where releases come from
    feed: F,

    /// Installed plugin identity
    plugin: PluginConfig,

    /// Plugin slug reported in descriptors
    slug: String,
}

impl UpdateChecker<GitHubReleaseFeed> {
    /// Build a checker that queries the configured GitHub repository
    pub fn from_config(config: &RuntimeConfig) -> Result<Self, CheckError> {
        let feed = GitHubReleaseFeed::new(&config.github, &config.network)?;
        Ok(Self::new(
            feed,
            config.plugin.clone(),
            config.github.repo_name.clone(),
        ))
    }
}

impl<F: ReleaseFeed> UpdateChecker<F> {
    /// Create a checker over any release feed
    pub fn new(feed: F, plugin: PluginConfig, slug: impl Into<String>) -> Self {
        Self {
            feed,
            plugin,
            slug: slug.into(),
        }
    }

    /// The release feed in use
    pub fn feed(&self) -> &F {
        &self.feed
    }

    /// Turn a fetched release into a decision
    fn evaluate(&self, release: &Release, current_version: &str) -> UpdateResult {
        if release.assets.is_empty() {
            debug!("Release {} has no assets", release.tag());
            return UpdateResult::Unchanged(Unchanged::Failed(CheckError::NoAssets {
                tag: release.tag().to_string(),
            }));
        }

        let Some(tag) = release.tag_name.as_deref() else {
            return UpdateResult::Unchanged(Unchanged::Failed(CheckError::UnparsableBody(
                "release has no tag_name".to_string(),
            )));
        };

        let new_version = normalize_tag(tag);

        if !is_newer(&new_version, current_version) {
            debug!(
                "Already on latest version: {} (feed offers {})",
                current_version, new_version
            );
            return UpdateResult::UpToDate(UpdateDescriptor::up_to_date(
                &self.plugin.id,
                &self.slug,
                current_version,
            ));
        }

        match release.first_asset_of_type(ZIP_CONTENT_TYPE) {
            Some(asset) => {
                info!("Update available: {} -> {}", current_version, new_version);
                UpdateResult::Available(UpdateDescriptor::available(
                    &self.plugin.id,
                    &self.slug,
                    &new_version,
                    &asset.browser_download_url,
                    &self.plugin.icon_url(),
                    &self.plugin.tested,
                ))
            }
            None => {
                debug!("Release {} has no ZIP package", tag);
                UpdateResult::Unchanged(Unchanged::Failed(CheckError::NoMatchingAsset {
                    tag: tag.to_string(),
                }))
            }
        }
    }
}

#[async_trait]
impl<F: ReleaseFeed> UpdateSource for UpdateChecker<F> {
    fn plugin_id(&self) -> &str {
        &self.plugin.id
    }

    fn installed_version(&self) -> &str {
        &self.plugin.version
    }

    async fn check(&self, current_version: &str, state: &UpdateState) -> UpdateResult {
        if self.plugin.development_mode {
            debug!("Development mode enabled, skipping update check");
            return UpdateResult::Unchanged(Unchanged::DevelopmentMode);
        }

        if state.has_pending(&self.plugin.id) {
            debug!("Update for {} already pending", self.plugin.id);
            return UpdateResult::Unchanged(Unchanged::AlreadyPending);
        }

        let release = match self.feed.latest().await {
            Ok(release) => release,
            Err(err) => {
                if err.is_network() {
                    warn!("Update check failed: {}", err);
                } else {
                    debug!("Update check failed: {}", err);
                }
                return UpdateResult::Unchanged(Unchanged::Failed(err));
            }
        };

        self.evaluate(&release, current_version)
    }
}
