//! Failure kinds of an update check
//!
//! None of these reach the host as an error. They are kept distinct so the
//! caller can log or display why a check left the update state untouched.

use thiserror::Error;

/// Why a release could not be turned into an update decision
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// The request never produced a response (DNS, TLS, timeout, ...)
    #[error("Release feed request failed: {0}")]
    Transport(String),

    /// The feed answered with something other than 200
    #[error("Release feed returned HTTP {0}")]
    NonSuccessStatus(u16),

    /// The body was not a release object
    #[error("Release feed body could not be parsed: {0}")]
    UnparsableBody(String),

    /// The release carries no assets at all
    #[error("Release {tag} has no assets")]
    NoAssets { tag: String },

    /// A newer release exists but none of its assets is a ZIP package
    #[error("Release {tag} has no application/zip asset")]
    NoMatchingAsset { tag: String },
}

impl CheckError {
    /// Whether the failure came from the network rather than the release itself
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::NonSuccessStatus(_))
    }
}

impl From<reqwest::Error> for CheckError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
