//! Build metadata reported by `efmlwd version`

use serde::{Deserialize, Serialize};

/// Version and build provenance of this binary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// Repository the update checker queries by default
    pub release_feed: String,
}

impl VersionInfo {
    /// Metadata of the running build
    pub fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            commit: option_env!("GIT_SHA").map(String::from),
            build_date: option_env!("BUILD_DATE").map(String::from),
            target: option_env!("TARGET").map(String::from),
            release_feed: env!("CARGO_PKG_REPOSITORY").to_string(),
        }
    }

    /// One-line summary, e.g. `efmlwd 1.0.0 (abc1234, x86_64-unknown-linux-gnu)`
    pub fn display(&self) -> String {
        let details: Vec<&str> = [self.commit.as_deref(), self.target.as_deref()]
            .into_iter()
            .flatten()
            .collect();

        if details.is_empty() {
            format!("efmlwd {}", self.version)
        } else {
            format!("efmlwd {} ({})", self.version, details.join(", "))
        }
    }
}

impl std::fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}
