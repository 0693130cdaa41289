//! Update checking for the WebDav add-on
//!
//! Provides:
//! - Latest-release lookup against the GitHub releases API
//! - Tag normalisation and dotted-numeric version ordering
//! - Update descriptors in the shape the host's update screen reads
//! - The host's update cache object and a file-backed store for it
//! - The `UpdateSource` capability the host composes against

pub mod checker;
pub mod descriptor;
pub mod error;
pub mod releases;
pub mod state;
pub mod version;

pub use checker::{Unchanged, UpdateChecker, UpdateResult, UpdateSource};
pub use descriptor::UpdateDescriptor;
pub use error::CheckError;
pub use releases::{GitHubReleaseFeed, Release, ReleaseAsset, ReleaseFeed};
pub use state::{StateFile, UpdateState};
pub use version::{compare_versions, normalize_tag};

/// Content type of the packaged release asset
pub const ZIP_CONTENT_TYPE: &str = "application/zip";
