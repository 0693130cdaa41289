//! Common test infrastructure for efmlwd-services tests

#![allow(dead_code)]

use camino::Utf8PathBuf;
use tempfile::TempDir;

pub const WEBDAV_ROLES_OPTION: &str = "eml_service_webdav_allowed_roles";
pub const HINTS_OPTION: &str = "eml_disable_plugin_hints";
pub const PARENT_PLUGIN: &str =
    "external-files-in-media-library/external-files-in-media-library.php";

/// Sibling services as the parent plugin registers them
pub fn sibling_names() -> Vec<String> {
    ["local", "ftp", "dropbox", "google-drive", "aws-s3", "youtube"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Path of an options file inside a fresh temp dir
pub fn options_path(dir: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(dir.path().join("options.json")).expect("temp path is UTF-8")
}
