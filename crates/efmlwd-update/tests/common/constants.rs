//! Shared constants for test infrastructure

// Plugin identity
pub const PLUGIN_ID: &str = "external-files-from-webdav/external-files-from-webdav.php";
pub const SLUG: &str = "external-files-from-webdav";
pub const REPO_OWNER: &str = "threadi";
pub const LATEST_RELEASE_PATH: &str = "/repos/threadi/external-files-from-webdav/releases/latest";
pub const ASSET_BASE_URL: &str = "https://example.com/wp-content/plugins/external-files-from-webdav";
pub const ICON_URL: &str =
    "https://example.com/wp-content/plugins/external-files-from-webdav/gfx/logo.png";

// Version constants
pub const VERSION_2_0_0: &str = "2.0.0";
pub const VERSION_2_1_0: &str = "2.1.0";
pub const VERSION_2_3_1: &str = "2.3.1";
pub const VERSION_3_0_0: &str = "3.0.0";

// Tag constants
pub const TAG_V2_1_0: &str = "v2.1.0";
pub const TAG_V2_3_1_BETA: &str = "v2.3.1-beta";

// Content types and download URLs
pub const CT_ZIP: &str = "application/zip";
pub const CT_PDF: &str = "application/pdf";
pub const CT_TEXT: &str = "text/plain";
pub const PACKAGE_URL: &str = "https://github.com/threadi/external-files-from-webdav/releases/download/v2.1.0/external-files-from-webdav.zip";
pub const SECOND_PACKAGE_URL: &str = "https://example.com/second.zip";
pub const DOCS_URL: &str = "https://example.com/docs.pdf";
