//! Version command

use crate::cli::VersionArgs;
use crate::version::VersionInfo;
use anyhow::Result;

pub fn run(args: VersionArgs) -> Result<()> {
    let info = VersionInfo::current();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("{}", info.display());

        if let Some(commit) = &info.commit {
            println!("Commit:     {}", commit);
        }
        if let Some(date) = &info.build_date {
            println!("Build date: {}", date);
        }
        println!("Releases:   {}", info.release_feed);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_info_current_is_valid_semver() {
        let info = VersionInfo::current();
        let parsed = semver::Version::parse(&info.version);
        assert!(
            parsed.is_ok(),
            "version should be valid semver, got: {}",
            info.version
        );
    }

    #[test]
    fn test_version_info_display_with_all_fields() {
        let info = VersionInfo {
            version: "1.2.3".to_string(),
            commit: Some("abc1234".to_string()),
            build_date: Some("2026-01-01".to_string()),
            target: Some("x86_64-unknown-linux-gnu".to_string()),
            release_feed: "https://example.com/repo".to_string(),
        };
        let display = info.display();
        assert_eq!(display, "efmlwd 1.2.3 (abc1234, x86_64-unknown-linux-gnu)");
        assert_eq!(format!("{}", info), display);
    }

    #[test]
    fn test_version_info_display_without_optional_fields() {
        let info = VersionInfo {
            version: "0.1.0".to_string(),
            commit: None,
            build_date: None,
            target: None,
            release_feed: String::new(),
        };
        assert_eq!(info.display(), "efmlwd 0.1.0");

        let json = serde_json::to_value(&info).unwrap();
        assert!(json.get("commit").is_none());
    }

    #[test]
    fn test_version_info_json_roundtrip() {
        let info = VersionInfo::current();
        let json = serde_json::to_string(&info).expect("should serialize to JSON");
        let back: VersionInfo = serde_json::from_str(&json).expect("should deserialize from JSON");
        assert_eq!(back, info);
    }
}
