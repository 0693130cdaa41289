//! Storage services known to the host

use efmlwd_core::types::ServicesConfig;

/// A storage backend registered with the host
pub trait Service: Send + Sync {
    /// Internal name, used in option keys
    ///
    /// Services that do not expose a name are skipped by presets.
    fn name(&self) -> Option<&str>;

    /// Human readable title
    fn title(&self) -> &str;

    /// Roles allowed to use the service after installation
    fn default_roles(&self) -> Vec<String> {
        Vec::new()
    }
}

/// The WebDav service this add-on provides
#[derive(Debug, Clone)]
pub struct WebDavService {
    name: String,
    default_roles: Vec<String>,
}

impl WebDavService {
    pub fn new(config: &ServicesConfig) -> Self {
        Self {
            name: config.own_service.clone(),
            default_roles: config.default_roles.clone(),
        }
    }
}

impl Default for WebDavService {
    fn default() -> Self {
        Self::new(&ServicesConfig::default())
    }
}

impl Service for WebDavService {
    fn name(&self) -> Option<&str> {
        Some(self.name.as_str())
    }

    fn title(&self) -> &str {
        "WebDav"
    }

    fn default_roles(&self) -> Vec<String> {
        self.default_roles.clone()
    }
}

/// A sibling service known only by name
#[derive(Debug, Clone)]
pub struct NamedService {
    name: Option<String>,
    title: String,
}

impl NamedService {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            title: name.clone(),
            name: Some(name),
        }
    }

    /// A service that does not expose a name
    pub fn anonymous(title: impl Into<String>) -> Self {
        Self {
            name: None,
            title: title.into(),
        }
    }
}

impl Service for NamedService {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn title(&self) -> &str {
        &self.title
    }
}

/// Build the service list a preset runs over
///
/// Every name in `names` except the own service becomes a [`NamedService`];
/// the WebDav service is always included exactly once, last.
pub fn services_from_config(config: &ServicesConfig, names: &[String]) -> Vec<Box<dyn Service>> {
    let mut services: Vec<Box<dyn Service>> = Vec::new();
    let mut seen = std::collections::BTreeSet::new();

    for name in names {
        if name == &config.own_service || !seen.insert(name.as_str()) {
            continue;
        }
        services.push(Box::new(NamedService::new(name.clone())));
    }

    services.push(Box::new(WebDavService::new(config)));
    services
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_webdav_service_defaults() {
        let service = WebDavService::default();
        assert_eq!(service.name(), Some("webdav"));
        assert_eq!(service.title(), "WebDav");
        assert_eq!(service.default_roles(), vec!["administrator", "editor"]);
    }

    #[test]
    fn test_named_service() {
        let service = NamedService::new("dropbox");
        assert_eq!(service.name(), Some("dropbox"));
        assert!(service.default_roles().is_empty());

        let anonymous = NamedService::anonymous("Legacy");
        assert_eq!(anonymous.name(), None);
        assert_eq!(anonymous.title(), "Legacy");
    }

    #[test]
    fn test_services_from_config() {
        let config = ServicesConfig::default();
        let names = vec![
            "local".to_string(),
            "webdav".to_string(),
            "ftp".to_string(),
            "local".to_string(),
        ];

        let services = services_from_config(&config, &names);
        let names: Vec<_> = services.iter().filter_map(|s| s.name()).collect();
        assert_eq!(names, vec!["local", "ftp", "webdav"]);
    }
}
