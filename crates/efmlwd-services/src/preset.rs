//! Configuration presets
//!
//! A preset is a one-shot write of host options that puts the media library
//! into a particular mode. Running a preset overwrites every option it
//! touches, so running it again yields the same store.

use efmlwd_core::types::ServicesConfig;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::Result;
use crate::options::OptionStore;
use crate::service::Service;

/// A named configuration mode offered by the host
pub trait ConfigurationPreset: Send + Sync {
    /// Internal name
    fn name(&self) -> &str;

    /// Title shown in the mode selection
    fn title(&self) -> &str;

    /// Hints shown in the confirmation dialog
    fn dialog_hints(&self) -> Vec<String> {
        Vec::new()
    }

    /// Write the options this mode defines
    fn run(&self, services: &[Box<dyn Service>], store: &mut dyn OptionStore)
        -> Result<PresetReport>;
}

/// What a preset run changed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PresetReport {
    /// Services left usable, by name
    pub enabled: Vec<String>,

    /// Services hidden, by name
    pub disabled: Vec<String>,

    /// Services without a name, by title
    pub skipped: Vec<String>,

    /// Whether cross-plugin hints were disabled
    pub hints_disabled: bool,
}

/// Hide every storage service except WebDav
#[derive(Debug, Clone)]
pub struct WebDavOnlyPreset {
    config: ServicesConfig,
}

impl WebDavOnlyPreset {
    pub fn new(config: ServicesConfig) -> Self {
        Self { config }
    }
}

impl Default for WebDavOnlyPreset {
    fn default() -> Self {
        Self::new(ServicesConfig::default())
    }
}

impl ConfigurationPreset for WebDavOnlyPreset {
    fn name(&self) -> &str {
        &self.config.own_service
    }

    fn title(&self) -> &str {
        "Use only WebDav"
    }

    fn dialog_hints(&self) -> Vec<String> {
        vec![
            "This will disable all other services except WebDav. After that, you will only be \
             able to see and use WebDav for external sources."
                .to_string(),
        ]
    }

    fn run(
        &self,
        services: &[Box<dyn Service>],
        store: &mut dyn OptionStore,
    ) -> Result<PresetReport> {
        let mut report = PresetReport::default();

        for service in services {
            let Some(name) = service.name() else {
                debug!("Skipping service without a name: {}", service.title());
                report.skipped.push(service.title().to_string());
                continue;
            };

            let option = self.config.allowed_roles_option(name);

            if name == self.config.own_service {
                store.set(&option, Value::from(service.default_roles()))?;
                report.enabled.push(name.to_string());
            } else {
                store.set(&option, Value::Array(Vec::new()))?;
                report.disabled.push(name.to_string());
            }
        }

        store.set(&self.config.hints_option, Value::from(1))?;
        report.hints_disabled = true;

        info!(
            "Applied preset {}: {} enabled, {} disabled",
            self.name(),
            report.enabled.len(),
            report.disabled.len()
        );
        Ok(report)
    }
}
