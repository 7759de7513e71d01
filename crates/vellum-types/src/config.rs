use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Where documents are served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadSource {
    #[default]
    Local,
    Remote,
}

/// Immutable configuration consumed by the fetch collaborator.
///
/// The core never mutates this; it only reads the two document paths when
/// issuing loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteComposeConfig {
    /// Base URL (or base directory, for local loading) documents hang off
    pub base_url: String,
    /// Relative path of the root UI document
    #[serde(default = "default_ui_component_path")]
    pub ui_component_path: String,
    /// Relative path of the screen-catalog document
    #[serde(default = "default_screen_path")]
    pub screen_path: String,
    #[serde(default)]
    pub load_from: LoadSource,
}

fn default_ui_component_path() -> String {
    "compose.json".to_string()
}

fn default_screen_path() -> String {
    "compose_screen1.json".to_string()
}

impl Default for RemoteComposeConfig {
    fn default() -> Self {
        RemoteComposeConfig {
            base_url: String::new(),
            ui_component_path: default_ui_component_path(),
            screen_path: default_screen_path(),
            load_from: LoadSource::Local,
        }
    }
}

impl RemoteComposeConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        RemoteComposeConfig {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Reject configurations that cannot address any document.
    pub fn validate(&self) -> Result<()> {
        if self.ui_component_path.is_empty() {
            return Err(Error::Config("ui_component_path is empty".to_string()));
        }
        if self.screen_path.is_empty() {
            return Err(Error::Config("screen_path is empty".to_string()));
        }
        Ok(())
    }
}
