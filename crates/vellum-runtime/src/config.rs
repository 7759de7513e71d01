use std::path::Path;

use crate::Result;
use vellum_types::RemoteComposeConfig;

/// Load a `RemoteComposeConfig` from a TOML file.
///
/// A missing file yields the defaults, matching how an unconfigured host
/// boots with the built-in document paths.
pub fn load_config(path: &Path) -> Result<RemoteComposeConfig> {
    if !path.exists() {
        return Ok(RemoteComposeConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: RemoteComposeConfig = toml::from_str(&content)?;
    config
        .validate()
        .map_err(|err| crate::Error::Config(err.to_string()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vellum_types::LoadSource;

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let config = load_config(&dir.path().join("missing.toml"))?;
        assert_eq!(config, RemoteComposeConfig::default());
        Ok(())
    }

    #[test]
    fn test_load_full_config() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("vellum.toml");
        std::fs::write(
            &path,
            r#"
base_url = "https://example.com/"
ui_component_path = "custom_component.json"
screen_path = "custom_screen.json"
load_from = "remote"
"#,
        )?;

        let config = load_config(&path)?;
        assert_eq!(config.base_url, "https://example.com/");
        assert_eq!(config.ui_component_path, "custom_component.json");
        assert_eq!(config.screen_path, "custom_screen.json");
        assert_eq!(config.load_from, LoadSource::Remote);
        Ok(())
    }

    #[test]
    fn test_partial_config_fills_defaults() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("vellum.toml");
        std::fs::write(&path, "base_url = \"https://example.com/\"\n")?;

        let config = load_config(&path)?;
        assert_eq!(config.ui_component_path, "compose.json");
        assert_eq!(config.screen_path, "compose_screen1.json");
        assert_eq!(config.load_from, LoadSource::Local);
        Ok(())
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vellum.toml");
        std::fs::write(&path, "base_url = \"x\"\nui_component_path = \"\"\n").unwrap();
        assert!(load_config(&path).is_err());
    }
}
