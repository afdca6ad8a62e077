use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::render::Section;

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "folio";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Section the page starts on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,

    /// Launch in a window instead of fullscreen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub windowed: Option<bool>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `folio config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents =
            format!("# Folio configuration — https://github.com/angelinaanguyen/folio\n{yaml}");
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "defaults.section" => {
                if Section::from_name(value).is_none() {
                    anyhow::bail!(
                        "Invalid section: {value}. Must be one of: {}.",
                        Section::ALL
                            .iter()
                            .map(|s| s.name())
                            .collect::<Vec<_>>()
                            .join(", ")
                    );
                }
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .section = Some(value.to_string());
            }
            "defaults.windowed" => {
                let windowed = match value {
                    "true" => true,
                    "false" => false,
                    _ => anyhow::bail!("Invalid windowed: {value}. Must be 'true' or 'false'."),
                };
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .windowed = Some(windowed);
            }
            _ => anyhow::bail!(
                "Unknown config key: {key}. Valid keys: defaults.section, defaults.windowed"
            ),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_valid_section() {
        let mut config = Config::default();
        config.set("defaults.section", "projects").unwrap();
        assert_eq!(
            config.defaults.unwrap().section.as_deref(),
            Some("projects")
        );
    }

    #[test]
    fn set_rejects_unknown_section() {
        let mut config = Config::default();
        assert!(config.set("defaults.section", "blog").is_err());
    }

    #[test]
    fn set_windowed_parses_booleans_only() {
        let mut config = Config::default();
        config.set("defaults.windowed", "true").unwrap();
        assert_eq!(config.defaults.as_ref().unwrap().windowed, Some(true));
        assert!(config.set("defaults.windowed", "maybe").is_err());
    }

    #[test]
    fn set_rejects_unknown_key() {
        let mut config = Config::default();
        assert!(config.set("defaults.theme", "dark").is_err());
    }
}
