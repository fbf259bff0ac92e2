use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Resolve the settings file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. PODIUM_PATH environment variable (with tilde expansion)
/// 3. XDG config directory (recommended default)
/// 4. ~/.podium (fallback for systems without XDG)
pub fn resolve_settings_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    // Priority 1: Explicit path points at the file itself
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    // Priority 2: PODIUM_PATH environment variable
    if let Ok(env_path) = std::env::var("PODIUM_PATH") {
        return Ok(expand_tilde(&env_path).join("settings.toml"));
    }

    // Priority 3: XDG config directory (recommended default)
    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("podium").join("settings.toml"));
    }

    // Priority 4: Fallback to ~/.podium (last resort for systems without XDG)
    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".podium").join("settings.toml"));
    }

    Err(Error::Config(
        "Could not determine settings path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Persisted viewer settings.
///
/// The viewer never writes this file during a presentation; it is
/// maintained externally and consulted read-only. The hands-on flag
/// keeps the original string representation: only the literal string
/// `"true"` enables the block, anything else (including absence)
/// disables it.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub enable_hands_on_example: Option<String>,
}

impl Settings {
    pub fn load(explicit_path: Option<&str>) -> Result<Self> {
        Self::load_from(&resolve_settings_path(explicit_path)?)
    }

    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let settings: Settings =
            toml::from_str(&content).map_err(|e| Error::Config(e.to_string()))?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn hands_on_enabled(&self) -> bool {
        self.enable_hands_on_example.as_deref() == Some("true")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_literal_string_true_enables_hands_on() {
        let enabled = Settings {
            enable_hands_on_example: Some("true".to_string()),
        };
        assert!(enabled.hands_on_enabled());

        for value in ["TRUE", "True", "1", "yes", "false", ""] {
            let settings = Settings {
                enable_hands_on_example: Some(value.to_string()),
            };
            assert!(!settings.hands_on_enabled(), "{:?} should not enable", value);
        }

        assert!(!Settings::default().hands_on_enabled());
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let settings = Settings::load_from(&path).unwrap();
        assert!(!settings.hands_on_enabled());
    }

    #[test]
    fn save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");

        let settings = Settings {
            enable_hands_on_example: Some("true".to_string()),
        };
        settings.save_to(&path).unwrap();

        let reloaded = Settings::load_from(&path).unwrap();
        assert!(reloaded.hands_on_enabled());
    }

    #[test]
    fn malformed_settings_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "enable_hands_on_example = [").unwrap();

        assert!(Settings::load_from(&path).is_err());
    }

    #[test]
    fn explicit_path_wins_resolution() {
        let path = resolve_settings_path(Some("/tmp/custom.toml")).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/custom.toml"));
    }
}
