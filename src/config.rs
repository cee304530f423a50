/// Configuration system for note-vault
///
/// Supports loading from multiple sources with priority:
/// CLI args > Environment variables > Config file > Defaults
///
/// The config file is optional; with none present the defaults apply.
use crate::error::{ConfigError, VaultError};
use crate::vault::NoteKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Vault location and walk behavior
    #[serde(default)]
    pub vault: VaultConfig,

    /// What the command line prints
    #[serde(default)]
    pub output: OutputConfig,
}

/// Vault configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultConfig {
    /// Note root; `None` means `<home>/notes`
    #[serde(default)]
    pub root: Option<PathBuf>,

    /// Follow symbolic links during the walk
    #[serde(default)]
    pub follow_links: bool,

    /// Visit directory entries in file-name order
    #[serde(default = "default_sort_entries")]
    pub sort_entries: bool,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Buckets to print
    #[serde(default = "default_output_kinds")]
    pub kinds: Vec<NoteKind>,
}

// Default value functions
fn default_sort_entries() -> bool {
    true
}

fn default_output_kinds() -> Vec<NoteKind> {
    vec![NoteKind::Daily]
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            root: None,
            follow_links: false,
            sort_entries: default_sort_entries(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            kinds: default_output_kinds(),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Config {
    /// Load configuration from file
    pub fn from_file(path: &Path) -> Result<Self, VaultError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()).into());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::LoadFailed(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::ParseFailed(format!("Invalid TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from default location or fall back to defaults
    pub fn load_or_default() -> Result<Self, VaultError> {
        let config_path = crate::paths::PlatformPaths::default_config_path();

        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            Self::from_file(&config_path)
        } else {
            tracing::debug!("No config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<(), VaultError> {
        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::SaveFailed(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::SaveFailed(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveFailed(format!("Failed to write config file: {}", e)))?;

        tracing::info!("Saved config to: {}", path.display());
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), VaultError> {
        if let Some(root) = &self.vault.root
            && !root.is_absolute()
        {
            return Err(ConfigError::InvalidValue {
                key: "vault.root".to_string(),
                reason: format!("must be an absolute path, got '{}'", root.display()),
            }
            .into());
        }

        if self.output.kinds.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "output.kinds".to_string(),
                reason: "must name at least one of daily, weekly, general".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        // Note root, relative values taken from the working directory
        if let Ok(root) = std::env::var("NOTE_VAULT_ROOT")
            && !root.is_empty()
        {
            let root = PathBuf::from(root);
            let root = match std::env::current_dir() {
                Ok(cwd) if root.is_relative() => cwd.join(root),
                _ => root,
            };
            self.vault.root = Some(root);
        }

        // Symlink handling
        if let Ok(follow) = std::env::var("NOTE_VAULT_FOLLOW_LINKS") {
            match parse_bool(&follow) {
                Some(value) => self.vault.follow_links = value,
                None => tracing::warn!("Ignoring invalid NOTE_VAULT_FOLLOW_LINKS: {}", follow),
            }
        }

        // Traversal order
        if let Ok(sort) = std::env::var("NOTE_VAULT_SORT") {
            match parse_bool(&sort) {
                Some(value) => self.vault.sort_entries = value,
                None => tracing::warn!("Ignoring invalid NOTE_VAULT_SORT: {}", sort),
            }
        }
    }

    /// Create a new Config with defaults and environment overrides
    pub fn new() -> Result<Self, VaultError> {
        let mut config = Self::load_or_default()?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.vault.root.is_none());
        assert!(!config.vault.follow_links);
        assert!(config.vault.sort_entries);
        assert_eq!(config.output.kinds, vec![NoteKind::Daily]);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_relative_root() {
        let mut config = Config::default();
        config.vault.root = Some(PathBuf::from("notes"));
        assert!(matches!(
            config.validate(),
            Err(VaultError::Config(ConfigError::InvalidValue { .. }))
        ));
    }

    #[test]
    fn test_validate_empty_kinds() {
        let mut config = Config::default();
        config.output.kinds.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path();

        let mut config = Config::default();
        config.vault.root = Some(PathBuf::from("/srv/notes"));
        config.vault.follow_links = true;
        config.output.kinds = vec![NoteKind::Weekly, NoteKind::General];

        config.save(path).unwrap();
        let loaded = Config::from_file(path).unwrap();

        assert_eq!(loaded.vault.root, Some(PathBuf::from("/srv/notes")));
        assert!(loaded.vault.follow_links);
        assert_eq!(loaded.output.kinds, vec![NoteKind::Weekly, NoteKind::General]);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), "[vault]\nroot = \"/srv/notes\"\n").unwrap();

        let loaded = Config::from_file(temp_file.path()).unwrap();
        assert_eq!(loaded.vault.root, Some(PathBuf::from("/srv/notes")));
        assert!(loaded.vault.sort_entries);
        assert_eq!(loaded.output.kinds, vec![NoteKind::Daily]);
    }

    #[test]
    fn test_invalid_toml() {
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), "[output]\nkinds = [\"monthly\"]\n").unwrap();

        assert!(matches!(
            Config::from_file(temp_file.path()),
            Err(VaultError::Config(ConfigError::ParseFailed(_)))
        ));
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = Config::from_file(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            VaultError::Config(ConfigError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" 0 "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn test_apply_env_overrides() {
        // Safety: This test is the only one touching these variables and cleans up after itself
        unsafe {
            std::env::set_var("NOTE_VAULT_ROOT", "/srv/vault");
            std::env::set_var("NOTE_VAULT_FOLLOW_LINKS", "yes");
            std::env::set_var("NOTE_VAULT_SORT", "false");
        }

        let mut config = Config::default();
        config.apply_env_overrides();

        assert_eq!(config.vault.root, Some(PathBuf::from("/srv/vault")));
        assert!(config.vault.follow_links);
        assert!(!config.vault.sort_entries);

        // Relative roots resolve against the working directory
        unsafe {
            std::env::set_var("NOTE_VAULT_ROOT", "relative/notes");
        }
        config.apply_env_overrides();
        let root = config.vault.root.clone().unwrap();
        assert!(root.is_absolute());
        assert!(root.ends_with("relative/notes"));
        assert!(config.validate().is_ok());

        // Cleanup
        // Safety: This test is single-threaded and we're cleaning up test state
        unsafe {
            std::env::remove_var("NOTE_VAULT_ROOT");
            std::env::remove_var("NOTE_VAULT_FOLLOW_LINKS");
            std::env::remove_var("NOTE_VAULT_SORT");
        }
    }
}
