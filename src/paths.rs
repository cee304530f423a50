/// Centralized platform-specific path computation
///
/// Resolves the user home directory (and with it the default note root) and
/// the location of the optional configuration file, following the XDG Base
/// Directory specification on Unix-like systems.
use std::path::PathBuf;

/// Directory name of the default note root, relative to the home directory
pub const DEFAULT_NOTES_DIR: &str = "notes";

/// Platform-agnostic path utilities
pub struct PlatformPaths;

impl PlatformPaths {
    /// Get the home directory of the invoking user, if it can be determined
    pub fn home_dir() -> Option<PathBuf> {
        dirs::home_dir()
    }

    /// Get the default note root
    ///
    /// Returns: {home_dir}/notes
    pub fn default_note_root() -> Option<PathBuf> {
        Self::home_dir().map(|home| home.join(DEFAULT_NOTES_DIR))
    }

    /// Get the appropriate config directory for the current platform
    ///
    /// - Windows: %APPDATA%
    /// - macOS: ~/Library/Application Support
    /// - Linux/Unix: $XDG_CONFIG_HOME or ~/.config
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            std::env::var("APPDATA")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("."))
        } else if cfg!(target_os = "macos") {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join("Library/Application Support"))
                .unwrap_or_else(|_| PathBuf::from("."))
        } else {
            // Linux/Unix - follow XDG Base Directory specification
            std::env::var("XDG_CONFIG_HOME")
                .map(PathBuf::from)
                .or_else(|_| std::env::var("HOME").map(|home| PathBuf::from(home).join(".config")))
                .unwrap_or_else(|_| PathBuf::from("."))
        }
    }

    /// Get default project-specific config directory
    ///
    /// Returns: {config_dir}/note-vault
    pub fn project_config_dir() -> PathBuf {
        Self::config_dir().join("note-vault")
    }

    /// Get default config file path
    ///
    /// Returns: {config_dir}/note-vault/config.toml
    pub fn default_config_path() -> PathBuf {
        Self::project_config_dir().join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_note_root_under_home() {
        // Only meaningful where a home directory is known
        if let Some(home) = PlatformPaths::home_dir() {
            let root = PlatformPaths::default_note_root().unwrap();
            assert!(root.starts_with(&home));
            assert!(root.ends_with("notes"));
        }
    }

    #[test]
    fn test_config_dir_not_empty() {
        let dir = PlatformPaths::config_dir();
        assert!(!dir.as_os_str().is_empty());
    }

    #[test]
    fn test_default_config_path() {
        let path = PlatformPaths::default_config_path();
        assert!(path.to_string_lossy().contains("note-vault"));
        assert!(path.ends_with("config.toml"));
    }

    #[test]
    fn test_project_config_dir_is_subdirectory() {
        let config_dir = PlatformPaths::config_dir();
        let project_config = PlatformPaths::project_config_dir();
        assert!(project_config.starts_with(&config_dir));
    }
}
