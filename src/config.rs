use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub const APP_DIR: &str = "djsongmatch";
pub const SETTINGS_FILE: &str = "djsongmatch.json";
pub const LOG_FILE: &str = "djsongmatch.log";
pub const CONFIG_DIR_ENV: &str = "DJSONGMATCH_CONFIG_DIR";

/// Configuration for overriding default application paths
#[derive(Debug, Clone, Default)]
pub struct PathConfig {
    /// Custom config directory (from CLI or ENV)
    pub config_dir: Option<PathBuf>,
}

impl PathConfig {
    /// Priority: CLI args → ENV var (DJSONGMATCH_CONFIG_DIR) → None (use defaults)
    pub fn from_env_and_cli(cli_dir: Option<PathBuf>) -> Self {
        let config_dir = cli_dir.or_else(|| std::env::var(CONFIG_DIR_ENV).ok().map(PathBuf::from));

        Self { config_dir }
    }
}

/// Get path to a configuration file
///
/// Priority:
/// 1. CLI --config-dir argument
/// 2. DJSONGMATCH_CONFIG_DIR environment variable
/// 3. Current folder IF it already holds djsongmatch.json or djsongmatch.log
/// 4. Platform config directory from dirs-next (~/.config/djsongmatch on Linux)
pub fn config_file(name: &str, config: &PathConfig) -> PathBuf {
    resolve_dir(config, dirs_next::config_dir()).join(name)
}

/// Get path to a data file (logs). Same priority as [`config_file`], but
/// falls back to the platform data directory (~/.local/share/djsongmatch).
pub fn data_file(name: &str, config: &PathConfig) -> PathBuf {
    resolve_dir(config, dirs_next::data_dir()).join(name)
}

/// Create config and data directories if missing.
pub fn ensure_dirs(config: &PathConfig) -> Result<()> {
    let config_dir = resolve_dir(config, dirs_next::config_dir());
    let data_dir = resolve_dir(config, dirs_next::data_dir());

    for dir in [&config_dir, &data_dir] {
        if !dir.exists() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        }
    }

    Ok(())
}

fn has_local_config_files(dir: &Path) -> bool {
    [SETTINGS_FILE, LOG_FILE].iter().any(|f| dir.join(f).exists())
}

fn resolve_dir(config: &PathConfig, platform_dir: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = &config.config_dir {
        return dir.clone();
    }

    if let Ok(current_dir) = std::env::current_dir()
        && has_local_config_files(&current_dir)
    {
        return current_dir;
    }

    platform_dir
        .map(|d| d.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_dir_wins() {
        let config = PathConfig {
            config_dir: Some(PathBuf::from("/custom")),
        };

        assert_eq!(config_file("a.json", &config), PathBuf::from("/custom/a.json"));
        assert_eq!(data_file(LOG_FILE, &config), PathBuf::from("/custom/djsongmatch.log"));
    }

    #[test]
    fn test_cli_dir_beats_env() {
        let config = PathConfig::from_env_and_cli(Some(PathBuf::from("/from-cli")));
        assert_eq!(config.config_dir, Some(PathBuf::from("/from-cli")));
    }

    #[test]
    fn test_platform_default_contains_app_dir() {
        let path = resolve_dir(&PathConfig::default(), Some(PathBuf::from("/platform")));
        // Either the platform dir, or the cwd when a local config is lying around
        if !std::env::current_dir().map(|d| has_local_config_files(&d)).unwrap_or(false) {
            assert_eq!(path, PathBuf::from("/platform/djsongmatch"));
        }
    }

    #[test]
    fn test_no_platform_dir_falls_back_to_cwd_marker() {
        if !std::env::current_dir().map(|d| has_local_config_files(&d)).unwrap_or(false) {
            assert_eq!(resolve_dir(&PathConfig::default(), None), PathBuf::from("."));
        }
    }

    #[test]
    fn test_local_config_detection() {
        let dir = std::env::temp_dir().join("djsongmatch_test_local");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        assert!(!has_local_config_files(&dir));

        std::fs::write(dir.join(SETTINGS_FILE), "{}").unwrap();
        assert!(has_local_config_files(&dir));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_ensure_dirs_creates_custom_dir() {
        let dir = std::env::temp_dir().join("djsongmatch_test_ensure").join("nested");
        let _ = std::fs::remove_dir_all(dir.parent().unwrap());
        let config = PathConfig {
            config_dir: Some(dir.clone()),
        };

        ensure_dirs(&config).unwrap();
        assert!(dir.is_dir());

        let _ = std::fs::remove_dir_all(dir.parent().unwrap());
    }
}
