pub mod init;
mod schema;
mod validation;

pub use schema::{Config, ThemeChoice, DEFAULT_HISTORY_DISPLAY};
pub use validation::validate_config;

use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.config/bowl-tally/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("bowl-tally"))
}

/// Get the default config file path (~/.config/bowl-tally/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Directory holding current.json and history.json: `data_dir` from the
/// config if set, otherwise the config directory.
pub fn resolve_data_dir(config: &Config) -> Result<PathBuf> {
    match config.data_dir {
        Some(ref dir) => Ok(dir.clone()),
        None => get_config_dir(),
    }
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses default path (~/.config/bowl-tally/config.yaml)
///
/// A missing default config file is fine and yields defaults. A path given
/// explicitly must exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let explicit = path.is_some();
    let config_path = match path {
        Some(p) => p,
        None => get_config_path()?,
    };

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        crate::verbose_eprintln!(
            "No config file at {}, using defaults",
            config_path.display()
        );
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!(
            "Failed to parse config: invalid YAML in {}",
            config_path.display()
        )
    })?;

    crate::verbose_eprintln!("Loaded config from {}", config_path.display());
    Ok(config)
}

/// Write configuration as YAML atomically, creating parent directories.
pub fn save_config(path: &Path, config: &Config) -> Result<()> {
    let yaml = serde_saphyr::to_string(config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(yaml.as_bytes())
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    file.commit()
        .with_context(|| format!("Failed to save config to {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_explicit_missing_path_is_error() {
        let temp_path = env::temp_dir().join("bowl_tally_test_config_missing.yaml");
        let _ = fs::remove_file(&temp_path);

        assert!(load_config(Some(temp_path)).is_err());
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let temp_path = env::temp_dir().join("bowl_tally_test_config_invalid.yaml");
        fs::write(&temp_path, "theme: [unclosed\n").unwrap();

        let err = load_config(Some(temp_path.clone())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_path = env::temp_dir()
            .join("bowl_tally_test_config_dir")
            .join("config.yaml");
        let _ = fs::remove_file(&temp_path);

        let config = Config {
            theme: Some(ThemeChoice::Light),
            history_limit: Some(42),
            ..Config::default()
        };
        save_config(&temp_path, &config).unwrap();
        let loaded = load_config(Some(temp_path.clone())).unwrap();
        assert_eq!(loaded, config);

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_resolve_data_dir_prefers_config() {
        let config = Config {
            data_dir: Some(PathBuf::from("/srv/bowling")),
            ..Config::default()
        };
        assert_eq!(resolve_data_dir(&config).unwrap(), PathBuf::from("/srv/bowling"));
    }
}
