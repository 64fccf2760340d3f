use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIRNAME: &str = "orchestration-hooks";
const CONFIG_FILENAME: &str = "config.yaml";

/// Diagnostics settings. Nothing here affects what the hook prints.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HookConfig {
    /// EnvFilter directive, e.g. `debug` or `orchestration_session_start=info`
    pub log_level: Option<String>,
    /// Append logs here instead of stderr
    pub log_file: Option<PathBuf>,
}

/// Get the expected config path in XDG config
pub fn config_path() -> PathBuf {
    config_path_from(
        std::env::var_os("XDG_CONFIG_HOME"),
        std::env::var_os("HOME"),
    )
}

fn config_path_from(xdg_config_home: Option<OsString>, home: Option<OsString>) -> PathBuf {
    let xdg_config = xdg_config_home
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let home = home.unwrap_or_else(|| OsString::from("."));
            PathBuf::from(home).join(".config")
        });

    xdg_config.join(CONFIG_DIRNAME).join(CONFIG_FILENAME)
}

/// Loads and validates a config file. An empty file yields the defaults.
pub fn load_config(config_path: &Path) -> Result<HookConfig> {
    let content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config: {}", config_path.display()))?;

    if content.trim().is_empty() {
        return Ok(HookConfig::default());
    }

    let config: HookConfig = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", config_path.display()))?;

    if config
        .log_level
        .as_deref()
        .is_some_and(|level| level.trim().is_empty())
    {
        bail!(
            "Invalid config at {}: 'log_level' is empty",
            config_path.display()
        );
    }
    if config
        .log_file
        .as_deref()
        .is_some_and(|path| path.as_os_str().is_empty())
    {
        bail!(
            "Invalid config at {}: 'log_file' is empty",
            config_path.display()
        );
    }

    Ok(config)
}

/// Loads the config from its XDG location. A missing file is not an error.
pub fn load_default() -> Result<HookConfig> {
    let path = config_path();
    if !path.exists() {
        return Ok(HookConfig::default());
    }
    load_config(&path)
}
