//! `[env]` table from `$XDG_CONFIG_HOME/<app>/config.toml`.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::LoadError;

#[derive(serde::Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    env: HashMap<String, String>,
}

/// `$XDG_CONFIG_HOME/<app_name>/config.toml` when `XDG_CONFIG_HOME` is set and non-empty,
/// else the platform config dir (`~/.config` on Linux). The file need not exist.
pub fn config_file_path(app_name: &str) -> Result<PathBuf, LoadError> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .ok_or(LoadError::NoConfigDir)?;
    Ok(base.join(app_name).join("config.toml"))
}

/// Returns the `[env]` pairs. Missing file or missing section yields an empty map.
pub(crate) fn load_env_map(app_name: &str) -> Result<HashMap<String, String>, LoadError> {
    let path = config_file_path(app_name)?;
    if !path.is_file() {
        return Ok(HashMap::new());
    }
    let content = std::fs::read_to_string(&path).map_err(|source| LoadError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let config: ConfigFile = toml::from_str(&content)?;
    Ok(config.env)
}
