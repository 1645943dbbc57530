//! Process configuration for SOXFlow.
//!
//! Fills the process environment from two optional files, without overriding anything
//! already set. Precedence per key: **existing env > project `.env` > XDG `config.toml`**.
//!
//! - `.env` lives in the working directory (or an explicit override directory).
//! - `config.toml` lives at `$XDG_CONFIG_HOME/<app>/config.toml` (falling back to the
//!   platform config dir) and carries an `[env]` table of string values.
//!
//! Typical keys: `OPENAI_API_KEY`, `OPENAI_BASE_URL`, `SOXFLOW_ADDR`,
//! `SOXFLOW_REQUEST_TIMEOUT_SECS`, `RUST_LOG`, `LOG_FILE`.

mod dotenv;
mod xdg_toml;

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

pub use xdg_toml::config_file_path;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("no config directory for this platform")]
    NoConfigDir,
    #[error("read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parse config toml: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Merges `.env` over XDG values; only keys present in either file appear.
fn merge(dotenv: HashMap<String, String>, xdg: HashMap<String, String>) -> HashMap<String, String> {
    let mut merged = xdg;
    merged.extend(dotenv);
    merged
}

/// Loads `.env` and `$XDG_CONFIG_HOME/<app_name>/config.toml` and sets each key that is not
/// already present in the process environment. Returns the keys that were set.
///
/// * `app_name`: directory under the config home, e.g. `"soxflow"`.
/// * `override_dir`: look for `.env` here instead of the current directory.
///
/// Missing files are not an error; unreadable or malformed ones are.
pub fn load_and_apply(app_name: &str, override_dir: Option<&Path>) -> Result<Vec<String>, LoadError> {
    let xdg = xdg_toml::load_env_map(app_name)?;
    let dotenv = dotenv::load_env_map(override_dir)?;

    let mut applied = Vec::new();
    for (key, value) in merge(dotenv, xdg) {
        if std::env::var_os(&key).is_some() {
            continue;
        }
        std::env::set_var(&key, value);
        applied.push(key);
    }
    applied.sort();
    Ok(applied)
}

/// Serializes tests that mutate `XDG_CONFIG_HOME` or other process-wide env vars.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
