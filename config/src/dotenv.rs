//! `.env` parsing into a key-value map. Applying to the environment happens in the crate root.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::LoadError;

fn dotenv_path(override_dir: Option<&Path>) -> Option<PathBuf> {
    let dir = match override_dir {
        Some(d) => d.to_path_buf(),
        None => std::env::current_dir().ok()?,
    };
    Some(dir.join(".env")).filter(|p| p.is_file())
}

/// Strips one layer of matching quotes. Double quotes honour `\"`; single quotes are literal.
fn unquote(value: &str) -> String {
    if let Some(inner) = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
    {
        return inner.replace("\\\"", "\"");
    }
    if let Some(inner) = value
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
    {
        return inner.to_string();
    }
    value.to_string()
}

/// `KEY=VALUE` per line. Blank lines and `#` comment lines are skipped, as are lines
/// without `=` or with an empty key. An optional leading `export ` is accepted.
fn parse_dotenv(content: &str) -> HashMap<String, String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let line = line.strip_prefix("export ").unwrap_or(line);
            let (key, value) = line.split_once('=')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            Some((key.to_string(), unquote(value.trim())))
        })
        .collect()
}

/// Reads `.env` from `override_dir` or the current directory. Missing file yields an empty map.
pub(crate) fn load_env_map(override_dir: Option<&Path>) -> Result<HashMap<String, String>, LoadError> {
    let Some(path) = dotenv_path(override_dir) else {
        return Ok(HashMap::new());
    };
    let content = std::fs::read_to_string(&path).map_err(|source| LoadError::Read {
        path: path.display().to_string(),
        source,
    })?;
    Ok(parse_dotenv(&content))
}
