use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Resolve the config file path based on priority:
/// 1. Explicit `--config` path
/// 2. DESCARGA_CONFIG environment variable
/// 3. `<config_dir>/descarga/config.toml` (XDG on Linux)
fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Ok(env_path) = std::env::var("DESCARGA_CONFIG") {
        return Some(PathBuf::from(env_path));
    }
    dirs::config_dir().map(|dir| dir.join("descarga").join("config.toml"))
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Credential table for the optional authentication gate.
///
/// `users` maps username to the sha256 hex digest of the password; the
/// plaintext is never stored.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AuthConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub users: HashMap<String, String>,
}

impl Config {
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match resolve_config_path(explicit) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config at {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/config.toml")).unwrap();
        assert!(!config.auth.enabled);
        assert!(config.auth.users.is_empty());
    }

    #[test]
    fn auth_table_parses() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[auth]\nenabled = true\n\n[auth.users]\nmaria = \"abc123\"\n"
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert!(config.auth.enabled);
        assert_eq!(config.auth.users.get("maria").map(String::as_str), Some("abc123"));
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[auth\nenabled").unwrap();
        assert!(Config::load_from(file.path()).is_err());
    }
}
