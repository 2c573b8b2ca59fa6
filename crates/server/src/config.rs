//! Server configuration loading.
//!
//! Configuration is resolved exactly once, before the service starts; any
//! file that exists but does not parse is fatal. A missing default-path
//! file resolves to built-in defaults, so a bare `quads-mcp` works against
//! the default QUADS deployment.

use anyhow::Context as _;
use quads_tools::config::QuadsConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerConfig {
    pub quads: QuadsConfig,
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let base = if let Ok(v) = std::env::var("XDG_CONFIG_HOME") {
        PathBuf::from(v)
    } else {
        let home = std::env::var("HOME").context("HOME is not set")?;
        PathBuf::from(home).join(".config")
    };
    Ok(base.join("quads-mcp").join("config.json"))
}

/// Load configuration.
///
/// An explicit `path` must exist and parse. Without one, the default path
/// is read when present and built-in defaults apply when it is absent.
///
/// # Errors
///
/// Returns an error if an explicit path cannot be read, or if any file
/// exists but is not valid JSON for the expected shape.
pub fn load(path: Option<&Path>) -> anyhow::Result<ServerConfig> {
    match path {
        Some(path) => {
            let bytes = std::fs::read(path)
                .with_context(|| format!("read config {}", path.display()))?;
            parse(&bytes, path)
        }
        None => {
            let path = default_config_path()?;
            match std::fs::read(&path) {
                Ok(bytes) => parse(&bytes, &path),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    Ok(ServerConfig::default())
                }
                Err(e) => Err(e).with_context(|| format!("read config {}", path.display())),
            }
        }
    }
}

fn parse(bytes: &[u8], path: &Path) -> anyhow::Result<ServerConfig> {
    serde_json::from_slice(bytes).with_context(|| format!("parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::{ServerConfig, load};
    use quads_tools::config::DEFAULT_BASE_URL;
    use tempfile::tempdir;

    #[test]
    fn defaults_apply_without_a_file() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.quads.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn explicit_path_is_loaded() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"quads": {"baseUrl": "http://quads.lab.local/api/v3"}}"#,
        )
        .expect("write config");

        let cfg = load(Some(&path)).expect("load config");
        assert_eq!(cfg.quads.base_url, "http://quads.lab.local/api/v3");
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{}").expect("write config");

        let cfg = load(Some(&path)).expect("load config");
        assert_eq!(cfg.quads.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").expect("write config");

        assert!(load(Some(&path)).is_err());
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("does-not-exist.json");
        assert!(load(Some(&path)).is_err());
    }
}
