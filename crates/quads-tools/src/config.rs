//! Configuration types shared by the gateway and the server binary.

use serde::{Deserialize, Serialize};

/// QUADS API base URL used when configuration does not supply one.
pub const DEFAULT_BASE_URL: &str = "https://quads.example.com/api/v3";

/// Connection settings for the remote QUADS API.
///
/// Resolved once at startup and immutable afterwards; every in-flight tool
/// invocation reads the same instance through the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuadsConfig {
    /// Base URL of the QUADS API, e.g. `https://quads.example.com/api/v3`.
    pub base_url: String,
}

impl Default for QuadsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_BASE_URL, QuadsConfig};

    #[test]
    fn default_points_at_example_deployment() {
        assert_eq!(QuadsConfig::default().base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn base_url_uses_camel_case_key() {
        let cfg: QuadsConfig =
            serde_json::from_str(r#"{"baseUrl": "http://quads.lab.local/api/v3"}"#)
                .expect("valid config");
        assert_eq!(cfg.base_url, "http://quads.lab.local/api/v3");
    }

    #[test]
    fn missing_base_url_falls_back_to_default() {
        let cfg: QuadsConfig = serde_json::from_str("{}").expect("valid config");
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    }
}
