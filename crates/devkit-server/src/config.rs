use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};

use devkit_diff::EngineConfig;
use devkit_protocol::MAX_MESSAGE_SIZE;

use crate::error::{ServerError, ServerResult};

/// Server configuration. Every field may be omitted from a TOML file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Largest accepted request body, in bytes.
    pub max_body_bytes: usize,
    /// Size guards passed to the diff engine.
    pub engine: EngineConfig,
    /// Browser origins allowed to call the API cross-origin, e.g. the UI
    /// shell's webview. Empty means same-origin only.
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 7420)),
            max_body_bytes: MAX_MESSAGE_SIZE,
            engine: EngineConfig::default(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    pub fn from_toml_str(text: &str) -> ServerResult<Self> {
        toml::from_str(text).map_err(|e| ServerError::Config(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> ServerResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!("loaded server config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config() {
        let c = ServerConfig::default();
        assert_eq!(c.bind_addr, "127.0.0.1:7420".parse::<SocketAddr>().unwrap());
        assert_eq!(c.max_body_bytes, 64 * 1024 * 1024);
        assert_eq!(c.engine, EngineConfig::default());
        assert!(c.cors_origins.is_empty());
    }

    #[test]
    fn cors_origins_from_toml() {
        let c = ServerConfig::from_toml_str(r#"cors_origins = ["http://localhost:5173"]"#).unwrap();
        assert_eq!(c.cors_origins, vec!["http://localhost:5173".to_string()]);
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(ServerConfig::from_toml_str("").unwrap(), ServerConfig::default());
    }

    #[test]
    fn partial_toml() {
        let c = ServerConfig::from_toml_str(
            r#"
            bind_addr = "0.0.0.0:8080"

            [engine]
            max_lines = 1000
            max_edit_cost = 5000
            "#,
        )
        .unwrap();
        assert_eq!(c.bind_addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(c.engine.max_lines, 1000);
        assert_eq!(c.engine.max_edit_cost, 5000);
        assert_eq!(c.engine.max_input_bytes, EngineConfig::default().max_input_bytes);
        assert_eq!(c.max_body_bytes, MAX_MESSAGE_SIZE);
    }

    #[test]
    fn invalid_toml() {
        let err = ServerConfig::from_toml_str("bind_addr = 5").unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }

    #[test]
    fn from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_body_bytes = 1024").unwrap();
        let c = ServerConfig::from_file(file.path()).unwrap();
        assert_eq!(c.max_body_bytes, 1024);
    }

    #[test]
    fn missing_file() {
        let err = ServerConfig::from_file("/nonexistent/devkit.toml").unwrap_err();
        assert!(matches!(err, ServerError::Io(_)));
    }
}
