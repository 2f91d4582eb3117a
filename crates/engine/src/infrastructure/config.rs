//! Engine configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Port the editor frontend expects the backend on.
pub const DEFAULT_SERVER_PORT: u16 = 3001;
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub const DEFAULT_ASSETS_DIR: &str = "assets";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub server_host: String,
    pub server_port: u16,
    pub assets_dir: PathBuf,
    /// `None` allows any origin.
    pub cors_allowed_origins: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            cors_allowed_origins: None,
        }
    }
}

impl EngineConfig {
    /// Read `SERVER_HOST`, `SERVER_PORT` (or `PORT`), `ASSETS_DIR` and
    /// `CORS_ALLOWED_ORIGINS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let server_host = lookup("SERVER_HOST").unwrap_or(defaults.server_host);
        let server_port = lookup("SERVER_PORT")
            .or_else(|| lookup("PORT"))
            .and_then(|raw| match raw.trim().parse::<u16>() {
                Ok(port) => Some(port),
                Err(_) => {
                    tracing::warn!(value = %raw, "Invalid server port, using default");
                    None
                }
            })
            .unwrap_or(defaults.server_port);
        let assets_dir = lookup("ASSETS_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.assets_dir);
        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            server_host,
            server_port,
            assets_dir,
            cors_allowed_origins,
        }
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.server_host, self.server_port).parse()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_the_editor_frontend() {
        let config = EngineConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.server_port, 3001);
    }

    #[test]
    fn port_falls_back_to_port_variable() {
        let config = EngineConfig::from_lookup(lookup_from(&[("PORT", "8080")]));
        assert_eq!(config.server_port, 8080);

        let config =
            EngineConfig::from_lookup(lookup_from(&[("SERVER_PORT", "9000"), ("PORT", "8080")]));
        assert_eq!(config.server_port, 9000);
    }

    #[test]
    fn bad_port_and_blank_origins_use_defaults() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            ("SERVER_PORT", "not-a-port"),
            ("CORS_ALLOWED_ORIGINS", "   "),
            ("ASSETS_DIR", "/srv/zbierka"),
        ]));
        assert_eq!(config.server_port, DEFAULT_SERVER_PORT);
        assert_eq!(config.cors_allowed_origins, None);
        assert_eq!(config.assets_dir, PathBuf::from("/srv/zbierka"));
    }

    #[test]
    fn socket_addr_parses() {
        let addr = EngineConfig::default().socket_addr().expect("valid address");
        assert_eq!(addr.port(), 3001);
    }
}
