use serde::Deserialize;
use std::net::SocketAddr;

use crate::store::SharedStorage;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Path of the backing file holding the user collection.
    pub file: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("SERVER"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("storage.file", "users.json")?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// Shared application state handed to every request handler.
pub struct AppState {
    pub config: Config,
    pub store: SharedStorage,
}

impl AppState {
    pub fn new(config: Config, store: SharedStorage) -> Self {
        Self { config, store }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_config_file() {
        let cfg = Config::load().unwrap();
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.storage.file, "users.json");
        assert!(cfg.logging.access_log);
    }

    #[test]
    fn socket_addr_is_built_from_host_and_port() {
        let cfg = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 4000,
                workers: None,
            },
            storage: StorageConfig {
                file: "users.json".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                access_log: false,
            },
        };
        assert_eq!(
            cfg.get_socket_addr().unwrap(),
            "127.0.0.1:4000".parse().unwrap()
        );
    }

    #[test]
    fn invalid_host_is_rejected() {
        let cfg = Config {
            server: ServerConfig {
                host: "not a host".to_string(),
                port: 4000,
                workers: None,
            },
            storage: StorageConfig {
                file: "users.json".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                access_log: false,
            },
        };
        assert!(cfg.get_socket_addr().is_err());
    }
}
