use std::env;
use std::net::{IpAddr, SocketAddr};

use crate::db::DEFAULT_DATABASE_URL;

pub const DEFAULT_PORT: u16 = 5001;
const DEFAULT_HOST: &str = "0.0.0.0";

#[derive(Debug, thiserror::Error)]
pub enum ServerConfigError {
    #[error("invalid HOST '{0}'")]
    InvalidHost(String),
    #[error("invalid PORT '{0}'")]
    InvalidPort(String),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub database_url: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ServerConfigError> {
        Self::from_values(
            env::var("HOST").ok(),
            env::var("PORT").ok(),
            env::var("DATABASE_URL").ok(),
        )
    }

    pub fn from_values(
        host: Option<String>,
        port: Option<String>,
        database_url: Option<String>,
    ) -> Result<Self, ServerConfigError> {
        let host = host.unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host = host
            .parse::<IpAddr>()
            .map_err(|_| ServerConfigError::InvalidHost(host.clone()))?;

        let port = match port {
            Some(p) => p
                .parse::<u16>()
                .map_err(|_| ServerConfigError::InvalidPort(p.clone()))?,
            None => DEFAULT_PORT,
        };

        let database_url = database_url
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        Ok(Self {
            host,
            port,
            database_url,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_values(None, None, None).unwrap();
        assert_eq!(config.port, 5001);
        assert_eq!(config.addr().to_string(), "0.0.0.0:5001");
        assert_eq!(config.database_url, "sqlite://charts.db");
    }

    #[test]
    fn test_invalid_port() {
        let result = ServerConfig::from_values(None, Some("http".into()), None);
        assert!(matches!(result, Err(ServerConfigError::InvalidPort(_))));
    }

    #[test]
    fn test_explicit_values() {
        let config = ServerConfig::from_values(
            Some("127.0.0.1".into()),
            Some("8080".into()),
            Some("sqlite::memory:".into()),
        )
        .unwrap();
        assert_eq!(config.addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.database_url, "sqlite::memory:");
    }
}
