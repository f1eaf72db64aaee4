use std::env;
use std::net::{IpAddr, SocketAddr};
use std::num::ParseIntError;
use std::path::PathBuf;

/// Deployment stage, selected by `APP_ENV`. Unrecognized values fall back to
/// development.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppEnvironment {
    #[default]
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Process configuration, assembled from the environment once at startup.
///
/// `.env` files are honored via dotenvy before any variable is read.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub data: DataConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            environment: env::var("APP_ENV")
                .map(|raw| AppEnvironment::parse(&raw))
                .unwrap_or_default(),
            server: ServerConfig::from_env()?,
            telemetry: TelemetryConfig::from_env(),
            data: DataConfig::from_env(),
        })
    }
}

/// HTTP bind settings, `APP_HOST` and `APP_PORT`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let host = env_or("APP_HOST", "127.0.0.1");
        let port = env_or("APP_PORT", "3000")
            .parse::<u16>()
            .map_err(ConfigError::Port)?;
        Ok(Self { host, port })
    }

    /// Resolve the configured host and port to a bindable address. The
    /// hostname `localhost` is accepted as a convenience; anything else must
    /// be a literal IP.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = if self.host.eq_ignore_ascii_case("localhost") {
            IpAddr::from([127, 0, 0, 1])
        } else {
            self.host.parse().map_err(ConfigError::Host)?
        };
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Log filtering, `APP_LOG_LEVEL`. `RUST_LOG` takes precedence at
/// subscriber-install time.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

impl TelemetryConfig {
    fn from_env() -> Self {
        Self {
            log_level: env_or("APP_LOG_LEVEL", "info"),
        }
    }
}

/// Candidate document location, `APP_DATA_PATH`. When unset the API serves
/// its built-in sample roster.
#[derive(Debug, Clone)]
pub struct DataConfig {
    pub path: Option<PathBuf>,
}

impl DataConfig {
    fn from_env() -> Self {
        Self {
            path: env::var("APP_DATA_PATH").ok().map(PathBuf::from),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("APP_PORT must be a valid u16: {0}")]
    Port(#[source] ParseIntError),
    #[error("APP_HOST must be `localhost` or a literal IP address: {0}")]
    Host(#[source] std::net::AddrParseError),
}
