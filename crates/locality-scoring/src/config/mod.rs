use crate::scoring::{LocalityScoringService, DEFAULT_CACHE_CAPACITY};
use std::env;
use std::net::{IpAddr, SocketAddr};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub scoring: ScoringConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            scoring: ScoringConfig::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Knobs for the scoring engine: cache bound and jitter behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringConfig {
    pub cache_capacity: usize,
    pub variance: bool,
    pub seed: Option<u64>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            variance: true,
            seed: None,
        }
    }
}

impl ScoringConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let cache_capacity = match env::var("SCORING_CACHE_CAPACITY") {
            Ok(raw) => parse_capacity(&raw)?,
            Err(_) => DEFAULT_CACHE_CAPACITY,
        };

        let variance = env::var("SCORING_VARIANCE")
            .map(|raw| parse_switch(&raw))
            .unwrap_or(true);

        let seed = match env::var("SCORING_SEED") {
            Ok(raw) if !raw.trim().is_empty() => {
                Some(raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidSeed {
                    value: raw.clone(),
                })?)
            }
            _ => None,
        };

        Ok(Self {
            cache_capacity,
            variance,
            seed,
        })
    }

    /// Build a scoring service honoring the configured cache bound and variance source.
    pub fn build_service(&self) -> LocalityScoringService {
        let service = match (self.variance, self.seed) {
            (false, _) => LocalityScoringService::deterministic(),
            (true, Some(seed)) => LocalityScoringService::seeded(seed),
            (true, None) => LocalityScoringService::new(),
        };
        service.with_cache_capacity(self.cache_capacity)
    }
}

fn parse_capacity(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ConfigError::InvalidCacheCapacity {
            value: raw.to_string(),
        }),
    }
}

fn parse_switch(raw: &str) -> bool {
    !matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "off" | "false" | "0" | "no" | "disabled"
    )
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("APP_PORT must be a valid u16")]
    InvalidPort,
    #[error("APP_HOST must parse to an IPv4 or IPv6 address")]
    InvalidHost {
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("SCORING_CACHE_CAPACITY must be a positive integer (got '{value}')")]
    InvalidCacheCapacity { value: String },
    #[error("SCORING_SEED must be an unsigned 64-bit integer (got '{value}')")]
    InvalidSeed { value: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for key in [
            "APP_ENV",
            "APP_HOST",
            "APP_PORT",
            "APP_LOG_LEVEL",
            "SCORING_CACHE_CAPACITY",
            "SCORING_VARIANCE",
            "SCORING_SEED",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.scoring, ScoringConfig::default());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn reads_scoring_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("SCORING_CACHE_CAPACITY", "250");
        env::set_var("SCORING_VARIANCE", "off");
        env::set_var("SCORING_SEED", "42");

        let config = AppConfig::load().expect("config loads");
        assert_eq!(
            config.scoring,
            ScoringConfig {
                cache_capacity: 250,
                variance: false,
                seed: Some(42),
            }
        );
        reset_env();
    }

    #[test]
    fn rejects_zero_cache_capacity() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("SCORING_CACHE_CAPACITY", "0");

        let err = AppConfig::load().expect_err("zero capacity rejected");
        assert!(matches!(err, ConfigError::InvalidCacheCapacity { .. }));
        reset_env();
    }

    #[test]
    fn rejects_malformed_seed() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("SCORING_SEED", "not-a-number");

        let err = AppConfig::load().expect_err("bad seed rejected");
        assert!(err.to_string().contains("SCORING_SEED"));
        reset_env();
    }

    #[test]
    fn built_service_respects_capacity() {
        let config = ScoringConfig {
            cache_capacity: 3,
            variance: false,
            seed: None,
        };
        let service = config.build_service();
        assert_eq!(service.cache_capacity(), 3);
    }
}
