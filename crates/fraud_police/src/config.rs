// Rust guideline compliant 2026-10-19

//! Server configuration.
//!
//! [`ServerConfig::from_env`] reads `SERVICE_PORT` and `SERVICE_BASE_PATH`,
//! plus optional millisecond overrides for the artificial delays and the
//! shutdown grace period. Unset variables keep the builder defaults.

use std::ops::RangeInclusive;
use std::time::Duration;

/// Environment variable holding the TCP port to bind.
pub const PORT_VAR: &str = "SERVICE_PORT";
/// Environment variable holding the transaction route prefix.
pub const BASE_PATH_VAR: &str = "SERVICE_BASE_PATH";
/// Index route delay, in milliseconds.
pub const INDEX_DELAY_VAR: &str = "SERVICE_INDEX_DELAY_MS";
/// Lower bound of the fraud-evaluation delay, in milliseconds.
pub const EVALUATION_DELAY_MIN_VAR: &str = "SERVICE_EVALUATION_DELAY_MIN_MS";
/// Upper bound of the fraud-evaluation delay, in milliseconds.
pub const EVALUATION_DELAY_MAX_VAR: &str = "SERVICE_EVALUATION_DELAY_MAX_MS";
/// Shutdown grace period, in milliseconds.
pub const SHUTDOWN_GRACE_VAR: &str = "SERVICE_SHUTDOWN_GRACE_MS";

const DEFAULT_PORT: u16 = 9999;
const DEFAULT_BASE_PATH: &str = "/service/fraudpolice/api/v1";

/// Errors raised while building a [`ServerConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A configuration value is out of range or malformed.
    #[error("invalid server configuration: {reason}")]
    InvalidConfig {
        /// Human-readable description of the problem.
        reason: String,
    },
}

/// Runtime configuration for the fraud-police server.
///
/// Construct via [`ServerConfig::builder`] or [`ServerConfig::from_env`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port bound on all interfaces.
    pub port: u16,
    /// Prefix of the transaction route; empty or `/`-led without a trailing `/`.
    pub base_path: String,
    /// Artificial delay of the index route.
    pub index_delay: Duration,
    /// Range the fraud processor draws its artificial delay from.
    pub evaluation_delay: RangeInclusive<Duration>,
    /// How long in-flight requests may run once shutdown starts.
    pub shutdown_grace: Duration,
}

/// Builder for [`ServerConfig`].
///
/// Obtain via [`ServerConfig::builder`]; finalize with [`build`](Self::build).
#[derive(Debug)]
pub struct ServerConfigBuilder {
    port: u16,
    base_path: String,
    index_delay: Duration,
    evaluation_delay: RangeInclusive<Duration>,
    shutdown_grace: Duration,
}

impl ServerConfig {
    /// Create a builder.
    ///
    /// Defaults: port `9999`, base path `/service/fraudpolice/api/v1`, index
    /// delay 1 s, evaluation delay 1-2 s, shutdown grace 3 s.
    #[must_use]
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder {
            port: DEFAULT_PORT,
            base_path: DEFAULT_BASE_PATH.to_owned(),
            index_delay: Duration::from_secs(1),
            evaluation_delay: Duration::from_secs(1)..=Duration::from_secs(2),
            shutdown_grace: Duration::from_secs(3),
        }
    }

    /// Build from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfig`] when a variable is set to an
    /// unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset or empty keys fall back to defaults.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let mut builder = Self::builder();
        if let Some(raw) = get(PORT_VAR) {
            let port = raw.trim().parse::<u16>().map_err(|e| ConfigError::InvalidConfig {
                reason: format!("{PORT_VAR} must be a TCP port, got {raw:?}: {e}"),
            })?;
            builder = builder.port(port);
        }
        if let Some(base_path) = get(BASE_PATH_VAR) {
            builder = builder.base_path(base_path);
        }
        if let Some(raw) = get(INDEX_DELAY_VAR) {
            builder = builder.index_delay(parse_millis(INDEX_DELAY_VAR, &raw)?);
        }
        let min = get(EVALUATION_DELAY_MIN_VAR)
            .map(|raw| parse_millis(EVALUATION_DELAY_MIN_VAR, &raw))
            .transpose()?;
        let max = get(EVALUATION_DELAY_MAX_VAR)
            .map(|raw| parse_millis(EVALUATION_DELAY_MAX_VAR, &raw))
            .transpose()?;
        if min.is_some() || max.is_some() {
            let current = builder.evaluation_delay.clone();
            builder = builder.evaluation_delay(
                min.unwrap_or(*current.start()),
                max.unwrap_or(*current.end()),
            );
        }
        if let Some(raw) = get(SHUTDOWN_GRACE_VAR) {
            builder = builder.shutdown_grace(parse_millis(SHUTDOWN_GRACE_VAR, &raw)?);
        }
        builder.build()
    }
}

fn parse_millis(key: &str, raw: &str) -> Result<Duration, ConfigError> {
    raw.trim().parse::<u64>().map(Duration::from_millis).map_err(|e| ConfigError::InvalidConfig {
        reason: format!("{key} must be a whole number of milliseconds, got {raw:?}: {e}"),
    })
}

impl ServerConfigBuilder {
    /// Override the TCP port.
    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Override the transaction route prefix.
    #[must_use]
    pub fn base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    /// Override the index route delay.
    #[must_use]
    pub fn index_delay(mut self, delay: Duration) -> Self {
        self.index_delay = delay;
        self
    }

    /// Override the fraud-evaluation delay range (inclusive).
    #[must_use]
    pub fn evaluation_delay(mut self, min: Duration, max: Duration) -> Self {
        self.evaluation_delay = min..=max;
        self
    }

    /// Override the shutdown grace period.
    #[must_use]
    pub fn shutdown_grace(mut self, grace: Duration) -> Self {
        self.shutdown_grace = grace;
        self
    }

    /// Validate and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfig`] when the base path is not empty
    /// and either lacks a leading `/` or has a trailing one, or when the
    /// evaluation delay range is empty.
    #[must_use = "the Result must be checked; use ? or unwrap"]
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        if !self.base_path.is_empty()
            && (!self.base_path.starts_with('/') || self.base_path.ends_with('/'))
        {
            return Err(ConfigError::InvalidConfig {
                reason: format!(
                    "base path must start with '/' and must not end with '/', got {:?}",
                    self.base_path
                ),
            });
        }
        if self.evaluation_delay.is_empty() {
            return Err(ConfigError::InvalidConfig {
                reason: format!(
                    "evaluation delay min {:?} exceeds max {:?}",
                    self.evaluation_delay.start(),
                    self.evaluation_delay.end()
                ),
            });
        }
        Ok(ServerConfig {
            port: self.port,
            base_path: self.base_path,
            index_delay: self.index_delay,
            evaluation_delay: self.evaluation_delay,
            shutdown_grace: self.shutdown_grace,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = ServerConfig::builder().build().unwrap();
        assert_eq!(config.port, 9999);
        assert_eq!(config.base_path, "/service/fraudpolice/api/v1");
        assert_eq!(config.index_delay, Duration::from_secs(1));
        assert_eq!(config.evaluation_delay, Duration::from_secs(1)..=Duration::from_secs(2));
        assert_eq!(config.shutdown_grace, Duration::from_secs(3));
    }

    #[test]
    fn unset_environment_uses_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 9999);
        assert_eq!(config.base_path, DEFAULT_BASE_PATH);
    }

    #[test]
    fn empty_variables_fall_back() {
        let config = ServerConfig::from_lookup(lookup(&[(PORT_VAR, "")])).unwrap();
        assert_eq!(config.port, 9999);
    }

    #[test]
    fn environment_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            (PORT_VAR, "8080"),
            (BASE_PATH_VAR, "/fraud/v2"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.base_path, "/fraud/v2");
    }

    #[test]
    fn timing_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            (INDEX_DELAY_VAR, "0"),
            (EVALUATION_DELAY_MAX_VAR, "1500"),
            (SHUTDOWN_GRACE_VAR, "250"),
        ]))
        .unwrap();
        assert_eq!(config.index_delay, Duration::ZERO);
        assert_eq!(config.evaluation_delay, Duration::from_secs(1)..=Duration::from_millis(1500));
        assert_eq!(config.shutdown_grace, Duration::from_millis(250));
    }

    #[test]
    fn evaluation_delay_can_be_disabled() {
        let config = ServerConfig::from_lookup(lookup(&[
            (EVALUATION_DELAY_MIN_VAR, "0"),
            (EVALUATION_DELAY_MAX_VAR, "0"),
        ]))
        .unwrap();
        assert_eq!(config.evaluation_delay, Duration::ZERO..=Duration::ZERO);
    }

    #[test]
    fn overridden_range_is_still_validated() {
        let err = ServerConfig::from_lookup(lookup(&[(EVALUATION_DELAY_MIN_VAR, "5000")])).unwrap_err();
        assert!(err.to_string().contains("exceeds max"), "unexpected message: {err}");
    }

    #[test]
    fn unparsable_millis_are_rejected() {
        let err = ServerConfig::from_lookup(lookup(&[(SHUTDOWN_GRACE_VAR, "3s")])).unwrap_err();
        assert!(err.to_string().contains(SHUTDOWN_GRACE_VAR), "unexpected message: {err}");
    }

    #[test]
    fn unparsable_port_is_rejected() {
        for raw in ["http", "70000", "-1"] {
            let err = ServerConfig::from_lookup(lookup(&[(PORT_VAR, raw)])).unwrap_err();
            assert!(err.to_string().contains(PORT_VAR), "unexpected message: {err}");
        }
    }

    #[test]
    fn malformed_base_path_is_rejected() {
        for path in ["no-slash", "/trailing/"] {
            let result = ServerConfig::builder().base_path(path).build();
            assert!(
                matches!(result, Err(ConfigError::InvalidConfig { .. })),
                "{path:?} should be rejected"
            );
        }
        ServerConfig::builder().base_path("").build().unwrap();
    }

    #[test]
    fn inverted_delay_range_is_rejected() {
        let result = ServerConfig::builder()
            .evaluation_delay(Duration::from_secs(2), Duration::from_secs(1))
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidConfig { .. })));
    }
}
