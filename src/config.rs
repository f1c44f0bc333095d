use crate::error::ConfigError;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use tracing::{debug, warn};

pub const HTTP_ADDR_ENV: &str = "JETLAG_PLANNER_HTTP_ADDR";

/// Defaults applied when the collecting surface leaves a field blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlannerConfig {
    #[serde(default = "default_bedtime")]
    pub default_bedtime: NaiveTime,
    #[serde(default = "default_wake_time")]
    pub default_wake_time: NaiveTime,
    #[serde(default = "default_http_addr")]
    pub http_addr: SocketAddr,
}

fn default_bedtime() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 0, 0).unwrap_or(NaiveTime::MIN)
}
fn default_wake_time() -> NaiveTime {
    NaiveTime::from_hms_opt(7, 0, 0).unwrap_or(NaiveTime::MIN)
}
fn default_http_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 3000))
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_bedtime: default_bedtime(),
            default_wake_time: default_wake_time(),
            http_addr: default_http_addr(),
        }
    }
}

impl PlannerConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: shown.clone(),
            source,
        })?;
        let config: PlannerConfig =
            serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
                path: shown.clone(),
                source,
            })?;
        config.validate()?;
        debug!(path = %shown, "loaded planner config");
        Ok(config)
    }

    /// Load `path` when given, otherwise start from defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_bedtime == self.default_wake_time {
            return Err(ConfigError::Invalid(format!(
                "default_bedtime and default_wake_time must differ (both {})",
                self.default_bedtime.format("%H:%M")
            )));
        }
        Ok(())
    }

    /// Apply `JETLAG_PLANNER_HTTP_ADDR` when it parses; a malformed value is ignored with a warning.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(raw) = std::env::var(HTTP_ADDR_ENV) {
            self.apply_http_addr_override(&raw);
        }
    }

    fn apply_http_addr_override(&mut self, raw: &str) {
        match raw.trim().parse::<SocketAddr>() {
            Ok(addr) => self.http_addr = addr,
            Err(err) => warn!(value = raw, %err, "ignoring invalid {}", HTTP_ADDR_ENV),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_addr_override_ignores_garbage() {
        let mut config = PlannerConfig::default();
        config.apply_http_addr_override("not-an-addr");
        assert_eq!(config.http_addr, default_http_addr());

        config.apply_http_addr_override("127.0.0.1:8080");
        assert_eq!(config.http_addr.port(), 8080);
    }
}
