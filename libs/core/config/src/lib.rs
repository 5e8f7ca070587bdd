//! Environment-driven configuration shared by the catalog services
//!
//! Every setting is read from process environment variables. Types that load
//! themselves implement [`FromEnv`] and build on the `env_*` helpers below.

pub mod server;
pub mod tracing;

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable '{0}' is required but not set")]
    MissingEnvVar(String),

    #[error("Failed to parse environment variable '{key}': {details}")]
    ParseError { key: String, details: String },
}

/// Deployment flavour selected by `APP_ENV`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// `production` (any case) selects [`Environment::Production`]; anything else,
    /// including an unset variable, is development.
    pub fn from_env() -> Self {
        match env::var("APP_ENV") {
            Ok(value) if value.eq_ignore_ascii_case("production") => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        *self == Environment::Production
    }
}

/// Static identity of a running binary, reported by health endpoints
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppInfo {
    pub name: &'static str,
    pub version: &'static str,
}

/// Build an [`AppInfo`] from the calling crate's Cargo metadata
#[macro_export]
macro_rules! app_info {
    () => {
        $crate::AppInfo {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    };
}

/// Types that can be assembled from environment variables
pub trait FromEnv: Sized {
    fn from_env() -> Result<Self, ConfigError>;
}

/// Value of `key`, or `default` when unset
pub fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Value of `key`, failing with [`ConfigError::MissingEnvVar`] when unset
pub fn env_required(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Parse `key` (or `default` when unset) into `T`
pub fn env_parse<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    env_or_default(key, default)
        .trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::ParseError {
            key: key.to_string(),
            details: e.to_string(),
        })
}

/// Parse `key` as a boolean flag.
///
/// Accepts `true`/`false`/`1`/`0`/`yes`/`no` (case-insensitive); unset means `default`.
pub fn env_flag(key: &str, default: bool) -> Result<bool, ConfigError> {
    let Ok(value) = env::var(key) else {
        return Ok(default);
    };

    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(ConfigError::ParseError {
            key: key.to_string(),
            details: format!("expected a boolean, got '{}'", other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_env_selects_environment() {
        for (value, expected) in [
            (None, Environment::Development),
            (Some("production"), Environment::Production),
            (Some("PRODUCTION"), Environment::Production),
            (Some("staging"), Environment::Development),
        ] {
            temp_env::with_var("APP_ENV", value, || {
                assert_eq!(Environment::from_env(), expected, "APP_ENV={:?}", value);
            });
        }
        assert_eq!(Environment::default(), Environment::Development);
    }

    #[test]
    fn test_required_variable() {
        temp_env::with_var("CATALOG_URL", Some("postgresql://db/catalog"), || {
            assert_eq!(env_required("CATALOG_URL").unwrap(), "postgresql://db/catalog");
        });
        temp_env::with_var_unset("CATALOG_URL", || {
            let err = env_required("CATALOG_URL").unwrap_err();
            assert!(matches!(err, ConfigError::MissingEnvVar(ref key) if key == "CATALOG_URL"));
        });
    }

    #[test]
    fn test_env_parse_uses_default_when_unset() {
        temp_env::with_var_unset("POOL_SIZE", || {
            let size: u32 = env_parse("POOL_SIZE", "10").unwrap();
            assert_eq!(size, 10);
        });
        temp_env::with_var("POOL_SIZE", Some(" 25 "), || {
            let size: u32 = env_parse("POOL_SIZE", "10").unwrap();
            assert_eq!(size, 25);
        });
    }

    #[test]
    fn test_env_parse_reports_key_on_failure() {
        temp_env::with_var("POOL_SIZE", Some("many"), || {
            let err = env_parse::<u32>("POOL_SIZE", "10").unwrap_err();
            assert!(matches!(err, ConfigError::ParseError { ref key, .. } if key == "POOL_SIZE"));
        });
    }

    #[test]
    fn test_env_flag_parsing() {
        temp_env::with_var_unset("SEED_CATALOG", || {
            assert!(env_flag("SEED_CATALOG", true).unwrap());
            assert!(!env_flag("SEED_CATALOG", false).unwrap());
        });
        temp_env::with_var("SEED_CATALOG", Some("TRUE"), || {
            assert!(env_flag("SEED_CATALOG", false).unwrap());
        });
        temp_env::with_var("SEED_CATALOG", Some("0"), || {
            assert!(!env_flag("SEED_CATALOG", true).unwrap());
        });
        temp_env::with_var("SEED_CATALOG", Some("maybe"), || {
            let err = env_flag("SEED_CATALOG", true).unwrap_err();
            assert!(err.to_string().contains("SEED_CATALOG"));
        });
    }

    #[test]
    fn test_app_info_uses_package_metadata() {
        let info = app_info!();
        assert_eq!(info.name, "core_config");
        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
    }
}
