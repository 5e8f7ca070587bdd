//! Configuration for Products API

use core_config::{
    AppInfo, ConfigError, Environment, FromEnv, app_info, env_flag, server::ServerConfig,
};
use database::postgres::PostgresConfig;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Apply pending migrations at startup (`RUN_MIGRATIONS`)
    pub run_migrations: bool,
}

impl FromEnv for Config {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            app: app_info!(),
            database: PostgresConfig::from_env()?,
            server: ServerConfig::from_env()?,
            environment: Environment::from_env(),
            run_migrations: env_flag("RUN_MIGRATIONS", false)?,
        })
    }
}
