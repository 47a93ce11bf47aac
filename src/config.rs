/*
 * Responsibility
 * - Read process configuration from the environment (PORT, APP_ENV)
 * - Validate it (invalid PORT fails startup, no fallback port)
 */
use std::net::{Ipv4Addr, SocketAddr};

use thiserror::Error;

use crate::services::env_source::{EnvSource, ProcessEnv};

pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_source(env: &dyn EnvSource) -> Self {
        match env
            .get("APP_ENV")
            .unwrap_or_else(|| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid configuration: {key}={value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub port: u16,
    pub app_env: AppEnv,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_source(&ProcessEnv)
    }

    pub fn from_source(env: &dyn EnvSource) -> Result<Self, ConfigError> {
        let port = match env.get("PORT") {
            None => DEFAULT_PORT,
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid {
                    key: "PORT",
                    value: raw,
                })?,
        };

        // Listen on every interface.
        let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));

        let app_env = AppEnv::from_source(env);

        Ok(Self {
            addr,
            port,
            app_env,
        })
    }
}
