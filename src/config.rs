// ABOUTME: Environment-derived configuration for the recipe service client
// ABOUTME: Resolves the service base address once at startup with a fixed local default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use url::Url;

/// Environment variable naming the generation service base address
pub const ENV_SERVICE_URL: &str = "RECIPE_SERVICE_URL";

/// Environment variable overriding the request timeout in seconds
pub const ENV_TIMEOUT_SECS: &str = "RECIPE_SERVICE_TIMEOUT_SECS";

/// Environment variable overriding the connect timeout in seconds
pub const ENV_CONNECT_TIMEOUT_SECS: &str = "RECIPE_SERVICE_CONNECT_TIMEOUT_SECS";

/// Local default base address when no environment override is set
pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:8000/api";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout in seconds
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback to `Info`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Resolved configuration for the recipe service client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Base address of the generation service, without trailing slash
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Connection establishment timeout
    pub connect_timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVICE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

impl ServiceConfig {
    /// Create a configuration for a given base address, validating it
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid absolute URL.
    pub fn new(base_url: &str) -> Result<Self> {
        let validated = validate_base_url(base_url)?;
        Ok(Self {
            base_url: validated,
            ..Self::default()
        })
    }

    /// Resolve configuration from the environment.
    ///
    /// `RECIPE_SERVICE_URL` falls back to the fixed local default; timeout
    /// overrides must parse as whole seconds.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured base address is not a valid URL
    /// or a timeout override is not a positive integer.
    pub fn from_env() -> Result<Self> {
        let raw_url =
            env::var(ENV_SERVICE_URL).unwrap_or_else(|_| DEFAULT_SERVICE_URL.to_owned());
        let base_url = validate_base_url(&raw_url)?;

        let timeout = Duration::from_secs(env_u64(ENV_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS)?);
        let connect_timeout = Duration::from_secs(env_u64(
            ENV_CONNECT_TIMEOUT_SECS,
            DEFAULT_CONNECT_TIMEOUT_SECS,
        )?);

        Ok(Self {
            base_url,
            timeout,
            connect_timeout,
        })
    }
}

/// Validate and normalize a base address, stripping any trailing slash
fn validate_base_url(raw: &str) -> Result<String> {
    Url::parse(raw).with_context(|| format!("invalid recipe service URL: {raw}"))?;
    Ok(raw.trim_end_matches('/').to_owned())
}

/// Read an integer environment variable with a default
fn env_u64(key: &str, default: u64) -> Result<u64> {
    match env::var(key) {
        Ok(raw) => raw
            .parse::<u64>()
            .with_context(|| format!("{key} must be a whole number of seconds, got: {raw}")),
        Err(_) => Ok(default),
    }
}
