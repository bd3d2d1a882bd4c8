// ABOUTME: Unit tests for environment-derived service configuration
// ABOUTME: Validates defaults, overrides, and rejection of malformed values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pantry_chef::config::{
    LogLevel, ServiceConfig, DEFAULT_SERVICE_URL, ENV_SERVICE_URL, ENV_TIMEOUT_SECS,
};
use serial_test::serial;
use std::env;
use std::time::Duration;

#[test]
fn test_log_level_parsing() {
    assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
    assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
    assert_eq!(LogLevel::from_str_or_default("Debug"), LogLevel::Debug);
    assert_eq!(LogLevel::from_str_or_default("trace"), LogLevel::Trace);
    assert_eq!(LogLevel::from_str_or_default("invalid"), LogLevel::Info); // Default fallback
}

#[test]
fn test_log_level_to_tracing_level() {
    assert_eq!(LogLevel::Error.to_tracing_level(), tracing::Level::ERROR);
    assert_eq!(LogLevel::Info.to_tracing_level(), tracing::Level::INFO);
}

#[test]
fn test_default_config() {
    let config = ServiceConfig::default();
    assert_eq!(config.base_url, DEFAULT_SERVICE_URL);
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.connect_timeout, Duration::from_secs(10));
}

#[test]
fn test_new_rejects_invalid_url() {
    assert!(ServiceConfig::new("not a url").is_err());
    assert!(ServiceConfig::new("http://localhost:8000/api").is_ok());
}

#[test]
fn test_new_strips_trailing_slash() {
    let config = ServiceConfig::new("http://localhost:8000/api/").unwrap();
    assert_eq!(config.base_url, "http://localhost:8000/api");
}

#[test]
#[serial]
fn test_from_env_uses_local_default() {
    env::remove_var(ENV_SERVICE_URL);
    env::remove_var(ENV_TIMEOUT_SECS);

    let config = ServiceConfig::from_env().unwrap();
    assert_eq!(config.base_url, DEFAULT_SERVICE_URL);
}

#[test]
#[serial]
fn test_from_env_honors_overrides() {
    env::set_var(ENV_SERVICE_URL, "https://recipes.example.com/api/");
    env::set_var(ENV_TIMEOUT_SECS, "5");

    let config = ServiceConfig::from_env().unwrap();
    assert_eq!(config.base_url, "https://recipes.example.com/api");
    assert_eq!(config.timeout, Duration::from_secs(5));

    env::remove_var(ENV_SERVICE_URL);
    env::remove_var(ENV_TIMEOUT_SECS);
}

#[test]
#[serial]
fn test_from_env_rejects_malformed_timeout() {
    env::remove_var(ENV_SERVICE_URL);
    env::set_var(ENV_TIMEOUT_SECS, "soon");

    assert!(ServiceConfig::from_env().is_err());

    env::remove_var(ENV_TIMEOUT_SECS);
}
