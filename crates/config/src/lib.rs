//! Configuration management for the GoCD client.
//!
//! This crate provides the [`Configuration`] record consumed by the client
//! and a [`ConfigLoader`] that assembles it from `.env` files, environment
//! variables and the `~/.gocd.conf` profile file.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{Configuration, ProfileConfig, credentials_present, redact_url};
