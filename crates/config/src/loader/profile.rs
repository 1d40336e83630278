//! Profile file loading for configuration.
//!
//! The profile file is YAML mapping profile names to connection settings:
//!
//! ```yaml
//! default:
//!   server: https://ci.example.com/go/
//!   username: admin
//!   password: secret
//!   timeout: 60
//! ```
//!
//! Invariants:
//! - Profile settings are applied before environment variables (env vars take precedence).
//! - A missing file is not an error.
//! - A missing explicitly-selected profile is recorded for later error handling in build().

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::builder::ConfigLoader;
use super::env::{ENV_PROFILE, env_var_or_none};
use super::error::ConfigError;
use crate::constants::{DEFAULT_CONFIG_FILE_NAME, DEFAULT_PROFILE};
use crate::types::ProfileConfig;

/// Resolve `~/.gocd.conf`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(DEFAULT_CONFIG_FILE_NAME))
        .ok_or(ConfigError::ConfigDirUnavailable)
}

/// Parse every profile in the file at `path`.
pub fn read_profiles(path: &Path) -> Result<BTreeMap<String, ProfileConfig>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|_| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
    })?;
    if content.trim().is_empty() {
        return Ok(BTreeMap::new());
    }
    serde_yaml::from_str(&content).map_err(|e| ConfigError::ConfigFileParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Apply the selected profile from the profile file to the loader.
pub fn apply_profile(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let explicit = loader
        .profile_name()
        .cloned()
        .or_else(|| env_var_or_none(ENV_PROFILE));
    let profile_name = explicit
        .clone()
        .unwrap_or_else(|| DEFAULT_PROFILE.to_string());

    let config_path = match loader.config_path() {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No profile file found");
        if let Some(name) = explicit {
            loader.set_profile_missing(Some(name));
        }
        return Ok(());
    }

    let profiles = read_profiles(&config_path)?;
    match profiles.get(&profile_name) {
        Some(profile) => {
            tracing::debug!(profile = %profile_name, "Applying profile");
            apply_profile_config(loader, profile);
        }
        None => {
            if let Some(name) = explicit {
                loader.set_profile_missing(Some(name));
            }
        }
    }
    Ok(())
}

fn apply_profile_config(loader: &mut ConfigLoader, profile: &ProfileConfig) {
    if let Some(server) = &profile.server {
        loader.set_server(Some(server.clone()));
    }
    if let Some(username) = &profile.username {
        loader.set_username(Some(username.clone()));
    }
    if let Some(password) = &profile.password {
        loader.set_password(Some(password.clone()));
    }
    if let Some(secs) = profile.timeout {
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
}
