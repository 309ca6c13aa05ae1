//! Pricing profiles: a [`PricingConfig`] stored as JSON on disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde_json::Error as SerdeError;
use tracing::{debug, info};

use crate::domain::{ConfigError, PricingConfig};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "ResalePricer";
const APP_NAME: &str = "ResalePricer";
const PROFILE_FILENAME: &str = "profile.json";

/// Location of the per-user profile, if the platform has a config directory.
pub fn default_profile_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(PROFILE_FILENAME))
}

/// Reads and validates the profile at `path`.
pub fn load_profile(path: &Path) -> Result<PricingConfig, ProfileError> {
    let data = fs::read_to_string(path)?;
    let config: PricingConfig = serde_json::from_str(&data)?;
    config.validate()?;
    info!(path = %path.display(), tiers = config.tiers.len(), "loaded pricing profile");
    Ok(config)
}

/// Loads the per-user profile. A missing file is not an error.
pub fn load_default_profile() -> Result<Option<PricingConfig>, ProfileError> {
    let Some(path) = default_profile_path() else {
        return Ok(None);
    };
    if !path.exists() {
        debug!(path = %path.display(), "no pricing profile found, using built-in tables");
        return Ok(None);
    }
    load_profile(&path).map(Some)
}

pub fn save_profile(path: &Path, config: &PricingConfig) -> Result<(), ProfileError> {
    config.validate()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    info!(path = %path.display(), "saved pricing profile");
    Ok(())
}

/// Writes `config` to the per-user profile location and returns that path.
pub fn save_default_profile(config: &PricingConfig) -> Result<PathBuf, ProfileError> {
    let path = default_profile_path().ok_or(ProfileError::StorageUnavailable)?;
    save_profile(&path, config)?;
    Ok(path)
}

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
    #[error("invalid pricing profile: {0}")]
    Invalid(#[from] ConfigError),
}
