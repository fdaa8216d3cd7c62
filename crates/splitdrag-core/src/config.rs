#![forbid(unsafe_code)]

//! Policy-as-data configuration for split drag handles.
//!
//! Collects the tunable parameters of a split handle into one
//! [`SplitDragConfig`] that can be loaded from TOML or JSON (with the `config`
//! feature) instead of being compiled in.
//!
//! ```toml
//! # splitdrag.toml
//! minimum_percentage = 15.0
//! updates_per_second = 60
//! leading_edge = true
//! ```
//!
//! ```rust,ignore
//! let config = SplitDragConfig::from_toml_file("splitdrag.toml")?;
//! let config = SplitDragConfig::from_json_str(json)?;
//! ```
//!
//! Missing fields take their defaults, so `SplitDragConfig::default()` is the
//! behavior of a handle nobody configured: 20..=80 percent, 30 updates per
//! second, trailing-edge throttling.

#[cfg(feature = "config")]
use std::path::Path;

use core::time::Duration;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

use crate::split::{ClampBounds, DEFAULT_MINIMUM_PERCENTAGE};
use crate::throttle::{DEFAULT_UPDATES_PER_SECOND, ThrottleConfig};

/// Split handle configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct SplitDragConfig {
    /// Distance of the clamp bounds from either edge, in percent (default: 20).
    pub minimum_percentage: f64,
    /// Maximum intermediate updates per second during a drag (default: 30).
    pub updates_per_second: u32,
    /// Deliver the first move of a burst immediately (default: false).
    pub leading_edge: bool,
}

impl Default for SplitDragConfig {
    fn default() -> Self {
        Self {
            minimum_percentage: DEFAULT_MINIMUM_PERCENTAGE,
            updates_per_second: DEFAULT_UPDATES_PER_SECOND,
            leading_edge: false,
        }
    }
}

impl SplitDragConfig {
    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, SplitConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, SplitConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, SplitConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SplitConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Check every parameter, reporting the first one out of range.
    pub fn validate(&self) -> Result<(), SplitConfigError> {
        self.clamp_bounds()?;
        self.throttle_config()?;
        Ok(())
    }

    /// Clamp bounds derived from `minimum_percentage`.
    pub fn clamp_bounds(&self) -> Result<ClampBounds, SplitConfigError> {
        ClampBounds::symmetric(self.minimum_percentage)
    }

    /// Throttle parameters derived from `updates_per_second` and `leading_edge`.
    pub fn throttle_config(&self) -> Result<ThrottleConfig, SplitConfigError> {
        if self.updates_per_second == 0 {
            return Err(SplitConfigError::ZeroUpdateRate);
        }
        Ok(ThrottleConfig {
            interval: Duration::from_secs(1) / self.updates_per_second,
            leading_edge: self.leading_edge,
        })
    }
}

/// Errors from building or loading a [`SplitDragConfig`].
#[derive(Debug, thiserror::Error)]
pub enum SplitConfigError {
    #[error("clamp margin must be within [0, 50] percent (got {margin})")]
    InvalidClampMargin { margin: f64 },
    #[error("updates per second must be > 0")]
    ZeroUpdateRate,
    #[cfg(feature = "config")]
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "config")]
    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),
    #[cfg(feature = "config")]
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
}
