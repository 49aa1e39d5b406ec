//! Pagination configuration
//!
//! A [`PaginationConfig`] is passed to every [`paginate`](crate::paginate::paginate)
//! call. Services that prefer a process-wide default install one snapshot at
//! startup with [`install`]; [`current`] reads it on every request.
//!
//! ```yaml
//! invalid_range: render   # render | raise | silent
//! max_page_size: 100
//! ```

use crate::error::{Error, Result, ResultExt};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ============================================================================
// Invalid Range Policy
// ============================================================================

/// What to do after answering a request with 416
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidRangePolicy {
    /// Write a short message body
    #[default]
    Render,
    /// Return [`Error::InvalidRange`] to the embedding framework
    Raise,
    /// Return an empty body and let the caller decide
    Silent,
}

// ============================================================================
// Pagination Config
// ============================================================================

/// Pagination behavior shared by the endpoints of a service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Handling of unsatisfiable ranges
    #[serde(default)]
    pub invalid_range: InvalidRangePolicy,

    /// Default largest page size for endpoints that do not set their own
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u64,
}

fn default_max_page_size() -> u64 {
    100
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            invalid_range: InvalidRangePolicy::default(),
            max_page_size: default_max_page_size(),
        }
    }
}

impl PaginationConfig {
    /// Create a config with the given invalid-range policy
    pub fn new(invalid_range: InvalidRangePolicy) -> Self {
        Self {
            invalid_range,
            ..Default::default()
        }
    }

    /// Set the default maximum page size
    #[must_use]
    pub fn with_max_page_size(mut self, max_page_size: u64) -> Self {
        self.max_page_size = max_page_size;
        self
    }

    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml_str(&contents).with_context(|| format!("In {}", path.display()))
    }

    /// Check invariants
    pub fn validate(&self) -> Result<()> {
        if self.max_page_size == 0 {
            return Err(Error::invalid_value(
                "max_page_size",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Process-wide Default
// ============================================================================

static INSTALLED: OnceCell<PaginationConfig> = OnceCell::new();

/// Install the process-wide default. May only be called once.
pub fn install(config: PaginationConfig) -> Result<()> {
    config.validate()?;
    INSTALLED
        .set(config)
        .map_err(|_| Error::config("pagination config already installed"))
}

/// The installed default, or the built-in one when nothing was installed
pub fn current() -> &'static PaginationConfig {
    static BUILTIN: OnceCell<PaginationConfig> = OnceCell::new();
    INSTALLED
        .get()
        .unwrap_or_else(|| BUILTIN.get_or_init(PaginationConfig::default))
}
