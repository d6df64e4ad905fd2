// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration for the built-in deep equality comparator.
//!
//! Parsed from TOML with unknown keys rejected:
//!
//! ```toml
//! numeric_coercion = false
//! max_depth = 64
//! ```

use serde::Deserialize;

use crate::error::{Error, Result};

/// Deep equality settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EqualityConfig {
    /// Treat an integer and a float with the same numeric value as equal.
    pub numeric_coercion: bool,

    /// Nesting depth past which composite values compare unequal.
    pub max_depth: usize,
}

impl Default for EqualityConfig {
    fn default() -> Self {
        Self {
            numeric_coercion: Self::default_numeric_coercion(),
            max_depth: Self::default_max_depth(),
        }
    }
}

impl EqualityConfig {
    fn default_numeric_coercion() -> bool {
        true
    }

    fn default_max_depth() -> usize {
        256
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| Error::Config {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(Error::Config {
                message: "max_depth must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
