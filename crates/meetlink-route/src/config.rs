//! Route link configuration.

use crate::error::RouteError;

/// Symbols per endpoint used by shared links.
///
/// Six symbols give cells of roughly 1.2 km by 0.6 km.
pub const DEFAULT_PRECISION: usize = 6;

/// Controls how route links are built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkConfig {
    /// Geohash length for each endpoint, at least 1. Default: 6.
    pub precision: usize,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

impl LinkConfig {
    /// Config with the given precision, validated.
    pub fn with_precision(precision: usize) -> Result<Self, RouteError> {
        let config = Self { precision };
        config.validate()?;
        Ok(config)
    }

    /// Checks that `precision` is a usable geohash length.
    pub fn validate(&self) -> Result<(), RouteError> {
        if self.precision == 0 {
            return Err(RouteError::InvalidConfig {
                reason: "precision must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
