//! Error types for route links.

use std::fmt;

use meetlink_geohash::GeohashError;
use thiserror::Error;

/// Which end of the route an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// The commute origin, left of the separator.
    From,
    /// The commute destination, right of the separator.
    To,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::From => f.write_str("origin"),
            Self::To => f.write_str("destination"),
        }
    }
}

/// Errors from building, parsing or resolving a route link.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum RouteError {
    /// The link has no `-` separator.
    #[error("route link {link:?} has no '-' separator")]
    MissingSeparator {
        /// The rejected input.
        link: String,
    },
    /// The link has more than one `-` separator.
    #[error("route link {link:?} must have exactly two segments")]
    TooManySegments {
        /// The rejected input.
        link: String,
    },
    /// One endpoint could not be encoded or parsed.
    #[error("invalid {side} geohash")]
    Endpoint {
        /// Which endpoint failed.
        side: Side,
        /// The underlying geohash error.
        #[source]
        source: GeohashError,
    },
    /// The link configuration is unusable.
    #[error("invalid link config: {reason}")]
    InvalidConfig {
        /// What went wrong.
        reason: String,
    },
}

impl RouteError {
    pub(crate) fn endpoint(side: Side) -> impl FnOnce(GeohashError) -> Self {
        move |source| Self::Endpoint { side, source }
    }
}
