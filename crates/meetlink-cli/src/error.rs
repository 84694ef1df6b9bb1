//! CLI error type.

use meetlink::geohash::GeohashError;
use meetlink::route::RouteError;
use thiserror::Error;

/// Anything that can make a command fail.
#[derive(Debug, Error)]
pub enum CliError {
    /// Bad coordinate, length or hash.
    #[error(transparent)]
    Geohash(#[from] GeohashError),
    /// Bad route link or link config.
    #[error(transparent)]
    Route(#[from] RouteError),
    /// A report could not be serialised.
    #[error("failed to serialise output: {0}")]
    Json(#[from] serde_json::Error),
}
