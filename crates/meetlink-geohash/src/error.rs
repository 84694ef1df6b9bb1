//! Error types for geohash operations.

use thiserror::Error;

/// Errors arising from encoding or decoding a geohash.
///
/// Both variants describe caller mistakes; nothing here is transient, so
/// neither is worth retrying.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GeohashError {
    /// A coordinate is out of range, the requested length is unusable,
    /// or the hash string is empty.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// What went wrong.
        reason: String,
    },
    /// A character of the hash is not in the base-32 geohash alphabet.
    #[error("invalid geohash symbol {symbol:?} at position {index}")]
    InvalidSymbol {
        /// The offending character.
        symbol: char,
        /// Character index of `symbol` within the input string.
        index: usize,
    },
}

impl GeohashError {
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}
