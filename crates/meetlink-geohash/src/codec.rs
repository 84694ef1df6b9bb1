//! Encode, decode and cell-bounds entry points.

use crate::alphabet;
use crate::bisect::Bisector;
use crate::error::GeohashError;
use crate::types::{check_latitude, check_longitude, BoundingBox, GeoHash, GeoPoint};

/// Encodes a coordinate as a geohash of `length` symbols.
///
/// Returns [`GeohashError::InvalidArgument`] if `length` is zero or if
/// either coordinate is outside the globe. There is no upper bound on
/// `length`; each extra symbol keeps halving the cell until the `f64`
/// bounds can no longer be split.
///
/// ```
/// use meetlink_geohash::encode;
///
/// assert_eq!(encode(40.7128, -74.0060, 6).unwrap().as_str(), "dr5reg");
/// assert!(encode(0.0, 0.0, 0).is_err());
/// ```
pub fn encode(latitude: f64, longitude: f64, length: usize) -> Result<GeoHash, GeohashError> {
    if length == 0 {
        return Err(GeohashError::invalid_argument("length must be at least 1"));
    }
    check_latitude(latitude)?;
    check_longitude(longitude)?;

    let point = GeoPoint {
        latitude,
        longitude,
    };
    let mut bisector = Bisector::new();
    let symbols: String = (0..length)
        .map(|_| alphabet::symbol(bisector.split_symbol(point)))
        .collect();
    Ok(GeoHash::from_encoded(symbols))
}

/// Returns the cell identified by `hash`.
///
/// Symbols are matched case-insensitively. An empty string yields
/// [`GeohashError::InvalidArgument`]; a character outside the alphabet
/// yields [`GeohashError::InvalidSymbol`].
pub fn bounding_box(hash: &str) -> Result<BoundingBox, GeohashError> {
    if hash.is_empty() {
        return Err(GeohashError::invalid_argument("geohash must not be empty"));
    }
    let mut bisector = Bisector::new();
    for (index, c) in hash.chars().enumerate() {
        bisector.push_symbol(alphabet::value_of(c, index)?);
    }
    Ok(bisector.into_bounds())
}

/// Decodes `hash` to the centroid of its cell.
///
/// Fails exactly when [`bounding_box`] fails.
pub fn decode(hash: &str) -> Result<GeoPoint, GeohashError> {
    bounding_box(hash).map(|cell| cell.center())
}
