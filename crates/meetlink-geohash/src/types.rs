//! Value types: points, cell bounds, and validated hash strings.

use std::fmt;
use std::str::FromStr;

use crate::alphabet;
use crate::bisect::Bisector;
use crate::error::GeohashError;

/// Southern latitude limit in degrees.
pub const MIN_LAT: f64 = -90.0;
/// Northern latitude limit in degrees.
pub const MAX_LAT: f64 = 90.0;
/// Western longitude limit in degrees.
pub const MIN_LON: f64 = -180.0;
/// Eastern longitude limit in degrees.
pub const MAX_LON: f64 = 180.0;

pub(crate) fn check_latitude(latitude: f64) -> Result<(), GeohashError> {
    // NaN fails `contains`, so it is rejected here too.
    if (MIN_LAT..=MAX_LAT).contains(&latitude) {
        Ok(())
    } else {
        Err(GeohashError::invalid_argument(format!(
            "latitude {latitude} must be between {MIN_LAT} and {MAX_LAT}"
        )))
    }
}

pub(crate) fn check_longitude(longitude: f64) -> Result<(), GeohashError> {
    if (MIN_LON..=MAX_LON).contains(&longitude) {
        Ok(())
    } else {
        Err(GeohashError::invalid_argument(format!(
            "longitude {longitude} must be between {MIN_LON} and {MAX_LON}"
        )))
    }
}

// ── GeoPoint ────────────────────────────────────────────────────

/// A latitude/longitude pair in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    /// Degrees north, `-90.0..=90.0`.
    pub latitude: f64,
    /// Degrees east, `-180.0..=180.0`.
    pub longitude: f64,
}

impl GeoPoint {
    /// Creates a point, rejecting coordinates outside the globe.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeohashError> {
        check_latitude(latitude)?;
        check_longitude(longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

// ── BoundingBox ─────────────────────────────────────────────────

/// The rectangular cell a geohash identifies.
///
/// `min_lat <= max_lat` and `min_lon <= max_lon` always hold, and both
/// ranges lie inside [`BoundingBox::WORLD`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BoundingBox {
    /// Southern edge.
    pub min_lat: f64,
    /// Northern edge.
    pub max_lat: f64,
    /// Western edge.
    pub min_lon: f64,
    /// Eastern edge.
    pub max_lon: f64,
}

impl BoundingBox {
    /// The whole globe; every bisection starts here.
    pub const WORLD: Self = Self {
        min_lat: MIN_LAT,
        max_lat: MAX_LAT,
        min_lon: MIN_LON,
        max_lon: MAX_LON,
    };

    /// Midpoint of the cell.
    #[inline]
    pub fn center(&self) -> GeoPoint {
        GeoPoint {
            latitude: (self.min_lat + self.max_lat) / 2.0,
            longitude: (self.min_lon + self.max_lon) / 2.0,
        }
    }

    /// Height of the cell in degrees of latitude.
    #[inline]
    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Width of the cell in degrees of longitude.
    #[inline]
    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Returns `true` if `point` lies inside the cell or on its edge.
    #[inline]
    pub fn contains(&self, point: GeoPoint) -> bool {
        (self.min_lat..=self.max_lat).contains(&point.latitude)
            && (self.min_lon..=self.max_lon).contains(&point.longitude)
    }

    /// Returns `true` if `other` lies entirely inside `self`.
    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        self.min_lat <= other.min_lat
            && other.max_lat <= self.max_lat
            && self.min_lon <= other.min_lon
            && other.max_lon <= self.max_lon
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::WORLD
    }
}

// ── GeoHash ─────────────────────────────────────────────────────

/// A validated, lowercase geohash string.
///
/// Produced by [`encode`](crate::encode) or parsed with [`str::parse`].
/// Parsing accepts either case and normalises to lowercase.
///
/// ```
/// use meetlink_geohash::GeoHash;
///
/// let hash: GeoHash = "GCPVJ0".parse().unwrap();
/// assert_eq!(hash.as_str(), "gcpvj0");
/// assert_eq!(hash.len(), 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct GeoHash(String);

impl GeoHash {
    /// Wraps a string the encoder has just built from [`alphabet::ALPHABET`].
    pub(crate) fn from_encoded(symbols: String) -> Self {
        debug_assert!(symbols.bytes().all(|b| alphabet::ALPHABET.contains(&b)));
        Self(symbols)
    }

    /// The hash as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of symbols.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always returns `false`: parsing rejects empty strings.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The cell this hash identifies.
    pub fn bounding_box(&self) -> BoundingBox {
        let mut bisector = Bisector::new();
        // Every byte is a lowercase alphabet symbol.
        for b in self.0.bytes() {
            bisector.push_symbol(alphabet::value_of_byte(b));
        }
        bisector.into_bounds()
    }

    /// Centroid of the cell this hash identifies.
    pub fn decode(&self) -> GeoPoint {
        self.bounding_box().center()
    }

    /// Consumes the hash, returning the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl FromStr for GeoHash {
    type Err = GeohashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(GeohashError::invalid_argument("geohash must not be empty"));
        }
        let mut normalised = String::with_capacity(s.len());
        for (index, c) in s.chars().enumerate() {
            let value = alphabet::value_of(c, index)?;
            normalised.push(alphabet::symbol(value));
        }
        Ok(Self(normalised))
    }
}

impl TryFrom<String> for GeoHash {
    type Error = GeohashError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<GeoHash> for String {
    fn from(hash: GeoHash) -> Self {
        hash.0
    }
}

impl AsRef<str> for GeoHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GeoHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
