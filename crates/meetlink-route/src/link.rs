//! The `{from}-{to}` route link and its resolved form.

use std::fmt;
use std::str::FromStr;

use meetlink_geohash::{encode, BoundingBox, GeoHash, GeoPoint};

use crate::config::LinkConfig;
use crate::error::{RouteError, Side};

/// Joins the two endpoint hashes.
pub const SEPARATOR: char = '-';

/// An origin/destination pair of geohashes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct RouteLink {
    from: GeoHash,
    to: GeoHash,
}

impl RouteLink {
    /// Builds a link from two already-encoded hashes.
    pub fn new(from: GeoHash, to: GeoHash) -> Self {
        Self { from, to }
    }

    /// Encodes both endpoints at `config.precision` symbols.
    pub fn encode(from: GeoPoint, to: GeoPoint, config: &LinkConfig) -> Result<Self, RouteError> {
        config.validate()?;
        let from = encode(from.latitude, from.longitude, config.precision)
            .map_err(RouteError::endpoint(Side::From))?;
        let to = encode(to.latitude, to.longitude, config.precision)
            .map_err(RouteError::endpoint(Side::To))?;
        Ok(Self { from, to })
    }

    /// Origin hash.
    pub fn from(&self) -> &GeoHash {
        &self.from
    }

    /// Destination hash.
    pub fn to(&self) -> &GeoHash {
        &self.to
    }

    /// Hash of the given side.
    pub fn side(&self, side: Side) -> &GeoHash {
        match side {
            Side::From => &self.from,
            Side::To => &self.to,
        }
    }

    /// Decodes both endpoints to their cells and centroids.
    pub fn resolve(&self) -> ResolvedRoute {
        ResolvedRoute {
            from: Endpoint::new(self.from.clone()),
            to: Endpoint::new(self.to.clone()),
        }
    }
}

impl fmt::Display for RouteLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SEPARATOR}{}", self.from, self.to)
    }
}

impl FromStr for RouteLink {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (from, to) = s
            .split_once(SEPARATOR)
            .ok_or_else(|| RouteError::MissingSeparator { link: s.to_owned() })?;
        if to.contains(SEPARATOR) {
            return Err(RouteError::TooManySegments { link: s.to_owned() });
        }
        let from: GeoHash = from.parse().map_err(RouteError::endpoint(Side::From))?;
        let to: GeoHash = to.parse().map_err(RouteError::endpoint(Side::To))?;
        Ok(Self { from, to })
    }
}

impl TryFrom<String> for RouteLink {
    type Error = RouteError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<RouteLink> for String {
    fn from(link: RouteLink) -> Self {
        link.to_string()
    }
}

/// One decoded end of a route.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Endpoint {
    /// The endpoint's hash.
    pub geohash: GeoHash,
    /// Centroid of the hash's cell.
    pub coordinates: GeoPoint,
    /// The hash's cell.
    pub bounds: BoundingBox,
}

impl Endpoint {
    /// Decodes `geohash`.
    pub fn new(geohash: GeoHash) -> Self {
        let bounds = geohash.bounding_box();
        Self {
            coordinates: bounds.center(),
            bounds,
            geohash,
        }
    }
}

/// Both ends of a route link, decoded.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResolvedRoute {
    /// The commute origin.
    pub from: Endpoint,
    /// The commute destination.
    pub to: Endpoint,
}
