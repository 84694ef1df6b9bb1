//! Geohash codec for Meetlink route identifiers.
//!
//! A geohash names a latitude/longitude cell by recursively halving the
//! longitude and latitude ranges, one bit at a time, alternating axis on
//! every bit and starting with longitude. Each group of five bits is
//! written as one symbol of the base-32 [`alphabet`].
//!
//! The crate exposes three pure operations:
//!
//! - [`encode`]: coordinate pair to a fixed-length [`GeoHash`]
//! - [`bounding_box`]: hash string to the [`BoundingBox`] of its cell
//! - [`decode`]: hash string to the centroid [`GeoPoint`] of its cell
//!
//! # Examples
//!
//! ```
//! use meetlink_geohash::{bounding_box, decode, encode};
//!
//! let hash = encode(51.5074, -0.1278, 6).unwrap();
//! assert_eq!(hash.as_str(), "gcpvj0");
//!
//! let cell = bounding_box(hash.as_str()).unwrap();
//! let centre = decode(hash.as_str()).unwrap();
//! assert!(cell.contains(centre));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod alphabet;
pub mod bisect;
pub mod codec;
pub mod error;
pub mod types;

pub use bisect::{Axis, Bisector};
pub use codec::{bounding_box, decode, encode};
pub use error::GeohashError;
pub use types::{BoundingBox, GeoHash, GeoPoint, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};
