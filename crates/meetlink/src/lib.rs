//! Meetlink: turn two places into a compact, shareable route link and back.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Meetlink sub-crates. For most users, adding `meetlink` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use meetlink::prelude::*;
//!
//! let from = GeoPoint::new(51.5625, -0.0729).unwrap();
//! let to = GeoPoint::new(51.5308, -0.1238).unwrap();
//!
//! let link = RouteLink::encode(from, to, &LinkConfig::default()).unwrap();
//! assert_eq!(link.to_string(), "gcpvq6-gcpvjh");
//!
//! let route = link.resolve();
//! assert!(route.from.bounds.contains(from));
//! assert_eq!(decode("gcpvjh").unwrap(), route.to.coordinates);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`geohash`] | `meetlink-geohash` | Alphabet, bisector, `encode`/`decode`/`bounding_box` |
//! | [`route`] | `meetlink-route` | `{from}-{to}` route links and their config |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Geohash codec (`meetlink-geohash`).
///
/// The three entry points [`geohash::encode`], [`geohash::decode`] and
/// [`geohash::bounding_box`] are also in the [`prelude`].
pub use meetlink_geohash as geohash;

/// Route links (`meetlink-route`).
///
/// [`route::RouteLink`] formats and parses the `{from}-{to}` URL segment.
pub use meetlink_route as route;

/// Common imports for typical Meetlink usage.
///
/// ```rust
/// use meetlink::prelude::*;
/// ```
pub mod prelude {
    // Codec
    pub use meetlink_geohash::{bounding_box, decode, encode};

    // Values and errors
    pub use meetlink_geohash::{BoundingBox, GeoHash, GeoPoint, GeohashError};

    // Route links
    pub use meetlink_route::{Endpoint, LinkConfig, ResolvedRoute, RouteError, RouteLink, Side};
}
