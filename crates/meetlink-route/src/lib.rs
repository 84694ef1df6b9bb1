//! Shareable route links for Meetlink.
//!
//! A route link joins the geohashes of a commute's origin and destination
//! with a single `-`, e.g. `gcpvq6-gcpvjh`. The alphabet has no `-`, so the
//! separator is unambiguous. Links are short enough to live in one URL
//! path segment and resolve back to two cell centroids.
//!
//! ```
//! use meetlink_geohash::GeoPoint;
//! use meetlink_route::{LinkConfig, RouteLink};
//!
//! let from = GeoPoint::new(51.5625, -0.0729).unwrap();
//! let to = GeoPoint::new(51.5308, -0.1238).unwrap();
//! let link = RouteLink::encode(from, to, &LinkConfig::default()).unwrap();
//! assert_eq!(link.to_string(), "gcpvq6-gcpvjh");
//!
//! let parsed: RouteLink = "gcpvq6-gcpvjh".parse().unwrap();
//! assert_eq!(parsed, link);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod link;

pub use config::{LinkConfig, DEFAULT_PRECISION};
pub use error::{RouteError, Side};
pub use link::{Endpoint, ResolvedRoute, RouteLink, SEPARATOR};
