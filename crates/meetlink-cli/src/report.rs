//! JSON report shapes printed with `--json`.

use meetlink::geohash::{GeoHash, GeoPoint};
use meetlink::route::RouteLink;
use serde::Serialize;

/// A coordinate and the hash it was encoded to.
#[derive(Debug, Serialize)]
pub struct EncodedEndpoint {
    /// Hash of `coordinates` at the requested precision.
    pub geohash: GeoHash,
    /// The coordinate as given on the command line.
    pub coordinates: GeoPoint,
}

/// Output of `meetlink link --json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkReport {
    /// The `{from}-{to}` link.
    pub route_id: RouteLink,
    /// Origin endpoint.
    pub commute_from: EncodedEndpoint,
    /// Destination endpoint.
    pub commute_to: EncodedEndpoint,
}

impl LinkReport {
    /// Pairs each side of `link` with the coordinate it was encoded from.
    pub fn new(link: RouteLink, from: GeoPoint, to: GeoPoint) -> Self {
        Self {
            commute_from: EncodedEndpoint {
                geohash: link.from().clone(),
                coordinates: from,
            },
            commute_to: EncodedEndpoint {
                geohash: link.to().clone(),
                coordinates: to,
            },
            route_id: link,
        }
    }
}
