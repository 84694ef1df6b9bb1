//! Command-line arguments.

use clap::{Parser, Subcommand};
use meetlink::geohash::GeoPoint;
use meetlink::route::DEFAULT_PRECISION;

/// Encode commute endpoints into geohash route links and back
#[derive(Parser, Debug)]
#[command(name = "meetlink", version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print JSON instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// One `meetlink` subcommand and its arguments.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode one coordinate as a geohash
    Encode {
        /// Latitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Geohash length in symbols
        #[arg(short, long, env = "MEETLINK_PRECISION", default_value_t = DEFAULT_PRECISION)]
        precision: usize,
    },

    /// Decode a geohash to the centre of its cell
    Decode {
        /// Geohash, any case
        hash: String,
    },

    /// Print the cell bounds of a geohash
    Bbox {
        /// Geohash, any case
        hash: String,
    },

    /// Build a route link from an origin and a destination
    Link {
        /// Origin as LAT,LON
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        from: GeoPoint,

        /// Destination as LAT,LON
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        to: GeoPoint,

        /// Geohash length in symbols
        #[arg(short, long, env = "MEETLINK_PRECISION", default_value_t = DEFAULT_PRECISION)]
        precision: usize,
    },

    /// Resolve a route link into its two endpoints
    Resolve {
        /// Route link of the form HASH-HASH
        link: String,
    },
}

/// Parses `LAT,LON` into a validated point.
pub fn parse_point(s: &str) -> Result<GeoPoint, String> {
    let (lat, lon) = s
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LON but got {s:?}"))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|e| format!("bad latitude {lat:?}: {e}"))?;
    let lon: f64 = lon
        .trim()
        .parse()
        .map_err(|e| format!("bad longitude {lon:?}: {e}"))?;
    GeoPoint::new(lat, lon).map_err(|e| e.to_string())
}
