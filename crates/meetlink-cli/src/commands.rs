//! Command handlers. Each returns the text to print on stdout.

use meetlink::geohash::{self, BoundingBox, GeoPoint};
use meetlink::route::{LinkConfig, ResolvedRoute, RouteLink};
use tracing::{debug, info};

use crate::args::{Cli, Command};
use crate::error::CliError;
use crate::report::{EncodedEndpoint, LinkReport};

/// Runs the parsed command line.
pub fn run(cli: &Cli) -> Result<String, CliError> {
    match &cli.command {
        Command::Encode {
            lat,
            lon,
            precision,
        } => encode(*lat, *lon, *precision, cli.json),
        Command::Decode { hash } => decode(hash, cli.json),
        Command::Bbox { hash } => bbox(hash, cli.json),
        Command::Link {
            from,
            to,
            precision,
        } => link(*from, *to, *precision, cli.json),
        Command::Resolve { link } => resolve(link, cli.json),
    }
}

fn encode(lat: f64, lon: f64, precision: usize, json: bool) -> Result<String, CliError> {
    let hash = geohash::encode(lat, lon, precision)?;
    debug!(lat, lon, precision, %hash, "encoded coordinate");
    if json {
        let report = EncodedEndpoint {
            geohash: hash,
            coordinates: GeoPoint {
                latitude: lat,
                longitude: lon,
            },
        };
        return Ok(serde_json::to_string_pretty(&report)?);
    }
    Ok(hash.into_string())
}

fn decode(hash: &str, json: bool) -> Result<String, CliError> {
    let point = geohash::decode(hash)?;
    debug!(hash, %point, "decoded geohash");
    if json {
        return Ok(serde_json::to_string_pretty(&point)?);
    }
    Ok(format!("{} {}", point.latitude, point.longitude))
}

fn bbox(hash: &str, json: bool) -> Result<String, CliError> {
    let cell = geohash::bounding_box(hash)?;
    debug!(hash, ?cell, "resolved cell");
    if json {
        return Ok(serde_json::to_string_pretty(&cell)?);
    }
    Ok(format_box(&cell))
}

fn link(from: GeoPoint, to: GeoPoint, precision: usize, json: bool) -> Result<String, CliError> {
    let config = LinkConfig::with_precision(precision)?;
    let link = RouteLink::encode(from, to, &config)?;
    info!(%from, %to, %link, "built route link");
    if json {
        return Ok(serde_json::to_string_pretty(&LinkReport::new(link, from, to))?);
    }
    Ok(link.to_string())
}

fn resolve(link: &str, json: bool) -> Result<String, CliError> {
    let route = link.parse::<RouteLink>()?.resolve();
    info!(link, from = %route.from.coordinates, to = %route.to.coordinates, "resolved route link");
    if json {
        return Ok(serde_json::to_string_pretty(&route)?);
    }
    Ok(format_route(&route))
}

fn format_box(cell: &BoundingBox) -> String {
    format!(
        "lat {} .. {}\nlon {} .. {}",
        cell.min_lat, cell.max_lat, cell.min_lon, cell.max_lon
    )
}

fn format_route(route: &ResolvedRoute) -> String {
    format!(
        "from {} {} {}\nto   {} {} {}",
        route.from.geohash,
        route.from.coordinates.latitude,
        route.from.coordinates.longitude,
        route.to.geohash,
        route.to.coordinates.latitude,
        route.to.coordinates.longitude,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn run_args(args: &[&str]) -> Result<String, CliError> {
        let cli = Cli::try_parse_from(std::iter::once("meetlink").chain(args.iter().copied()))
            .unwrap();
        run(&cli)
    }

    #[test]
    fn encode_plain() {
        let out = run_args(&["encode", "--lat", "51.5074", "--lon", "-0.1278", "-p", "6"]).unwrap();
        assert_eq!(out, "gcpvj0");
    }

    #[test]
    fn decode_plain() {
        let out = run_args(&["decode", "u"]).unwrap();
        assert_eq!(out, "67.5 22.5");
    }

    #[test]
    fn bbox_plain() {
        let out = run_args(&["bbox", "u"]).unwrap();
        assert_eq!(out, "lat 45 .. 90\nlon 0 .. 45");
    }

    #[test]
    fn decode_error_propagates() {
        let err = run_args(&["decode", "!"]).unwrap_err();
        assert!(matches!(err, CliError::Geohash(_)));
        assert_eq!(err.to_string(), "invalid geohash symbol '!' at position 0");
    }

    #[test]
    fn link_rejects_zero_precision() {
        let err = run_args(&[
            "link", "--from", "0,0", "--to", "1,1", "--precision", "0",
        ])
        .unwrap_err();
        assert!(matches!(err, CliError::Route(_)));
    }

    #[test]
    fn resolve_plain() {
        let out = run_args(&["resolve", "u-7"]).unwrap();
        assert_eq!(out, "from u 67.5 22.5\nto   7 -22.5 -22.5");
    }
}
