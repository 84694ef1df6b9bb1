use clap::Parser;
use meetlink_cli::{run, Cli};
use serde_json::Value;

fn run_json(args: &[&str]) -> Value {
    let argv = ["meetlink", "--json"].into_iter().chain(args.iter().copied());
    let cli = Cli::try_parse_from(argv).unwrap();
    serde_json::from_str(&run(&cli).unwrap()).unwrap()
}

#[test]
fn link_report_has_endpoint_shape() {
    let report = run_json(&[
        "link",
        "--from",
        "51.5625,-0.0729",
        "--to",
        "51.5308,-0.1238",
    ]);
    assert_eq!(report["routeId"], "gcpvq6-gcpvjh");
    assert_eq!(report["commuteFrom"]["geohash"], "gcpvq6");
    assert_eq!(report["commuteFrom"]["coordinates"]["latitude"], 51.5625);
    assert_eq!(report["commuteTo"]["geohash"], "gcpvjh");
    assert_eq!(report["commuteTo"]["coordinates"]["longitude"], -0.1238);
}

#[test]
fn resolve_report_includes_bounds() {
    let report = run_json(&["resolve", "U-7"]);
    assert_eq!(report["from"]["geohash"], "u");
    assert_eq!(report["from"]["bounds"]["minLat"], 45.0);
    assert_eq!(report["from"]["bounds"]["maxLon"], 45.0);
    assert_eq!(report["to"]["coordinates"]["latitude"], -22.5);
}

#[test]
fn bbox_report_is_exact() {
    let report = run_json(&["bbox", "gcpvj0"]);
    assert_eq!(report["minLat"], 51.50390625);
    assert_eq!(report["maxLon"], -0.120849609375);
    assert!(report.get("min_lat").is_none());
}

#[test]
fn encode_report_echoes_input() {
    let report = run_json(&["encode", "--lat", "-90", "--lon", "-180", "--precision", "4"]);
    assert_eq!(report["geohash"], "0000");
    assert_eq!(report["coordinates"]["latitude"], -90.0);
}
