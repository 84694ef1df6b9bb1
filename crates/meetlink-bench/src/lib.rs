//! Benchmark fixtures for the Meetlink geohash codec.
//!
//! - [`sample_points`]: deterministic spread of coordinates over the globe
//! - [`sample_hashes`]: those points encoded at a given length

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use meetlink_geohash::{encode, GeoHash, GeoPoint};

/// `n` points on a golden-angle spiral, covering both hemispheres.
pub fn sample_points(n: usize) -> Vec<GeoPoint> {
    const GOLDEN_ANGLE_DEG: f64 = 137.507_764_050_037_85;
    (0..n)
        .map(|i| {
            let t = (i as f64 + 0.5) / n as f64;
            let latitude = (1.0 - 2.0 * t).asin().to_degrees();
            let longitude = (i as f64 * GOLDEN_ANGLE_DEG) % 360.0 - 180.0;
            GeoPoint {
                latitude,
                longitude,
            }
        })
        .collect()
}

/// [`sample_points`] encoded at `length` symbols.
///
/// # Panics
///
/// Panics if `length` is not a valid geohash length.
pub fn sample_hashes(n: usize, length: usize) -> Vec<GeoHash> {
    sample_points(n)
        .into_iter()
        .map(|p| encode(p.latitude, p.longitude, length).expect("sample points are in range"))
        .collect()
}
