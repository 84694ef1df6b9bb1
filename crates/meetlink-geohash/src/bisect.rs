//! Alternating-axis interval bisection shared by encoder and decoder.
//!
//! A [`Bisector`] tracks the cell known so far. Each bit halves the active
//! axis (`1` keeps the upper half, `0` the lower half) and then switches
//! axis. The first bit always refines longitude.

use crate::alphabet::BITS_PER_SYMBOL;
use crate::types::{BoundingBox, GeoPoint};

/// Coordinate refined by the next bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// East-west; refined by even bit positions.
    Longitude,
    /// North-south; refined by odd bit positions.
    Latitude,
}

impl Axis {
    /// The other axis.
    #[inline]
    pub fn toggle(self) -> Self {
        match self {
            Self::Longitude => Self::Latitude,
            Self::Latitude => Self::Longitude,
        }
    }
}

/// Incremental state of one bisection run.
///
/// # Examples
///
/// ```
/// use meetlink_geohash::{Axis, Bisector};
///
/// let mut b = Bisector::new();
/// b.push_bit(true); // longitude: keep [0, 180]
/// assert_eq!(b.axis(), Axis::Latitude);
/// b.push_bit(false); // latitude: keep [-90, 0]
///
/// let cell = b.into_bounds();
/// assert_eq!((cell.min_lon, cell.max_lon), (0.0, 180.0));
/// assert_eq!((cell.min_lat, cell.max_lat), (-90.0, 0.0));
/// ```
#[derive(Clone, Debug)]
pub struct Bisector {
    bounds: BoundingBox,
    axis: Axis,
}

impl Bisector {
    /// Starts from the whole globe, refining longitude first.
    pub fn new() -> Self {
        Self {
            bounds: BoundingBox::WORLD,
            axis: Axis::Longitude,
        }
    }

    /// Axis the next bit will refine.
    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Current cell.
    #[inline]
    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    /// Applies a known bit: `true` keeps the upper half of the active axis.
    #[inline]
    pub fn push_bit(&mut self, bit: bool) {
        let (min, max) = match self.axis {
            Axis::Longitude => (&mut self.bounds.min_lon, &mut self.bounds.max_lon),
            Axis::Latitude => (&mut self.bounds.min_lat, &mut self.bounds.max_lat),
        };
        let mid = (*min + *max) / 2.0;
        if bit {
            *min = mid;
        } else {
            *max = mid;
        }
        self.axis = self.axis.toggle();
    }

    /// Derives the next bit from `point` and applies it.
    ///
    /// The bit is `1` only when the coordinate is strictly above the
    /// midpoint, so a point on a cell edge falls into the lower cell.
    #[inline]
    pub fn split(&mut self, point: GeoPoint) -> bool {
        let (coord, min, max) = match self.axis {
            Axis::Longitude => (point.longitude, self.bounds.min_lon, self.bounds.max_lon),
            Axis::Latitude => (point.latitude, self.bounds.min_lat, self.bounds.max_lat),
        };
        let bit = coord > (min + max) / 2.0;
        self.push_bit(bit);
        bit
    }

    /// Splits five times and packs the bits MSB-first into a 5-bit value.
    #[inline]
    pub fn split_symbol(&mut self, point: GeoPoint) -> u8 {
        let mut value = 0u8;
        for _ in 0..BITS_PER_SYMBOL {
            value = (value << 1) | u8::from(self.split(point));
        }
        value
    }

    /// Applies the five bits of a symbol value, most significant first.
    #[inline]
    pub fn push_symbol(&mut self, value: u8) {
        for shift in (0..BITS_PER_SYMBOL).rev() {
            self.push_bit((value >> shift) & 1 == 1);
        }
    }

    /// Finishes the run, returning the cell.
    #[inline]
    pub fn into_bounds(self) -> BoundingBox {
        self.bounds
    }
}

impl Default for Bisector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_alternates_per_bit() {
        let mut b = Bisector::new();
        assert_eq!(b.axis(), Axis::Longitude);
        b.push_bit(false);
        assert_eq!(b.axis(), Axis::Latitude);
        b.push_bit(false);
        assert_eq!(b.axis(), Axis::Longitude);
    }

    #[test]
    fn axis_after_symbol_alternates() {
        // Five bits per symbol: the second symbol starts on latitude.
        let mut b = Bisector::new();
        b.push_symbol(0);
        assert_eq!(b.axis(), Axis::Latitude);
        b.push_symbol(0);
        assert_eq!(b.axis(), Axis::Longitude);
    }

    #[test]
    fn push_symbol_u_hand_trace() {
        // 'u' = 26 = 0b11010: lon 1, lat 1, lon 0, lat 1, lon 0.
        let mut b = Bisector::new();
        b.push_symbol(26);
        let cell = b.into_bounds();
        assert_eq!(cell.min_lon, 0.0);
        assert_eq!(cell.max_lon, 45.0);
        assert_eq!(cell.min_lat, 45.0);
        assert_eq!(cell.max_lat, 90.0);
    }

    #[test]
    fn split_and_push_are_dual() {
        let point = GeoPoint {
            latitude: 51.5074,
            longitude: -0.1278,
        };
        let mut enc = Bisector::new();
        let mut dec = Bisector::new();
        for _ in 0..6 {
            let value = enc.split_symbol(point);
            dec.push_symbol(value);
        }
        assert_eq!(enc.bounds(), dec.bounds());
        assert!(dec.bounds().contains(point));
    }

    #[test]
    fn edge_point_goes_to_lower_half() {
        let mut b = Bisector::new();
        let bit = b.split(GeoPoint {
            latitude: 0.0,
            longitude: 0.0,
        });
        assert!(!bit);
        assert_eq!(b.bounds().max_lon, 0.0);
    }

    #[test]
    fn upper_limit_goes_to_upper_half() {
        let mut b = Bisector::new();
        let value = b.split_symbol(GeoPoint {
            latitude: 90.0,
            longitude: 180.0,
        });
        assert_eq!(value, 31);
    }
}
