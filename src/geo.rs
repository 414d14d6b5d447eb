//! Great-circle distance on a spherical Earth approximation.
//!
//! Good enough for ranking inspectors and ordering daily stops; this is not a
//! road-network distance and deliberately ignores routing.

use serde::{Deserialize, Serialize};

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in IEEE-754 degrees.
///
/// Coordinates travel together: entities without a location carry
/// `Option<Coord>`, never a half-populated pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lng: f64,
}

impl Coord {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Haversine distance between two points in kilometers.
///
/// Symmetric, and zero for identical inputs. Out-of-range degrees are the
/// caller's responsibility; the raw formula is applied as-is.
pub fn distance_km(a: Coord, b: Coord) -> f64 {
    let lat1_rad = a.lat.to_radians();
    let lat2_rad = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lng = (b.lng - a.lng).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().asin();

    EARTH_RADIUS_KM * c
}
