//! Great-circle distance between coordinate pairs.
//!
//! Haversine formula on a spherical earth. Good to well under 0.5% over
//! the city-scale distances this application cares about, which is far
//! below typical GPS accuracy anyway.

/// Mean earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A (latitude, longitude) pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Latitude in degrees, positive north.
    pub latitude: f64,

    /// Longitude in degrees, positive east.
    pub longitude: f64,
}

impl Point {
    /// Create a point from degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Clamp latitude to [-90, 90] and wrap longitude into [-180, 180].
///
/// NaN passes through unchanged; a NaN coordinate yields a NaN distance
/// rather than a panic.
fn normalize(p: Point) -> (f64, f64) {
    let latitude = p.latitude.clamp(-90.0, 90.0);
    let longitude = if (-180.0..=180.0).contains(&p.longitude) {
        p.longitude
    } else {
        (p.longitude + 180.0).rem_euclid(360.0) - 180.0
    };
    (latitude, longitude)
}

/// Great-circle distance between two points, in meters.
///
/// Commutative, zero for identical points, and well-defined for
/// antimeridian and polar inputs. NaN input produces a NaN distance.
pub fn distance_meters(a: Point, b: Point) -> f64 {
    let (lat1, lon1) = normalize(a);
    let (lat2, lon2) = normalize(b);

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    // h can creep above 1.0 from rounding on near-antipodal points.
    // clamp rather than min: min(NaN, 1.0) returns 1.0.
    let c = 2.0 * h.sqrt().clamp(0.0, 1.0).asin();

    EARTH_RADIUS_M * c
}
