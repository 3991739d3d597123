//! City value type.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Mean Earth radius in kilometres, used by the haversine formula.
const EARTH_RADIUS_KM: f64 = 6372.8;

/// A city in the ride network.
///
/// Cities are immutable value objects: two cities are the same exactly when
/// their name and coordinates match. The coordinates feed the geographic
/// search heuristic and are never used as an exact cost.
///
/// # Examples
///
/// ```
/// use itinerary_server::domain::City;
///
/// let berlin = City::new("Berlin", 52.5200, 13.4050);
/// let hamburg = City::new("Hamburg", 53.5511, 9.9937);
///
/// let km = berlin.distance_to(&hamburg);
/// assert!((km - 255.0).abs() < 5.0);
/// ```
#[derive(Debug, Clone)]
pub struct City {
    /// Display name, also the key for name lookups.
    pub name: String,

    /// Latitude in degrees.
    pub latitude: f64,

    /// Longitude in degrees.
    pub longitude: f64,
}

impl City {
    /// Creates a new city.
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to another city in kilometres.
    ///
    /// Computed with the haversine formula. The result is deterministic,
    /// symmetric and satisfies the triangle inequality, which the detour
    /// pruning in the trip enumeration relies on. It is a heuristic input
    /// only; rides carry the real costs.
    pub fn distance_to(&self, other: &City) -> f64 {
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + self.latitude.to_radians().cos()
                * other.latitude.to_radians().cos()
                * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

// Equality and hashing go through the coordinate bit patterns: `f64` has no
// derived `Eq`, and cities built from the same source rows are bit-identical.
impl PartialEq for City {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.latitude.to_bits() == other.latitude.to_bits()
            && self.longitude.to_bits() == other.longitude.to_bits()
    }
}

impl Eq for City {}

impl Hash for City {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.latitude.to_bits().hash(state);
        self.longitude.to_bits().hash(state);
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
