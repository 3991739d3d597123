//! Ride value type.

use chrono::{DateTime, Duration, Utc};

use super::City;

/// A single timetabled ride between two cities.
///
/// A ride is a directed edge with fixed departure and arrival instants and
/// the identifier of the line operating it. Rides are immutable: they are
/// created once from source rows and never mutated.
///
/// Callers must construct rides so that
/// `arrival_time = departure_time + duration`; the ride source validates
/// rows against this before building rides, the domain does not re-check it.
#[derive(Debug, Clone, PartialEq)]
pub struct Ride {
    /// City where the ride starts.
    pub from: City,

    /// City where the ride ends.
    pub to: City,

    /// In-vehicle duration.
    pub duration: Duration,

    /// Instant the ride leaves `from`.
    pub departure_time: DateTime<Utc>,

    /// Instant the ride reaches `to`.
    pub arrival_time: DateTime<Utc>,

    /// Identifier of the line operating this ride.
    pub line_id: String,
}

impl Ride {
    /// Creates a new ride.
    pub fn new(
        from: City,
        to: City,
        duration: Duration,
        departure_time: DateTime<Utc>,
        arrival_time: DateTime<Utc>,
        line_id: impl Into<String>,
    ) -> Self {
        Self {
            from,
            to,
            duration,
            departure_time,
            arrival_time,
            line_id: line_id.into(),
        }
    }

    /// Key defining the timetable order: departure time first, then origin
    /// and destination names as tie-breakers.
    ///
    /// [`Network`](crate::network::Network) keeps every per-city ride index
    /// sorted by this key, and its windowed range queries are only correct
    /// against this order. The key is part of the type's public contract,
    /// not an implementation detail.
    pub fn timetable_key(&self) -> (DateTime<Utc>, &str, &str) {
        (
            self.departure_time,
            self.from.name.as_str(),
            self.to.name.as_str(),
        )
    }
}
