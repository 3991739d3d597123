//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Ride, Trip};

/// Request for a single-trip query (`/api/trips/shortest`, `/api/trips/any`).
#[derive(Debug, Deserialize)]
pub struct TripRequest {
    /// Departure city name
    pub from: String,

    /// Arrival city name
    pub to: String,

    /// Start instant, RFC 3339 (defaults to now). Ignored by the
    /// shortest-trip query, which is unconstrained by time.
    pub start: Option<String>,

    /// Traversal strategy for `/api/trips/any`: "dfs" (default) or "bfs".
    pub strategy: Option<String>,
}

/// Request for the trip enumeration (`/api/trips/all`).
#[derive(Debug, Deserialize)]
pub struct AllTripsRequest {
    /// Departure city name
    pub from: String,

    /// Arrival city name
    pub to: String,

    /// Start instant, RFC 3339 (defaults to now)
    pub start: Option<String>,

    /// Maximum rides per trip
    pub max_depth: Option<usize>,

    /// Maximum number of trips to return
    pub limit: Option<usize>,
}

/// A ride in a response.
#[derive(Debug, Serialize)]
pub struct RideResult {
    /// Departure city name
    pub from: String,

    /// Arrival city name
    pub to: String,

    /// Line operating the ride
    pub line_id: String,

    /// Departure instant, RFC 3339
    pub departure_time: String,

    /// Arrival instant, RFC 3339
    pub arrival_time: String,

    /// Ride duration in seconds
    pub duration_seconds: i64,
}

impl RideResult {
    fn from_ride(ride: &Ride) -> Self {
        Self {
            from: ride.from.name.clone(),
            to: ride.to.name.clone(),
            line_id: ride.line_id.clone(),
            departure_time: ride.departure_time.to_rfc3339(),
            arrival_time: ride.arrival_time.to_rfc3339(),
            duration_seconds: ride.duration.num_seconds(),
        }
    }
}

/// A trip in a response.
#[derive(Debug, Serialize)]
pub struct TripResult {
    /// Departure city name
    pub from: String,

    /// Arrival city name
    pub to: String,

    /// Departure instant of the first ride, RFC 3339
    pub start_time: String,

    /// Arrival instant of the last ride, RFC 3339
    pub end_time: String,

    /// Total in-vehicle duration in seconds
    pub duration_seconds: i64,

    /// Number of rides
    pub ride_count: usize,

    /// Number of line changes
    pub line_transfers: usize,

    /// The rides, in order
    pub rides: Vec<RideResult>,
}

impl TripResult {
    /// Map a domain trip into its response shape.
    pub fn from_trip(trip: &Trip) -> Self {
        Self {
            from: trip.origin().name.clone(),
            to: trip.destination().name.clone(),
            start_time: trip.start_time().to_rfc3339(),
            end_time: trip.end_time().to_rfc3339(),
            duration_seconds: trip.duration().num_seconds(),
            ride_count: trip.ride_count(),
            line_transfers: trip.line_transfers(),
            rides: trip.rides().iter().map(RideResult::from_ride).collect(),
        }
    }
}

/// Response for single-trip queries.
#[derive(Debug, Serialize)]
pub struct TripResponse {
    /// Whether an itinerary was found
    pub found: bool,

    /// The itinerary, when found
    pub trip: Option<TripResult>,
}

impl TripResponse {
    /// Build the response from an optional trip.
    pub fn from_trip(trip: Option<&Trip>) -> Self {
        Self {
            found: trip.is_some(),
            trip: trip.map(TripResult::from_trip),
        }
    }
}

/// Response for the trip enumeration.
#[derive(Debug, Serialize)]
pub struct AllTripsResponse {
    /// Whether any itinerary was found
    pub found: bool,

    /// Number of itineraries returned
    pub count: usize,

    /// The itineraries, in discovery order
    pub trips: Vec<TripResult>,
}

impl AllTripsResponse {
    /// Build the response from the enumerated trips.
    pub fn from_trips(trips: &[Trip]) -> Self {
        Self {
            found: !trips.is_empty(),
            count: trips.len(),
            trips: trips.iter().map(TripResult::from_trip).collect(),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error description
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{City, Ride};
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn trip_response_shapes() {
        let dep = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
        let ride = Ride::new(
            City::new("Berlin", 52.5200, 13.4050),
            City::new("Hamburg", 53.5511, 9.9937),
            Duration::hours(1),
            dep,
            dep + Duration::hours(1),
            "ICE1",
        );
        let trip = Trip::new(vec![ride]).unwrap();

        let found = TripResponse::from_trip(Some(&trip));
        assert!(found.found);
        let result = found.trip.unwrap();
        assert_eq!(result.from, "Berlin");
        assert_eq!(result.to, "Hamburg");
        assert_eq!(result.duration_seconds, 3600);
        assert_eq!(result.ride_count, 1);
        assert_eq!(result.rides[0].departure_time, "2024-01-01T08:00:00+00:00");

        let absent = TripResponse::from_trip(None);
        assert!(!absent.found);
        assert!(absent.trip.is_none());
    }

    #[test]
    fn all_trips_response_counts() {
        let response = AllTripsResponse::from_trips(&[]);
        assert!(!response.found);
        assert_eq!(response.count, 0);
        assert!(response.trips.is_empty());
    }

    #[test]
    fn absent_trip_serializes_with_null() {
        let value = serde_json::to_value(TripResponse::from_trip(None)).unwrap();
        assert_eq!(value["found"], serde_json::json!(false));
        assert!(value["trip"].is_null());
    }
}
