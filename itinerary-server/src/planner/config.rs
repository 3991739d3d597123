//! Search configuration for the itinerary planner.

use chrono::Duration;

/// Configuration parameters for itinerary search.
///
/// These bound the trip enumeration; the defaults reproduce the production
/// behavior. They are configuration rather than constants so that test
/// suites can vary them. The detour heuristic is intentionally not
/// admissible: trips found under it may be suboptimal, and tightening it
/// changes which trips are observable.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// How far after the query's start instant the first ride of a trip
    /// may depart (hours).
    pub departure_window_hours: i64,

    /// Maximum wait between arriving in a city and departing on the next
    /// ride of a trip (hours).
    pub transfer_window_hours: i64,

    /// Geographic detour bound: an intermediate stop is only followed while
    /// `distance(origin, stop) + distance(stop, destination)` stays below
    /// this factor times the direct origin-destination distance.
    pub detour_factor: f64,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(departure_window_hours: i64, transfer_window_hours: i64, detour_factor: f64) -> Self {
        Self {
            departure_window_hours,
            transfer_window_hours,
            detour_factor,
        }
    }

    /// Returns the departure window as a Duration.
    pub fn departure_window(&self) -> Duration {
        Duration::hours(self.departure_window_hours)
    }

    /// Returns the transfer window as a Duration.
    pub fn transfer_window(&self) -> Duration {
        Duration::hours(self.transfer_window_hours)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            departure_window_hours: 24,
            transfer_window_hours: 5,
            detour_factor: 2.0,
        }
    }
}
