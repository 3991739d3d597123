//! Shared traversal state for the search algorithms.

use chrono::{DateTime, Duration, Utc};

use crate::domain::{City, Ride, Trip};

/// One point in a traversal: the current city, the rides taken to reach it,
/// the arrival instant there and the accumulated ride duration.
///
/// All searches share one transition rule: from a state, a ride may be taken
/// when it departs from the state's city no earlier than `now`; the
/// successor arrives at the ride's destination at the ride's arrival time.
#[derive(Debug, Clone)]
pub(crate) struct SearchState {
    pub city: City,
    pub rides: Vec<Ride>,
    pub now: DateTime<Utc>,
    pub duration: Duration,
}

impl SearchState {
    /// State a search begins in: at the origin, no rides taken.
    pub fn initial(city: City, start: DateTime<Utc>) -> Self {
        Self {
            city,
            rides: Vec::new(),
            now: start,
            duration: Duration::zero(),
        }
    }

    /// Successor state after taking `ride`.
    pub fn take(&self, ride: &Ride) -> Self {
        let mut rides = self.rides.clone();
        rides.push(ride.clone());

        Self {
            city: ride.to.clone(),
            rides,
            now: ride.arrival_time,
            duration: self.duration + ride.duration,
        }
    }

    /// The trip this state represents, or `None` for the initial state
    /// (an empty trip is unrepresentable).
    pub fn into_trip(self) -> Option<Trip> {
        Trip::new(self.rides).ok()
    }
}
