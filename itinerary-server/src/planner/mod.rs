//! Itinerary search over a built ride network.
//!
//! Three search families run against [`Network`]: a duration-optimal search
//! that ignores real departure times, a time-respecting reachability search
//! in two traversal orders, and a lazily enumerated, heuristically pruned
//! trip stream. They share one traversal-state shape and one transition
//! rule; what differs is the frontier discipline and the pruning.

mod all_trips;
mod any_trip;
mod config;
mod shortest;
mod state;


pub use all_trips::AllTrips;
pub use any_trip::TraversalOrder;
pub use config::SearchConfig;

use chrono::{DateTime, Utc};

use crate::domain::Trip;
use crate::network::{CityNotFound, Network};

/// Itinerary search facade over a built [`Network`].
///
/// Resolves city names, then runs one of the search algorithms. The network
/// is only read; a planner can be created per query or shared freely across
/// concurrent queries.
pub struct Planner<'a> {
    network: &'a Network,
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a planner over a built network.
    pub fn new(network: &'a Network, config: &'a SearchConfig) -> Self {
        Self { network, config }
    }

    /// The trip with the smallest total ride duration, unconstrained by
    /// real departure times.
    ///
    /// This is the deliberately simplified baseline: rides chain on
    /// duration alone, so the result may not be realizable against the
    /// timetable. Use [`any_trip`](Planner::any_trip) or
    /// [`all_trips`](Planner::all_trips) for time-consistent itineraries.
    ///
    /// # Errors
    ///
    /// Returns [`CityNotFound`] if either name is unknown; an unreachable
    /// destination is `Ok(None)`, not an error.
    pub fn shortest_trip(&self, from: &str, to: &str) -> Result<Option<Trip>, CityNotFound> {
        let from = self.network.get_city(from)?.clone();
        let to = self.network.get_city(to)?.clone();
        Ok(shortest::shortest_trip(self.network, &from, &to))
    }

    /// The first time-consistent trip found by the requested traversal
    /// order, starting no earlier than `start`.
    ///
    /// # Errors
    ///
    /// Returns [`CityNotFound`] if either name is unknown.
    pub fn any_trip(
        &self,
        from: &str,
        to: &str,
        start: DateTime<Utc>,
        order: TraversalOrder,
    ) -> Result<Option<Trip>, CityNotFound> {
        let from = self.network.get_city(from)?.clone();
        let to = self.network.get_city(to)?.clone();
        Ok(any_trip::any_trip(self.network, &from, &to, start, order))
    }

    /// Lazy enumeration of time-consistent trips of at most `max_depth`
    /// rides, pruned by the configured detour and departure windows.
    ///
    /// The returned iterator computes each trip on demand; taking only a
    /// prefix does only the work for that prefix.
    ///
    /// # Errors
    ///
    /// Returns [`CityNotFound`] if either name is unknown.
    pub fn all_trips(
        &self,
        from: &str,
        to: &str,
        start: DateTime<Utc>,
        max_depth: usize,
    ) -> Result<AllTrips<'a>, CityNotFound> {
        let from = self.network.get_city(from)?.clone();
        let to = self.network.get_city(to)?.clone();
        Ok(AllTrips::new(
            self.network,
            from,
            to,
            start,
            max_depth,
            self.config,
        ))
    }
}
