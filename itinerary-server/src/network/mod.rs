//! The ride network: cities connected by timetabled rides.
//!
//! [`Network`] is the graph the searches run against. Cities are the nodes,
//! rides the edges, and each city's outgoing rides are kept in timetable
//! order so that "rides departing within a window" is a range query over the
//! ordered index rather than a scan of the whole timetable.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::domain::{City, Ride};

/// Error returned when a query references a city the network never saw.
///
/// This is a definite input error, distinct from "no trip found" (which is
/// an absence value, not an error).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("city '{name}' is not part of the network")]
pub struct CityNotFound {
    /// The name that failed to resolve.
    pub name: String,
}

impl CityNotFound {
    fn for_city(city: &City) -> Self {
        Self {
            name: city.name.clone(),
        }
    }
}

/// A network of cities connected by rides.
///
/// The network is built once (via [`Network::from_rides`], or incrementally
/// with [`Network::add_city`] / [`Network::add_ride`]) and then queried.
/// Queries take `&self` and mutation takes `&mut self`, so the build phase
/// and the query phase cannot interleave: sharing the built network between
/// concurrent searches (e.g. behind an `Arc`) is safe without locks because
/// no query mutates adjacency state.
#[derive(Debug, Clone, Default)]
pub struct Network {
    /// Outgoing rides per city, each bucket sorted by the timetable key.
    adjacency: HashMap<City, Vec<Ride>>,
}

impl Network {
    /// Creates an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk constructor: builds the network from a flat ride collection,
    /// auto-creating every endpoint city.
    pub fn from_rides(rides: impl IntoIterator<Item = Ride>) -> Self {
        let mut network = Network::new();
        for ride in rides {
            network.add_ride(ride);
        }

        info!(
            cities = network.city_count(),
            rides = network.ride_count(),
            "built ride network"
        );
        network
    }

    /// Registers a city. Idempotent: a city that is already present keeps
    /// its ride index.
    pub fn add_city(&mut self, city: City) {
        self.adjacency.entry(city).or_default();
    }

    /// Adds a ride, registering both endpoints first.
    ///
    /// No ride is ever rejected for unknown endpoints; missing cities are
    /// created on demand, which keeps the endpoint-registration invariant
    /// without validating the input. The ride is inserted at the position
    /// given by its [`timetable_key`](Ride::timetable_key), keeping the
    /// index ordered.
    pub fn add_ride(&mut self, ride: Ride) {
        self.add_city(ride.to.clone());

        let rides = self.adjacency.entry(ride.from.clone()).or_default();
        let at = rides.partition_point(|existing| existing.timetable_key() < ride.timetable_key());
        rides.insert(at, ride);
    }

    /// Resolves a city by name.
    ///
    /// This is a linear scan over the city set, which is fine for networks
    /// up to the low thousands of cities; index by name before pointing
    /// this at anything bigger.
    ///
    /// # Errors
    ///
    /// Returns [`CityNotFound`] when no city has that name.
    pub fn get_city(&self, name: &str) -> Result<&City, CityNotFound> {
        self.adjacency
            .keys()
            .find(|city| city.name == name)
            .ok_or_else(|| CityNotFound { name: name.into() })
    }

    /// All rides departing from a city, in timetable order.
    ///
    /// # Errors
    ///
    /// Returns [`CityNotFound`] if the city was never added.
    pub fn rides_from(&self, city: &City) -> Result<&[Ride], CityNotFound> {
        self.adjacency
            .get(city)
            .map(Vec::as_slice)
            .ok_or_else(|| CityNotFound::for_city(city))
    }

    /// Rides departing from a city within `[from, until)`.
    ///
    /// Resolved with two binary searches over the ordered index; this is
    /// the primitive that keeps time-windowed enumeration tractable on
    /// large timetables.
    ///
    /// # Errors
    ///
    /// Returns [`CityNotFound`] if the city was never added.
    pub fn rides_from_within(
        &self,
        city: &City,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<&[Ride], CityNotFound> {
        Ok(range(self.rides_from(city)?, from, until))
    }

    /// Iterates over all cities, in no particular order.
    pub fn cities(&self) -> impl Iterator<Item = &City> {
        self.adjacency.keys()
    }

    /// Number of cities in the network.
    pub fn city_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of rides in the network.
    pub fn ride_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Outgoing rides for search loops: unknown cities are unreachable by
    /// the endpoint-registration invariant, so they read as "no rides"
    /// rather than an error.
    pub(crate) fn outgoing(&self, city: &City) -> &[Ride] {
        self.adjacency
            .get(city)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Windowed variant of [`outgoing`](Network::outgoing).
    pub(crate) fn outgoing_within(
        &self,
        city: &City,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> &[Ride] {
        range(self.outgoing(city), from, until)
    }
}

/// The `[from, until)` departure-time slice of a timetable-ordered ride list.
fn range(rides: &[Ride], from: DateTime<Utc>, until: DateTime<Utc>) -> &[Ride] {
    if until <= from {
        return &[];
    }
    let start = rides.partition_point(|r| r.departure_time < from);
    let end = rides.partition_point(|r| r.departure_time < until);
    &rides[start..end]
}
