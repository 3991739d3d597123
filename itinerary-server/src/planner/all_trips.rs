//! Lazily enumerated, heuristically pruned itineraries.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};

use crate::domain::{City, Ride, Trip};
use crate::network::Network;

use super::config::SearchConfig;

/// Lazy stream of time-consistent trips from an origin to a destination.
///
/// Produced by [`Planner::all_trips`](super::Planner::all_trips). The
/// underlying traversal is a depth-first search with backtracking, driven by
/// an explicit frame stack so that each call to `next()` resumes exactly
/// where the previous trip was emitted. Consuming only the first `k` trips
/// does only the work needed to produce those `k`; dropping the iterator
/// abandons the rest. The traversal is not restartable: a fresh call to
/// `all_trips` starts from scratch.
///
/// Three pruning rules apply at every expansion step:
///
/// 1. a trip may contain at most `max_depth` rides;
/// 2. an intermediate stop is only followed while it stays inside the
///    geographic corridor given by the configured detour factor;
/// 3. the first ride must depart within the departure window of the start
///    instant, every later ride within the transfer window of the previous
///    arrival.
///
/// Candidates surviving the filters are explored in ascending distance to
/// the destination, a greedy ordering: the trips come out roughly
/// best-first but without any optimality guarantee. Before pruning the
/// search space is exponential in the branching factor; the windows and the
/// corridor keep it practical for typical timetable densities.
pub struct AllTrips<'a> {
    network: &'a Network,
    origin: City,
    destination: City,
    direct_distance: f64,
    max_depth: usize,
    transfer_window: Duration,
    detour_factor: f64,

    /// Rides along the current path, sentinel excluded.
    path: Vec<Ride>,
    /// Cities arrived at along the current path.
    visited: HashSet<City>,
    /// One frame per open expansion step, outermost first.
    stack: Vec<Frame>,
}

/// Pending candidates of one expansion step.
struct Frame {
    /// Ride taken to open this frame; `None` for the origin frame.
    entered_by: Option<Ride>,
    candidates: Vec<Ride>,
    next: usize,
}

impl<'a> AllTrips<'a> {
    pub(crate) fn new(
        network: &'a Network,
        origin: City,
        destination: City,
        start: DateTime<Utc>,
        max_depth: usize,
        config: &SearchConfig,
    ) -> Self {
        let direct_distance = origin.distance_to(&destination);

        let mut all = Self {
            network,
            origin: origin.clone(),
            destination,
            direct_distance,
            max_depth,
            transfer_window: config.transfer_window(),
            detour_factor: config.detour_factor,
            path: Vec::new(),
            visited: HashSet::new(),
            stack: Vec::new(),
        };

        // A zero-duration self-ride at the origin, timestamped at the start
        // instant, lets the first expansion share the code path of every
        // later one. It never appears in a yielded trip.
        let sentinel = Ride::new(
            origin.clone(),
            origin,
            Duration::zero(),
            start,
            start,
            "",
        );
        let candidates = all.candidates_after(&sentinel, config.departure_window());
        all.stack.push(Frame {
            entered_by: None,
            candidates,
            next: 0,
        });

        all
    }

    /// Rides eligible to follow `ride`, ordered by remaining distance.
    fn candidates_after(&self, ride: &Ride, window: Duration) -> Vec<Ride> {
        let from = ride.arrival_time;

        let mut candidates: Vec<Ride> = self
            .network
            .outgoing_within(&ride.to, from, from + window)
            .iter()
            .filter(|r| !self.visited.contains(&r.to) && self.inside_corridor(r))
            .cloned()
            .collect();

        candidates.sort_by(|a, b| {
            a.to.distance_to(&self.destination)
                .total_cmp(&b.to.distance_to(&self.destination))
        });
        candidates
    }

    /// Corridor check: following `ride` must not stretch the route beyond
    /// `detour_factor` times the direct origin-destination distance.
    fn inside_corridor(&self, ride: &Ride) -> bool {
        self.origin.distance_to(&ride.to) + ride.to.distance_to(&self.destination)
            < self.detour_factor * self.direct_distance
    }

    /// Undo the ride that opened the top frame and discard the frame.
    fn backtrack(&mut self) {
        if let Some(frame) = self.stack.pop() {
            if let Some(ride) = frame.entered_by {
                self.path.pop();
                self.visited.remove(&ride.to);
            }
        }
    }
}

impl Iterator for AllTrips<'_> {
    type Item = Trip;

    fn next(&mut self) -> Option<Trip> {
        while let Some(frame) = self.stack.last_mut() {
            // A full-length path cannot be extended by any candidate.
            if self.path.len() >= self.max_depth || frame.next >= frame.candidates.len() {
                self.backtrack();
                continue;
            }

            let ride = frame.candidates[frame.next].clone();
            frame.next += 1;

            if ride.to == self.destination {
                // Yield-leaf: emit and stay on this frame, so deeper trips
                // through the destination are never generated.
                self.path.push(ride);
                let trip = Trip::new(self.path.clone()).ok();
                self.path.pop();
                if trip.is_some() {
                    return trip;
                }
                continue;
            }

            self.visited.insert(ride.to.clone());
            let candidates = self.candidates_after(&ride, self.transfer_window);
            self.path.push(ride.clone());
            self.stack.push(Frame {
                entered_by: Some(ride),
                candidates,
                next: 0,
            });
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, hour, 0, 0).unwrap()
    }

    // A small corridor of cities on a west-east line, roughly 100 km apart,
    // two off-axis cities inside the corridor, and one far-off outlier.
    fn city(name: &str) -> City {
        match name {
            "A" => City::new("A", 50.0, 8.0),
            "B" => City::new("B", 50.0, 9.4),
            "C" => City::new("C", 50.0, 10.8),
            "D" => City::new("D", 50.0, 12.2),
            "E" => City::new("E", 50.4, 9.4),
            "N" => City::new("N", 51.3, 8.0),
            "Far" => City::new("Far", 58.0, 9.0),
            other => City::new(other, 0.0, 0.0),
        }
    }

    fn ride(from: &str, to: &str, dep: u32, hours: i64, line: &str) -> Ride {
        Ride::new(
            city(from),
            city(to),
            Duration::hours(hours),
            at(dep),
            at(dep) + Duration::hours(hours),
            line,
        )
    }

    fn all_trips(network: &Network, from: &str, to: &str, start: u32, depth: usize) -> Vec<Trip> {
        AllTrips::new(
            network,
            city(from),
            city(to),
            at(start),
            depth,
            &SearchConfig::default(),
        )
        .collect()
    }

    #[test]
    fn enumerates_direct_and_indirect_trips() {
        let network = Network::from_rides([
            ride("A", "B", 8, 1, "L1"),
            ride("B", "C", 10, 1, "L2"),
            ride("A", "C", 9, 3, "L3"),
        ]);

        let trips = all_trips(&network, "A", "C", 8, 5);
        assert_eq!(trips.len(), 2);

        for trip in &trips {
            assert_eq!(trip.origin().name, "A");
            assert_eq!(trip.destination().name, "C");
            for pair in trip.rides().windows(2) {
                assert_eq!(pair[0].to, pair[1].from);
                assert!(pair[1].departure_time >= pair[0].arrival_time);
            }
        }
    }

    #[test]
    fn respects_the_depth_bound() {
        let network = Network::from_rides([
            ride("A", "B", 8, 1, "L1"),
            ride("B", "C", 10, 1, "L2"),
            ride("C", "D", 12, 1, "L3"),
        ]);

        assert!(all_trips(&network, "A", "D", 8, 2).is_empty());

        let trips = all_trips(&network, "A", "D", 8, 3);
        assert_eq!(trips.len(), 1);
        assert_eq!(trips[0].ride_count(), 3);
    }

    #[test]
    fn deeper_bound_only_adds_trips() {
        let network = Network::from_rides([
            ride("A", "B", 8, 1, "L1"),
            ride("B", "C", 10, 1, "L2"),
            ride("A", "C", 9, 3, "L3"),
            ride("A", "E", 8, 1, "L4"),
            ride("E", "B", 9, 1, "L5"),
        ]);

        let shallow = all_trips(&network, "A", "C", 8, 2);
        let deep = all_trips(&network, "A", "C", 8, 4);

        assert_eq!(shallow.len(), 2);
        assert_eq!(deep.len(), 3);
        for trip in &shallow {
            assert!(deep.contains(trip), "deepening dropped a trip");
        }
    }

    #[test]
    fn prunes_stops_outside_the_corridor() {
        // The detour through Far is a massive geographic excursion; the
        // in-corridor route survives.
        let network = Network::from_rides([
            ride("A", "Far", 8, 1, "L1"),
            ride("Far", "C", 10, 1, "L2"),
            ride("A", "B", 8, 1, "L3"),
            ride("B", "C", 10, 1, "L4"),
        ]);

        let trips = all_trips(&network, "A", "C", 8, 5);
        assert_eq!(trips.len(), 1);
        assert!(trips[0].rides().iter().all(|r| r.to.name != "Far"));
    }

    #[test]
    fn first_ride_limited_to_the_departure_window() {
        let network = Network::from_rides([
            ride("A", "B", 8, 1, "L1"),
            ride("B", "C", 10, 1, "L2"),
            // Second departure two days later, outside the 24h window.
            Ride::new(
                city("A"),
                city("B"),
                Duration::hours(1),
                at(8) + Duration::days(2),
                at(9) + Duration::days(2),
                "L1",
            ),
            Ride::new(
                city("B"),
                city("C"),
                Duration::hours(1),
                at(10) + Duration::days(2),
                at(11) + Duration::days(2),
                "L2",
            ),
        ]);

        let trips = all_trips(&network, "A", "C", 8, 5);
        assert_eq!(trips.len(), 1);
        assert_eq!(trips[0].start_time(), at(8));
    }

    #[test]
    fn transfers_limited_to_the_transfer_window() {
        // The connection leaves 6h after arrival, beyond the 5h window.
        let network = Network::from_rides([
            ride("A", "B", 8, 1, "L1"),
            ride("B", "C", 15, 1, "L2"),
        ]);

        assert!(all_trips(&network, "A", "C", 8, 5).is_empty());
    }

    #[test]
    fn closer_candidates_are_explored_first() {
        // B is much closer to C than N; the greedy ordering tries B first,
        // so the B-route is emitted first even though the N-rides were
        // added to the network first.
        let network = Network::from_rides([
            ride("A", "N", 8, 1, "L1"),
            ride("N", "C", 10, 1, "L2"),
            ride("A", "B", 8, 1, "L3"),
            ride("B", "C", 10, 1, "L4"),
        ]);

        let trips = all_trips(&network, "A", "C", 8, 5);
        assert_eq!(trips.len(), 2);
        assert_eq!(trips[0].rides()[0].to.name, "B");
    }

    #[test]
    fn consuming_a_prefix_is_lazy() {
        let network = Network::from_rides([
            ride("A", "B", 8, 1, "L1"),
            ride("B", "C", 10, 1, "L2"),
            ride("A", "C", 9, 3, "L3"),
        ]);

        let mut iter = AllTrips::new(
            &network,
            city("A"),
            city("C"),
            at(8),
            5,
            &SearchConfig::default(),
        );

        let first = iter.next();
        assert!(first.is_some());
        // Dropping the iterator here abandons the remaining trips.
        drop(iter);
    }

    #[test]
    fn no_trips_from_an_isolated_origin() {
        let network = Network::from_rides([ride("B", "C", 10, 1, "L2")]);
        assert!(all_trips(&network, "A", "C", 8, 5).is_empty());
    }

    #[test]
    fn origin_equals_destination_yields_nothing() {
        let network = Network::from_rides([
            ride("A", "B", 8, 1, "L1"),
            ride("B", "A", 10, 1, "L2"),
        ]);

        assert!(all_trips(&network, "A", "A", 8, 5).is_empty());
    }
}
