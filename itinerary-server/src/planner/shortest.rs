//! Duration-optimal search, unconstrained by departure times.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use chrono::{DateTime, Duration, Utc};

use crate::domain::{City, Trip};
use crate::network::Network;

use super::state::SearchState;

/// Heap entry ordered by accumulated duration, with the comparison flipped
/// so the max-heap pops the smallest duration first.
struct QueueEntry {
    state: SearchState,
}

impl QueueEntry {
    fn duration(&self) -> Duration {
        self.state.duration
    }
}

impl Eq for QueueEntry {}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.duration() == other.duration()
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.duration().cmp(&self.duration())
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Best-first search for the trip with the smallest total ride duration.
///
/// Departure-time feasibility is deliberately ignored: rides chain on
/// duration alone, and the result may not be realizable against the real
/// timetable. A per-city best-duration table prunes dominated states.
pub(crate) fn shortest_trip(network: &Network, from: &City, to: &City) -> Option<Trip> {
    let mut best: HashMap<City, Duration> = HashMap::new();
    let mut queue: BinaryHeap<QueueEntry> = BinaryHeap::new();

    best.insert(from.clone(), Duration::zero());
    // The instant is never consulted by this search; any seed works.
    queue.push(QueueEntry {
        state: SearchState::initial(from.clone(), DateTime::<Utc>::MIN_UTC),
    });

    while let Some(QueueEntry { state }) = queue.pop() {
        if state.city == *to {
            return state.into_trip();
        }

        // Stale entry: a cheaper route to this city was already expanded.
        if best.get(&state.city).is_some_and(|d| state.duration > *d) {
            continue;
        }

        for ride in network.outgoing(&state.city) {
            let next = state.duration + ride.duration;
            if best.get(&ride.to).map_or(true, |d| next < *d) {
                best.insert(ride.to.clone(), next);
                queue.push(QueueEntry {
                    state: state.take(ride),
                });
            }
        }
    }

    None
}
