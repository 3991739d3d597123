//! Time-respecting reachability search.

use std::collections::{HashSet, VecDeque};

use chrono::{DateTime, Utc};

use crate::domain::{City, Trip};
use crate::network::Network;

use super::state::SearchState;

/// Frontier discipline for the any-trip search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    /// Stack frontier: follows one branch deep before backtracking.
    DepthFirst,

    /// Queue frontier: explores states in non-decreasing hop count.
    BreadthFirst,
}

/// Returns the first time-consistent trip the traversal reaches, or `None`
/// when the frontier is exhausted.
///
/// The result is not necessarily shortest or fastest, only consistent:
/// every ride departs no earlier than the arrival of the ride before it.
/// Cities are marked visited when popped and never revisited, so the
/// traversal terminates on cyclic networks.
pub(crate) fn any_trip(
    network: &Network,
    from: &City,
    to: &City,
    start: DateTime<Utc>,
    order: TraversalOrder,
) -> Option<Trip> {
    let mut visited: HashSet<City> = HashSet::new();
    let mut frontier: VecDeque<SearchState> = VecDeque::new();

    frontier.push_back(SearchState::initial(from.clone(), start));

    loop {
        let state = match order {
            TraversalOrder::DepthFirst => frontier.pop_back(),
            TraversalOrder::BreadthFirst => frontier.pop_front(),
        }?;

        if state.city == *to {
            return state.into_trip();
        }

        if !visited.insert(state.city.clone()) {
            continue;
        }

        for ride in network.outgoing(&state.city) {
            if visited.contains(&ride.to) || ride.departure_time < state.now {
                continue;
            }
            frontier.push_back(state.take(ride));
        }
    }
}
