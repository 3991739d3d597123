//! Itinerary query server over a timetabled ride network.
//!
//! Answers queries of the form: given a departure city, an arrival city and
//! a start instant, find one itinerary, the duration-shortest itinerary, or
//! a bounded set of itineraries consistent with real departure times and
//! line continuity.

pub mod domain;
pub mod network;
pub mod planner;
pub mod rides;
pub mod web;
