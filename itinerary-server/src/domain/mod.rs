//! Domain types for the itinerary planner.
//!
//! This module contains the core value objects of the ride network.
//! All types enforce their invariants at construction time, so code that
//! receives these types can trust their validity.

mod city;
mod error;
mod ride;
mod trip;

pub use city::City;
pub use error::DomainError;
pub use ride::Ride;
pub use trip::Trip;
