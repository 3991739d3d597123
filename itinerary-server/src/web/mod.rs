//! Web layer for the itinerary server.
//!
//! Provides the HTTP endpoints for the three trip queries. This layer is a
//! thin translation around the planner: it parses query parameters, maps
//! domain results into response DTOs and turns
//! [`CityNotFound`](crate::network::CityNotFound) into a bad-request
//! response.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
