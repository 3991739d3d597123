//! Application state for the web layer.

use std::sync::Arc;

use crate::network::Network;
use crate::planner::SearchConfig;

/// Shared application state.
///
/// The network is built once at startup and only ever read afterwards, so
/// sharing it behind an `Arc` across request handlers needs no locking.
#[derive(Clone)]
pub struct AppState {
    /// The built ride network
    pub network: Arc<Network>,

    /// Itinerary search configuration
    pub config: Arc<SearchConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: Network, config: SearchConfig) -> Self {
        Self {
            network: Arc::new(network),
            config: Arc::new(config),
        }
    }
}
