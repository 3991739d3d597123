use std::net::SocketAddr;

use itinerary_server::network::Network;
use itinerary_server::planner::SearchConfig;
use itinerary_server::rides::{CsvRideSource, RideSource};
use itinerary_server::web::{AppState, create_router};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let rides_path =
        std::env::var("RIDES_PATH").unwrap_or_else(|_| "itinerary-server/data/rides.csv".into());

    // One bulk load at startup; everything after this is in-memory.
    let source = CsvRideSource::new(&rides_path);
    let records = source
        .load_all()
        .expect("Failed to load the ride timetable");

    let network = Network::from_rides(records.into_iter().map(|r| r.into_ride()));
    let state = AppState::new(network, SearchConfig::default());
    let app = create_router(state);

    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:3000".into())
        .parse()
        .expect("BIND_ADDR must be a socket address");

    println!("Itinerary server listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health             - Health check");
    println!("  GET  /api/trips/shortest - Duration-shortest trip (time-unconstrained)");
    println!("  GET  /api/trips/any      - First time-consistent trip (dfs/bfs)");
    println!("  GET  /api/trips/all      - Bounded trip enumeration");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
