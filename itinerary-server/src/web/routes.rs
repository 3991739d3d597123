//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::{DateTime, Utc};

use crate::network::CityNotFound;
use crate::planner::{Planner, TraversalOrder};

use super::dto::*;
use super::state::AppState;

/// Default maximum rides per enumerated trip.
const DEFAULT_MAX_DEPTH: usize = 10;

/// Default number of trips returned by the enumeration endpoint.
const DEFAULT_LIMIT: usize = 10;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/trips/shortest", get(shortest_trip))
        .route("/api/trips/any", get(any_trip))
        .route("/api/trips/all", get(all_trips))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Duration-shortest trip, unconstrained by departure times.
async fn shortest_trip(
    State(state): State<AppState>,
    Query(req): Query<TripRequest>,
) -> Result<Json<TripResponse>, AppError> {
    let planner = Planner::new(&state.network, &state.config);
    let trip = planner.shortest_trip(&req.from, &req.to)?;

    Ok(Json(TripResponse::from_trip(trip.as_ref())))
}

/// First time-consistent trip, by the requested traversal strategy.
async fn any_trip(
    State(state): State<AppState>,
    Query(req): Query<TripRequest>,
) -> Result<Json<TripResponse>, AppError> {
    let start = parse_start(req.start.as_deref())?;
    let order = parse_strategy(req.strategy.as_deref())?;

    let planner = Planner::new(&state.network, &state.config);
    let trip = planner.any_trip(&req.from, &req.to, start, order)?;

    Ok(Json(TripResponse::from_trip(trip.as_ref())))
}

/// A bounded prefix of the lazy trip enumeration.
async fn all_trips(
    State(state): State<AppState>,
    Query(req): Query<AllTripsRequest>,
) -> Result<Json<AllTripsResponse>, AppError> {
    let start = parse_start(req.start.as_deref())?;
    let max_depth = req.max_depth.unwrap_or(DEFAULT_MAX_DEPTH);
    let limit = req.limit.unwrap_or(DEFAULT_LIMIT);

    let planner = Planner::new(&state.network, &state.config);
    let trips: Vec<_> = planner
        .all_trips(&req.from, &req.to, start, max_depth)?
        .take(limit)
        .collect();

    Ok(Json(AllTripsResponse::from_trips(&trips)))
}

/// Parse the optional start instant, defaulting to now.
fn parse_start(start: Option<&str>) -> Result<DateTime<Utc>, AppError> {
    match start {
        None => Ok(Utc::now()),
        Some(s) => DateTime::parse_from_rfc3339(s)
            .map(|t| t.with_timezone(&Utc))
            .map_err(|_| AppError::BadRequest {
                message: format!("invalid start instant: {s}"),
            }),
    }
}

/// Parse the traversal strategy, defaulting to depth-first.
fn parse_strategy(strategy: Option<&str>) -> Result<TraversalOrder, AppError> {
    match strategy {
        None | Some("dfs") | Some("depth-first") => Ok(TraversalOrder::DepthFirst),
        Some("bfs") | Some("breadth-first") => Ok(TraversalOrder::BreadthFirst),
        Some(other) => Err(AppError::BadRequest {
            message: format!("unknown strategy: {other}"),
        }),
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<CityNotFound> for AppError {
    fn from(e: CityNotFound) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        tracing::warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_parsing() {
        assert_eq!(parse_strategy(None).unwrap(), TraversalOrder::DepthFirst);
        assert_eq!(
            parse_strategy(Some("dfs")).unwrap(),
            TraversalOrder::DepthFirst
        );
        assert_eq!(
            parse_strategy(Some("breadth-first")).unwrap(),
            TraversalOrder::BreadthFirst
        );
        assert!(parse_strategy(Some("dijkstra")).is_err());
    }

    #[test]
    fn start_parsing() {
        let parsed = parse_start(Some("2024-01-01T08:00:00Z")).unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-01-01T08:00:00+00:00");

        assert!(parse_start(Some("tomorrow")).is_err());
        assert!(parse_start(None).is_ok());
    }

    #[test]
    fn city_not_found_maps_to_bad_request() {
        let err: AppError = CityNotFound { name: "X".into() }.into();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }
}
