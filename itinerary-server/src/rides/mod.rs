//! Ride source: bulk loading of timetable rows.
//!
//! The network is built from flat ride rows produced by a [`RideSource`].
//! The source is consulted exactly once, at startup; everything after that
//! runs against the in-memory [`Network`](crate::network::Network).

mod csv;

pub use self::csv::CsvRideSource;

use chrono::{DateTime, Duration, Utc};

use crate::domain::{City, Ride};

/// A flat timetable row, as the ride source hands it over.
///
/// Coordinates are optional in the source data; rows without them place the
/// city at coordinate (0, 0). That keeps the network total (dropping such
/// rows would silently shrink it) at the cost of a meaningless geographic
/// heuristic for those cities.
#[derive(Debug, Clone, PartialEq)]
pub struct RideRecord {
    pub from_name: String,
    pub to_name: String,
    pub duration_seconds: i64,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub line_id: String,
    pub from_latitude: Option<f64>,
    pub from_longitude: Option<f64>,
    pub to_latitude: Option<f64>,
    pub to_longitude: Option<f64>,
}

impl RideRecord {
    /// Convert the row into a domain ride.
    pub fn into_ride(self) -> Ride {
        let from = City::new(
            self.from_name,
            self.from_latitude.unwrap_or(0.0),
            self.from_longitude.unwrap_or(0.0),
        );
        let to = City::new(
            self.to_name,
            self.to_latitude.unwrap_or(0.0),
            self.to_longitude.unwrap_or(0.0),
        );

        Ride::new(
            from,
            to,
            Duration::seconds(self.duration_seconds),
            self.departure_time,
            self.arrival_time,
            self.line_id,
        )
    }
}

/// Errors from loading ride data.
#[derive(Debug, thiserror::Error)]
pub enum RideSourceError {
    /// Reading the source failed
    #[error("failed to read ride data: {0}")]
    Io(#[from] std::io::Error),

    /// Decoding a row failed
    #[error("failed to parse ride data: {0}")]
    Csv(#[from] ::csv::Error),
}

/// A bulk provider of timetable rows.
///
/// This abstraction keeps the network-building code independent of where
/// rows come from, so tests can substitute an in-memory source.
pub trait RideSource {
    /// Load every ride row the source has.
    fn load_all(&self) -> Result<Vec<RideRecord>, RideSourceError>;
}
