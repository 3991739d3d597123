//! CSV-backed ride source.
//!
//! Reads a timetable CSV with one ride per row. Expected header:
//!
//! ```text
//! from_name,to_name,duration_seconds,departure_time,arrival_time,line_id,\
//! from_latitude,from_longitude,to_latitude,to_longitude
//! ```
//!
//! Timestamps are RFC 3339; the coordinate columns may be empty. Rows that
//! don't satisfy `arrival_time = departure_time + duration` are rejected
//! here, at load time, so the domain never sees an inconsistent ride.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use tracing::{info, warn};

use super::{RideRecord, RideSource, RideSourceError};

/// Raw CSV row, before timestamp parsing and validation.
#[derive(Debug, Deserialize)]
struct CsvRow {
    from_name: String,
    to_name: String,
    duration_seconds: i64,
    departure_time: String,
    arrival_time: String,
    line_id: String,
    #[serde(default)]
    from_latitude: Option<f64>,
    #[serde(default)]
    from_longitude: Option<f64>,
    #[serde(default)]
    to_latitude: Option<f64>,
    #[serde(default)]
    to_longitude: Option<f64>,
}

/// Ride source reading a CSV timetable file.
pub struct CsvRideSource {
    path: PathBuf,
}

impl CsvRideSource {
    /// Create a source reading from `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl RideSource for CsvRideSource {
    fn load_all(&self) -> Result<Vec<RideRecord>, RideSourceError> {
        let mut reader = csv::Reader::from_path(&self.path)?;

        let mut records = Vec::new();
        let mut skipped = 0usize;

        for (index, row) in reader.deserialize::<CsvRow>().enumerate() {
            let row = row?;
            match validate(row) {
                Ok(record) => records.push(record),
                Err(reason) => {
                    // Row numbers are 1-based and skip the header.
                    warn!(row = index + 2, reason, "skipping ride row");
                    skipped += 1;
                }
            }
        }

        info!(
            loaded = records.len(),
            skipped,
            path = %self.path.display(),
            "loaded ride records"
        );
        Ok(records)
    }
}

/// Parse timestamps and check the duration invariant.
fn validate(row: CsvRow) -> Result<RideRecord, &'static str> {
    let departure_time = parse_instant(&row.departure_time).ok_or("bad departure_time")?;
    let arrival_time = parse_instant(&row.arrival_time).ok_or("bad arrival_time")?;

    if row.duration_seconds < 0 {
        return Err("negative duration");
    }
    if arrival_time - departure_time != Duration::seconds(row.duration_seconds) {
        return Err("arrival_time is not departure_time + duration");
    }

    Ok(RideRecord {
        from_name: row.from_name,
        to_name: row.to_name,
        duration_seconds: row.duration_seconds,
        departure_time,
        arrival_time,
        line_id: row.line_id,
        from_latitude: row.from_latitude,
        from_longitude: row.from_longitude,
        to_latitude: row.to_latitude,
        to_longitude: row.to_longitude,
    })
}

fn parse_instant(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}
