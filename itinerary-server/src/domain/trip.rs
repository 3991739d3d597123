//! Trip value type.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};

use super::{City, DomainError, Ride};

/// A realized itinerary: a non-empty chain of contiguous rides.
///
/// # Invariants
///
/// - At least one ride
/// - Consecutive rides connect (`rides[i].to == rides[i + 1].from`)
///
/// "No itinerary found" is represented by `Option::<Trip>::None`, never by
/// an empty trip.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use itinerary_server::domain::{City, Ride, Trip};
///
/// let berlin = City::new("Berlin", 52.5200, 13.4050);
/// let hamburg = City::new("Hamburg", 53.5511, 9.9937);
///
/// let dep = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
/// let ride = Ride::new(
///     berlin,
///     hamburg,
///     Duration::hours(2),
///     dep,
///     dep + Duration::hours(2),
///     "ICE1",
/// );
///
/// let trip = Trip::new(vec![ride]).unwrap();
/// assert_eq!(trip.ride_count(), 1);
/// assert_eq!(trip.duration(), Duration::hours(2));
/// assert_eq!(trip.line_transfers(), 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    rides: Vec<Ride>,
}

impl Trip {
    /// Constructs a trip from an ordered ride sequence.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the sequence is empty or consecutive rides don't
    /// connect.
    pub fn new(rides: Vec<Ride>) -> Result<Self, DomainError> {
        if rides.is_empty() {
            return Err(DomainError::EmptyTrip);
        }

        for window in rides.windows(2) {
            if window[0].to != window[1].from {
                return Err(DomainError::RidesNotContiguous {
                    at: window[0].to.name.clone(),
                    next: window[1].from.name.clone(),
                });
            }
        }

        Ok(Trip { rides })
    }

    /// Returns all rides in order.
    pub fn rides(&self) -> &[Ride] {
        &self.rides
    }

    /// Returns the city the trip starts in.
    pub fn origin(&self) -> &City {
        &self.rides[0].from
    }

    /// Returns the city the trip ends in.
    pub fn destination(&self) -> &City {
        &self.rides[self.rides.len() - 1].to
    }

    /// Returns the number of rides.
    pub fn ride_count(&self) -> usize {
        self.rides.len()
    }

    /// Total in-vehicle duration: the sum of the ride durations, excluding
    /// waiting time between rides.
    pub fn duration(&self) -> Duration {
        self.rides
            .iter()
            .fold(Duration::zero(), |acc, ride| acc + ride.duration)
    }

    /// Departure instant of the first ride.
    pub fn start_time(&self) -> DateTime<Utc> {
        self.rides[0].departure_time
    }

    /// Arrival instant of the last ride.
    pub fn end_time(&self) -> DateTime<Utc> {
        self.rides[self.rides.len() - 1].arrival_time
    }

    /// Number of line changes: one less than the number of distinct lines.
    pub fn line_transfers(&self) -> usize {
        let lines: HashSet<&str> = self.rides.iter().map(|r| r.line_id.as_str()).collect();
        lines.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn city(name: &str) -> City {
        City::new(name, 0.0, 0.0)
    }

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, hour, 0, 0).unwrap()
    }

    fn ride(from: &str, to: &str, dep: u32, hours: i64, line: &str) -> Ride {
        Ride::new(
            city(from),
            city(to),
            Duration::hours(hours),
            at(dep),
            at(dep) + Duration::hours(hours),
            line,
        )
    }

    #[test]
    fn empty_trip_rejected() {
        assert_eq!(Trip::new(vec![]), Err(DomainError::EmptyTrip));
    }

    #[test]
    fn non_contiguous_rides_rejected() {
        let result = Trip::new(vec![
            ride("Berlin", "Hamburg", 8, 1, "ICE1"),
            ride("Bremen", "Hannover", 10, 1, "ICE2"),
        ]);

        assert_eq!(
            result,
            Err(DomainError::RidesNotContiguous {
                at: "Hamburg".into(),
                next: "Bremen".into(),
            })
        );
    }

    #[test]
    fn derived_values() {
        let trip = Trip::new(vec![
            ride("Berlin", "Hamburg", 8, 1, "ICE1"),
            ride("Hamburg", "Bremen", 10, 2, "ICE2"),
        ])
        .unwrap();

        assert_eq!(trip.ride_count(), 2);
        assert_eq!(trip.origin().name, "Berlin");
        assert_eq!(trip.destination().name, "Bremen");
        assert_eq!(trip.duration(), Duration::hours(3));
        assert_eq!(trip.start_time(), at(8));
        assert_eq!(trip.end_time(), at(12));
    }

    #[test]
    fn waiting_time_not_counted_in_duration() {
        // One hour riding, one hour waiting, one hour riding.
        let trip = Trip::new(vec![
            ride("Berlin", "Hamburg", 8, 1, "ICE1"),
            ride("Hamburg", "Bremen", 10, 1, "ICE1"),
        ])
        .unwrap();

        assert_eq!(trip.duration(), Duration::hours(2));
    }

    #[test]
    fn line_transfers_counts_distinct_lines() {
        let single = Trip::new(vec![
            ride("A", "B", 8, 1, "ICE1"),
            ride("B", "C", 9, 1, "ICE1"),
        ])
        .unwrap();
        assert_eq!(single.line_transfers(), 0);

        let back_and_forth = Trip::new(vec![
            ride("A", "B", 8, 1, "ICE1"),
            ride("B", "C", 9, 1, "ICE2"),
            ride("C", "D", 10, 1, "ICE1"),
        ])
        .unwrap();
        // Distinct lines, not adjacent changes.
        assert_eq!(back_and_forth.line_transfers(), 1);
    }
}
