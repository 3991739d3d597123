//! Domain error types.

/// Domain-level errors for validation failures.
///
/// These are distinct from lookup and IO errors: they indicate an attempt
/// to build a value that would violate a domain invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Trip has no rides. An empty itinerary has no defined start time;
    /// "no itinerary found" is `None`, never an empty trip.
    #[error("a trip must contain at least one ride")]
    EmptyTrip,

    /// Consecutive rides of a trip do not connect.
    #[error("rides do not connect: arrival in {at} followed by departure from {next}")]
    RidesNotContiguous { at: String, next: String },
}
