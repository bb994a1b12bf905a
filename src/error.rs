//! Error types for the seeding system
//!
//! Almost nothing in a seeding run is fatal: per-instance and per-field
//! problems are counted in the [`SeedReport`](crate::report::SeedReport)
//! and the run keeps going. The errors here cover the cases that do
//! surface to the caller, chiefly the persistence sink's flush failing.

/// Result type alias for seeding operations
pub type SeedResult<T> = Result<T, SeedError>;

/// Error types for seeding operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeedError {
    /// The persistence sink rejected a persist or flush call
    #[error("persistence error: {0}")]
    Persistence(String),

    /// The schema catalog is inconsistent (e.g. duplicate entity types)
    #[error("schema error: {0}")]
    Schema(String),

    /// Configuration could not be parsed
    #[error("configuration error: {0}")]
    Configuration(String),
}
