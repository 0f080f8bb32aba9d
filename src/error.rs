//! Error taxonomy for the TSP genetic algorithm.
//!
//! Every failure is either a configuration problem or an invariant
//! violation; nothing here is transient, so nothing is retried.

/// Errors produced by the GA and its model types.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TspError {
    /// A construction-time parameter is out of range, or the catalog is empty.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Every tour over the catalog has zero length (all cities coincide)
    /// and [`DegeneratePolicy::Reject`](crate::ga::DegeneratePolicy::Reject)
    /// is configured.
    #[error("degenerate distance: every tour over this catalog has zero length")]
    DegenerateDistance,

    /// Best-route extraction or selection was attempted on an empty population.
    #[error("empty population")]
    EmptyPopulation,

    /// A route is not a permutation of the catalog it is used with.
    #[error("route is not a permutation of the catalog: expected {expected} cities, found {found}")]
    CatalogMismatch { expected: usize, found: usize },
}
