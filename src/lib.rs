//! Genetic-algorithm heuristic for the Euclidean symmetric Traveling
//! Salesman Problem.
//!
//! Given a set of cities in the plane, a population of random visiting
//! orders is evolved for a fixed number of generations and the shortest
//! closed tour of the last generation is returned. The answer is
//! approximate; no optimality is claimed.
//!
//! - [`catalog`]: Cities and the immutable [`CityCatalog`]
//! - [`route`]: [`Route`] permutations and populations
//! - [`ga`]: Fitness, selection, crossover, mutation and the [`TspGa`] loop
//! - [`error`]: [`TspError`]
//!
//! # Example
//!
//! ```
//! use tsp_ga::{CityCatalog, TspGa};
//! use tsp_ga::ga::TspGaConfig;
//!
//! let catalog = CityCatalog::try_from(vec![
//!     (0.0, 0.0), (1.0, 2.0), (4.0, 3.0), (5.0, 1.0), (3.0, 5.0),
//! ])?;
//! let config = TspGaConfig::default()
//!     .with_population_size(50)
//!     .with_mutation_rate(0.01)
//!     .with_generations(1000)
//!     .with_seed(42);
//!
//! let result = TspGa::new(catalog.clone(), config)?.run()?;
//! assert_eq!(result.cities(&catalog).len(), 5);
//! # Ok::<(), tsp_ga::TspError>(())
//! ```
//!
//! # Logging
//!
//! Runs emit [`tracing`] events (run start and finish at `info`, per
//! generation statistics at `debug`). No subscriber is installed here.

pub mod catalog;
pub mod error;
pub mod ga;
pub mod route;

pub use catalog::{City, CityCatalog};
pub use error::TspError;
pub use ga::{TspGa, TspGaConfig, TspResult};
pub use route::{Population, Route};
