//! Tour length and fitness.
//!
//! Fitness is `1 / tour_length`: higher is better. It is never stored on a
//! [`Route`]; callers recompute it or cache it for one generation.

use crate::catalog::CityCatalog;
use crate::route::Route;
use tracing::instrument;

/// Fitness given to a zero-length tour under
/// [`DegeneratePolicy::Saturate`](super::DegeneratePolicy::Saturate).
pub const DEGENERATE_FITNESS: f64 = f64::MAX;

/// Closed-tour length: consecutive edges plus the edge from the last city
/// back to the first.
///
/// A route of one city has length 0 (its only edge is a self-loop).
///
/// # Examples
///
/// ```
/// use tsp_ga::{CityCatalog, Route};
/// use tsp_ga::ga::tour_length;
///
/// let catalog = CityCatalog::try_from(vec![(0.0, 0.0), (3.0, 0.0), (3.0, 4.0)]).unwrap();
/// let len = tour_length(&catalog, &Route::identity(3));
/// assert!((len - 12.0).abs() < 1e-12);
/// ```
pub fn tour_length(catalog: &CityCatalog, route: &Route) -> f64 {
    let order = route.indices();
    let Some((&first, &last)) = order.first().zip(order.last()) else {
        return 0.0;
    };
    let open: f64 = order
        .windows(2)
        .map(|pair| catalog.distance(pair[0], pair[1]))
        .sum();
    open + catalog.distance(last, first)
}

/// Scores routes against a borrowed catalog.
#[derive(Debug, Clone, Copy)]
pub struct FitnessEvaluator<'a> {
    catalog: &'a CityCatalog,
}

impl<'a> FitnessEvaluator<'a> {
    /// Creates an evaluator over `catalog`.
    pub fn new(catalog: &'a CityCatalog) -> Self {
        Self { catalog }
    }

    /// The catalog routes are scored against.
    pub fn catalog(&self) -> &'a CityCatalog {
        self.catalog
    }

    /// Closed-tour length of `route`.
    pub fn tour_length(&self, route: &Route) -> f64 {
        tour_length(self.catalog, route)
    }

    /// Fitness of `route`: `1 / tour_length`, or [`DEGENERATE_FITNESS`]
    /// when the tour has zero length.
    pub fn fitness(&self, route: &Route) -> f64 {
        fitness_from_length(self.tour_length(route))
    }

    /// Tour lengths of a whole population, in population order.
    ///
    /// With `parallel` set and the `parallel` feature enabled, routes are
    /// measured on the rayon pool. Each length is computed independently, so
    /// the result is identical either way.
    #[instrument(level = "debug", skip(self, population), fields(population_size = population.len()))]
    pub fn lengths(&self, population: &[Route], parallel: bool) -> Vec<f64> {
        if parallel {
            self.par_lengths(population)
        } else {
            population
                .iter()
                .map(|route| self.tour_length(route))
                .collect()
        }
    }

    #[cfg(feature = "parallel")]
    fn par_lengths(&self, population: &[Route]) -> Vec<f64> {
        use rayon::prelude::*;
        population
            .par_iter()
            .map(|route| self.tour_length(route))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn par_lengths(&self, population: &[Route]) -> Vec<f64> {
        self.lengths(population, false)
    }
}

/// Converts a tour length to fitness.
///
/// A zero length saturates to [`DEGENERATE_FITNESS`] instead of dividing by
/// zero. [`DegeneratePolicy::Reject`](super::DegeneratePolicy::Reject) keeps
/// such catalogs out of a run altogether.
pub fn fitness_from_length(length: f64) -> f64 {
    if length > 0.0 {
        1.0 / length
    } else {
        DEGENERATE_FITNESS
    }
}
