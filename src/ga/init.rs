//! Initial population construction.

use crate::catalog::CityCatalog;
use crate::error::TspError;
use crate::route::{Population, Route};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::instrument;

/// Builds generation 0: independently shuffled permutations of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopulationInitializer {
    population_size: usize,
}

impl PopulationInitializer {
    /// Creates an initializer producing `population_size` routes.
    ///
    /// # Errors
    ///
    /// [`TspError::InvalidConfiguration`] if `population_size` is zero.
    pub fn new(population_size: usize) -> Result<Self, TspError> {
        if population_size < 1 {
            return Err(TspError::InvalidConfiguration(
                "population_size must be at least 1".into(),
            ));
        }
        Ok(Self { population_size })
    }

    /// Number of routes produced per call.
    pub fn population_size(&self) -> usize {
        self.population_size
    }

    /// Produces the initial population.
    ///
    /// Each route is a uniform Fisher–Yates shuffle of the full catalog.
    #[instrument(level = "debug", skip(self, catalog, rng), fields(cities = catalog.len(), population_size = self.population_size))]
    pub fn initialize<R: Rng>(&self, catalog: &CityCatalog, rng: &mut R) -> Population {
        (0..self.population_size)
            .map(|_| random_route(catalog.len(), rng))
            .collect()
    }
}

/// A uniformly random permutation of `0..n`.
pub fn random_route<R: Rng>(n: usize, rng: &mut R) -> Route {
    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(rng);
    Route::from_order_unchecked(order)
}
