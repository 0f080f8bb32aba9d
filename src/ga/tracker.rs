//! Best-route extraction.

use super::fitness::FitnessEvaluator;
use crate::error::TspError;
use crate::route::Route;

/// Index of the maximal fitness value; the first one wins ties.
///
/// # Errors
///
/// [`TspError::EmptyPopulation`] if `fitness` is empty.
pub fn best_index(fitness: &[f64]) -> Result<usize, TspError> {
    let mut iter = fitness.iter().enumerate();
    let (mut best, mut best_fitness) = match iter.next() {
        Some((i, &f)) => (i, f),
        None => return Err(TspError::EmptyPopulation),
    };
    for (i, &f) in iter {
        if f > best_fitness {
            best = i;
            best_fitness = f;
        }
    }
    Ok(best)
}

/// The fittest route (shortest tour) in `population`, first-found on ties.
///
/// # Errors
///
/// [`TspError::EmptyPopulation`] if `population` is empty.
pub fn best_route<'p>(
    population: &'p [Route],
    evaluator: &FitnessEvaluator<'_>,
) -> Result<&'p Route, TspError> {
    let fitness: Vec<f64> = population.iter().map(|r| evaluator.fitness(r)).collect();
    best_index(&fitness).map(|i| &population[i])
}
