//! Roulette-wheel parent selection.
//!
//! Each route is chosen with probability proportional to its fitness
//! (`p_i = fitness_i / Σ fitness`). The wheel is built once per generation
//! from a fitness snapshot; the population does not change while a
//! generation is being bred, so every spin sees the same probabilities.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use crate::error::TspError;
use rand::Rng;

/// Fitness-proportionate selection over one generation's snapshot.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use tsp_ga::ga::RouletteWheel;
///
/// let wheel = RouletteWheel::new(&[1.0, 3.0]).unwrap();
/// assert!((wheel.probabilities()[1] - 0.75).abs() < 1e-12);
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// let (a, b) = wheel.select_parents(&mut rng);
/// assert!(a < 2 && b < 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RouletteWheel {
    probabilities: Vec<f64>,
}

impl RouletteWheel {
    /// Normalizes `fitness` into selection probabilities.
    ///
    /// If the total overflows (saturated fitness for zero-length tours), the
    /// routes sharing the maximal fitness split the wheel evenly and the
    /// rest get nothing.
    ///
    /// # Errors
    ///
    /// [`TspError::EmptyPopulation`] if `fitness` is empty.
    pub fn new(fitness: &[f64]) -> Result<Self, TspError> {
        if fitness.is_empty() {
            return Err(TspError::EmptyPopulation);
        }

        let total: f64 = fitness.iter().sum();
        let probabilities = if total.is_finite() && total > 0.0 {
            fitness.iter().map(|&f| f / total).collect()
        } else {
            let max = fitness.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let winners = fitness.iter().filter(|&&f| f == max).count() as f64;
            fitness
                .iter()
                .map(|&f| if f == max { 1.0 / winners } else { 0.0 })
                .collect()
        };

        Ok(Self { probabilities })
    }

    /// Normalized selection probabilities, in population order.
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// Number of slots on the wheel.
    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    /// Always `false`: construction rejects an empty snapshot.
    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    /// Spins the wheel once.
    ///
    /// Draws `r ∈ [0, 1)` and returns the first index whose cumulative
    /// probability reaches `r`. Rounding can leave the final cumulative sum
    /// just below `r`; the last index is returned in that case.
    pub fn spin<R: Rng>(&self, rng: &mut R) -> usize {
        let r: f64 = rng.random();
        let mut cumulative = 0.0;
        for (i, &p) in self.probabilities.iter().enumerate() {
            cumulative += p;
            if r <= cumulative {
                return i;
            }
        }
        self.probabilities.len() - 1 // floating-point fallback
    }

    /// Draws two parents independently, with replacement.
    pub fn select_parents<R: Rng>(&self, rng: &mut R) -> (usize, usize) {
        let first = self.spin(rng);
        let second = self.spin(rng);
        (first, second)
    }
}
