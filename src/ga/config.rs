//! GA configuration.
//!
//! [`TspGaConfig`] holds every parameter that controls the evolutionary loop.

use crate::error::TspError;

/// How a zero-length tour is scored.
///
/// A tour has zero length only when every city in the catalog sits on the
/// same point (a single-city catalog included), so either every route in a
/// run is degenerate or none is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DegeneratePolicy {
    /// Score zero-length tours with [`DEGENERATE_FITNESS`](super::DEGENERATE_FITNESS)
    /// (`f64::MAX`). Roulette selection then treats them as equally likely.
    #[default]
    Saturate,

    /// Refuse to build a GA over a degenerate catalog
    /// ([`TspError::DegenerateDistance`]).
    Reject,
}

/// Configuration for the TSP genetic algorithm.
///
/// # Defaults
///
/// ```
/// use tsp_ga::ga::TspGaConfig;
///
/// let config = TspGaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.generations, 1000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use tsp_ga::ga::TspGaConfig;
///
/// let config = TspGaConfig::default()
///     .with_population_size(200)
///     .with_mutation_rate(0.05)
///     .with_generations(500)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TspGaConfig {
    /// Number of routes in every generation. Must be at least 1.
    pub population_size: usize,

    /// Probability of swapping two positions in each child (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of evolution ticks. Zero returns the best initial route.
    pub generations: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a seed from the thread-local generator; the seed actually
    /// used is reported in [`TspResult::seed`](super::TspResult::seed).
    pub seed: Option<u64>,

    /// Also keep the best route seen in any generation.
    ///
    /// The GA has no elitism, so the final generation's best can be worse
    /// than one seen earlier. The returned [`TspResult::best`](super::TspResult::best)
    /// always comes from the final generation; this only fills
    /// [`TspResult::global_best`](super::TspResult::global_best).
    pub track_global_best: bool,

    /// Evaluate fitness with rayon. Ignored without the `parallel` feature.
    pub parallel: bool,

    /// Handling of zero-length tours.
    pub degenerate_policy: DegeneratePolicy,
}

impl Default for TspGaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            mutation_rate: 0.01,
            generations: 1000,
            seed: None,
            track_global_best: false,
            parallel: false,
            degenerate_policy: DegeneratePolicy::Saturate,
        }
    }
}

impl TspGaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the mutation rate.
    ///
    /// Out-of-range values are kept as given and rejected by
    /// [`validate`](Self::validate).
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables best-ever tracking.
    pub fn with_track_global_best(mut self, track: bool) -> Self {
        self.track_global_best = track;
        self
    }

    /// Enables or disables parallel fitness evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the zero-length tour policy.
    pub fn with_degenerate_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.degenerate_policy = policy;
        self
    }

    /// Preset for quick answers on small instances.
    ///
    /// - Population: 30, Generations: 200
    pub fn fast() -> Self {
        Self {
            population_size: 30,
            generations: 200,
            ..Self::default()
        }
    }

    /// Preset matching the defaults.
    ///
    /// - Population: 50, Generations: 1000
    pub fn balanced() -> Self {
        Self::default()
    }

    /// Preset for larger instances.
    ///
    /// - Population: 150, Generations: 3000, Mutation rate: 0.02
    pub fn quality() -> Self {
        Self {
            population_size: 150,
            generations: 3000,
            mutation_rate: 0.02,
            ..Self::default()
        }
    }

    /// Picks a preset from the number of cities.
    ///
    /// - `city_count < 20` → [`fast()`](Self::fast)
    /// - `20 ≤ city_count < 100` → [`balanced()`](Self::balanced)
    /// - `city_count ≥ 100` → [`quality()`](Self::quality)
    pub fn auto_select(city_count: usize) -> Self {
        if city_count < 20 {
            Self::fast()
        } else if city_count < 100 {
            Self::balanced()
        } else {
            Self::quality()
        }
    }

    /// Validates the configuration.
    ///
    /// `generations` is unsigned, so a negative count cannot be expressed.
    pub fn validate(&self) -> Result<(), TspError> {
        if self.population_size < 1 {
            return Err(TspError::InvalidConfiguration(
                "population_size must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(TspError::InvalidConfiguration(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        Ok(())
    }
}
