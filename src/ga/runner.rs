//! Generational loop.
//!
//! [`TspGa`] owns the catalog, the configuration and the random generator,
//! and drives the run: initialize → (select → crossover → mutate → replace)
//! × generations → best route of the final population.

use super::config::{DegeneratePolicy, TspGaConfig};
use super::fitness::{fitness_from_length, FitnessEvaluator};
use super::init::PopulationInitializer;
use super::operators::{order_crossover, SwapMutation};
use super::selection::RouletteWheel;
use super::tracker::best_index;
use crate::catalog::{City, CityCatalog};
use crate::error::TspError;
use crate::route::{Population, Route};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::instrument;

/// Tour-length summary of one generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Generation index; 0 is the initial population.
    pub generation: usize,
    pub best_length: f64,
    pub mean_length: f64,
    pub worst_length: f64,
}

/// A route together with its closed-tour length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredRoute {
    pub route: Route,
    pub length: f64,
}

/// Result of a GA run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TspResult {
    /// Best route of the final generation.
    pub best: Route,

    /// Tour length of `best`.
    pub best_length: f64,

    /// Best route seen in any generation, initial one included.
    ///
    /// `Some` only when [`TspGaConfig::track_global_best`] is set.
    pub global_best: Option<ScoredRoute>,

    /// Number of generations executed.
    pub generations: usize,

    /// Whether the run was stopped through the cancellation flag.
    pub cancelled: bool,

    /// Seed the generator was built from, when the GA built it.
    pub seed: Option<u64>,

    /// Per-generation statistics; entry 0 is the initial population.
    pub history: Vec<GenerationStats>,
}

impl TspResult {
    /// The cities of [`best`](Self::best), in visiting order.
    pub fn cities(&self, catalog: &CityCatalog) -> Vec<City> {
        self.best.cities(catalog).copied().collect()
    }
}

/// Whether more generations remain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Done,
}

/// Genetic algorithm over a fixed city catalog.
///
/// The generator is owned by the GA. [`TspGa::new`] seeds a [`StdRng`]
/// from the configuration; [`TspGa::with_rng`] accepts any caller-supplied
/// generator.
///
/// # Usage
///
/// ```
/// use tsp_ga::{CityCatalog, TspGa};
/// use tsp_ga::ga::TspGaConfig;
///
/// let catalog = CityCatalog::try_from(vec![
///     (0.0, 0.0), (1.0, 2.0), (4.0, 3.0), (5.0, 1.0), (3.0, 5.0),
/// ]).unwrap();
/// let config = TspGaConfig::default().with_generations(100).with_seed(42);
///
/// let result = TspGa::new(catalog, config).unwrap().run().unwrap();
/// assert!(result.best.is_permutation_of(5));
/// ```
#[derive(Debug, Clone)]
pub struct TspGa<R: Rng = StdRng> {
    catalog: CityCatalog,
    config: TspGaConfig,
    initializer: PopulationInitializer,
    mutation: SwapMutation,
    rng: R,
    seed: Option<u64>,
    population: Population,
    lengths: Vec<f64>,
    fitness: Vec<f64>,
    generation: usize,
    global_best: Option<ScoredRoute>,
    history: Vec<GenerationStats>,
}

impl TspGa<StdRng> {
    /// Creates a GA seeded from `config.seed`, or from a random seed when
    /// none is configured.
    ///
    /// # Errors
    ///
    /// See [`TspGa::with_rng`].
    pub fn new(catalog: CityCatalog, config: TspGaConfig) -> Result<Self, TspError> {
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut ga = Self::with_rng(catalog, config, StdRng::seed_from_u64(seed))?;
        ga.seed = Some(seed);
        Ok(ga)
    }
}

impl<R: Rng> TspGa<R> {
    /// Creates a GA driven by the given generator. `config.seed` is ignored.
    ///
    /// # Errors
    ///
    /// - [`TspError::InvalidConfiguration`] if the configuration is invalid
    ///   or the catalog is empty
    /// - [`TspError::DegenerateDistance`] if the catalog is degenerate and
    ///   [`DegeneratePolicy::Reject`] is configured
    pub fn with_rng(catalog: CityCatalog, config: TspGaConfig, rng: R) -> Result<Self, TspError> {
        config.validate()?;
        if catalog.is_empty() {
            return Err(TspError::InvalidConfiguration(
                "cities must contain at least 1 city".into(),
            ));
        }
        if config.degenerate_policy == DegeneratePolicy::Reject && catalog.is_degenerate() {
            return Err(TspError::DegenerateDistance);
        }

        let initializer = PopulationInitializer::new(config.population_size)?;
        let mutation = SwapMutation::new(config.mutation_rate)?;

        Ok(Self {
            catalog,
            config,
            initializer,
            mutation,
            rng,
            seed: None,
            population: Vec::new(),
            lengths: Vec::new(),
            fitness: Vec::new(),
            generation: 0,
            global_best: None,
            history: Vec::new(),
        })
    }

    /// The city catalog.
    pub fn catalog(&self) -> &CityCatalog {
        &self.catalog
    }

    /// The configuration.
    pub fn config(&self) -> &TspGaConfig {
        &self.config
    }

    /// The current population; empty before [`initialize`](Self::initialize).
    pub fn population(&self) -> &[Route] {
        &self.population
    }

    /// Index of the current generation; 0 is the initial population.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Statistics recorded so far.
    pub fn history(&self) -> &[GenerationStats] {
        &self.history
    }

    /// `Running` while fewer than `config.generations` ticks have run.
    pub fn state(&self) -> RunState {
        if self.generation < self.config.generations {
            RunState::Running
        } else {
            RunState::Done
        }
    }

    /// Builds generation 0 and discards any previous run state.
    #[instrument(level = "debug", skip(self), fields(cities = self.catalog.len(), population_size = self.config.population_size))]
    pub fn initialize(&mut self) {
        self.population = self.initializer.initialize(&self.catalog, &mut self.rng);
        self.generation = 0;
        self.history.clear();
        self.global_best = None;
        self.evaluate();
        self.record();
    }

    /// Runs one generation: breeds `population_size` children from the
    /// current population and replaces it wholesale.
    ///
    /// Does nothing once the run is [`RunState::Done`].
    ///
    /// # Errors
    ///
    /// [`TspError::EmptyPopulation`] if called before
    /// [`initialize`](Self::initialize).
    #[instrument(level = "debug", skip(self), fields(generation = self.generation))]
    pub fn step(&mut self) -> Result<RunState, TspError> {
        if self.state() == RunState::Done {
            return Ok(RunState::Done);
        }

        let wheel = RouletteWheel::new(&self.fitness)?;
        let mut next = Vec::with_capacity(self.config.population_size);
        for _ in 0..self.config.population_size {
            let (a, b) = wheel.select_parents(&mut self.rng);
            let child = order_crossover(&self.population[a], &self.population[b], &mut self.rng)?;
            next.push(self.mutation.apply(child, &mut self.rng));
        }

        self.population = next;
        self.generation += 1;
        self.evaluate();
        self.record();

        Ok(self.state())
    }

    /// Best route of the current population.
    ///
    /// # Errors
    ///
    /// [`TspError::EmptyPopulation`] before [`initialize`](Self::initialize).
    pub fn best(&self) -> Result<ScoredRoute, TspError> {
        let i = best_index(&self.fitness)?;
        Ok(ScoredRoute {
            route: self.population[i].clone(),
            length: self.lengths[i],
        })
    }

    /// Initializes and evolves for `config.generations` generations.
    ///
    /// Each call starts over from a fresh population, continuing the same
    /// random stream.
    pub fn run(&mut self) -> Result<TspResult, TspError> {
        self.run_with_cancel(None)
    }

    /// Like [`run`](Self::run), but checks `cancel` before each generation
    /// and stops early once it is set.
    pub fn run_with_cancel(
        &mut self,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<TspResult, TspError> {
        tracing::info!(
            cities = self.catalog.len(),
            population_size = self.config.population_size,
            mutation_rate = self.config.mutation_rate,
            generations = self.config.generations,
            seed = ?self.seed,
            "starting GA run"
        );

        self.initialize();

        let mut cancelled = false;
        while self.state() == RunState::Running {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            self.step()?;
        }

        let best = self.best()?;
        tracing::info!(
            best_length = best.length,
            generations = self.generation,
            cancelled,
            "GA run finished"
        );

        Ok(TspResult {
            best: best.route,
            best_length: best.length,
            global_best: self.global_best.clone(),
            generations: self.generation,
            cancelled,
            seed: self.seed,
            history: self.history.clone(),
        })
    }

    /// Recomputes the length and fitness snapshot of the current population.
    fn evaluate(&mut self) {
        let evaluator = FitnessEvaluator::new(&self.catalog);
        self.lengths = evaluator.lengths(&self.population, self.config.parallel);
        self.fitness = self.lengths.iter().map(|&l| fitness_from_length(l)).collect();
    }

    /// Appends statistics for the current generation and updates the
    /// best-ever route when tracking is on.
    fn record(&mut self) {
        let Ok(best) = best_index(&self.fitness) else {
            return;
        };

        let n = self.lengths.len() as f64;
        let stats = GenerationStats {
            generation: self.generation,
            best_length: self.lengths[best],
            mean_length: self.lengths.iter().sum::<f64>() / n,
            worst_length: self.lengths.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        };
        tracing::debug!(
            generation = stats.generation,
            best = stats.best_length,
            mean = stats.mean_length,
            worst = stats.worst_length,
            "generation evaluated"
        );
        self.history.push(stats);

        if self.config.track_global_best {
            let improved = self
                .global_best
                .as_ref()
                .map_or(true, |g| self.lengths[best] < g.length);
            if improved {
                self.global_best = Some(ScoredRoute {
                    route: self.population[best].clone(),
                    length: self.lengths[best],
                });
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
