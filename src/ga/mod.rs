//! Genetic algorithm for the TSP.
//!
//! Routes evolve over a fixed number of generations. Each generation is
//! bred in full from the previous one, with no elitism:
//!
//! 1. **Selection**: two parents per child by roulette wheel ([`RouletteWheel`])
//! 2. **Crossover**: one child by ordered crossover ([`order_crossover`])
//! 3. **Mutation**: optional swap of two positions ([`SwapMutation`])
//! 4. **Replacement**: the new population replaces the old one wholesale
//!
//! The answer is the best route of the final generation ([`best_route`]).
//!
//! # Key Types
//!
//! - [`TspGaConfig`]: Population size, mutation rate, generation count, seed
//! - [`TspGa`]: Owns the catalog and generator; runs the loop
//! - [`TspResult`]: Final route plus per-generation statistics
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

mod config;
mod fitness;
mod init;
mod operators;
mod runner;
mod selection;
mod tracker;

pub use config::{DegeneratePolicy, TspGaConfig};
pub use fitness::{fitness_from_length, tour_length, FitnessEvaluator, DEGENERATE_FITNESS};
pub use init::{random_route, PopulationInitializer};
pub use operators::{order_crossover, ox_with_segment, random_segment, swap_positions, SwapMutation};
pub use runner::{GenerationStats, RunState, ScoredRoute, TspGa, TspResult};
pub use selection::RouletteWheel;
pub use tracker::{best_index, best_route};
