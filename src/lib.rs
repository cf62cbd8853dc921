//! # Pond - Evolving Neural Organisms
//!
//! An artificial-life pond: organisms steered by small feedforward networks
//! compete for food. Each generation runs for a fixed number of steps, is
//! scored by how much food it collected, and is replaced through rank-biased
//! selection, single-point crossover and per-gene mutation.
//!
//! ## Features
//!
//! - Genome-encoded feedforward brains (sigmoid, bias units)
//! - Ray-cast vision plus proprioceptive and clock inputs
//! - Smoothed steering and throttle with energy costs and starvation
//! - Toroidal world with food turnover and operator food injection
//! - Deterministic replay from a single seeded generator
//! - Read-only snapshots for external renderers
//!
//! ## Core Modules
//!
//! - [`simulation::pond`] - Generation driver
//! - [`simulation::organism`] - Organism behavior and senses
//! - [`simulation::brain`] - Feedforward network
//! - [`simulation::genome`] - Genes and genetic operators
//! - [`simulation::evolution`] - Selection and reproduction
//!
//! ## Example
//!
//! ```no_run
//! use pond::simulation::params::Params;
//! use pond::simulation::pond::Pond;
//!
//! let mut pond = Pond::new(Params::default(), 42).unwrap();
//! let average_fitness = pond.run_generation().unwrap();
//! println!("average fitness: {average_fitness}");
//! ```

/// Core simulation logic and data structures.
pub mod simulation {
    /// Feedforward network used as organism brains.
    pub mod brain;
    /// Error types.
    pub mod error;
    /// Selection, crossover and mutation across a population.
    pub mod evolution;
    /// Food items that organisms can consume.
    pub mod food;
    /// Genome representation and trait layout.
    pub mod genome;
    /// Vector math and intersection tests.
    pub mod geometric_utils;
    /// Organism behavior, state, and senses.
    pub mod organism;
    /// Simulation parameters.
    pub mod params;
    /// Generation driver owning population and food.
    pub mod pond;
    /// Read-only views for renderers.
    pub mod snapshot;
    /// Per-generation statistics.
    pub mod stats;
}

pub use simulation::error::PondError;
pub use simulation::params::Params;
pub use simulation::pond::Pond;
