//! Error types for the pond simulation.
//!
//! Contract violations (bad network input, too few weight genes) and
//! degenerate reproduction input are reported as errors and never recovered
//! from locally. Starvation, empty sensors and an empty food set are normal
//! states and are not errors.

/// Feedforward network contract violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// Feed-forward input length differs from the input layer size.
    #[error("Input doesn't match topology: expected {expected} values, got {actual}")]
    InvalidInputSize { expected: usize, actual: usize },
    /// Fewer weights supplied than the topology consumes.
    #[error("Not enough weights to decode topology: need {required}, got {available}")]
    InsufficientWeights { required: usize, available: usize },
    /// Topology with fewer than two layers.
    #[error("Topology needs at least an input and an output layer, got {layers} layer(s)")]
    InvalidTopology { layers: usize },
}

/// Reproduction errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvolutionError {
    /// Reproduction was asked to replace zero organisms.
    #[error("Cannot reproduce an empty population")]
    EmptyPopulation,
    /// Rank selection kept producing an empty mating pool.
    #[error("Mating pool stayed empty after {attempts} selection passes")]
    EmptyMatingPool { attempts: usize },
    /// Crossover between genomes of different lengths.
    #[error("Parent genomes differ in length ({left} vs {right})")]
    GenomeLength { left: usize, right: usize },
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// No organisms to simulate.
    #[error("Population size must be at least 1")]
    EmptyPopulation,
    /// World edge length is zero or negative.
    #[error("World size must be positive")]
    InvalidWorldSize,
    /// Generations that never run a step.
    #[error("Generation lifespan must be at least one step")]
    InvalidLifespan,
    /// Organisms without vision rays.
    #[error("Organisms need at least one eye")]
    NoEyes,
    /// Vision rays of zero or negative length.
    #[error("Sight length must be positive")]
    InvalidSightLength,
    /// Hidden layers requested with no nodes in them.
    #[error("Hidden layers need at least one node")]
    EmptyHiddenLayer,
    /// Pond seeded without food.
    #[error("Food amount must be at least 1")]
    NoFood,
    /// Food injection jitter that is negative or not finite.
    #[error("Food spawn jitter must be finite and non-negative, got {value}")]
    InvalidSpawnJitter { value: f32 },
    /// Rate or blend factor outside the unit interval.
    #[error("{name} must lie in [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f32 },
}

/// Top-level error for everything the pond can report.
#[derive(Debug, thiserror::Error)]
pub enum PondError {
    /// Brain construction or evaluation failed.
    #[error(transparent)]
    Network(#[from] NetworkError),
    /// Reproduction failed; the population was left as it was.
    #[error(transparent)]
    Evolution(#[from] EvolutionError),
    /// Parameters rejected by validation.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    /// Configuration file could not be read.
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    /// Configuration or snapshot JSON could not be (de)serialized.
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}
