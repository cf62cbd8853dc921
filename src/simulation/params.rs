//! Simulation parameters.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::brain;
use super::error::{ConfigError, PondError};
use super::genome::NUM_TRAITS;

/// Non-visual inputs following the eye sensors: heading, speed, energy and
/// two internal clocks.
pub const NUM_EXTRA_INPUTS: usize = 5;

/// Network output steering the organism.
pub const OUTPUT_DIRECTION: usize = 0;
/// Network output setting the target speed.
pub const OUTPUT_SPEED: usize = 1;
/// Number of network outputs.
pub const NUM_OUTPUTS: usize = 2;

/// Simulation parameters that control the pond.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Edge length of the square, toroidal world.
    pub world_size: f32,
    /// Steps per generation.
    pub generation_lifespan: u32,
    /// Number of organisms per generation.
    pub population_size: usize,
    /// Maximum organism speed per step.
    pub max_speed: f32,
    /// Number of vision rays per organism.
    pub num_eyes: usize,
    /// Length of each vision ray.
    pub sight_length: f32,
    /// Radius of a food item for sensing and eating.
    pub food_radius: f32,
    /// Distance of the mouth point ahead of the organism's position.
    pub mouth_offset: f32,
    /// Food items seeded at the start of each generation.
    pub food_amount: usize,
    /// Probability that an eaten food item is replaced somewhere else.
    pub food_respawn_rate: f32,
    /// Probability that a bite fails even when the mouth touches food.
    pub food_eat_difficulty: f32,
    /// Items created per food injection.
    pub food_spawn_cluster: usize,
    /// Maximum positional jitter of injected food.
    pub food_spawn_jitter: f32,
    /// Per-gene mutation probability.
    pub mutation_rate: f32,
    /// Number of hidden layers.
    pub hidden_layers: usize,
    /// Neurons per hidden layer.
    pub hidden_nodes: usize,
    /// Decoded weights lie in `[-weight_range, weight_range]`.
    pub weight_range: f32,
    /// Energy at birth.
    pub initial_energy: f32,
    /// Energy gained per food item eaten.
    pub food_energy: f32,
    /// Scale applied to the target speed before computing movement cost.
    pub energy_cost_scale: f32,
    /// Exponent of the movement cost power law.
    pub energy_cost_exponent: f32,
    /// Low-pass blend factor pulling the turn rate toward the brain's command.
    pub turn_smoothing: f32,
    /// Radians of heading change per unit of turn rate.
    pub turn_speed: f32,
    /// Blend factor when accelerating toward the target speed.
    pub acceleration: f32,
    /// Blend factor when slowing toward the target speed.
    pub deceleration: f32,
    /// Place newborns at the location encoded in their birth genes.
    pub inherit_birth_location: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            world_size: 1000.0,
            generation_lifespan: 800,
            population_size: 100,
            max_speed: 5.0,
            num_eyes: 10,
            sight_length: 300.0,
            food_radius: 16.0,
            mouth_offset: 8.0,
            food_amount: 100,
            food_respawn_rate: 0.05,
            food_eat_difficulty: 0.0,
            food_spawn_cluster: 1,
            food_spawn_jitter: 0.0,
            mutation_rate: 0.005,
            hidden_layers: 1,
            hidden_nodes: 2,
            weight_range: 20.0,
            initial_energy: 1000.0,
            food_energy: 100.0,
            energy_cost_scale: 0.25,
            energy_cost_exponent: 2.0,
            turn_smoothing: 0.5,
            turn_speed: 0.2,
            acceleration: 1.0,
            deceleration: 0.01,
            inherit_birth_location: false,
        }
    }
}

impl Params {
    /// Parses parameters from JSON; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, PondError> {
        let params: Params = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Loads parameters from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PondError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Checks that the parameters describe a runnable pond.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.world_size <= 0.0 {
            return Err(ConfigError::InvalidWorldSize);
        }
        if self.generation_lifespan == 0 {
            return Err(ConfigError::InvalidLifespan);
        }
        if self.num_eyes == 0 {
            return Err(ConfigError::NoEyes);
        }
        if self.sight_length <= 0.0 {
            return Err(ConfigError::InvalidSightLength);
        }
        if self.hidden_layers > 0 && self.hidden_nodes == 0 {
            return Err(ConfigError::EmptyHiddenLayer);
        }
        if self.food_amount == 0 {
            return Err(ConfigError::NoFood);
        }
        if !self.food_spawn_jitter.is_finite() || self.food_spawn_jitter < 0.0 {
            return Err(ConfigError::InvalidSpawnJitter {
                value: self.food_spawn_jitter,
            });
        }

        for (name, value) in [
            ("food_respawn_rate", self.food_respawn_rate),
            ("food_eat_difficulty", self.food_eat_difficulty),
            ("mutation_rate", self.mutation_rate),
            ("turn_smoothing", self.turn_smoothing),
            ("acceleration", self.acceleration),
            ("deceleration", self.deceleration),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidProbability { name, value });
            }
        }

        Ok(())
    }

    /// Brain inputs: one per eye plus the non-visual inputs.
    pub fn num_inputs(&self) -> usize {
        self.num_eyes + NUM_EXTRA_INPUTS
    }

    /// Brain layer sizes, input first, bias neurons excluded.
    pub fn topology(&self) -> Vec<usize> {
        let mut topology = Vec::with_capacity(self.hidden_layers + 2);
        topology.push(self.num_inputs());
        topology.extend(std::iter::repeat_n(self.hidden_nodes, self.hidden_layers));
        topology.push(NUM_OUTPUTS);
        topology
    }

    /// Number of weight genes the brain consumes.
    pub fn weight_count(&self) -> usize {
        brain::weight_count(&self.topology())
    }

    /// Total genome length: trait genes followed by weight genes.
    pub fn genome_length(&self) -> usize {
        NUM_TRAITS + self.weight_count()
    }
}
