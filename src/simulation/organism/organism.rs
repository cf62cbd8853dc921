//! Organism behavior, state, and lifecycle management.
//!
//! Each step an organism perceives the food around it, lets its brain pick a
//! turn and a throttle, moves, and pays energy for the throttle. It dies when
//! its energy runs out and stays dead until the next generation resets it.

use std::f32::consts::{PI, TAU};

use geo::coord;
use ndarray::{Array1, ArrayView1, s};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::super::brain::Network;
use super::super::error::{NetworkError, PondError};
use super::super::evolution::Evolvable;
use super::super::food::Food;
use super::super::genome::{Genome, NUM_TRAITS, TRAIT_BIRTH_X, TRAIT_BIRTH_Y, TRAIT_FOV};
use super::super::geometric_utils::{Vec2, heading_vector, mod_angle, wrap_around_mut};
use super::super::params::{NUM_OUTPUTS, OUTPUT_DIRECTION, OUTPUT_SPEED, Params};
use super::proprioception::Proprioception;
use super::sense::Sense;
use super::vision::Vision;

/// A simulated organism with a neural network brain.
///
/// Organisms can:
/// - See food within their field of view
/// - Turn and accelerate based on brain outputs
/// - Eat food to gain energy
/// - Starve when energy reaches zero
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organism {
    genome: Genome,
    brain: Network,
    /// Brain inputs from the last `perceive` call.
    input: Array1<f32>,
    /// Brain outputs from the last `update` call.
    output: Array1<f32>,
    /// Position in world coordinates.
    pub pos: Vec2,
    /// Heading in radians, kept in `[0, 2π)`.
    pub heading: f32,
    /// Current speed per step.
    pub speed: f32,
    /// Smoothed turn command in `[-1, 1]`.
    pub turn_rate: f32,
    /// Current energy (dies when <= 0).
    pub energy: f32,
    /// Steps lived this generation.
    pub age: u32,
    /// Food eaten within the generation lifespan.
    pub food_collected: u32,
    /// Field of view angle in radians, from the FOV gene.
    pub fov: f32,
    /// Length of the vision rays.
    pub sight_length: f32,
    dead: bool,
    fitness_score: Option<f32>,
    food_amount: usize,
}

impl Organism {
    /// Builds an organism and its brain from `genome`.
    ///
    /// The organism is not placed in the world until [`Organism::reset`].
    pub fn new(genome: Genome, params: &Params) -> Result<Self, PondError> {
        if genome.len() < NUM_TRAITS {
            return Err(NetworkError::InsufficientWeights {
                required: params.genome_length(),
                available: genome.len(),
            }
            .into());
        }

        let brain = Network::from_weights(
            &params.topology(),
            genome.weight_genes(),
            params.weight_range,
        )?;

        Ok(Self {
            fov: genome.trait_value(TRAIT_FOV) * PI,
            genome,
            brain,
            input: Array1::zeros(params.num_inputs()),
            output: Array1::zeros(NUM_OUTPUTS),
            pos: coord! { x: 0.0, y: 0.0 },
            heading: 0.0,
            speed: 0.0,
            turn_rate: 0.0,
            energy: params.initial_energy,
            age: 0,
            food_collected: 0,
            sight_length: params.sight_length,
            dead: false,
            fitness_score: None,
            food_amount: params.food_amount,
        })
    }

    /// Checks if the organism is alive.
    pub fn is_alive(&self) -> bool {
        !self.dead
    }

    /// The genome this organism was built from.
    pub fn genome(&self) -> &Genome {
        &self.genome
    }

    /// The organism's brain.
    pub fn brain(&self) -> &Network {
        &self.brain
    }

    /// Brain inputs from the last perception; eye readings come first.
    pub fn sensors(&self) -> ArrayView1<'_, f32> {
        self.input.view()
    }

    /// Brain outputs from the last update.
    pub fn outputs(&self) -> ArrayView1<'_, f32> {
        self.output.view()
    }

    /// Fitness cached at the last generation boundary, if any.
    pub fn fitness_score(&self) -> Option<f32> {
        self.fitness_score
    }

    /// Point ahead of the organism that has to touch food to eat it.
    pub fn mouth(&self, params: &Params) -> Vec2 {
        self.pos + heading_vector(self.heading) * params.mouth_offset
    }

    /// Calculates vision ray vectors relative to the organism position.
    ///
    /// Eye `i` looks `(i - eyes / 2) * fov / eyes` radians off the heading,
    /// so eye `eyes / 2` looks straight ahead.
    pub fn get_vision_vectors(&self, params: &Params) -> Vec<Vec2> {
        let eyes = params.num_eyes;
        let angle_step = self.fov / eyes as f32;

        (0..eyes)
            .map(|i| {
                let offset = i as f32 - (eyes / 2) as f32;
                heading_vector(self.heading + offset * angle_step) * self.sight_length
            })
            .collect()
    }

    /// Fills the brain inputs from the organism's surroundings and state.
    ///
    /// Each sense owns `input_size` consecutive inputs, in sense order.
    pub fn perceive(&mut self, foods: &[Food], params: &Params) -> Result<(), NetworkError> {
        if self.dead {
            return Ok(());
        }

        let senses: [&dyn Sense; 2] = [&Vision, &Proprioception];
        let mut offset = 0;
        for sense in senses {
            let size = sense.input_size(params);
            let values = sense.sense(self, foods, params);
            if values.len() != size {
                return Err(NetworkError::InvalidInputSize {
                    expected: size,
                    actual: values.len(),
                });
            }
            let end = offset + size;
            if end > self.input.len() {
                return Err(NetworkError::InvalidInputSize {
                    expected: self.input.len(),
                    actual: end,
                });
            }
            self.input.slice_mut(s![offset..end]).assign(&values);
            offset = end;
        }

        Ok(())
    }

    /// Runs the brain and applies its motor outputs.
    pub fn update(&mut self, params: &Params) -> Result<(), NetworkError> {
        if self.dead {
            return Ok(());
        }

        self.brain.feed_forward(&self.input)?;
        self.output.assign(&self.brain.results());

        let target_turn = self.output[OUTPUT_DIRECTION] * 2.0 - 1.0;
        let target_speed = self.output[OUTPUT_SPEED] * params.max_speed;

        self.turn_rate += (target_turn - self.turn_rate) * params.turn_smoothing;
        self.heading = mod_angle(self.heading + self.turn_rate * params.turn_speed);

        let blend = if target_speed > self.speed {
            params.acceleration
        } else {
            params.deceleration
        };
        self.speed += (target_speed - self.speed) * blend;

        // no cost during the grace period after the lifespan
        if self.age <= params.generation_lifespan {
            self.energy -=
                (target_speed * params.energy_cost_scale).powf(params.energy_cost_exponent);
        }

        self.pos = self.pos + heading_vector(self.heading) * self.speed;
        wrap_around_mut(&mut self.pos, params.world_size);
        self.age += 1;

        if self.energy <= 0.0 {
            self.dead = true;
            log::debug!(
                "organism starved at age {} after eating {}",
                self.age,
                self.food_collected
            );
        }

        Ok(())
    }

    /// Consumes a food item.
    ///
    /// Food eaten within the generation lifespan counts toward fitness and
    /// restores energy; later it is still consumed but earns nothing.
    ///
    /// # Returns
    ///
    /// `false` if the organism is dead and cannot eat.
    pub fn eat(&mut self, params: &Params) -> bool {
        if self.dead {
            return false;
        }
        if self.age <= params.generation_lifespan {
            self.food_collected += 1;
            self.energy += params.food_energy;
        }
        true
    }

    /// `(food_collected / food_amount)^2`.
    pub fn fitness(&self) -> f32 {
        let food_fitness = self.food_collected as f32 / self.food_amount as f32;
        food_fitness.powi(2)
    }

    /// Places the organism for a new generation and clears its counters.
    ///
    /// The brain is left as built.
    pub fn reset<R: Rng + ?Sized>(&mut self, params: &Params, rng: &mut R) {
        self.heading = rng.random::<f32>() * TAU;
        self.pos = if params.inherit_birth_location {
            coord! {
                x: self.genome.trait_value(TRAIT_BIRTH_X) * params.world_size,
                y: self.genome.trait_value(TRAIT_BIRTH_Y) * params.world_size,
            }
        } else {
            coord! {
                x: rng.random::<f32>() * params.world_size,
                y: rng.random::<f32>() * params.world_size,
            }
        };
        wrap_around_mut(&mut self.pos, params.world_size);

        self.speed = 0.0;
        self.turn_rate = 0.0;
        self.energy = params.initial_energy;
        self.age = 0;
        self.food_collected = 0;
        self.dead = false;
        self.fitness_score = None;
        self.input.fill(0.0);
        self.output.fill(0.0);
    }
}

impl Evolvable for Organism {
    type Context = Params;

    fn from_genome(genome: Genome, params: &Params) -> Result<Self, PondError> {
        Organism::new(genome, params)
    }

    fn genome(&self) -> &Genome {
        &self.genome
    }

    fn fitness(&self) -> f32 {
        Organism::fitness(self)
    }

    fn cache_fitness(&mut self, score: f32) {
        self.fitness_score = Some(score);
    }

    fn reset<R: Rng + ?Sized>(&mut self, params: &Params, rng: &mut R) {
        Organism::reset(self, params, rng);
    }
}
