//! Proprioception sense - organism's awareness of its own state.
//!
//! Provides heading, speed and energy levels plus two internal clocks whose
//! rates are set by the organism's clock-speed genes.

use std::f32::consts::TAU;

use ndarray::{Array1, array};

use super::super::food::Food;
use super::super::genome::{TRAIT_CLOCK_SPEED, TRAIT_CLOCK_SPEED_2};
use super::super::geometric_utils::mod_angle;
use super::super::params::{NUM_EXTRA_INPUTS, Params};
use super::Organism;
use super::sense::Sense;

/// Proprioception sense for internal state awareness.
///
/// Outputs, in order:
/// - Heading, normalized to `[0, 1)`
/// - Speed as a fraction of the maximum speed
/// - Energy as a fraction of the initial energy, capped at 1
/// - Fast clock: `(age * clock_speed) mod 1`
/// - Slow clock: `((age * clock_speed_2) mod lifespan) / lifespan`
pub struct Proprioception;

impl Proprioception {
    /// Creates a new proprioception sense.
    pub fn new() -> Self {
        Self
    }
}

impl Default for Proprioception {
    fn default() -> Self {
        Self::new()
    }
}

fn fraction(value: f32, scale: f32) -> f32 {
    if scale > 0.0 { value / scale } else { 0.0 }
}

impl Sense for Proprioception {
    fn sense(&self, organism: &Organism, _foods: &[Food], params: &Params) -> Array1<f32> {
        let genome = organism.genome();
        let age = organism.age as f32;
        let lifespan = params.generation_lifespan as f32;

        let clock = (age * genome.trait_value(TRAIT_CLOCK_SPEED)).rem_euclid(1.0);
        let clock_2 =
            (age * genome.trait_value(TRAIT_CLOCK_SPEED_2)).rem_euclid(lifespan) / lifespan;

        array![
            mod_angle(organism.heading) / TAU,
            fraction(organism.speed, params.max_speed),
            fraction(organism.energy, params.initial_energy).clamp(0.0, 1.0),
            clock,
            clock_2,
        ]
    }

    fn input_size(&self, _params: &Params) -> usize {
        NUM_EXTRA_INPUTS
    }

    fn name(&self) -> &'static str {
        "Proprioception"
    }
}
