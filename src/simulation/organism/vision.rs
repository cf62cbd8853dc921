//! Vision sense - rays cast across the field of view to spot food.

use ndarray::Array1;

use super::super::food::Food;
use super::super::geometric_utils::{distance, segment_intersects_circle};
use super::super::params::Params;
use super::Organism;
use super::sense::Sense;

/// Vision sense that detects food using raycasting.
///
/// One output per eye: `1 - distance / sight_length` for the nearest food
/// the ray touches, or 0 when it sees nothing.
pub struct Vision;

impl Vision {
    /// Creates a new vision sense.
    pub fn new() -> Self {
        Self
    }
}

impl Default for Vision {
    fn default() -> Self {
        Self::new()
    }
}

impl Sense for Vision {
    fn sense(&self, organism: &Organism, foods: &[Food], params: &Params) -> Array1<f32> {
        let sight = organism.sight_length;
        let pos = organism.pos;

        organism
            .get_vision_vectors(params)
            .into_iter()
            .map(|ray| {
                let end_point = pos + ray;
                foods
                    .iter()
                    .filter(|food| !food.is_consumed())
                    .filter(|food| {
                        let diff = pos - food.pos;
                        diff.x.abs() < sight && diff.y.abs() < sight
                    })
                    .filter(|food| {
                        segment_intersects_circle(pos, end_point, food.pos, params.food_radius)
                    })
                    .map(|food| 1.0 - distance(pos, food.pos) / sight)
                    .fold(0.0_f32, f32::max)
            })
            .collect()
    }

    fn input_size(&self, params: &Params) -> usize {
        params.num_eyes
    }

    fn name(&self) -> &'static str {
        "Vision"
    }
}
