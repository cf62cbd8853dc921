//! Food items that organisms can consume for energy.

use geo::coord;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometric_utils::Vec2;

/// A food item floating in the pond.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    /// Position in world coordinates.
    pub pos: Vec2,
    /// Set once consumed; the item is dropped at the end of the step.
    pub eaten: bool,
}

impl Food {
    /// Creates a food item at `pos`.
    pub fn new(pos: Vec2) -> Self {
        Self { pos, eaten: false }
    }

    /// Creates a food item at a uniformly random position in the world.
    ///
    /// # Arguments
    ///
    /// * `world_size` - Edge length of the square world
    /// * `rng` - Random source
    pub fn new_random<R: Rng + ?Sized>(world_size: f32, rng: &mut R) -> Self {
        Self::new(coord! {
            x: rng.random::<f32>() * world_size,
            y: rng.random::<f32>() * world_size,
        })
    }

    /// Checks if this food item has been consumed.
    pub fn is_consumed(&self) -> bool {
        self.eaten
    }

    /// Marks this food as consumed.
    pub fn consume(&mut self) {
        self.eaten = true;
    }
}
