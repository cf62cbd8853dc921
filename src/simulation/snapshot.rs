//! Read-only views of the pond for renderers and tooling.
//!
//! Snapshots are plain copies; nothing in them can be fed back into a pond.

use serde::Serialize;

use super::brain::Network;
use super::error::PondError;
use super::food::Food;
use super::organism::Organism;
use super::pond::Pond;

/// Network topology, activations and weights for visualization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrainView {
    /// Neuron count per layer, bias excluded.
    pub topology: Vec<usize>,
    /// Neuron outputs per layer, bias neurons included.
    pub outputs: Vec<Vec<f32>>,
    /// Outgoing weights per layer, one row per neuron.
    pub weights: Vec<Vec<Vec<f32>>>,
}

impl From<&Network> for BrainView {
    fn from(network: &Network) -> Self {
        Self {
            topology: network.topology().to_vec(),
            outputs: network
                .layers()
                .iter()
                .map(|layer| layer.outputs.to_vec())
                .collect(),
            weights: network
                .layers()
                .iter()
                .map(|layer| layer.weights.outer_iter().map(|row| row.to_vec()).collect())
                .collect(),
        }
    }
}

/// Per-organism state a renderer needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrganismView {
    /// Position in world coordinates.
    pub position: [f32; 2],
    /// Heading in radians.
    pub heading: f32,
    /// Trait color.
    pub color: [f32; 3],
    /// Full genome.
    pub genes: Vec<f32>,
    /// False once starved.
    pub alive: bool,
    /// Current energy.
    pub energy: f32,
    /// Food eaten this generation.
    pub food_collected: u32,
    /// Eye readings from the last perception.
    pub sensors: Vec<f32>,
    /// Brain state.
    pub brain: BrainView,
}

impl OrganismView {
    fn capture(organism: &Organism, num_eyes: usize) -> Self {
        Self {
            position: [organism.pos.x, organism.pos.y],
            heading: organism.heading,
            color: organism.genome().color(),
            genes: organism.genome().genes().to_vec(),
            alive: organism.is_alive(),
            energy: organism.energy,
            food_collected: organism.food_collected,
            sensors: organism.sensors().iter().take(num_eyes).copied().collect(),
            brain: BrainView::from(organism.brain()),
        }
    }
}

/// Food position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FoodView {
    /// Position in world coordinates.
    pub position: [f32; 2],
}

impl From<&Food> for FoodView {
    fn from(food: &Food) -> Self {
        Self {
            position: [food.pos.x, food.pos.y],
        }
    }
}

/// Complete view of the pond at one step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PondSnapshot {
    /// Steps taken in the current generation.
    pub time: u32,
    /// Finished generations.
    pub generation: u32,
    /// Edge length of the world.
    pub world_size: f32,
    /// Organisms in population order.
    pub organisms: Vec<OrganismView>,
    /// Food items.
    pub food: Vec<FoodView>,
}

impl PondSnapshot {
    /// Copies the current state of `pond`.
    pub fn capture(pond: &Pond) -> Self {
        let num_eyes = pond.params().num_eyes;
        Self {
            time: pond.time(),
            generation: pond.generation(),
            world_size: pond.params().world_size,
            organisms: pond
                .organisms()
                .iter()
                .map(|organism| OrganismView::capture(organism, num_eyes))
                .collect(),
            food: pond.food().iter().map(FoodView::from).collect(),
        }
    }

    /// Serializes the snapshot to JSON.
    pub fn to_json(&self) -> Result<String, PondError> {
        Ok(serde_json::to_string(self)?)
    }
}
