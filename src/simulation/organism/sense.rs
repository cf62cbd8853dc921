//! Sense trait shared by every sensory modality.
//!
//! Senses turn the organism's surroundings into neural network inputs. The
//! organism concatenates them, in a fixed order, into its input vector.

use ndarray::Array1;

use super::super::food::Food;
use super::super::params::Params;
use super::Organism;

/// A sensory modality feeding the organism's brain.
pub trait Sense {
    /// Process sensory information and return neural network inputs.
    ///
    /// # Arguments
    ///
    /// * `organism` - The organism doing the sensing
    /// * `foods` - Food currently in the pond
    /// * `params` - Simulation parameters
    ///
    /// # Returns
    ///
    /// Exactly `input_size(params)` activations.
    fn sense(&self, organism: &Organism, foods: &[Food], params: &Params) -> Array1<f32>;

    /// Returns the number of neural network inputs this sense produces.
    fn input_size(&self, params: &Params) -> usize;

    /// Returns a human-readable name for this sense.
    fn name(&self) -> &'static str;
}
