//! Feedforward neural network used as an organism's brain.
//!
//! A fixed-topology multilayer network with a bias neuron on every layer but
//! the last. Weights are decoded once from genes and never change during the
//! organism's lifetime; there is no backward pass.

use ndarray::{Array1, Array2, ArrayView1, s};
use serde::{Deserialize, Serialize};

use super::error::NetworkError;

/// Logistic activation `1 / (1 + e^-x)`.
#[inline]
pub fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// Number of connection weights a topology consumes.
///
/// Every neuron of a non-output layer, bias included, owns one weight per
/// (non-bias) neuron of the next layer.
pub fn weight_count(topology: &[usize]) -> usize {
    topology
        .windows(2)
        .map(|pair| (pair[0] + 1) * pair[1])
        .sum()
}

/// A single layer of neurons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    /// Neuron outputs. For every layer except the last, the final entry is the
    /// bias neuron, pinned to 1.
    pub outputs: Array1<f32>,
    /// Outgoing connection weights (`outputs.len()` × next layer size).
    /// Empty for the output layer.
    pub weights: Array2<f32>,
}

impl Layer {
    fn new(neurons: usize, next_neurons: usize, with_bias: bool) -> Self {
        let total = if with_bias { neurons + 1 } else { neurons };
        let mut outputs = Array1::zeros(total);
        if with_bias {
            outputs[neurons] = 1.0;
        }
        Self {
            outputs,
            weights: Array2::zeros((total, next_neurons)),
        }
    }

    /// Outgoing weights of neuron `index`, one per neuron in the next layer.
    pub fn connection_weights(&self, index: usize) -> ArrayView1<'_, f32> {
        self.weights.row(index)
    }
}

/// Fixed-topology feedforward network with bias units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Network {
    topology: Vec<usize>,
    layers: Vec<Layer>,
}

impl Network {
    /// Builds a network with all weights zero.
    ///
    /// # Arguments
    ///
    /// * `topology` - Neuron count per layer, e.g. `[inputs, hidden.., outputs]`
    pub fn new(topology: &[usize]) -> Result<Self, NetworkError> {
        if topology.len() < 2 {
            return Err(NetworkError::InvalidTopology {
                layers: topology.len(),
            });
        }

        let last = topology.len() - 1;
        let layers = topology
            .iter()
            .enumerate()
            .map(|(l, &neurons)| {
                let next = if l == last { 0 } else { topology[l + 1] };
                Layer::new(neurons, next, l != last)
            })
            .collect();

        Ok(Self {
            topology: topology.to_vec(),
            layers,
        })
    }

    /// Builds a network and decodes its weights from `weights`.
    pub fn from_weights(
        topology: &[usize],
        weights: ArrayView1<'_, f32>,
        weight_range: f32,
    ) -> Result<Self, NetworkError> {
        let mut network = Self::new(topology)?;
        network.set_weights(weights, weight_range)?;
        Ok(network)
    }

    /// Decodes raw genes in `[0, 1]` into connection weights.
    ///
    /// Weights are consumed from the end of `weights`: the first connection of
    /// the first neuron of the first layer takes the last gene. Each gene `w`
    /// becomes `(-1 + 2w) * weight_range`. Genes before the consumed tail are
    /// ignored.
    pub fn set_weights(
        &mut self,
        weights: ArrayView1<'_, f32>,
        weight_range: f32,
    ) -> Result<(), NetworkError> {
        let required = weight_count(&self.topology);
        if weights.len() < required {
            return Err(NetworkError::InsufficientWeights {
                required,
                available: weights.len(),
            });
        }

        let mut genes = weights.iter().rev();
        for layer in &mut self.layers {
            for (weight, &gene) in layer.weights.iter_mut().zip(&mut genes) {
                *weight = (-1.0 + gene * 2.0) * weight_range;
            }
        }

        Ok(())
    }

    /// Runs a forward pass.
    ///
    /// `input` must hold exactly one value per input neuron (bias excluded).
    pub fn feed_forward(&mut self, input: &Array1<f32>) -> Result<(), NetworkError> {
        let expected = self.topology[0];
        if input.len() != expected {
            return Err(NetworkError::InvalidInputSize {
                expected,
                actual: input.len(),
            });
        }

        self.layers[0].outputs.slice_mut(s![..expected]).assign(input);

        for l in 1..self.layers.len() {
            let neurons = self.topology[l];
            let (done, rest) = self.layers.split_at_mut(l);
            let previous = &done[l - 1];

            let sums = previous.weights.t().dot(&previous.outputs);
            rest[0]
                .outputs
                .slice_mut(s![..neurons])
                .assign(&sums.mapv(sigmoid));
        }

        Ok(())
    }

    /// Outputs of the final layer, in neuron order.
    pub fn results(&self) -> ArrayView1<'_, f32> {
        let last = self.topology.len() - 1;
        self.layers[last].outputs.slice(s![..self.topology[last]])
    }

    /// Neuron count per layer, bias neurons excluded.
    pub fn topology(&self) -> &[usize] {
        &self.topology
    }

    /// All layers, input first.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}
