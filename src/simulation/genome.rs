//! Genome value type and the genetic operators that produce new genomes.
//!
//! A genome is a fixed-length vector of reals in `[0, 1]`. The leading genes
//! are phenotypic traits, the rest are raw network weights.

use ndarray::{Array1, ArrayView1, s};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::error::EvolutionError;

/// Clock speed driving the first internal clock input.
pub const TRAIT_CLOCK_SPEED: usize = 0;
/// Clock speed driving the second internal clock input.
pub const TRAIT_CLOCK_SPEED_2: usize = 1;
/// Field of view as a fraction of π.
pub const TRAIT_FOV: usize = 2;
/// Red color channel.
pub const TRAIT_RED: usize = 3;
/// Green color channel.
pub const TRAIT_GREEN: usize = 4;
/// Blue color channel.
pub const TRAIT_BLUE: usize = 5;
/// Birth location along x, as a fraction of the world size.
pub const TRAIT_BIRTH_X: usize = 6;
/// Birth location along y, as a fraction of the world size.
pub const TRAIT_BIRTH_Y: usize = 7;
/// Number of trait genes preceding the weight genes.
pub const NUM_TRAITS: usize = 8;

/// Ordered, fixed-length gene vector.
///
/// Never changed once an organism is built from it. New genomes only come
/// out of [`Genome::crossover`] followed by [`Genome::mutate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genome {
    genes: Array1<f32>,
}

impl Genome {
    /// Wraps an existing gene vector.
    pub fn new(genes: Array1<f32>) -> Self {
        Self { genes }
    }

    /// Draws `length` independent uniform genes in `[0, 1)`.
    pub fn random<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Self {
        Self {
            genes: Array1::from_shape_fn(length, |_| rng.random::<f32>()),
        }
    }

    /// Single-point crossover.
    ///
    /// A cut point is drawn uniformly in `[0, len)`; genes after the cut come
    /// from `self`, the cut and everything before it from `partner`.
    pub fn crossover<R: Rng + ?Sized>(
        &self,
        partner: &Genome,
        rng: &mut R,
    ) -> Result<Genome, EvolutionError> {
        if self.len() != partner.len() {
            return Err(EvolutionError::GenomeLength {
                left: self.len(),
                right: partner.len(),
            });
        }
        if self.is_empty() {
            return Ok(self.clone());
        }

        let midpoint = rng.random_range(0..self.len());
        let genes = Array1::from_shape_fn(self.len(), |i| {
            if i > midpoint {
                self.genes[i]
            } else {
                partner.genes[i]
            }
        });

        Ok(Genome { genes })
    }

    /// Replaces each gene with a fresh uniform draw with probability `rate`.
    pub fn mutate<R: Rng + ?Sized>(&mut self, rate: f32, rng: &mut R) {
        for gene in &mut self.genes {
            if rng.random::<f32>() < rate {
                *gene = rng.random::<f32>();
            }
        }
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// True for a genome without genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// All genes.
    pub fn genes(&self) -> &Array1<f32> {
        &self.genes
    }

    /// Value of trait gene `index` (one of the `TRAIT_*` constants).
    pub fn trait_value(&self, index: usize) -> f32 {
        self.genes[index]
    }

    /// Genes following the trait block.
    pub fn weight_genes(&self) -> ArrayView1<'_, f32> {
        let start = NUM_TRAITS.min(self.len());
        self.genes.slice(s![start..])
    }

    /// RGB color encoded by the trait genes.
    pub fn color(&self) -> [f32; 3] {
        [
            self.genes[TRAIT_RED],
            self.genes[TRAIT_GREEN],
            self.genes[TRAIT_BLUE],
        ]
    }
}
