//! Generational reproduction: rank-biased selection, crossover and mutation.
//!
//! Reproduction is the only place where population composition changes. The
//! offspring are built into a fresh vector and swapped in at the end, so a
//! failed call leaves the caller's population untouched.

use rand::Rng;

use super::error::{EvolutionError, PondError};
use super::genome::Genome;

/// Maximum number of selection passes before an empty mating pool is fatal.
pub const MAX_SELECTION_PASSES: usize = 1000;

/// Anything that can be bred from a genome and scored.
pub trait Evolvable: Sized {
    /// Shared construction data (parameters, world description).
    type Context;

    /// Builds a fresh individual from `genome`.
    fn from_genome(genome: Genome, context: &Self::Context) -> Result<Self, PondError>;

    /// The genome this individual was built from.
    fn genome(&self) -> &Genome;

    /// Scores the individual's performance this generation.
    fn fitness(&self) -> f32;

    /// Stores the score computed at the generation boundary.
    fn cache_fitness(&mut self, score: f32);

    /// Prepares the individual for a new generation.
    fn reset<R: Rng + ?Sized>(&mut self, context: &Self::Context, rng: &mut R);
}

/// Selects ranks for the mating pool.
///
/// Rank `i` (0 = worst of `n`) joins with probability `min(1, 2(i + 1)/n)`,
/// so the best rank always joins. Passes are repeated while the pool is
/// empty, up to [`MAX_SELECTION_PASSES`].
pub fn mating_pool<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Vec<usize>, EvolutionError> {
    if n == 0 {
        return Err(EvolutionError::EmptyPopulation);
    }

    for _ in 0..MAX_SELECTION_PASSES {
        let pool: Vec<usize> = (0..n)
            .filter(|&rank| rng.random::<f32>() < (rank + 1) as f32 / n as f32 * 2.0)
            .collect();

        if !pool.is_empty() {
            return Ok(pool);
        }
    }

    Err(EvolutionError::EmptyMatingPool {
        attempts: MAX_SELECTION_PASSES,
    })
}

/// Replaces `population` with a new generation of the same size.
///
/// 1. Every individual's fitness is computed and cached.
/// 2. Individuals are ranked ascending by fitness.
/// 3. A rank-biased mating pool is drawn (see [`mating_pool`]).
/// 4. Each offspring crosses two parents picked uniformly (with replacement)
///    from the pool, mutates the result and is built from it.
///
/// Returns the mean fitness of the replaced generation.
pub fn reproduce<T, R>(
    population: &mut Vec<T>,
    mutation_rate: f32,
    context: &T::Context,
    rng: &mut R,
) -> Result<f32, PondError>
where
    T: Evolvable,
    R: Rng + ?Sized,
{
    let n = population.len();
    if n == 0 {
        return Err(EvolutionError::EmptyPopulation.into());
    }

    let scores: Vec<f32> = population
        .iter_mut()
        .map(|individual| {
            let score = individual.fitness();
            individual.cache_fitness(score);
            score
        })
        .collect();
    let average_fitness = scores.iter().sum::<f32>() / n as f32;

    // stable, so equal scores keep population order
    let mut ranked: Vec<usize> = (0..n).collect();
    ranked.sort_by(|&a, &b| scores[a].total_cmp(&scores[b]));

    let pool: Vec<&Genome> = mating_pool(n, rng)?
        .into_iter()
        .map(|rank| population[ranked[rank]].genome())
        .collect();

    let mut offspring = Vec::with_capacity(n);
    for _ in 0..n {
        let parent_a = pool[rng.random_range(0..pool.len())];
        let parent_b = pool[rng.random_range(0..pool.len())];

        let mut genome = parent_a.crossover(parent_b, rng)?;
        genome.mutate(mutation_rate, rng);

        offspring.push(T::from_genome(genome, context)?);
    }

    *population = offspring;

    Ok(average_fitness)
}
