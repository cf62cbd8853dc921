//! The pond: population, food and the generation loop.
//!
//! A step runs every organism's perceive and update in population order,
//! then resolves feeding in the same order. Consumed food is removed in one
//! pass at the end of the step. At the generation boundary the whole
//! population is replaced by reproduction and the world is reseeded.
//!
//! All randomness comes from one seeded generator owned by the pond, so a
//! pond built from the same parameters and seed replays identically.

use geo::coord;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::error::PondError;
use super::evolution;
use super::food::Food;
use super::genome::Genome;
use super::geometric_utils::{Vec2, distance, wrap_around_mut};
use super::organism::Organism;
use super::params::Params;
use super::snapshot::PondSnapshot;
use super::stats::{self, FitnessHistory, GenerationReport};

/// The main pond containing all simulation state.
#[derive(Debug, Clone)]
pub struct Pond {
    params: Params,
    organisms: Vec<Organism>,
    food: Vec<Food>,
    rng: StdRng,
    time: u32,
    generation: u32,
    history: FitnessHistory,
}

impl Pond {
    /// Creates a pond with a random population and freshly seeded food.
    ///
    /// # Arguments
    ///
    /// * `params` - Simulation parameters, validated here
    /// * `seed` - Seed for the pond's random generator
    pub fn new(params: Params, seed: u64) -> Result<Self, PondError> {
        params.validate()?;

        let mut rng = StdRng::seed_from_u64(seed);
        let genome_length = params.genome_length();

        let organisms = (0..params.population_size)
            .map(|_| Organism::new(Genome::random(genome_length, &mut rng), &params))
            .collect::<Result<Vec<_>, _>>()?;

        let mut pond = Self {
            params,
            organisms,
            food: Vec::new(),
            rng,
            time: 0,
            generation: 0,
            history: FitnessHistory::new(),
        };
        pond.reseed();

        Ok(pond)
    }

    /// Advances the simulation by one step.
    pub fn step(&mut self) -> Result<(), PondError> {
        for organism in &mut self.organisms {
            organism.perceive(&self.food, &self.params)?;
            organism.update(&self.params)?;
        }

        let mut respawned = Vec::new();
        for organism in &mut self.organisms {
            if !organism.is_alive() {
                continue;
            }

            let mouth = organism.mouth(&self.params);
            for food in self.food.iter_mut().filter(|food| !food.is_consumed()) {
                if distance(mouth, food.pos) <= self.params.food_radius
                    && self.rng.random::<f32>() > self.params.food_eat_difficulty
                    && organism.eat(&self.params)
                {
                    food.consume();
                    log::trace!("food eaten at ({:.1}, {:.1})", food.pos.x, food.pos.y);

                    if self.rng.random::<f32>() < self.params.food_respawn_rate {
                        respawned.push(Food::new_random(self.params.world_size, &mut self.rng));
                    }
                }
            }
        }

        self.food.retain(|food| !food.is_consumed());
        self.food.extend(respawned);
        self.time += 1;

        Ok(())
    }

    /// True once the generation has run for its full lifespan.
    pub fn is_generation_boundary(&self) -> bool {
        self.time >= self.params.generation_lifespan
    }

    /// Ends the generation: breeds a new population, reseeds the food and
    /// resets every organism.
    ///
    /// # Returns
    ///
    /// The average fitness of the generation that was replaced.
    pub fn reset(&mut self) -> Result<f32, PondError> {
        let survivors = self.organisms.iter().filter(|o| o.is_alive()).count();
        let food_collected = self.organisms.iter().map(|o| o.food_collected).sum();
        let best_fitness = self
            .organisms
            .iter()
            .map(Organism::fitness)
            .fold(0.0, f32::max);

        let average_fitness = evolution::reproduce(
            &mut self.organisms,
            self.params.mutation_rate,
            &self.params,
            &mut self.rng,
        )?;

        self.reseed();

        let top_average_fitness = self.history.top_average_fitness().max(average_fitness);
        let report = GenerationReport {
            generation: self.generation,
            average_fitness,
            best_fitness,
            top_average_fitness,
            survivors,
            food_collected,
            average_color: stats::average_color(&self.organisms),
        };
        log::info!(
            "generation {}: average fitness {:.5}, best {:.5}, top {:.5}, {} survivors, {} food eaten",
            report.generation,
            report.average_fitness,
            report.best_fitness,
            report.top_average_fitness,
            report.survivors,
            report.food_collected
        );
        self.history.record(report);

        self.time = 0;
        self.generation += 1;

        Ok(average_fitness)
    }

    /// Steps until the generation boundary, then ends the generation.
    pub fn run_generation(&mut self) -> Result<f32, PondError> {
        while !self.is_generation_boundary() {
            self.step()?;
        }
        self.reset()
    }

    /// Injects food near `position`.
    ///
    /// Adds `food_spawn_cluster` items, each offset by up to
    /// `food_spawn_jitter` along both axes and wrapped into the world.
    pub fn spawn_food(&mut self, position: Vec2) {
        let jitter = self.params.food_spawn_jitter;
        for _ in 0..self.params.food_spawn_cluster {
            let mut pos = if jitter > 0.0 {
                position
                    + coord! {
                        x: self.rng.random_range(-jitter..=jitter),
                        y: self.rng.random_range(-jitter..=jitter),
                    }
            } else {
                position
            };
            wrap_around_mut(&mut pos, self.params.world_size);
            self.food.push(Food::new(pos));
        }
        log::debug!(
            "spawned {} food near ({:.1}, {:.1})",
            self.params.food_spawn_cluster,
            position.x,
            position.y
        );
    }

    /// Read-only copy of the pond state for renderers.
    pub fn snapshot(&self) -> PondSnapshot {
        PondSnapshot::capture(self)
    }

    /// Simulation parameters.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// The population, in update order.
    pub fn organisms(&self) -> &[Organism] {
        &self.organisms
    }

    /// Food currently in the pond.
    pub fn food(&self) -> &[Food] {
        &self.food
    }

    /// Steps taken in the current generation.
    pub fn time(&self) -> u32 {
        self.time
    }

    /// Number of finished generations.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Reports of all finished generations.
    pub fn history(&self) -> &FitnessHistory {
        &self.history
    }

    fn reseed(&mut self) {
        self.food.clear();
        for _ in 0..self.params.food_amount {
            let food = Food::new_random(self.params.world_size, &mut self.rng);
            self.food.push(food);
        }

        for organism in &mut self.organisms {
            organism.reset(&self.params, &mut self.rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pond whose organisms can turn but never move.
    fn stationary_pond(population_size: usize, food_respawn_rate: f32) -> Pond {
        let params = Params {
            world_size: 200.0,
            population_size,
            food_amount: 400,
            food_respawn_rate,
            max_speed: 0.0,
            ..Params::default()
        };
        Pond::new(params, 3).unwrap()
    }

    #[test]
    fn test_first_organism_in_order_wins_shared_food() {
        let mut pond = stationary_pond(2, 1.0);
        for organism in &mut pond.organisms {
            organism.pos = coord! { x: 100.0, y: 100.0 };
            organism.heading = 0.0;
        }
        let mouth = pond.organisms[0].mouth(&pond.params);
        pond.food = vec![Food::new(mouth)];

        pond.step().unwrap();

        let collected: Vec<u32> = pond.organisms.iter().map(|o| o.food_collected).collect();
        assert_eq!(collected, vec![1, 0]);
        // the replacement is only added after the feeding pass
        assert_eq!(pond.food.len(), 1);
        assert!(!pond.food[0].is_consumed());
    }

    #[test]
    fn test_full_respawn_keeps_food_count() {
        let mut pond = stationary_pond(10, 1.0);
        let mouth = pond.organisms[0].mouth(&pond.params);
        pond.food[0] = Food::new(mouth);
        let food_amount = pond.params.food_amount;

        for _ in 0..20 {
            pond.step().unwrap();
            assert_eq!(pond.food.len(), food_amount);
        }

        let eaten: u32 = pond.organisms.iter().map(|o| o.food_collected).sum();
        assert!(eaten >= 1);
    }
}
