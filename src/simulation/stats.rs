//! Per-generation statistics.

use serde::{Deserialize, Serialize};

use super::organism::Organism;

/// Summary of one finished generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Index of the finished generation (0-based).
    pub generation: u32,
    /// Mean fitness of the finished generation.
    pub average_fitness: f32,
    /// Best individual fitness of the finished generation.
    pub best_fitness: f32,
    /// Highest average fitness of any generation so far, this one included.
    pub top_average_fitness: f32,
    /// Organisms still alive at the boundary.
    pub survivors: usize,
    /// Food eaten by the whole population within the lifespan.
    pub food_collected: u32,
    /// Mean trait color of the population bred from this generation.
    pub average_color: [f32; 3],
}

/// Reports of every finished generation, oldest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FitnessHistory {
    reports: Vec<GenerationReport>,
}

impl FitnessHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a report.
    pub fn record(&mut self, report: GenerationReport) {
        self.reports.push(report);
    }

    /// All reports, oldest first.
    pub fn reports(&self) -> &[GenerationReport] {
        &self.reports
    }

    /// The most recent report.
    pub fn latest(&self) -> Option<&GenerationReport> {
        self.reports.last()
    }

    /// Highest average fitness recorded, or 0 before the first generation.
    pub fn top_average_fitness(&self) -> f32 {
        self.reports
            .iter()
            .map(|report| report.average_fitness)
            .fold(0.0, f32::max)
    }

    /// Number of recorded generations.
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// True before the first generation ends.
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

/// Mean RGB trait color of a population; black for an empty one.
pub fn average_color(organisms: &[Organism]) -> [f32; 3] {
    if organisms.is_empty() {
        return [0.0; 3];
    }

    let mut sum = [0.0_f32; 3];
    for organism in organisms {
        for (total, channel) in sum.iter_mut().zip(organism.genome().color()) {
            *total += channel;
        }
    }

    let n = organisms.len() as f32;
    sum.map(|total| total / n)
}
