//! Organism module containing organism behavior and perception systems.

#[allow(clippy::module_inception)]
mod organism;
mod proprioception;
mod sense;
mod vision;

// Re-export everything from the organism module
pub use organism::*;

pub use proprioception::Proprioception;
pub use sense::Sense;
pub use vision::Vision;
