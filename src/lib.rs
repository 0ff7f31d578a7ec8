//! Self-adaptive evolution simulator built around Dawkins' weasel program.
//!
//! A bounded population of candidate strings evolves toward a target string.
//! Every organism carries its own mutation strength (sigma) and reproduction
//! count, and both are mutated along with the candidate value.

pub mod config;
pub mod engines;
pub mod error;
pub mod types;

pub use crate::config::{AppConfig, BaselineConfig, ConfigManager, EvolutionConfig};
pub use engines::evaluation::{DistanceScorer, ExactMatchScorer, Scorer};
pub use engines::generation::{
    EvolutionEngine, HillClimber, Organism, Population, ProgressCallback, RunOutcome,
};
pub use error::{Result, WeaselError};
pub use types::{Alphabet, Genome, Target};
