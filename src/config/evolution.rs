use super::traits::ConfigSection;
use super::{DEFAULT_ALPHABET, DEFAULT_TARGET};
use crate::engines::generation::operators::{MAX_REPRODUCTION_COUNT, SIGMA_CEILING};
use crate::error::WeaselError;
use crate::types::{Alphabet, Target};
use serde::{Deserialize, Serialize};

/// Options of the self-adaptive engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    /// Number of population slots.
    pub population_size: usize,
    /// Gene pool; also defines the distance between symbols.
    pub alphabet: String,
    pub target: String,
    /// Fixed seed for reproducible runs; the current time is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub random_seed: Option<u64>,
    /// Mutation strength of the seed organism.
    pub initial_sigma: f64,
    /// Children per generation of the seed organism.
    pub initial_reproduction_count: usize,
    /// Partial initial value, padded with random symbols.
    pub seed_value: String,
    /// Stop after this many generations even if the target was not reached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_generations: Option<usize>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 5,
            alphabet: DEFAULT_ALPHABET.to_string(),
            target: DEFAULT_TARGET.to_string(),
            random_seed: None,
            initial_sigma: 5.0,
            initial_reproduction_count: 1,
            seed_value: String::new(),
            max_generations: None,
        }
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), WeaselError> {
        if self.population_size < 1 {
            return Err(WeaselError::Configuration(format!(
                "invalid population size '{}'",
                self.population_size
            )));
        }
        if !(self.initial_sigma > 0.0 && self.initial_sigma <= SIGMA_CEILING) {
            return Err(WeaselError::Configuration(format!(
                "invalid mutation rate '{}'",
                self.initial_sigma
            )));
        }
        if !(1..=MAX_REPRODUCTION_COUNT).contains(&self.initial_reproduction_count) {
            return Err(WeaselError::Configuration(format!(
                "invalid reproduction rate '{}'",
                self.initial_reproduction_count
            )));
        }
        if self.max_generations == Some(0) {
            return Err(WeaselError::Configuration(
                "invalid generation limit '0'".to_string(),
            ));
        }

        let alphabet = Alphabet::new(&self.alphabet)?;
        Target::new(&alphabet, &self.target)?;
        alphabet.encode(&self.seed_value).map_err(|_| {
            WeaselError::Configuration(format!(
                "invalid seed value '{}': seed value must consist of '{}'",
                self.seed_value, alphabet
            ))
        })?;
        Ok(())
    }
}
