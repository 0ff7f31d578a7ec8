use super::traits::ConfigSection;
use super::{DEFAULT_ALPHABET, DEFAULT_TARGET};
use crate::error::WeaselError;
use crate::types::{Alphabet, Target};
use serde::{Deserialize, Serialize};

/// Options of the non-adaptive hill climber.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaselineConfig {
    pub alphabet: String,
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub random_seed: Option<u64>,
    /// Children per generation.
    pub generation_size: usize,
    /// Chance, out of 100, that a position is replaced by a random symbol.
    pub mutation_rate: u32,
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self {
            alphabet: DEFAULT_ALPHABET.to_string(),
            target: DEFAULT_TARGET.to_string(),
            random_seed: None,
            generation_size: 100,
            mutation_rate: 5,
        }
    }
}

impl ConfigSection for BaselineConfig {
    fn section_name() -> &'static str {
        "baseline"
    }

    fn validate(&self) -> Result<(), WeaselError> {
        if self.generation_size < 1 {
            return Err(WeaselError::Configuration(format!(
                "invalid generation size '{}'",
                self.generation_size
            )));
        }
        if self.mutation_rate < 1 || self.mutation_rate > 100 {
            return Err(WeaselError::Configuration(format!(
                "invalid mutation rate '{}': must be between 1 and 100",
                self.mutation_rate
            )));
        }
        let alphabet = Alphabet::new(&self.alphabet)?;
        Target::new(&alphabet, &self.target)?;
        Ok(())
    }
}
