use crate::error::{Result, WeaselError};
use std::collections::HashMap;
use std::fmt;

/// Organism value as a sequence of alphabet positions.
///
/// Working on positions instead of characters keeps scoring and mutation to
/// plain integer arithmetic; `Alphabet::decode` turns it back into text.
pub type Genome = Vec<usize>;

/// Ordered set of distinct symbols.
///
/// The order only matters for distance: two symbols are as far apart as their
/// positions. Mutation treats the alphabet as circular (see [`Alphabet::shift`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    positions: HashMap<char, usize>,
}

impl Alphabet {
    pub fn new(symbols: &str) -> Result<Self> {
        if symbols.is_empty() {
            return Err(WeaselError::Configuration(
                "Alphabet must contain at least one symbol".to_string(),
            ));
        }

        let symbols: Vec<char> = symbols.chars().collect();
        let mut positions = HashMap::with_capacity(symbols.len());
        for (i, &symbol) in symbols.iter().enumerate() {
            if positions.insert(symbol, i).is_some() {
                return Err(WeaselError::Configuration(format!(
                    "Alphabet symbols must be distinct, '{}' appears more than once",
                    symbol
                )));
            }
        }

        Ok(Self { symbols, positions })
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol at `index`. Panics on an index outside the alphabet.
    pub fn symbol(&self, index: usize) -> char {
        self.symbols[index]
    }

    pub fn position(&self, symbol: char) -> Option<usize> {
        self.positions.get(&symbol).copied()
    }

    /// Move `offset` positions from `index`, wrapping around both ends.
    pub fn shift(&self, index: usize, offset: i64) -> usize {
        let len = self.symbols.len() as i64;
        (index as i64 + offset.rem_euclid(len)).rem_euclid(len) as usize
    }

    pub fn encode(&self, text: &str) -> Result<Genome> {
        text.chars()
            .map(|symbol| {
                self.position(symbol).ok_or_else(|| WeaselError::UnknownSymbol {
                    symbol,
                    alphabet: self.to_string(),
                })
            })
            .collect()
    }

    pub fn decode(&self, genome: &[usize]) -> String {
        genome.iter().map(|&i| self.symbols[i]).collect()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

/// Goal string, already checked against its alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    text: String,
    genome: Genome,
}

impl Target {
    pub fn new(alphabet: &Alphabet, text: &str) -> Result<Self> {
        let genome = alphabet.encode(text).map_err(|_| {
            WeaselError::Configuration(format!(
                "invalid target '{}': target must consist of '{}'",
                text, alphabet
            ))
        })?;

        Ok(Self {
            text: text.to_string(),
            genome,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn genome(&self) -> &[usize] {
        &self.genome
    }

    /// Number of symbols (T).
    pub fn len(&self) -> usize {
        self.genome.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genome.is_empty()
    }
}
