use crate::engines::evaluation::{Score, Scorer};
use crate::engines::generation::operators::{
    adapt_reproduction_count, adapt_sigma, padded_genome, shift_genome,
};
use crate::types::{Alphabet, Genome};
use rand::Rng;

/// A candidate value together with its own strategy parameters.
///
/// `sigma` and `reproduction_count` are inherited by every child and mutated
/// alongside the value, so lineages that found a useful step size and brood
/// size keep them.
#[derive(Debug, Clone, PartialEq)]
pub struct Organism {
    pub(crate) value: Genome,
    pub(crate) sigma: f64,
    pub(crate) reproduction_count: usize,
    pub(crate) score: Score,
    pub(crate) parent: Option<usize>,
}

impl Organism {
    /// Initial organism: `seed` padded (or cut) to the target length with
    /// random symbols.
    pub fn seed<S: Scorer, R: Rng>(
        seed: &[usize],
        length: usize,
        sigma: f64,
        reproduction_count: usize,
        alphabet: &Alphabet,
        scorer: &S,
        rng: &mut R,
    ) -> Self {
        let value = padded_genome(seed, length, alphabet, rng);
        let score = scorer.score(&value);
        Self {
            value,
            sigma,
            reproduction_count,
            score,
            parent: None,
        }
    }

    /// Copy of this organism, mutated, with `slot` recorded as its parent.
    pub fn reproduce<S: Scorer, R: Rng>(
        &self,
        slot: usize,
        alphabet: &Alphabet,
        scorer: &S,
        rng: &mut R,
    ) -> Self {
        let mut child = Self {
            value: self.value.clone(),
            sigma: self.sigma,
            reproduction_count: self.reproduction_count,
            score: self.score,
            parent: Some(slot),
        };
        child.mutate(alphabet, scorer, rng);
        child
    }

    /// Mutate the value, then the reproduction count, then sigma, and rescore.
    ///
    /// All three steps draw with the sigma the organism had on entry. The
    /// order and number of draws is fixed: one per position, one for the
    /// count, one for sigma.
    pub fn mutate<S: Scorer, R: Rng>(&mut self, alphabet: &Alphabet, scorer: &S, rng: &mut R) {
        shift_genome(&mut self.value, self.sigma, alphabet, rng);
        self.reproduction_count = adapt_reproduction_count(self.reproduction_count, self.sigma, rng);
        self.sigma = adapt_sigma(self.sigma, rng);
        self.score = scorer.score(&self.value);
    }

    /// Strictly better score than `other`.
    pub fn beats(&self, other: &Organism) -> bool {
        self.score > other.score
    }

    pub fn value(&self) -> &[usize] {
        &self.value
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn reproduction_count(&self) -> usize {
        self.reproduction_count
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Slot of the parent in the previous generation; `None` for the seed.
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }
}
