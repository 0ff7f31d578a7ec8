use crate::error::Result;
use crate::types::{Alphabet, Genome, Target};

pub type Score = u64;

/// Closeness of a candidate to the target. Higher is better.
pub trait Scorer {
    /// Score aligned positions up to the shorter of candidate and target.
    fn score(&self, candidate: &[usize]) -> Score;

    /// Score of the target itself.
    fn max_score(&self) -> Score;

    /// Score a text candidate. Fails on symbols outside the alphabet.
    fn score_text(&self, alphabet: &Alphabet, candidate: &str) -> Result<Score> {
        Ok(self.score(&alphabet.encode(candidate)?))
    }
}

/// Each position scores `P - |index(candidate) - index(target)|`.
///
/// A neighbouring symbol scores almost as well as an exact match, which gives
/// mutation a gradient to follow. The distance here is linear, not circular.
#[derive(Debug, Clone)]
pub struct DistanceScorer {
    alphabet_len: usize,
    target: Genome,
}

impl DistanceScorer {
    pub fn new(alphabet: &Alphabet, target: &Target) -> Self {
        Self {
            alphabet_len: alphabet.len(),
            target: target.genome().to_vec(),
        }
    }
}

impl Scorer for DistanceScorer {
    fn score(&self, candidate: &[usize]) -> Score {
        candidate
            .iter()
            .zip(&self.target)
            .map(|(&c, &t)| (self.alphabet_len - c.abs_diff(t)) as Score)
            .sum()
    }

    fn max_score(&self) -> Score {
        (self.target.len() * self.alphabet_len) as Score
    }
}

/// Counts positions equal to the target. Used by the hill climber.
#[derive(Debug, Clone)]
pub struct ExactMatchScorer {
    target: Genome,
}

impl ExactMatchScorer {
    pub fn new(target: &Target) -> Self {
        Self {
            target: target.genome().to_vec(),
        }
    }
}

impl Scorer for ExactMatchScorer {
    fn score(&self, candidate: &[usize]) -> Score {
        candidate
            .iter()
            .zip(&self.target)
            .filter(|(c, t)| c == t)
            .count() as Score
    }

    fn max_score(&self) -> Score {
        self.target.len() as Score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(target: &str) -> (Alphabet, DistanceScorer) {
        let alphabet = Alphabet::new(" ABCDEFGHIJKLMNOPQRSTUVWXYZ").unwrap();
        let target = Target::new(&alphabet, target).unwrap();
        let scorer = DistanceScorer::new(&alphabet, &target);
        (alphabet, scorer)
    }

    #[test]
    fn test_target_scores_maximum() {
        let (alphabet, scorer) = setup("METHINKS IT IS LIKE A WEASEL");
        assert_eq!(scorer.max_score(), 28 * 27);
        assert_eq!(
            scorer.score_text(&alphabet, "METHINKS IT IS LIKE A WEASEL").unwrap(),
            scorer.max_score()
        );
    }

    #[test]
    fn test_near_miss_scores_high() {
        let (alphabet, scorer) = setup("CAT");
        // 'B' is next to 'C', ' ' is 20 away from 'T'
        assert_eq!(scorer.score_text(&alphabet, "BAT").unwrap(), 26 + 27 + 27);
        assert_eq!(scorer.score_text(&alphabet, "CA ").unwrap(), 27 + 27 + 7);
        // the distance does not wrap: ' ' and 'Z' are as far apart as possible
        let (alphabet, scorer) = setup(" ");
        assert_eq!(scorer.score_text(&alphabet, "Z").unwrap(), 1);
    }

    #[test]
    fn test_score_bounds() {
        let (alphabet, scorer) = setup("CAT");
        for candidate in ["", "C", "ZZZ", "   ", "CAT", "ZZ", "CATS"] {
            let score = scorer.score_text(&alphabet, candidate).unwrap();
            assert!(score <= scorer.max_score(), "{} scored {}", candidate, score);
        }
        assert_eq!(scorer.score_text(&alphabet, "").unwrap(), 0);
        assert_eq!(scorer.score_text(&alphabet, "C").unwrap(), 27);
    }

    #[test]
    fn test_score_is_deterministic() {
        let (alphabet, scorer) = setup("CAT");
        let genome = alphabet.encode("DOG").unwrap();
        assert_eq!(scorer.score(&genome), scorer.score(&genome));
        assert_eq!(scorer.clone().score(&genome), scorer.score(&genome));
    }

    #[test]
    fn test_unknown_symbol_is_rejected() {
        let (alphabet, scorer) = setup("CAT");
        assert!(scorer.score_text(&alphabet, "cat").is_err());
    }

    #[test]
    fn test_exact_match_counts_positions() {
        let alphabet = Alphabet::new(" ABCDEFGHIJKLMNOPQRSTUVWXYZ").unwrap();
        let target = Target::new(&alphabet, "CAT").unwrap();
        let scorer = ExactMatchScorer::new(&target);
        assert_eq!(scorer.max_score(), 3);
        assert_eq!(scorer.score_text(&alphabet, "BAT").unwrap(), 2);
        assert_eq!(scorer.score_text(&alphabet, "DOG").unwrap(), 0);
    }
}
