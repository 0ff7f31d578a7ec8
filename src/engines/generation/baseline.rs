use crate::config::{BaselineConfig, ConfigSection};
use crate::engines::evaluation::{ExactMatchScorer, Score, Scorer};
use crate::engines::generation::evolution_engine::ProgressCallback;
use crate::engines::generation::operators::{mutate_uniform, random_genome, seeded_rng};
use crate::engines::generation::progress::{BaselineReport, BaselineSummary};
use crate::error::WeaselError;
use crate::types::{Alphabet, Genome, Target};
use rand::rngs::StdRng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaselineOutcome {
    pub generations: usize,
    pub value: String,
}

/// Dawkins' original weasel: no population, no self-adaptation.
///
/// Each generation copies the current candidate `generation_size` times,
/// mutates every copy with a fixed per-position rate and keeps the best copy,
/// even when it is worse than its parent. Scores count exact matches only.
pub struct HillClimber {
    config: BaselineConfig,
    alphabet: Alphabet,
    target: Target,
    scorer: ExactMatchScorer,
    candidate: Genome,
    score: Score,
    generation: usize,
    seed: u64,
    rng: StdRng,
}

impl HillClimber {
    pub fn new(config: BaselineConfig) -> Result<Self, WeaselError> {
        config.validate()?;

        let alphabet = Alphabet::new(&config.alphabet)?;
        let target = Target::new(&alphabet, &config.target)?;
        let scorer = ExactMatchScorer::new(&target);
        let (mut rng, seed) = seeded_rng(config.random_seed);
        let candidate = random_genome(target.len(), &alphabet, &mut rng);
        let score = scorer.score(&candidate);

        Ok(Self {
            config,
            alphabet,
            target,
            scorer,
            candidate,
            score,
            generation: 1,
            seed,
            rng,
        })
    }

    pub fn run<C: ProgressCallback>(&mut self, mut callback: C) -> BaselineOutcome {
        callback.on_baseline_start(&BaselineSummary {
            alphabet: self.alphabet.to_string(),
            target: self.target.as_str().to_string(),
            generation_size: self.config.generation_size,
            mutation_rate: self.config.mutation_rate,
            random_seed: self.seed,
        });
        callback.on_baseline_generation(&self.report());

        while !self.is_done() {
            self.step();
            callback.on_baseline_generation(&self.report());
        }

        log::info!("Hill climber reached the target in generation {}", self.generation);
        BaselineOutcome {
            generations: self.generation,
            value: self.value(),
        }
    }

    /// Replace the candidate with its best mutated copy; later copies win ties.
    pub fn step(&mut self) {
        let base = self.candidate.clone();
        let mut best: Option<(Genome, Score)> = None;

        for _ in 0..self.config.generation_size {
            let mut child = base.clone();
            mutate_uniform(&mut child, self.config.mutation_rate, &self.alphabet, &mut self.rng);
            let score = self.scorer.score(&child);
            log::trace!("  child: '{}' ({})", self.alphabet.decode(&child), score);

            if best.as_ref().map_or(true, |(_, s)| score >= *s) {
                best = Some((child, score));
            }
        }

        if let Some((child, score)) = best {
            self.candidate = child;
            self.score = score;
        }
        self.generation += 1;
    }

    pub fn is_done(&self) -> bool {
        self.score == self.scorer.max_score()
    }

    pub fn report(&self) -> BaselineReport {
        BaselineReport {
            generation: self.generation,
            value: self.value(),
            score: self.score,
        }
    }

    pub fn value(&self) -> String {
        self.alphabet.decode(&self.candidate)
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn generation(&self) -> usize {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::generation::progress::SilentProgressCallback;

    #[test]
    fn test_hill_climber_reaches_target() {
        let config = BaselineConfig {
            target: "METHINKS IT IS LIKE A WEASEL".to_string(),
            random_seed: Some(2014),
            ..BaselineConfig::default()
        };
        let mut climber = HillClimber::new(config).unwrap();
        let outcome = climber.run(SilentProgressCallback);

        assert_eq!(outcome.value, "METHINKS IT IS LIKE A WEASEL");
        assert_eq!(climber.score(), 28);
        assert!(outcome.generations > 1);
    }

    #[test]
    fn test_step_advances_generation() {
        let config = BaselineConfig {
            random_seed: Some(1),
            ..BaselineConfig::default()
        };
        let mut climber = HillClimber::new(config).unwrap();
        climber.step();
        assert_eq!(climber.generation(), 2);
        assert_eq!(climber.value().chars().count(), 28);
        assert!(climber.score() <= 28);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = BaselineConfig {
            mutation_rate: 0,
            ..BaselineConfig::default()
        };
        assert!(HillClimber::new(config).is_err());
    }
}
