use crate::config::{ConfigSection, EvolutionConfig};
use crate::engines::evaluation::{DistanceScorer, Score, Scorer};
use crate::engines::generation::{
    operators::seeded_rng,
    organism::Organism,
    population::{Placement, Population},
    progress::{BaselineReport, BaselineSummary, GenerationReport, OrganismReport, RunSummary},
};
use crate::error::WeaselError;
use crate::types::{Alphabet, Target};
use rand::rngs::StdRng;

/// Observer of a run. Nothing the engine does depends on it.
pub trait ProgressCallback {
    fn on_run_start(&mut self, _summary: &RunSummary) {}
    fn on_generation_complete(&mut self, report: &GenerationReport);
    /// Called for every child, after insertion was attempted. `parent` is the
    /// 1-based slot id used in reports; `placement` holds 0-based slot indices.
    fn on_child_placed(&mut self, _parent: usize, _score: Score, _placement: Placement) {}
    fn on_baseline_start(&mut self, _summary: &BaselineSummary) {}
    fn on_baseline_generation(&mut self, _report: &BaselineReport) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Only the seed organism exists (generation 1).
    Seeded,
    Evolving,
    /// Some organism matched the target exactly.
    Converged,
}

#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub generations: usize,
    pub best_score: Score,
    pub max_score: Score,
    /// Best organism ever produced, whether or not it survived selection.
    pub champion: Organism,
    pub champion_value: String,
    pub converged: bool,
    pub population: Population,
}

pub struct EvolutionEngine {
    config: EvolutionConfig,
    alphabet: Alphabet,
    target: Target,
    scorer: DistanceScorer,
    population: Population,
    champion: Organism,
    best_score: Score,
    generation: usize,
    state: EngineState,
    seed: u64,
    rng: StdRng,
}

impl EvolutionEngine {
    pub fn new(config: EvolutionConfig) -> Result<Self, WeaselError> {
        config.validate()?;

        let alphabet = Alphabet::new(&config.alphabet)?;
        let target = Target::new(&alphabet, &config.target)?;
        let scorer = DistanceScorer::new(&alphabet, &target);
        let seed_value = alphabet.encode(&config.seed_value)?;
        let (mut rng, seed) = seeded_rng(config.random_seed);

        let founder = Organism::seed(
            &seed_value,
            target.len(),
            config.initial_sigma,
            config.initial_reproduction_count,
            &alphabet,
            &scorer,
            &mut rng,
        );
        let best_score = founder.score();
        let state = if best_score == scorer.max_score() {
            EngineState::Converged
        } else {
            EngineState::Seeded
        };

        Ok(Self {
            population: Population::seeded(config.population_size, founder.clone()),
            champion: founder,
            best_score,
            generation: 1,
            state,
            seed,
            rng,
            config,
            alphabet,
            target,
            scorer,
        })
    }

    /// Run until convergence or the configured generation limit.
    pub fn run<C: ProgressCallback>(&mut self, mut callback: C) -> RunOutcome {
        log::info!(
            "Evolving toward '{}' ({} symbols, alphabet of {}, max score {}), seed {}",
            self.target.as_str(),
            self.target.len(),
            self.alphabet.len(),
            self.max_score(),
            self.seed
        );

        callback.on_run_start(&self.summary());
        callback.on_generation_complete(&self.report());

        while self.state != EngineState::Converged {
            if let Some(limit) = self.config.max_generations {
                if self.generation >= limit {
                    log::warn!(
                        "Stopped at generation {} without reaching the target (best {}/{})",
                        self.generation,
                        self.best_score,
                        self.max_score()
                    );
                    break;
                }
            }
            self.step(&mut callback);
        }

        if self.state == EngineState::Converged {
            log::info!(
                "Target reached in generation {}: '{}'",
                self.generation,
                self.alphabet.decode(self.champion.value())
            );
        }

        RunOutcome {
            generations: self.generation,
            best_score: self.best_score,
            max_score: self.max_score(),
            champion: self.champion.clone(),
            champion_value: self.alphabet.decode(self.champion.value()),
            converged: self.state == EngineState::Converged,
            population: self.population.clone(),
        }
    }

    /// Produce one generation. Returns `None` once converged.
    pub fn step<C: ProgressCallback>(&mut self, callback: &mut C) -> Option<GenerationReport> {
        if self.state == EngineState::Converged {
            return None;
        }

        let mut next = Population::new(self.config.population_size);

        for (slot, parent) in self.population.iter() {
            for _ in 0..parent.reproduction_count() {
                let child = parent.reproduce(slot, &self.alphabet, &self.scorer, &mut self.rng);
                let score = child.score();
                if score > self.best_score {
                    self.best_score = score;
                    self.champion = child.clone();
                }

                let placement = next.insert(child);
                log::trace!("Child of slot {} scored {}: {:?}", slot + 1, score, placement);
                callback.on_child_placed(slot + 1, score, placement);
            }
        }

        self.population = next;
        self.generation += 1;
        self.state = if self.best_score == self.scorer.max_score() {
            EngineState::Converged
        } else {
            EngineState::Evolving
        };

        let report = self.report();
        log::debug!(
            "Generation {}: best {}, average {} ({}%)",
            report.generation,
            report.best_score,
            report.average_score,
            report.average_percent
        );
        callback.on_generation_complete(&report);
        Some(report)
    }

    /// Snapshot of the current population.
    pub fn report(&self) -> GenerationReport {
        let occupied = self.population.len() as Score;
        let average_score = if occupied == 0 {
            0
        } else {
            self.population.total_score() / occupied
        };
        let max_score = self.max_score();
        let average_percent = if max_score == 0 {
            100
        } else {
            average_score * 100 / max_score
        };

        let organisms = self
            .population
            .iter()
            .map(|(slot, o)| OrganismReport {
                id: slot + 1,
                parent: o.parent().map_or(0, |p| p + 1),
                value: self.alphabet.decode(o.value()),
                reproduction_count: o.reproduction_count(),
                sigma: o.sigma(),
                score: o.score(),
            })
            .collect();

        GenerationReport {
            generation: self.generation,
            average_score,
            average_percent,
            best_score: self.best_score,
            max_score,
            organisms,
        }
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            alphabet: self.alphabet.to_string(),
            target: self.target.as_str().to_string(),
            max_score: self.max_score(),
            population_size: self.config.population_size,
            random_seed: self.seed,
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn best_score(&self) -> Score {
        self.best_score
    }

    pub fn max_score(&self) -> Score {
        self.scorer.max_score()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn champion(&self) -> &Organism {
        &self.champion
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }
}
