use super::evolution_engine::ProgressCallback;
use super::population::Placement;
use crate::engines::evaluation::Score;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::sync::mpsc::Sender;

/// Emitted once before the first generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub alphabet: String,
    pub target: String,
    pub max_score: Score,
    pub population_size: usize,
    pub random_seed: u64,
}

/// One occupied slot, as seen at the end of a generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganismReport {
    /// 1-based slot id.
    pub id: usize,
    /// 1-based slot id of the parent, 0 for the seed organism.
    pub parent: usize,
    pub value: String,
    pub reproduction_count: usize,
    pub sigma: f64,
    pub score: Score,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub generation: usize,
    /// Integer mean over occupied slots.
    pub average_score: Score,
    /// `average_score` as a truncated integer percentage of `max_score`.
    pub average_percent: Score,
    pub best_score: Score,
    pub max_score: Score,
    pub organisms: Vec<OrganismReport>,
}

/// Emitted once before the hill climber starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineSummary {
    pub alphabet: String,
    pub target: String,
    pub generation_size: usize,
    pub mutation_rate: u32,
    pub random_seed: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineReport {
    pub generation: usize,
    pub value: String,
    pub score: Score,
}

/// Human-readable output on stdout.
pub struct ConsoleProgressCallback;

impl ProgressCallback for ConsoleProgressCallback {
    fn on_run_start(&mut self, summary: &RunSummary) {
        println!("pool: '{}'", summary.alphabet);
        println!("target: '{}' ({})", summary.target, summary.max_score);
        println!("population size: {}", summary.population_size);
        println!("random seed: {}", summary.random_seed);
        println!("<id>: (<parent>) '<value>' (<reproduction>/<mutation>) (<score>)");
    }

    fn on_generation_complete(&mut self, report: &GenerationReport) {
        if report.generation == 1 {
            println!("---[ Generation 1 ]-----------------------------");
        } else {
            println!(
                "---[ Generation {}: Avg Score: {} ({}%) ]------------------",
                report.generation, report.average_score, report.average_percent
            );
        }
        for o in &report.organisms {
            println!(
                "{}: ({}) '{}' ({}/{:.6}) ({})",
                o.id, o.parent, o.value, o.reproduction_count, o.sigma, o.score
            );
        }
    }

    fn on_baseline_start(&mut self, summary: &BaselineSummary) {
        println!("target: '{}'", summary.target);
        println!("pool: '{}'", summary.alphabet);
        println!("population size: {}", summary.generation_size);
        println!("mutation rate: {}/100", summary.mutation_rate);
        println!("random seed: {}", summary.random_seed);
        println!("------------------------------------------------");
    }

    fn on_baseline_generation(&mut self, report: &BaselineReport) {
        println!("{}: '{}' ({})", report.generation, report.value, report.score);
    }
}

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum JsonEvent<'a> {
    RunStart(&'a RunSummary),
    Generation(&'a GenerationReport),
    BaselineStart(&'a BaselineSummary),
    BaselineGeneration(&'a BaselineReport),
}

/// One JSON object per line, tagged with an `event` field.
pub struct JsonProgressCallback<W: Write> {
    writer: W,
}

impl<W: Write> JsonProgressCallback<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit(&mut self, event: JsonEvent<'_>) {
        let written = serde_json::to_writer(&mut self.writer, &event)
            .map_err(std::io::Error::from)
            .and_then(|_| writeln!(self.writer));
        if let Err(e) = written {
            log::error!("Failed to write progress event: {}", e);
        }
    }
}

impl<W: Write> ProgressCallback for JsonProgressCallback<W> {
    fn on_run_start(&mut self, summary: &RunSummary) {
        self.emit(JsonEvent::RunStart(summary));
    }

    fn on_generation_complete(&mut self, report: &GenerationReport) {
        self.emit(JsonEvent::Generation(report));
    }

    fn on_baseline_start(&mut self, summary: &BaselineSummary) {
        self.emit(JsonEvent::BaselineStart(summary));
    }

    fn on_baseline_generation(&mut self, report: &BaselineReport) {
        self.emit(JsonEvent::BaselineGeneration(report));
    }
}

// For handing progress to another thread
pub struct ChannelProgressCallback {
    sender: Sender<ProgressMessage>,
}

#[derive(Debug, Clone)]
pub enum ProgressMessage {
    RunStart(RunSummary),
    Generation(GenerationReport),
    /// `parent` is the 1-based slot id, as in [`OrganismReport::parent`].
    ChildPlaced { parent: usize, score: Score, placement: Placement },
    BaselineStart(BaselineSummary),
    BaselineGeneration(BaselineReport),
}

impl ChannelProgressCallback {
    pub fn new(sender: Sender<ProgressMessage>) -> Self {
        Self { sender }
    }
}

impl ProgressCallback for ChannelProgressCallback {
    fn on_run_start(&mut self, summary: &RunSummary) {
        let _ = self.sender.send(ProgressMessage::RunStart(summary.clone()));
    }

    fn on_generation_complete(&mut self, report: &GenerationReport) {
        let _ = self.sender.send(ProgressMessage::Generation(report.clone()));
    }

    fn on_child_placed(&mut self, parent: usize, score: Score, placement: Placement) {
        let _ = self.sender.send(ProgressMessage::ChildPlaced {
            parent,
            score,
            placement,
        });
    }

    fn on_baseline_start(&mut self, summary: &BaselineSummary) {
        let _ = self.sender.send(ProgressMessage::BaselineStart(summary.clone()));
    }

    fn on_baseline_generation(&mut self, report: &BaselineReport) {
        let _ = self.sender.send(ProgressMessage::BaselineGeneration(report.clone()));
    }
}

/// Discards everything.
pub struct SilentProgressCallback;

impl ProgressCallback for SilentProgressCallback {
    fn on_generation_complete(&mut self, _report: &GenerationReport) {}
}
