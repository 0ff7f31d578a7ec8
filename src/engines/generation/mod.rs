pub mod operators;
pub mod organism;
pub mod population;
pub mod evolution_engine;
pub mod progress;
pub mod baseline;

pub use organism::Organism;
pub use population::{Placement, Population};
pub use evolution_engine::{EngineState, EvolutionEngine, ProgressCallback, RunOutcome};
pub use progress::{
    BaselineReport, BaselineSummary, ChannelProgressCallback, ConsoleProgressCallback,
    GenerationReport, JsonProgressCallback, OrganismReport, ProgressMessage, RunSummary,
    SilentProgressCallback,
};
pub use baseline::{BaselineOutcome, HillClimber};
