use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use weasel::engines::generation::{
    ConsoleProgressCallback, EvolutionEngine, HillClimber, JsonProgressCallback,
};
use weasel::{AppConfig, ConfigManager, WeaselError};

#[derive(Parser)]
#[command(name = "weasel")]
#[command(version, about = "weasel - evolution simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Population limit (default: 5)
    #[arg(short, long)]
    population: Option<usize>,

    /// Target string (default: METHINKS IT IS LIKE A WEASEL)
    #[arg(short, long, global = true)]
    target: Option<String>,

    /// Provide seed for reproducible runs
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Specify the available gene pool (default: " ABCDEFGHIJKLMNOPQRSTUVWXYZ")
    #[arg(short = 'g', long, global = true)]
    pool: Option<String>,

    /// Initial mutation rate (default: 5)
    #[arg(short, long)]
    mutation: Option<f64>,

    /// Initial reproduction rate (default: 1)
    #[arg(short, long)]
    reproduction: Option<usize>,

    /// Initial value, padded with random symbols
    #[arg(short, long)]
    initial: Option<String>,

    /// Stop after this many generations
    #[arg(long)]
    max_generations: Option<usize>,

    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Write the resolved configuration to this file and exit
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Report progress as JSON lines
    #[arg(long, global = true)]
    json: bool,

    /// Display additional information (-vv for every child)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Dawkins' original, non-adaptive weasel program
    Baseline {
        /// Children per generation (default: 100)
        #[arg(short = 'n', long)]
        generation_size: Option<usize>,

        /// Chance per position, out of 100, of a random change (default: 5)
        #[arg(short, long)]
        rate: Option<u32>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            if matches!(e.downcast_ref::<WeaselError>(), Some(WeaselError::Configuration(_))) {
                eprintln!("\nFor more information, try '--help'.");
            }
            ExitCode::FAILURE
        }
    }
}

fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut manager = ConfigManager::new();
    manager.load_layered(cli.config.as_deref())?;
    manager.update(|config| apply_overrides(&cli, config))?;

    if let Some(path) = &cli.save_config {
        manager.save_to_file(path)?;
        log::info!("Configuration written to {}", path.display());
        return Ok(());
    }

    let config = manager.get();
    match cli.command {
        Some(Commands::Baseline { .. }) => {
            let mut climber = HillClimber::new(config.baseline)?;
            if cli.json {
                climber.run(JsonProgressCallback::new(std::io::stdout().lock()));
            } else {
                climber.run(ConsoleProgressCallback);
            }
        }
        None => {
            let mut engine = EvolutionEngine::new(config.evolution)?;
            let outcome = if cli.json {
                engine.run(JsonProgressCallback::new(std::io::stdout().lock()))
            } else {
                engine.run(ConsoleProgressCallback)
            };
            if !outcome.converged {
                anyhow::bail!(
                    "target not reached after {} generations (best score {}/{})",
                    outcome.generations,
                    outcome.best_score,
                    outcome.max_score
                );
            }
        }
    }
    Ok(())
}

/// Command-line flags take precedence over file and environment settings.
fn apply_overrides(cli: &Cli, config: &mut AppConfig) {
    let evolution = &mut config.evolution;
    let baseline = &mut config.baseline;

    if let Some(target) = &cli.target {
        evolution.target = target.clone();
        baseline.target = target.clone();
    }
    if let Some(pool) = &cli.pool {
        evolution.alphabet = pool.clone();
        baseline.alphabet = pool.clone();
    }
    if let Some(seed) = cli.seed {
        evolution.random_seed = Some(seed);
        baseline.random_seed = Some(seed);
    }
    if let Some(population) = cli.population {
        evolution.population_size = population;
    }
    if let Some(mutation) = cli.mutation {
        evolution.initial_sigma = mutation;
    }
    if let Some(reproduction) = cli.reproduction {
        evolution.initial_reproduction_count = reproduction;
    }
    if let Some(initial) = &cli.initial {
        evolution.seed_value = initial.clone();
    }
    if cli.max_generations.is_some() {
        evolution.max_generations = cli.max_generations;
    }
    if let Some(Commands::Baseline { generation_size, rate }) = &cli.command {
        if let Some(size) = generation_size {
            baseline.generation_size = *size;
        }
        if let Some(rate) = rate {
            baseline.mutation_rate = *rate;
        }
    }
}
