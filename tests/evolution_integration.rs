use std::sync::mpsc::channel;
use weasel::config::{BaselineConfig, ConfigManager, ConfigSection, EvolutionConfig};
use weasel::engines::generation::{
    ChannelProgressCallback, HillClimber, JsonProgressCallback, Placement, ProgressMessage,
};
use weasel::{Alphabet, DistanceScorer, EvolutionEngine, Scorer, Target, WeaselError};

#[test]
fn test_children_fill_before_they_compete() {
    let config = EvolutionConfig {
        population_size: 3,
        initial_reproduction_count: 6,
        target: "METHINKS IT IS LIKE A WEASEL".to_string(),
        random_seed: Some(11),
        max_generations: Some(2),
        ..EvolutionConfig::default()
    };
    let (tx, rx) = channel();
    let mut engine = EvolutionEngine::new(config).unwrap();
    engine.run(ChannelProgressCallback::new(tx));

    let placed: Vec<(usize, Placement)> = rx
        .try_iter()
        .filter_map(|m| match m {
            ProgressMessage::ChildPlaced { parent, placement, .. } => Some((parent, placement)),
            _ => None,
        })
        .collect();

    // parents are reported with the same 1-based ids as generation reports
    assert!(placed.iter().all(|(parent, _)| *parent == 1));
    let placements: Vec<Placement> = placed.into_iter().map(|(_, p)| p).collect();

    // the founder has six children; the first three take the empty slots
    assert_eq!(placements.len(), 6);
    assert_eq!(
        &placements[..3],
        &[Placement::Filled(0), Placement::Filled(1), Placement::Filled(2)]
    );
    assert!(placements[3..]
        .iter()
        .all(|p| !matches!(p, Placement::Filled(_))));
}

#[test]
fn test_json_reporter_emits_every_generation() {
    let config = EvolutionConfig {
        target: "CAT".to_string(),
        random_seed: Some(5),
        max_generations: Some(10_000),
        ..EvolutionConfig::default()
    };
    let mut engine = EvolutionEngine::new(config).unwrap();
    let mut buffer = Vec::new();
    let outcome = engine.run(JsonProgressCallback::new(&mut buffer));

    let output = String::from_utf8(buffer).unwrap();
    let events: Vec<serde_json::Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(events[0]["event"], "run_start");
    assert_eq!(events[0]["random_seed"], 5);
    assert_eq!(events[0]["max_score"], 81);
    assert_eq!(events.len(), outcome.generations + 1);
    assert_eq!(events.last().unwrap()["best_score"], 81);
}

#[test]
fn test_hill_climber_reports_each_generation() {
    let config = BaselineConfig {
        target: "WEASEL".to_string(),
        random_seed: Some(9),
        ..BaselineConfig::default()
    };
    let (tx, rx) = channel();
    let mut climber = HillClimber::new(config).unwrap();
    let outcome = climber.run(ChannelProgressCallback::new(tx));

    let generations: Vec<usize> = rx
        .try_iter()
        .filter_map(|m| match m {
            ProgressMessage::BaselineGeneration(r) => Some(r.generation),
            _ => None,
        })
        .collect();
    assert_eq!(outcome.value, "WEASEL");
    assert_eq!(generations, (1..=outcome.generations).collect::<Vec<_>>());
}

#[test]
fn test_config_file_drives_engine() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weasel.toml");
    std::fs::write(
        &path,
        "[evolution]\npopulation_size = 8\nalphabet = \"ACGT\"\ntarget = \"GATTACA\"\nrandom_seed = 77\nmax_generations = 10000\n",
    )
    .unwrap();

    let mut manager = ConfigManager::new();
    manager.load_from_file(&path).unwrap();
    let config = manager.get().evolution;
    assert!(config.validate().is_ok());

    let mut engine = EvolutionEngine::new(config).unwrap();
    assert_eq!(engine.max_score(), 7 * 4);
    assert_eq!(engine.seed(), 77);
    assert_eq!(engine.population().capacity(), 8);
    let outcome = engine.run(weasel::engines::generation::SilentProgressCallback);
    assert!(outcome.best_score <= outcome.max_score);
}

#[test]
fn test_bad_config_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weasel.toml");
    std::fs::write(&path, "[evolution]\ntarget = \"hello\"\n").unwrap();

    let mut manager = ConfigManager::new();
    let err = manager.load_from_file(&path).unwrap_err();
    assert!(matches!(err, WeaselError::Configuration(_)));

    std::fs::write(&path, "[evolution]\npopulation_size = \"many\"\n").unwrap();
    assert!(matches!(
        manager.load_from_file(&path),
        Err(WeaselError::TomlDe(_))
    ));
}

#[test]
fn test_scorer_public_api() {
    let alphabet = Alphabet::new(" ABCDEFGHIJKLMNOPQRSTUVWXYZ").unwrap();
    let target = Target::new(&alphabet, "CAT").unwrap();
    let scorer = DistanceScorer::new(&alphabet, &target);

    assert_eq!(scorer.score_text(&alphabet, "CAT").unwrap(), 81);
    assert_eq!(scorer.score_text(&alphabet, "CAS").unwrap(), 80);
    assert!(scorer.score_text(&alphabet, "C@T").is_err());
}
