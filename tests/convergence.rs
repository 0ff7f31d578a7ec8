use std::sync::mpsc::channel;
use weasel::config::EvolutionConfig;
use weasel::engines::generation::{
    ChannelProgressCallback, EngineState, EvolutionEngine, ProgressMessage,
    SilentProgressCallback,
};

/// Alphabet " A-Z", target "CAT", five slots, fixed seed
fn cat_config(seed: u64) -> EvolutionConfig {
    EvolutionConfig {
        population_size: 5,
        alphabet: " ABCDEFGHIJKLMNOPQRSTUVWXYZ".to_string(),
        target: "CAT".to_string(),
        random_seed: Some(seed),
        max_generations: Some(10_000),
        ..EvolutionConfig::default()
    }
}

#[test]
fn test_cat_converges() {
    let mut engine = EvolutionEngine::new(cat_config(42)).expect("valid config");
    let outcome = engine.run(SilentProgressCallback);

    assert!(outcome.converged, "no convergence after {} generations", outcome.generations);
    assert!(outcome.generations < 10_000);
    assert_eq!(outcome.best_score, 3 * 27);
    assert_eq!(outcome.max_score, 81);
    assert_eq!(outcome.champion_value, "CAT");
    assert_eq!(outcome.champion.score(), 81);
    assert_eq!(engine.state(), EngineState::Converged);
    assert_eq!(engine.champion(), &outcome.champion);
    assert_eq!(engine.alphabet().decode(engine.champion().value()), "CAT");
}

#[test]
fn test_best_score_is_monotonic_and_population_bounded() {
    let (tx, rx) = channel();
    let mut engine = EvolutionEngine::new(cat_config(7)).unwrap();
    let outcome = engine.run(ChannelProgressCallback::new(tx));

    let mut last_best = 0;
    let mut last_generation = 0;
    let mut reports = 0;
    for message in rx.try_iter() {
        if let ProgressMessage::Generation(report) = message {
            assert!(report.best_score >= last_best, "best score went down");
            assert!(report.organisms.len() <= 5);
            assert!(report.organisms.iter().all(|o| o.id >= 1 && o.id <= 5));
            assert_eq!(report.generation, last_generation + 1);
            last_best = report.best_score;
            last_generation = report.generation;
            reports += 1;
        }
    }

    assert_eq!(reports, outcome.generations);
    assert_eq!(last_best, outcome.best_score);
    assert!(outcome.population.len() <= outcome.population.capacity());
}

#[test]
fn test_same_seed_same_run() {
    let first = EvolutionEngine::new(cat_config(2024)).unwrap().run(SilentProgressCallback);
    let second = EvolutionEngine::new(cat_config(2024)).unwrap().run(SilentProgressCallback);

    assert_eq!(first.generations, second.generations);
    assert_eq!(first.champion, second.champion);
    let values = |o: &weasel::RunOutcome| -> Vec<Vec<usize>> {
        o.population.iter().map(|(_, org)| org.value().to_vec()).collect()
    };
    assert_eq!(values(&first), values(&second));
}

#[test]
fn test_single_symbol_alphabet_converges_immediately() {
    let config = EvolutionConfig {
        alphabet: "A".to_string(),
        target: "AAA".to_string(),
        random_seed: Some(1),
        ..EvolutionConfig::default()
    };
    let (tx, rx) = channel();
    let mut engine = EvolutionEngine::new(config).unwrap();
    assert_eq!(engine.state(), EngineState::Converged);

    let outcome = engine.run(ChannelProgressCallback::new(tx));
    assert!(outcome.converged);
    assert_eq!(outcome.generations, 1);
    assert_eq!(outcome.best_score, 3);
    assert_eq!(outcome.champion_value, "AAA");

    let messages: Vec<ProgressMessage> = rx.try_iter().collect();
    assert!(messages
        .iter()
        .all(|m| !matches!(m, ProgressMessage::ChildPlaced { .. })));
    assert_eq!(
        messages
            .iter()
            .filter(|m| matches!(m, ProgressMessage::Generation(_)))
            .count(),
        1
    );
}

#[test]
fn test_seed_value_survives_into_founder() {
    let config = EvolutionConfig {
        target: "METHINKS IT IS LIKE A WEASEL".to_string(),
        seed_value: "METHINKS IT IS LIKE A WEASEL".to_string(),
        random_seed: Some(3),
        ..EvolutionConfig::default()
    };
    let mut engine = EvolutionEngine::new(config).unwrap();
    assert_eq!(engine.state(), EngineState::Converged);
    let outcome = engine.run(SilentProgressCallback);
    assert_eq!(outcome.generations, 1);
    assert_eq!(outcome.champion_value, "METHINKS IT IS LIKE A WEASEL");
}
