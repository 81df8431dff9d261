//! Integration test: runner sessions with score persistence
//!
//! Play → collision → record → save → reload, across several runs

use arcade::games::runner::{
    CharacterState, Obstacle, ObstacleVariant, RunnerEvent, RunnerGame, RunnerSkin, ScoreBook,
    ScoreStore,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn temp_store(name: &str) -> ScoreStore {
    let dir = std::env::temp_dir().join(format!("arcade_runner_it_{}_{}", name, std::process::id()));
    std::fs::remove_dir_all(&dir).ok();
    ScoreStore::at(dir)
}

/// Run until the character hits something. Returns the game-over events seen.
fn run_until_crash(game: &mut RunnerGame, rng: &mut ChaCha8Rng) -> usize {
    let mut game_overs = 0;
    for _ in 0..10_000 {
        for event in game.tick(16, rng) {
            if matches!(event, RunnerEvent::GameOver(_)) {
                game_overs += 1;
            }
        }
        if game.game_over {
            break;
        }
    }
    game_overs
}

#[test]
fn test_idle_runner_crashes_exactly_once() {
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    let mut game = RunnerGame::new(RunnerSkin::Dino, ScoreBook::default());
    let game_overs = run_until_crash(&mut game, &mut rng);

    assert!(game.game_over);
    assert_eq!(game_overs, 1);
    assert_eq!(game.state, CharacterState::Dead);
    // The opening cactus needs ~93 advances to reach the character.
    let record = game.last_record.unwrap();
    assert!(record.distance >= 27, "distance {}", record.distance);
    assert_eq!(game.scores.history.len(), 1);

    // Nothing else happens after game over.
    for _ in 0..100 {
        assert!(game.tick(16, &mut rng).is_empty());
    }
    assert_eq!(game.scores.history.len(), 1);
}

#[test]
fn test_history_cap_and_high_score_across_runs() {
    let store = temp_store("history");
    let mut rng = ChaCha8Rng::seed_from_u64(77);
    let mut game = RunnerGame::new(RunnerSkin::Bike, store.load(RunnerSkin::Bike));

    let mut best_distance = 0;
    let mut previous_high = game.scores.high_score;
    for run in 0..11 {
        // Vary run length by starting the cactus further away.
        game.obstacle = Obstacle::new(200.0 + run as f64 * 30.0, ObstacleVariant::SmallCactus2);
        run_until_crash(&mut game, &mut rng);
        let record = game.last_record.unwrap();
        best_distance = best_distance.max(record.distance);

        let high = game.scores.high_score;
        assert!(high.distance >= previous_high.distance);
        assert!(high.jumps >= previous_high.jumps);
        assert!(high.max_height >= previous_high.max_height);
        previous_high = high;

        store.save(RunnerSkin::Bike, &game.scores).unwrap();
        game.reset();
    }

    let reloaded = store.load(RunnerSkin::Bike);
    assert_eq!(reloaded.history.len(), 10);
    assert_eq!(reloaded.high_score.distance, best_distance);
    // Most recent run first: the last run started furthest away.
    assert!(reloaded.history[0].distance >= reloaded.history[9].distance);

    std::fs::remove_dir_all(store.root()).ok();
}

#[test]
fn test_timed_jumps_keep_runner_alive() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut game = RunnerGame::new(RunnerSkin::Dino, ScoreBook::default());
    game.obstacle = Obstacle::new(150.0, ObstacleVariant::LargeCactus3);
    assert!(game.handle_jump_input());

    for _ in 0..8 {
        game.tick(100, &mut rng);
    }
    assert!(!game.game_over);
    assert_eq!(game.stats.jumps, 1);
    assert!(game.stats.max_height > 100.0);
}

#[test]
fn test_reset_mid_jump_then_keep_running() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let mut game = RunnerGame::new(RunnerSkin::Dino, ScoreBook::default());
    game.handle_jump_input();
    game.tick(350, &mut rng);
    game.reset();

    assert_eq!(game.state, CharacterState::Running);
    assert_eq!(game.jump_offset(), 0.0);
    game.tick(250, &mut rng);
    game.tick(250, &mut rng);
    game.tick(250, &mut rng);
    assert_eq!(game.state, CharacterState::Running);
    assert_eq!(game.stats.jumps, 0);
}

#[test]
fn test_export_writes_dated_file() {
    let store = temp_store("export");
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let mut game = RunnerGame::new(RunnerSkin::Dino, ScoreBook::default());
    run_until_crash(&mut game, &mut rng);

    let path = store.export_history(game.skin, &game.scores).unwrap();
    let date = chrono::Utc::now().format("%Y-%m-%d").to_string();
    assert!(path.to_string_lossy().contains(&format!("Dino_Score_History_{}", date)));
    assert!(path.exists());

    std::fs::remove_dir_all(store.root()).ok();
}
