//! Match-runner integration tests pitting the difficulty tiers against
//! each other.

use tictactoe_engine::ai::{policy_for, HeuristicPolicy, MinimaxPolicy, RandomPolicy, AI_LABEL, OPPONENT_LABEL};
use tictactoe_engine::core::Difficulty;
use tictactoe_engine::rules::GameStatus;
use tictactoe_engine::simulation::{MatchConfig, MatchRunner};

// =============================================================================
// Hard tier
// =============================================================================

#[test]
fn test_hard_never_loses_to_random() {
    let mut runner = MatchRunner::new(
        MatchConfig::new().with_games(20).with_seed(2024),
        Box::new(RandomPolicy::new(OPPONENT_LABEL)),
        Box::new(MinimaxPolicy::new()),
    );
    let summary = runner.run().unwrap();

    assert_eq!(summary.games(), 20);
    assert_eq!(summary.wins_for(OPPONENT_LABEL), 0);
    assert_eq!(summary.wins_for(AI_LABEL) + summary.ties, 20);
}

#[test]
fn test_hard_never_loses_to_medium() {
    let mut runner = MatchRunner::new(
        MatchConfig::new().with_games(10).with_seed(7),
        Box::new(HeuristicPolicy::new(OPPONENT_LABEL, AI_LABEL)),
        Box::new(MinimaxPolicy::new()),
    );
    let summary = runner.run().unwrap();

    assert_eq!(summary.wins_for(OPPONENT_LABEL), 0);
    for record in &summary.records {
        assert!(record.status.is_terminal());
    }
}

// =============================================================================
// Medium tier
// =============================================================================

#[test]
fn test_medium_beats_random_more_often_than_not() {
    let mut runner = MatchRunner::new(
        MatchConfig::new().with_games(200).with_seed(11),
        Box::new(RandomPolicy::new(OPPONENT_LABEL)),
        Box::new(HeuristicPolicy::default()),
    );
    let summary = runner.run().unwrap();

    assert!(
        summary.wins_for(AI_LABEL) > summary.wins_for(OPPONENT_LABEL),
        "medium won {} vs random {}",
        summary.wins_for(AI_LABEL),
        summary.wins_for(OPPONENT_LABEL)
    );
}

// =============================================================================
// Runner mechanics
// =============================================================================

#[test]
fn test_won_records_end_on_winning_move() {
    let mut runner = MatchRunner::new(
        MatchConfig::new().with_games(25).with_seed(3),
        policy_for(Difficulty::Easy, 0),
        policy_for(Difficulty::Medium, 0),
    );
    let summary = runner.run().unwrap();

    for record in &summary.records {
        if let GameStatus::Won { label, combo } = &record.status {
            let last = record.moves.last().unwrap();
            assert_eq!(last.label, *label);
            assert!(combo.contains(&last.coord()));
        }
    }
}

#[test]
fn test_larger_board_matches_finish() {
    let mut runner = MatchRunner::new(
        MatchConfig::new().with_games(10).with_board_size(4).with_seed(5),
        Box::new(RandomPolicy::new(OPPONENT_LABEL)),
        Box::new(HeuristicPolicy::default()),
    );
    let summary = runner.run().unwrap();

    assert_eq!(summary.unfinished, 0);
    assert!(summary.records.iter().all(|r| r.moves.len() <= 16));
}

#[test]
fn test_invalid_board_size_is_an_error() {
    let mut runner = MatchRunner::new(
        MatchConfig::new().with_board_size(0),
        Box::new(RandomPolicy::new(OPPONENT_LABEL)),
        Box::new(RandomPolicy::new(AI_LABEL)),
    );
    assert!(runner.run().is_err());
}
