//! State machine transitions

use proptest::prelude::*;
use zhuyin_engine::{Answer, Game, GameState, Phase, advance, reset, submit_answer};
use zhuyin_foundation::SeededRandom;

fn level_one(seed: u64) -> GameState {
    Game::builtin().start_level(&GameState::new(), 1, &mut SeededRandom::new(seed))
}

// =============================================================================
// Purity
// =============================================================================

#[test]
fn same_seed_same_level() {
    assert_eq!(level_one(3), level_one(3));
}

#[test]
fn transitions_leave_input_untouched() {
    let state = level_one(4);
    let before = state.clone();

    let answered = submit_answer(&state, &Answer::from("ㄇㄠ"));
    let _ = advance(&answered);
    let _ = Game::builtin().next_level(&state, &mut SeededRandom::new(5));

    assert_eq!(state, before);
}

// =============================================================================
// Answering
// =============================================================================

#[test]
fn every_type_scores_its_reward_when_correct() {
    let mut state = level_one(6);
    let mut expected = 0;
    while let Some(question) = state.current_question() {
        let reward = zhuyin_engine::scorer::reward(question.kind());
        let answered = submit_answer(&state, &question.correct_answer());
        expected += reward;
        assert_eq!(answered.last_answer_correct(), Some(true));
        assert_eq!(answered.score(), expected);
        state = advance(&answered);
    }
    assert_eq!(state.score(), 100);
}

#[test]
fn wrong_shapes_are_incorrect() {
    let state = level_one(7);
    for answer in [
        Answer::unfilled(1),
        Answer::sequence(Vec::<String>::new()),
        Answer::from(""),
    ] {
        let next = submit_answer(&state, &answer);
        assert_eq!(next.last_answer_correct(), Some(false));
        assert_eq!(next.score(), 0);
    }
}

// =============================================================================
// Advancing
// =============================================================================

#[test]
fn advance_walks_the_level() {
    let mut state = level_one(8);
    let total = state.questions().len();
    for i in 1..total {
        state = advance(&state);
        assert_eq!(state.phase(), Phase::Playing);
        assert_eq!(state.question_index(), i);
    }
    assert!((state.progress() - 1.0).abs() < f64::EPSILON);

    state = advance(&state);
    assert_eq!(state.phase(), Phase::LevelComplete);
    assert!(state.question_index() <= state.questions().len());
}

#[test]
fn progress_holds_at_one_after_completion() {
    let mut state = level_one(10);
    let total = state.questions().len();
    for _ in 0..total {
        state = advance(&state);
    }

    assert_eq!(state.phase(), Phase::LevelComplete);
    assert_eq!(state.question_index(), total);
    assert!((state.progress() - 1.0).abs() < f64::EPSILON);

    // Further advances are no-ops.
    assert_eq!(advance(&state), state);
}

#[test]
fn reset_from_anywhere() {
    let state = submit_answer(&level_one(9), &Answer::from("?"));
    let fresh = reset();
    assert_eq!(fresh.phase(), Phase::Menu);
    assert_eq!(fresh.score(), 0);
    assert!(fresh.used_ids().is_empty());
    assert_ne!(fresh, state);
}

proptest! {
    #[test]
    fn invariants_hold_under_any_command_sequence(
        seed in any::<u64>(),
        moves in prop::collection::vec(0u8..4, 0..40)
    ) {
        let game = Game::builtin();
        let mut rng = SeededRandom::new(seed);
        let mut state = GameState::new();

        for step in moves {
            state = match step {
                0 => game.next_level(&state, &mut rng),
                1 => match state.current_question() {
                    Some(q) => submit_answer(&state, &q.correct_answer()),
                    None => state.clone(),
                },
                2 => submit_answer(&state, &Answer::from("?")),
                _ => advance(&state),
            };

            prop_assert!(state.question_index() <= state.questions().len());
            prop_assert_eq!(
                state.last_answer_correct().is_some(),
                state.phase() == Phase::QuestionResult
            );
            prop_assert!((0.0..=1.0).contains(&state.progress()));
        }
    }
}
