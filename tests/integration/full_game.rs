//! Complete play-throughs across catalog and engine

use std::sync::Arc;

use zhuyin_catalog::{Catalog, Category, VocabularyItem};
use zhuyin_engine::{Answer, Game, GameConfig, GameEvent, GameState, LevelShape, Phase, advance, submit_answer};
use zhuyin_foundation::SeededRandom;

/// Answers every remaining question correctly and advances to the end.
fn finish_level(mut state: GameState) -> GameState {
    while let Some(question) = state.current_question() {
        let answer = question.correct_answer();
        state = advance(&submit_answer(&state, &answer));
    }
    if state.phase() == Phase::Playing {
        state = advance(&state);
    }
    state
}

#[test]
fn perfect_first_level_scores_one_hundred() {
    let game = Game::builtin();
    let state = game.start_level(&GameState::new(), 1, &mut SeededRandom::new(2024));
    let done = finish_level(state);

    assert_eq!(done.score(), 100);
    assert_eq!(done.phase(), Phase::LevelComplete);
    assert_eq!(done.level(), 1);
}

#[test]
fn wrong_spelling_leaves_score_alone() {
    let catalog = Catalog::new([VocabularyItem::new("ba", "八", ["ㄅ"], "ba.png", Category::Daily)]).unwrap();
    let config = GameConfig::default().with_shape(LevelShape::new(0, 1, 0));
    let game = Game::new(Arc::new(catalog), config).unwrap();

    let state = game.start_level(&GameState::new(), 1, &mut SeededRandom::new(0));
    let next = submit_answer(&state, &Answer::from(vec!["x", "y"]));

    assert_eq!(next.last_answer_correct(), Some(false));
    assert_eq!(next.score(), 0);
    assert_eq!(next.phase(), Phase::QuestionResult);
}

#[test]
fn whole_catalog_across_nine_levels() {
    let game = Game::builtin();
    let mut rng = SeededRandom::new(77);
    let mut state = GameState::new();
    let mut sizes = Vec::new();

    for _ in 0..10 {
        state = game.next_level(&state, &mut rng);
        sizes.push(state.questions().len());
        state = finish_level(state);
        assert_eq!(state.phase(), Phase::LevelComplete);
    }

    assert_eq!(sizes, vec![6, 6, 6, 6, 6, 6, 6, 6, 2, 0]);
    assert_eq!(state.used_ids().len(), 50);
    assert_eq!(state.level(), 10);
    // Eight full levels at 100 each, then two image matches.
    assert_eq!(state.score(), 820);
}

#[test]
fn events_trace_a_level() {
    let game = Game::builtin();
    let mut states = vec![GameState::new()];
    let start = game.start_level(&GameState::new(), 1, &mut SeededRandom::new(11));
    states.push(start.clone());

    let mut state = start;
    while let Some(question) = state.current_question() {
        let answered = submit_answer(&state, &question.correct_answer());
        states.push(answered.clone());
        state = advance(&answered);
        states.push(state.clone());
    }

    let events: Vec<_> = states
        .windows(2)
        .filter_map(|pair| GameEvent::between(&pair[0], &pair[1]))
        .collect();

    assert_eq!(events.first(), Some(&GameEvent::LevelStarted { level: 1, questions: 6 }));
    assert_eq!(events.last(), Some(&GameEvent::LevelCompleted { level: 1, score: 100 }));
    let answered = events
        .iter()
        .filter(|e| matches!(e, GameEvent::Answered { correct: true, .. }))
        .count();
    assert_eq!(answered, 6);
}
