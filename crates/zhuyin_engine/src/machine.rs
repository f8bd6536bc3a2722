//! Game state transitions.
//!
//! Every transition takes the current [`GameState`] by reference and returns
//! the next one. Inputs are never modified, so the same state and arguments
//! (including an identically seeded random source) always give the same
//! result.
//!
//! Transitions that do not apply to the current phase return an unchanged
//! copy instead of failing.

use std::sync::Arc;

use zhuyin_catalog::Catalog;
use zhuyin_foundation::{RandomSource, Result};

use crate::answer::Answer;
use crate::config::GameConfig;
use crate::generator::LevelGenerator;
use crate::scorer;
use crate::state::{GameState, Phase};
use crate::validator;

// =============================================================================
// Game
// =============================================================================

/// The catalog and rules that level generation draws on.
#[derive(Clone, Debug)]
pub struct Game {
    catalog: Arc<Catalog>,
    config: GameConfig,
}

impl Game {
    /// Creates a game over `catalog` with the given rules.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails [`GameConfig::validate`].
    pub fn new(catalog: Arc<Catalog>, config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { catalog, config })
    }

    /// Creates a game over the built-in catalog with default rules.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            catalog: Arc::new(Catalog::builtin()),
            config: GameConfig::default(),
        }
    }

    /// Returns the catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the rules.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns a generator over this game's catalog and rules.
    #[must_use]
    pub fn generator(&self) -> LevelGenerator<'_> {
        LevelGenerator::new(&self.catalog, &self.config)
    }

    /// Starts level `level` with a fresh batch of questions.
    ///
    /// Words already asked about this session are excluded. The score and
    /// the session's word history carry over.
    #[must_use]
    pub fn start_level(&self, state: &GameState, level: u32, rng: &mut dyn RandomSource) -> GameState {
        let generated = self.generator().generate(&state.used_ids, rng);

        tracing::info!(
            level,
            questions = generated.questions.len(),
            score = state.score,
            "starting level"
        );

        GameState {
            phase: Phase::Playing,
            level,
            question_index: 0,
            questions: generated.questions,
            used_ids: state.used_ids.extend(generated.used_ids),
            last_answer_correct: None,
            ..state.clone()
        }
    }

    /// Starts the level after the current one.
    #[must_use]
    pub fn next_level(&self, state: &GameState, rng: &mut dyn RandomSource) -> GameState {
        self.start_level(state, state.level.saturating_add(1), rng)
    }
}

// =============================================================================
// Transitions
// =============================================================================

/// Scores `answer` against the current question.
///
/// Only acts while a question is waiting in [`Phase::Playing`]. Adds the
/// question type's points when correct and moves to
/// [`Phase::QuestionResult`]; the question index stays put.
#[must_use]
pub fn submit_answer(state: &GameState, answer: &Answer) -> GameState {
    if state.phase != Phase::Playing {
        return state.clone();
    }
    let Some(question) = state.current_question() else {
        return state.clone();
    };

    let kind = question.kind();
    let correct = validator::is_correct(question, answer);
    let points = scorer::points(kind, correct);

    tracing::debug!(
        index = state.question_index,
        kind = %kind,
        vocabulary = %question.vocabulary().id,
        correct,
        points,
        "answer submitted"
    );

    GameState {
        phase: Phase::QuestionResult,
        score: state.score.saturating_add(points),
        last_answer_correct: Some(correct),
        ..state.clone()
    }
}

/// Moves to the next question, or completes the level after the last one.
///
/// Acts in [`Phase::Playing`] and [`Phase::QuestionResult`]; any other
/// phase is returned unchanged.
#[must_use]
pub fn advance(state: &GameState) -> GameState {
    if !matches!(state.phase, Phase::Playing | Phase::QuestionResult) {
        return state.clone();
    }

    let total = state.questions.len();
    let next = (state.question_index + 1).min(total);

    if next < total {
        tracing::debug!(index = next, total, "next question");
        return GameState {
            phase: Phase::Playing,
            question_index: next,
            last_answer_correct: None,
            ..state.clone()
        };
    }

    tracing::info!(level = state.level, score = state.score, "level complete");
    GameState {
        phase: Phase::LevelComplete,
        question_index: next,
        last_answer_correct: None,
        ..state.clone()
    }
}

/// Returns a brand new session: back to the menu, score and history gone.
#[must_use]
pub fn reset() -> GameState {
    tracing::debug!("session reset");
    GameState::new()
}
