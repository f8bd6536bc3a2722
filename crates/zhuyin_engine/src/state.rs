//! The game state snapshot.

use std::fmt;

use zhuyin_foundation::{LtSet, LtVec, VocabId};

use crate::question::Question;

/// The discrete phase of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "snake_case"))]
pub enum Phase {
    /// Title screen; nothing generated yet.
    #[default]
    Menu,
    /// A question is waiting for an answer.
    Playing,
    /// The last answer has been scored and is being shown.
    QuestionResult,
    /// Every question of the level has been seen.
    LevelComplete,
    /// Reserved for a lose condition. No transition enters it.
    GameOver,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Menu => write!(f, "menu"),
            Self::Playing => write!(f, "playing"),
            Self::QuestionResult => write!(f, "question-result"),
            Self::LevelComplete => write!(f, "level-complete"),
            Self::GameOver => write!(f, "game-over"),
        }
    }
}

/// An immutable snapshot of a play session.
///
/// Transitions in [`crate::machine`] take a snapshot and return a new one;
/// the persistent collections inside make those copies O(1). Two snapshots
/// compare equal when every field does, which lets drivers diff them.
///
/// Invariants:
/// - `question_index <= questions.len()`
/// - `last_answer_correct` is `Some` only in [`Phase::QuestionResult`]
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameState {
    pub(crate) phase: Phase,
    pub(crate) score: u32,
    pub(crate) level: u32,
    pub(crate) question_index: usize,
    pub(crate) questions: LtVec<Question>,
    pub(crate) used_ids: LtSet<VocabId>,
    pub(crate) last_answer_correct: Option<bool>,
}

impl GameState {
    /// Creates the initial menu state: no score, no level, no history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the accumulated score across all levels.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns the current level number; 0 before the first level.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Returns the zero-based index of the current question.
    #[must_use]
    pub fn question_index(&self) -> usize {
        self.question_index
    }

    /// Returns the questions of the active level.
    #[must_use]
    pub fn questions(&self) -> &LtVec<Question> {
        &self.questions
    }

    /// Returns every vocabulary id asked about this session.
    #[must_use]
    pub fn used_ids(&self) -> &LtSet<VocabId> {
        &self.used_ids
    }

    /// Returns whether the last answer was right, while its result is shown.
    #[must_use]
    pub fn last_answer_correct(&self) -> Option<bool> {
        self.last_answer_correct
    }

    /// Returns the question at the current index, if any.
    ///
    /// `None` for an empty level, or once the level has run past its end.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.question_index)
    }

    /// Returns how far into the level the player is, in `[0, 1]`.
    ///
    /// The current question counts as begun, so the first question of six
    /// reports 1/6 and the last reports 1.0. An empty level reports 0.
    ///
    /// After the level completes the index sits one past the last question;
    /// progress stays at 1.0 there rather than exceeding it.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        let total = self.questions.len();
        if total == 0 {
            return 0.0;
        }
        let begun = (self.question_index + 1).min(total);
        begun as f64 / total as f64
    }
}
