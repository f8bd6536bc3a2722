//! Classifying transitions for drivers.
//!
//! Drivers hold on to the previous snapshot, apply a transition, and ask
//! [`GameEvent::between`] what happened so they can play a cue or redraw.

use crate::state::{GameState, Phase};

/// A notable change between two consecutive snapshots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// A level began with this many questions.
    LevelStarted {
        /// The new level number.
        level: u32,
        /// Questions generated for it.
        questions: usize,
    },
    /// An answer was scored.
    Answered {
        /// Whether it was right.
        correct: bool,
        /// Points it earned.
        points: u32,
    },
    /// The next question is up.
    QuestionAdvanced {
        /// Zero-based index of the new current question.
        index: usize,
    },
    /// The last question of a level was passed.
    LevelCompleted {
        /// The finished level.
        level: u32,
        /// Total score so far.
        score: u32,
    },
    /// The session went back to the menu with nothing kept.
    SessionReset,
}

impl GameEvent {
    /// Describes the transition from `before` to `after`.
    ///
    /// Returns `None` when nothing changed, which is what every ignored
    /// transition produces.
    #[must_use]
    pub fn between(before: &GameState, after: &GameState) -> Option<Self> {
        if before == after {
            return None;
        }

        match after.phase {
            Phase::Menu => Some(Self::SessionReset),
            Phase::QuestionResult if before.phase == Phase::Playing => Some(Self::Answered {
                correct: after.last_answer_correct.unwrap_or(false),
                points: after.score.saturating_sub(before.score),
            }),
            Phase::LevelComplete => Some(Self::LevelCompleted {
                level: after.level,
                score: after.score,
            }),
            Phase::Playing => {
                let same_level = before.level == after.level && before.questions == after.questions;
                if same_level && after.question_index == before.question_index + 1 {
                    Some(Self::QuestionAdvanced {
                        index: after.question_index,
                    })
                } else {
                    Some(Self::LevelStarted {
                        level: after.level,
                        questions: after.questions.len(),
                    })
                }
            }
            Phase::QuestionResult | Phase::GameOver => None,
        }
    }
}
