//! Question generation, answer checking, scoring, and the game state machine.
//!
//! This crate provides:
//! - [`LevelGenerator`] - Builds a level's question batch from the catalog
//! - [`validator`] - One pure correctness predicate per question type
//! - [`scorer`] - Points per question type
//! - [`Game`] and the transition functions - The state machine over [`GameState`]
//! - [`GameEvent`] - What changed between two snapshots, for audio cues
//!
//! Every transition takes a `&GameState` and returns a new one:
//!
//! ```text
//!   Menu ──start_level──▶ Playing ──submit_answer──▶ QuestionResult
//!                           ▲                              │
//!                           └──────────advance─────────────┤
//!                                                          ▼
//!   Menu ◀──reset── LevelComplete ◀────────advance─────────┘
//!                        │
//!                        └──next_level──▶ Playing
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod answer;
pub mod config;
pub mod event;
pub mod generator;
pub mod machine;
pub mod question;
pub mod scorer;
pub mod state;
pub mod validator;

pub use answer::Answer;
pub use config::{GameConfig, LevelShape};
pub use event::GameEvent;
pub use generator::{GeneratedLevel, LevelGenerator};
pub use machine::{Game, advance, reset, submit_answer};
pub use question::{Prompt, Question, QuestionType};
pub use state::{GameState, Phase};
