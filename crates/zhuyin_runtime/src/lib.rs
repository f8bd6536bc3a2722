//! Terminal driver, CLI, and logging for Zhuyin Quest.
//!
//! This crate provides:
//! - [`Repl`] - Interactive game loop over a [`LineEditor`]
//! - [`Session`] - Applies player [`Command`]s to the game state
//! - [`render`] - Plain-text screens for each phase
//! - [`ImageResolver`] and [`CuePlayer`] - Picture and sound collaborators
//! - [`logging`] - `tracing` subscriber setup

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod assets;
pub mod command;
pub mod cues;
pub mod editor;
pub mod logging;
pub mod render;
pub mod repl;
pub mod session;

pub use assets::{EmojiImages, FALLBACK_GLYPH, ImageResolver, PlaceholderImages};
pub use command::Command;
pub use cues::{Cue, CuePlayer, SilentCues, TerminalBell};
pub use editor::{LineEditor, ReadResult, RustylineEditor, ScriptedEditor};
pub use logging::{LogConfig, init_logging};
pub use repl::Repl;
pub use session::{Session, resolve_answer};
