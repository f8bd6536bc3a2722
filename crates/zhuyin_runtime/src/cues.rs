//! Audio feedback.
//!
//! The engine never plays sounds. The driver turns each [`GameEvent`] into
//! zero or more [`Cue`]s and hands them to a [`CuePlayer`].

use std::io::{self, Write};

use zhuyin_engine::GameEvent;

/// A short sound effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Acknowledges a navigation command.
    Click,
    /// The answer was right.
    Correct,
    /// The answer was wrong.
    Incorrect,
    /// Every question of the level has been seen.
    LevelComplete,
}

impl Cue {
    /// Returns the cues to play for `event`, in order.
    #[must_use]
    pub const fn for_event(event: &GameEvent) -> &'static [Cue] {
        match event {
            GameEvent::LevelStarted { .. }
            | GameEvent::QuestionAdvanced { .. }
            | GameEvent::SessionReset => &[Cue::Click],
            GameEvent::Answered { correct: true, .. } => &[Cue::Correct],
            GameEvent::Answered { correct: false, .. } => &[Cue::Incorrect],
            GameEvent::LevelCompleted { .. } => &[Cue::Click, Cue::LevelComplete],
        }
    }
}

/// Something that can play cues. Playback must never fail the game.
pub trait CuePlayer {
    /// Plays one cue.
    fn play(&mut self, cue: Cue);
}

/// Plays nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentCues;

impl CuePlayer for SilentCues {
    fn play(&mut self, _cue: Cue) {}
}

/// Rings the terminal bell for feedback cues; clicks stay silent.
#[derive(Debug)]
pub struct TerminalBell<W: Write = io::Stderr> {
    out: W,
}

impl TerminalBell {
    /// Creates a bell that rings on stderr.
    #[must_use]
    pub fn new() -> Self {
        Self::with_writer(io::stderr())
    }
}

impl Default for TerminalBell {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalBell<W> {
    /// Creates a bell that rings on `out`.
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    /// Consumes the bell and returns its writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> CuePlayer for TerminalBell<W> {
    fn play(&mut self, cue: Cue) {
        let rings = match cue {
            Cue::Click => 0,
            Cue::Correct | Cue::Incorrect => 1,
            Cue::LevelComplete => 2,
        };
        for _ in 0..rings {
            if let Err(e) = self.out.write_all(b"\x07") {
                tracing::debug!(error = %e, "bell failed");
                return;
            }
        }
        let _ = self.out.flush();
    }
}

/// Records cues in order.
impl CuePlayer for Vec<Cue> {
    fn play(&mut self, cue: Cue) {
        self.push(cue);
    }
}
