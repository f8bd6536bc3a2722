//! The interactive game loop.

use std::io::{self, Write};

use zhuyin_engine::GameEvent;
use zhuyin_foundation::{Error, Result};

use crate::assets::{EmojiImages, ImageResolver};
use crate::command::Command;
use crate::cues::{Cue, CuePlayer, TerminalBell};
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::render;
use crate::session::Session;

/// Reads commands, applies them to a [`Session`], and prints the screen.
pub struct Repl<E: LineEditor = RustylineEditor, W: Write = io::Stdout> {
    editor: E,
    out: W,
    session: Session,
    cues: Box<dyn CuePlayer>,
    images: Box<dyn ImageResolver>,
    show_banner: bool,
}

impl Repl<RustylineEditor, io::Stdout> {
    /// Creates a REPL on the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(session: Session) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_io(editor, io::stdout(), session))
    }
}

impl<E: LineEditor, W: Write> Repl<E, W> {
    /// Creates a REPL with the given editor and output.
    pub fn with_io(editor: E, out: W, session: Session) -> Self {
        Self {
            editor,
            out,
            session,
            cues: Box::new(TerminalBell::new()),
            images: Box::new(EmojiImages::default()),
            show_banner: true,
        }
    }

    /// Sets the cue player.
    #[must_use]
    pub fn with_cues(mut self, cues: impl CuePlayer + 'static) -> Self {
        self.cues = Box::new(cues);
        self
    }

    /// Sets the image resolver.
    #[must_use]
    pub fn with_images(mut self, images: impl ImageResolver + 'static) -> Self {
        self.images = Box::new(images);
        self
    }

    /// Disables the welcome screen.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Returns the session.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the output written so far.
    #[must_use]
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Runs until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            let menu = render::menu();
            self.emit(&menu)?;
        }

        loop {
            let prompt = render::prompt(self.session.state());
            let line = match self.editor.read_line(prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => continue,
                ReadResult::Eof => break,
            };
            if line.trim().is_empty() {
                continue;
            }
            self.editor.add_history(&line);

            if !self.execute(&line)? {
                break;
            }
        }

        tracing::info!(score = self.session.state().score(), "session ended");
        self.emit("再見！ Goodbye.\n")
    }

    /// Handles one line of input. Returns `Ok(false)` when the player quits.
    ///
    /// Command mistakes are reported to the player, not returned.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing output fails.
    pub fn execute(&mut self, line: &str) -> Result<bool> {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                self.emit(&format!("{e}\n"))?;
                return Ok(true);
            }
        };

        match command {
            Command::Quit => return Ok(false),
            Command::Help => {
                let help = render::help();
                self.emit(&help)?;
                return Ok(true);
            }
            Command::Status => {
                let status = render::status(self.session.state());
                self.emit(&status)?;
                return Ok(true);
            }
            _ => {}
        }

        match self.session.apply(&command) {
            Ok(event) => {
                if let Some(event) = event {
                    self.play(&event);
                }
                let screen = render::screen(self.session.state(), self.images.as_ref());
                self.emit(&screen)?;
            }
            Err(e) => self.emit(&format!("{e}\n"))?,
        }
        Ok(true)
    }

    fn play(&mut self, event: &GameEvent) {
        for &cue in Cue::for_event(event) {
            self.cues.play(cue);
        }
    }

    fn emit(&mut self, text: &str) -> Result<()> {
        self.out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.flush())
            .map_err(|e| Error::io(e.to_string()))
    }
}
