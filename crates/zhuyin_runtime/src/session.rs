//! Session state for the terminal driver.
//!
//! A [`Session`] owns the game rules, the current snapshot and the random
//! source, and applies [`Command`]s to them. It is the only place in the
//! program that replaces the current state.

use zhuyin_engine::{
    Answer, Game, GameEvent, GameState, Phase, Question, QuestionType, advance, reset,
    submit_answer,
};
use zhuyin_foundation::{Error, RandomSource, Result, SeededRandom};

use crate::command::Command;

/// A play session.
pub struct Session {
    game: Game,
    state: GameState,
    rng: Box<dyn RandomSource>,
}

impl Session {
    /// Creates a session at the menu.
    pub fn new(game: Game, rng: impl RandomSource + 'static) -> Self {
        Self {
            game,
            state: GameState::new(),
            rng: Box::new(rng),
        }
    }

    /// Creates a session over the built-in catalog with a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(Game::builtin(), SeededRandom::new(seed))
    }

    /// Returns the game rules.
    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the current snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Applies `command` and reports what changed.
    ///
    /// `Status`, `Help` and `Quit` never touch the state and always return
    /// `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`zhuyin_foundation::ErrorKind::InvalidCommand`] when the
    /// command does not apply to the current phase, or an answer names an
    /// option that does not exist.
    pub fn apply(&mut self, command: &Command) -> Result<Option<GameEvent>> {
        let next = match command {
            Command::Start => self.start()?,
            Command::Answer(tokens) => self.answer(tokens)?,
            Command::Next => self.next()?,
            Command::Menu => reset(),
            Command::Status | Command::Help | Command::Quit => return Ok(None),
        };

        let event = GameEvent::between(&self.state, &next);
        tracing::debug!(?command, ?event, phase = %next.phase(), "applied command");
        self.state = next;
        Ok(event)
    }

    fn start(&mut self) -> Result<GameState> {
        match self.state.phase() {
            Phase::Menu => Ok(self.game.start_level(&self.state, 1, &mut *self.rng)),
            Phase::GameOver => Ok(self.game.start_level(&reset(), 1, &mut *self.rng)),
            Phase::LevelComplete => Ok(self.game.next_level(&self.state, &mut *self.rng)),
            Phase::Playing | Phase::QuestionResult => Err(Error::invalid_command(
                "a level is already in progress; use `menu` to abandon it",
            )),
        }
    }

    fn answer(&self, tokens: &[String]) -> Result<GameState> {
        if self.state.phase() != Phase::Playing {
            return Err(Error::invalid_command("no question is waiting for an answer"));
        }
        let Some(question) = self.state.current_question() else {
            return Err(Error::invalid_command("this level has no questions left"));
        };
        let answer = resolve_answer(question, tokens)?;
        Ok(submit_answer(&self.state, &answer))
    }

    fn next(&mut self) -> Result<GameState> {
        match self.state.phase() {
            Phase::Playing | Phase::QuestionResult => Ok(advance(&self.state)),
            Phase::LevelComplete => Ok(self.game.next_level(&self.state, &mut *self.rng)),
            Phase::Menu | Phase::GameOver => {
                Err(Error::invalid_command("nothing to continue; use `start`"))
            }
        }
    }
}

/// Turns answer tokens into an [`Answer`] for `question`.
///
/// Numbers pick options (1-based); anything else is taken literally. For
/// spelling and sorting, `_` is an unfilled slot. A picture question joins
/// its tokens into one choice, so `ㄊㄨˋ ㄗˇ` and `ㄊㄨˋㄗˇ` are the same.
///
/// # Errors
///
/// Returns an error if a number is outside the option list.
pub fn resolve_answer(question: &Question, tokens: &[String]) -> Result<Answer> {
    let options = question.options();
    let pick = |token: &str| -> Result<String> {
        match token.parse::<usize>() {
            Ok(n) if (1..=options.len()).contains(&n) => Ok(options[n - 1].clone()),
            Ok(n) => Err(Error::invalid_command(format!(
                "option {n} does not exist; choose 1 to {}",
                options.len()
            ))),
            Err(_) => Ok(token.to_string()),
        }
    };

    match question.kind() {
        QuestionType::ImageMatch => {
            let parts = tokens
                .iter()
                .map(|t| pick(t))
                .collect::<Result<Vec<_>>>()?;
            Ok(Answer::Choice(parts.concat()))
        }
        QuestionType::SymbolSpell | QuestionType::SymbolSort => tokens
            .iter()
            .map(|t| if t == "_" { Ok(String::new()) } else { pick(t) })
            .collect::<Result<Vec<_>>>()
            .map(Answer::Sequence),
    }
}
