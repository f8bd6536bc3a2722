//! Parsing player input into commands.

use std::str::FromStr;

use zhuyin_foundation::Error;

/// Words the completer offers at the start of a line.
pub const COMMAND_WORDS: [&str; 7] = ["start", "answer", "next", "menu", "status", "help", "quit"];

/// One line of player input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Start playing from the menu.
    Start,
    /// Answer the current question. Tokens are option numbers, literal
    /// symbols, or `_` for a slot left empty.
    Answer(Vec<String>),
    /// Move on: next question, or next level once one is complete.
    Next,
    /// Abandon the session and return to the menu.
    Menu,
    /// Show score, level, and progress.
    Status,
    /// Show the command list.
    Help,
    /// Leave the program.
    Quit,
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(Error::invalid_command("empty input"));
        };

        let command = match head.to_ascii_lowercase().as_str() {
            "start" | "s" | "play" => Self::Start,
            "answer" | "a" => {
                let tokens: Vec<String> = words.map(String::from).collect();
                if tokens.is_empty() {
                    return Err(Error::invalid_command("answer needs at least one option"));
                }
                return Ok(Self::Answer(tokens));
            }
            "next" | "n" => Self::Next,
            "menu" | "m" => Self::Menu,
            "status" | "st" => Self::Status,
            "help" | "h" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            // Bare option numbers and symbols are answers.
            _ if looks_like_answer(head) => {
                return Ok(Self::Answer(line.split_whitespace().map(String::from).collect()));
            }
            other => return Err(Error::invalid_command(format!("unknown command: {other}"))),
        };

        match words.next() {
            None => Ok(command),
            Some(extra) => Err(Error::invalid_command(format!(
                "unexpected argument: {extra}"
            ))),
        }
    }
}

fn looks_like_answer(token: &str) -> bool {
    token == "_"
        || token.chars().all(|c| c.is_ascii_digit())
        || token.chars().any(|c| !c.is_ascii())
}
