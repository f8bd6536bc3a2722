//! What a player submits.

/// A player's answer as handed over by the presentation layer.
///
/// Image matching submits a [`Answer::Choice`]; spelling and sorting submit a
/// [`Answer::Sequence`], where an empty string marks a slot left unfilled.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Answer {
    /// A single picked option.
    Choice(String),
    /// Symbols in the order the player placed them.
    Sequence(Vec<String>),
}

impl Answer {
    /// Builds a sequence answer from any iterable of strings.
    pub fn sequence<S: Into<String>>(symbols: impl IntoIterator<Item = S>) -> Self {
        Self::Sequence(symbols.into_iter().map(Into::into).collect())
    }

    /// Builds a sequence of `slots` unfilled placeholders.
    #[must_use]
    pub fn unfilled(slots: usize) -> Self {
        Self::Sequence(vec![String::new(); slots])
    }
}

impl From<&str> for Answer {
    fn from(choice: &str) -> Self {
        Self::Choice(choice.to_string())
    }
}

impl From<String> for Answer {
    fn from(choice: String) -> Self {
        Self::Choice(choice)
    }
}

impl<S: Into<String>> From<Vec<S>> for Answer {
    fn from(symbols: Vec<S>) -> Self {
        Self::sequence(symbols)
    }
}
