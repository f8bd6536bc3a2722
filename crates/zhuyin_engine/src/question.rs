//! Questions and their per-type payloads.

use std::fmt;
use std::sync::Arc;

use zhuyin_catalog::VocabularyItem;

use crate::answer::Answer;

/// The three mini-game mechanics, in the order a level presents them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "snake_case"))]
pub enum QuestionType {
    /// Pick the spelling that matches the picture.
    ImageMatch,
    /// Fill the slots from a pool of symbols with distractors.
    SymbolSpell,
    /// Put the word's own symbols in order.
    SymbolSort,
}

impl QuestionType {
    /// Every type, in level order (escalating difficulty).
    pub const ALL: [QuestionType; 3] = [Self::ImageMatch, Self::SymbolSpell, Self::SymbolSort];

    /// Returns a snake-case name for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ImageMatch => "image_match",
            Self::SymbolSpell => "symbol_spell",
            Self::SymbolSort => "symbol_sort",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The options and expected answer of a question, one variant per type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Prompt {
    /// Whole spellings; exactly one equals `answer`.
    ImageMatch {
        /// Shuffled candidate spellings.
        options: Vec<String>,
        /// The concatenated spelling of the word.
        answer: String,
    },
    /// Individual symbols, the word's own plus distractors.
    SymbolSpell {
        /// Shuffled symbol pool.
        options: Vec<String>,
        /// The spelling, one symbol per slot.
        answer: Vec<String>,
    },
    /// Exactly the word's own symbols, shuffled.
    SymbolSort {
        /// Shuffled symbols.
        options: Vec<String>,
        /// The spelling in order.
        answer: Vec<String>,
    },
}

/// One question about one vocabulary item. Immutable once generated.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Question {
    vocabulary: Arc<VocabularyItem>,
    prompt: Prompt,
}

impl Question {
    /// Creates a question from a word and its prompt.
    #[must_use]
    pub fn new(vocabulary: Arc<VocabularyItem>, prompt: Prompt) -> Self {
        Self { vocabulary, prompt }
    }

    /// Returns the question type.
    #[must_use]
    pub fn kind(&self) -> QuestionType {
        match self.prompt {
            Prompt::ImageMatch { .. } => QuestionType::ImageMatch,
            Prompt::SymbolSpell { .. } => QuestionType::SymbolSpell,
            Prompt::SymbolSort { .. } => QuestionType::SymbolSort,
        }
    }

    /// Returns the word being asked about.
    #[must_use]
    pub fn vocabulary(&self) -> &Arc<VocabularyItem> {
        &self.vocabulary
    }

    /// Returns the type-specific payload.
    #[must_use]
    pub fn prompt(&self) -> &Prompt {
        &self.prompt
    }

    /// Returns the shuffled options shown to the player.
    #[must_use]
    pub fn options(&self) -> &[String] {
        match &self.prompt {
            Prompt::ImageMatch { options, .. }
            | Prompt::SymbolSpell { options, .. }
            | Prompt::SymbolSort { options, .. } => options,
        }
    }

    /// Returns the answer that scores.
    #[must_use]
    pub fn correct_answer(&self) -> Answer {
        match &self.prompt {
            Prompt::ImageMatch { answer, .. } => Answer::Choice(answer.clone()),
            Prompt::SymbolSpell { answer, .. } | Prompt::SymbolSort { answer, .. } => {
                Answer::Sequence(answer.clone())
            }
        }
    }

    /// Number of fill-in slots; only spelling questions have them.
    #[must_use]
    pub fn slot_count(&self) -> Option<usize> {
        match &self.prompt {
            Prompt::SymbolSpell { answer, .. } => Some(answer.len()),
            Prompt::ImageMatch { .. } | Prompt::SymbolSort { .. } => None,
        }
    }
}
