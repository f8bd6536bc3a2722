//! Answer checking.
//!
//! Pure predicates, one per question type. Malformed input (the wrong
//! answer shape, the wrong length, unfilled slots) is simply incorrect.

use crate::answer::Answer;
use crate::question::{Prompt, Question};

/// Image matching: the chosen option must equal the spelling exactly.
#[must_use]
pub fn check_image_match(expected: &str, answer: &Answer) -> bool {
    matches!(answer, Answer::Choice(choice) if choice == expected)
}

/// Spelling: same length, same symbol in every slot.
#[must_use]
pub fn check_symbol_spell(expected: &[String], answer: &Answer) -> bool {
    positional_match(expected, answer)
}

/// Sorting: same rule as spelling, applied to the player's ordering.
#[must_use]
pub fn check_symbol_sort(expected: &[String], answer: &Answer) -> bool {
    positional_match(expected, answer)
}

/// Checks `answer` against whichever rule the question's type uses.
#[must_use]
pub fn is_correct(question: &Question, answer: &Answer) -> bool {
    match question.prompt() {
        Prompt::ImageMatch { answer: expected, .. } => check_image_match(expected, answer),
        Prompt::SymbolSpell { answer: expected, .. } => check_symbol_spell(expected, answer),
        Prompt::SymbolSort { answer: expected, .. } => check_symbol_sort(expected, answer),
    }
}

fn positional_match(expected: &[String], answer: &Answer) -> bool {
    match answer {
        Answer::Sequence(symbols) => symbols.as_slice() == expected,
        Answer::Choice(_) => false,
    }
}
