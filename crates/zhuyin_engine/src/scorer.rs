//! Points per question type.

use crate::question::QuestionType;

/// Points for a correct answer; harder mechanics pay more.
#[must_use]
pub const fn reward(kind: QuestionType) -> u32 {
    match kind {
        QuestionType::ImageMatch => 10,
        QuestionType::SymbolSpell => 20,
        QuestionType::SymbolSort => 30,
    }
}

/// Points earned by one answer: the type's reward if correct, else nothing.
#[must_use]
pub const fn points(kind: QuestionType, is_correct: bool) -> u32 {
    if is_correct { reward(kind) } else { 0 }
}
