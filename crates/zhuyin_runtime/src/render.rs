//! Plain-text views of the game state.
//!
//! Every function here is pure: it reads a snapshot and returns the text
//! to print. Nothing is written to the terminal from this module.

use std::fmt::Write as _;

use zhuyin_engine::{GameState, Phase, Prompt, Question, QuestionType, scorer};

use crate::assets::ImageResolver;

const PROGRESS_WIDTH: usize = 24;

/// Renders whatever screen belongs to the current phase.
#[must_use]
pub fn screen(state: &GameState, images: &dyn ImageResolver) -> String {
    match state.phase() {
        Phase::Menu => menu(),
        Phase::Playing => playing(state, images),
        Phase::QuestionResult => question_result(state),
        Phase::LevelComplete => level_complete(state),
        Phase::GameOver => game_over(state),
    }
}

/// The title screen.
#[must_use]
pub fn menu() -> String {
    let mut out = String::new();
    out.push_str("=== 注音闖關 ===\n");
    out.push_str("學習注音符號的趣味遊戲\n\n");
    out.push_str("  🖼️  圖像配對  pick the spelling that matches the picture\n");
    out.push_str("  ✍️  注音拼字  fill the slots from the symbol pool\n");
    out.push_str("  🔢  注音排序  put the shuffled symbols in order\n\n");
    out.push_str("Type `start` to play, `help` for commands.\n");
    out
}

/// The active question with its options numbered from 1.
#[must_use]
pub fn playing(state: &GameState, images: &dyn ImageResolver) -> String {
    let mut out = header(state);

    let Some(question) = state.current_question() else {
        out.push_str("\nNo questions left in this level. Type `next` to finish it.\n");
        return out;
    };

    let item = question.vocabulary();
    let glyph = images.resolve(&item.image);
    let _ = writeln!(out);
    match question.kind() {
        QuestionType::ImageMatch => {
            let _ = writeln!(out, "Which spelling matches the picture?");
            let _ = writeln!(out, "\n    {glyph}  {}\n", item.display);
        }
        QuestionType::SymbolSpell => {
            let slots = question.slot_count().unwrap_or_default();
            let _ = writeln!(out, "Spell the word, one symbol per slot.");
            let _ = writeln!(out, "\n    {glyph}  {}", item.display);
            let _ = writeln!(out, "    {}\n", vec!["[ ]"; slots].join(" "));
        }
        QuestionType::SymbolSort => {
            let _ = writeln!(out, "Put the symbols in the right order.");
            let _ = writeln!(out, "\n    {glyph}  {}\n", item.display);
        }
    }
    out.push_str(&options(question));
    out.push_str(answer_hint(question.kind()));
    out
}

/// Feedback on the answer just scored.
#[must_use]
pub fn question_result(state: &GameState) -> String {
    let mut out = String::new();
    let Some(question) = state.current_question() else {
        return out;
    };
    let item = question.vocabulary();

    if state.last_answer_correct() == Some(true) {
        let _ = writeln!(out, "🎉 答對了！ +{} 分", scorer::reward(question.kind()));
    } else {
        let _ = writeln!(out, "😢 再試一次！");
    }
    let _ = writeln!(out, "{}（{}）", item.display, item.spelled());
    let _ = writeln!(out, "Score: {}", state.score());
    out.push_str("Type `next` to continue.\n");
    out
}

/// The end-of-level summary.
#[must_use]
pub fn level_complete(state: &GameState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "🏆 關卡完成！ Level {} complete.", state.level());
    let _ = writeln!(out, "Total score: {} 分", state.score());
    out.push_str("Type `next` for the next level or `menu` to stop.\n");
    out
}

/// Kept for completeness; nothing currently ends a game.
#[must_use]
pub fn game_over(state: &GameState) -> String {
    format!("Game over. Final score: {}\nType `menu` to start again.\n", state.score())
}

/// One-line summary for the `status` command.
#[must_use]
pub fn status(state: &GameState) -> String {
    format!(
        "phase: {}  level: {}  score: {}  question: {}/{}  words seen: {}\n",
        state.phase(),
        state.level(),
        state.score(),
        (state.question_index() + 1).min(state.questions().len()),
        state.questions().len(),
        state.used_ids().len(),
    )
}

/// The command reference.
#[must_use]
pub fn help() -> String {
    "\
Commands:
  start            start playing from the menu
  answer <opts>    answer the current question (the word `answer` is optional)
  next             next question, or next level once a level is complete
  menu             give up the session and return to the menu
  status           show level, score, and progress
  help             show this list
  quit             leave

Answers:
  picture questions   one option number, or the spelling itself
  spelling / sorting  option numbers or symbols separated by spaces;
                      `_` leaves a slot empty
"
    .to_string()
}

/// Draws a text progress bar for `fraction` in `[0, 1]`.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn progress_bar(fraction: f64) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * PROGRESS_WIDTH as f64).round() as usize).min(PROGRESS_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(PROGRESS_WIDTH - filled))
}

fn header(state: &GameState) -> String {
    format!(
        "⭐ {} 分   第 {} 關   {}/{}\n{}\n",
        state.score(),
        state.level(),
        (state.question_index() + 1).min(state.questions().len()),
        state.questions().len(),
        progress_bar(state.progress()),
    )
}

fn options(question: &Question) -> String {
    let mut out = String::new();
    for (n, option) in question.options().iter().enumerate() {
        let _ = write!(out, "  {}) {option}", n + 1);
    }
    out.push('\n');
    out
}

fn answer_hint(kind: QuestionType) -> &'static str {
    match kind {
        QuestionType::ImageMatch => "Answer with an option number.\n",
        QuestionType::SymbolSpell | QuestionType::SymbolSort => {
            "Answer with option numbers in order, e.g. `2 1`.\n"
        }
    }
}

/// Returns the prompt shown next to the cursor for `state`.
#[must_use]
pub fn prompt(state: &GameState) -> &'static str {
    match state.current_question().map(Question::prompt) {
        Some(Prompt::ImageMatch { .. }) if state.phase() == Phase::Playing => "pick> ",
        Some(Prompt::SymbolSpell { .. } | Prompt::SymbolSort { .. })
            if state.phase() == Phase::Playing =>
        {
            "spell> "
        }
        _ => "> ",
    }
}
