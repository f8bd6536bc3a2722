//! The terminal driver fed a scripted session

use zhuyin_engine::{Answer, Phase, Question};
use zhuyin_runtime::{Repl, ScriptedEditor, Session, SilentCues, render};

/// Returns the input line that answers `question` correctly by number.
fn numbered_answer(question: &Question) -> String {
    let options = question.options();
    let position = |symbol: &str| {
        options
            .iter()
            .position(|o| o == symbol)
            .map(|i| (i + 1).to_string())
            .unwrap()
    };
    match question.correct_answer() {
        Answer::Choice(choice) => position(&choice),
        Answer::Sequence(symbols) => symbols
            .iter()
            .map(|s| position(s))
            .collect::<Vec<_>>()
            .join(" "),
    }
}

#[test]
fn numbered_answers_win_a_level() {
    let mut repl = Repl::with_io(ScriptedEditor::default(), Vec::new(), Session::seeded(99))
        .with_cues(SilentCues)
        .without_banner();

    assert!(repl.execute("start").unwrap());
    while let Some(question) = repl.session().state().current_question() {
        let line = numbered_answer(question);
        assert!(repl.execute(&line).unwrap());
        assert_eq!(repl.session().state().last_answer_correct(), Some(true));
        assert!(repl.execute("next").unwrap());
    }

    let state = repl.session().state();
    assert_eq!(state.phase(), Phase::LevelComplete);
    assert_eq!(state.score(), 100);
    assert!(String::from_utf8_lossy(repl.output()).contains("🏆"));
}

#[test]
fn scripted_session_returns_to_menu() {
    let editor = ScriptedEditor::new(["start", "status", "next", "menu", "quit"]);
    let mut repl = Repl::with_io(editor, Vec::new(), Session::seeded(5))
        .with_cues(SilentCues)
        .without_banner();
    repl.run().unwrap();

    let out = String::from_utf8_lossy(repl.output()).into_owned();
    assert!(out.contains("phase: playing"));
    assert!(out.contains(&render::menu()));
    assert_eq!(repl.session().state().phase(), Phase::Menu);
}
