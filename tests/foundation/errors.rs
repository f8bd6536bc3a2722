//! Integration tests for error types

use zhuyin_foundation::{Error, ErrorContext, ErrorKind};

#[test]
fn kinds_format_their_subject() {
    let cases = [
        (Error::duplicate_id("dog"), "duplicate vocabulary id: dog"),
        (Error::empty_display("cat"), "vocabulary item cat has empty display text"),
        (
            Error::empty_spelling("bird"),
            "vocabulary item bird has an empty phonetic spelling",
        ),
        (Error::io("broken pipe"), "I/O error: broken pipe"),
        (Error::internal("oops"), "internal error: oops"),
    ];
    for (err, expected) in cases {
        assert_eq!(err.to_string(), expected);
    }
}

#[test]
fn context_is_optional() {
    let err = Error::invalid_config("no questions");
    assert!(err.context.is_none());
    assert!(matches!(err.kind, ErrorKind::InvalidConfig(_)));

    let err = err.with_context(ErrorContext::new().with_source("GameConfig"));
    assert_eq!(
        err.context.and_then(|c| c.source),
        Some("GameConfig".to_string())
    );
}

#[test]
fn errors_are_std_errors() {
    fn takes_std_error(_: &dyn std::error::Error) {}
    takes_std_error(&Error::invalid_command("jump"));
}
