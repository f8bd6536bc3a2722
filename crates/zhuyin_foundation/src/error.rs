//! Error types for Zhuyin Quest.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Game transitions themselves never fail; errors only arise at the edges:
//! building a catalog, validating configuration, and driving a terminal.

use std::fmt;

use thiserror::Error;

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Zhuyin Quest operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a duplicate vocabulary id error.
    #[must_use]
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateVocabularyId(id.into()))
    }

    /// Creates an empty display text error.
    #[must_use]
    pub fn empty_display(id: impl Into<String>) -> Self {
        Self::new(ErrorKind::EmptyDisplay(id.into()))
    }

    /// Creates an empty phonetic spelling error.
    #[must_use]
    pub fn empty_spelling(id: impl Into<String>) -> Self {
        Self::new(ErrorKind::EmptySpelling(id.into()))
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidConfig(message.into()))
    }

    /// Creates an invalid command error.
    #[must_use]
    pub fn invalid_command(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidCommand(message.into()))
    }

    /// Creates an I/O error from a message.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Two catalog entries share an id.
    #[error("duplicate vocabulary id: {0}")]
    DuplicateVocabularyId(String),

    /// A catalog entry has no display text.
    #[error("vocabulary item {0} has empty display text")]
    EmptyDisplay(String),

    /// A catalog entry has no phonetic symbols, or an empty symbol.
    #[error("vocabulary item {0} has an empty phonetic spelling")]
    EmptySpelling(String),

    /// Configuration values are out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A driver command could not be parsed or does not apply right now.
    #[error("invalid command: {0}")]
    InvalidCommand(String),

    /// Terminal or file I/O failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// A collaborator failed to initialize, such as the line editor or the
    /// log subscriber.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Name of the catalog, config, or command being processed.
    pub source: Option<String>,
    /// Position of the offending entry, when the source is a list.
    pub index: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source name.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the entry position.
    #[must_use]
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "in {source}")?;
            if let Some(index) = self.index {
                write!(f, " at entry {index}")?;
            }
        }
        Ok(())
    }
}
