//! Vocabulary identifiers.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// Identifier of a vocabulary item, e.g. `"rabbit"`.
///
/// Backed by an `Arc<str>`, so cloning into session history and question
/// batches never copies the string.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct VocabId(Arc<str>);

impl VocabId {
    /// Creates a new id from any string.
    #[must_use]
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for VocabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VocabId({})", self.0)
    }
}

impl fmt::Display for VocabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VocabId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for VocabId {
    fn from(id: String) -> Self {
        Self(Arc::from(id))
    }
}

impl Borrow<str> for VocabId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for VocabId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
