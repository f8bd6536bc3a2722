//! A single vocabulary entry.

use zhuyin_foundation::{Error, Result, VocabId};

use crate::category::Category;

/// A word the game can ask about.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VocabularyItem {
    /// Unique id within the catalog.
    pub id: VocabId,
    /// Human-readable text, e.g. `兔子`.
    pub display: String,
    /// Phonetic spelling, one entry per syllable, e.g. `["ㄊㄨˋ", "ㄗˇ"]`.
    pub spelling: Vec<String>,
    /// Image reference resolved by the presentation layer.
    pub image: String,
    /// Category tag.
    pub category: Category,
}

impl VocabularyItem {
    /// Creates an item. Use [`Self::validate`] to check it.
    #[must_use]
    pub fn new<S: Into<String>>(
        id: impl Into<VocabId>,
        display: impl Into<String>,
        spelling: impl IntoIterator<Item = S>,
        image: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            display: display.into(),
            spelling: spelling.into_iter().map(Into::into).collect(),
            image: image.into(),
            category,
        }
    }

    /// Returns the spelling joined into one label, e.g. `ㄊㄨˋㄗˇ`.
    #[must_use]
    pub fn spelled(&self) -> String {
        self.spelling.concat()
    }

    /// Checks the display text and spelling are non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`zhuyin_foundation::ErrorKind::EmptyDisplay`] or
    /// [`zhuyin_foundation::ErrorKind::EmptySpelling`].
    pub fn validate(&self) -> Result<()> {
        if self.display.trim().is_empty() {
            return Err(Error::empty_display(self.id.as_str()));
        }
        if self.spelling.is_empty() || self.spelling.iter().any(String::is_empty) {
            return Err(Error::empty_spelling(self.id.as_str()));
        }
        Ok(())
    }
}
