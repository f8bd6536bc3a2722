//! Configuration for level generation.

use zhuyin_foundation::{Error, Result};

use crate::question::QuestionType;

/// How many questions of each type make up a level.
///
/// Blocks are always generated in [`QuestionType::ALL`] order regardless of
/// the counts here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelShape {
    /// Number of image-match questions.
    pub image_match: usize,
    /// Number of symbol-spell questions.
    pub symbol_spell: usize,
    /// Number of symbol-sort questions.
    pub symbol_sort: usize,
}

impl Default for LevelShape {
    fn default() -> Self {
        Self {
            image_match: 3,
            symbol_spell: 2,
            symbol_sort: 1,
        }
    }
}

impl LevelShape {
    /// Creates a shape from explicit counts.
    #[must_use]
    pub const fn new(image_match: usize, symbol_spell: usize, symbol_sort: usize) -> Self {
        Self {
            image_match,
            symbol_spell,
            symbol_sort,
        }
    }

    /// Returns the count for one question type.
    #[must_use]
    pub const fn count(&self, kind: QuestionType) -> usize {
        match kind {
            QuestionType::ImageMatch => self.image_match,
            QuestionType::SymbolSpell => self.symbol_spell,
            QuestionType::SymbolSort => self.symbol_sort,
        }
    }

    /// Returns the number of questions in a full level.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.image_match + self.symbol_spell + self.symbol_sort
    }
}

/// Configuration for a [`crate::Game`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Questions per level, by type.
    pub shape: LevelShape,
    /// Wrong spellings offered alongside the right one in image matching.
    pub image_distractors: usize,
    /// Extra alphabet symbols mixed into the spelling pool.
    pub spell_distractors: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            shape: LevelShape::default(),
            image_distractors: 3,
            spell_distractors: 2,
        }
    }
}

impl GameConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the level shape.
    #[must_use]
    pub fn with_shape(mut self, shape: LevelShape) -> Self {
        self.shape = shape;
        self
    }

    /// Builder method to set the image-match distractor count.
    #[must_use]
    pub fn with_image_distractors(mut self, count: usize) -> Self {
        self.image_distractors = count;
        self
    }

    /// Builder method to set the spelling distractor count.
    #[must_use]
    pub fn with_spell_distractors(mut self, count: usize) -> Self {
        self.spell_distractors = count;
        self
    }

    /// Checks the configuration can produce playable levels.
    ///
    /// # Errors
    ///
    /// Returns [`zhuyin_foundation::ErrorKind::InvalidConfig`] if the level
    /// shape is empty or image matching would offer no wrong choices.
    pub fn validate(&self) -> Result<()> {
        if self.shape.total() == 0 {
            return Err(Error::invalid_config("level shape has no questions"));
        }
        if self.shape.image_match > 0 && self.image_distractors == 0 {
            return Err(Error::invalid_config(
                "image matching needs at least one distractor",
            ));
        }
        Ok(())
    }
}
