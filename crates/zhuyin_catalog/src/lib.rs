//! Vocabulary catalog for Zhuyin Quest.
//!
//! The catalog is immutable reference data shared read-only by every other
//! layer. Each [`VocabularyItem`] pairs a word with its phonetic spelling,
//! an image reference, and a [`Category`].
//!
//! # Modules
//!
//! - [`category`] - The closed set of vocabulary categories
//! - [`item`] - A single vocabulary entry
//! - [`catalog`] - Validated storage with lookup and sampling
//! - [`alphabet`] - The Zhuyin symbols used as spelling distractors
//! - [`builtin`] - The fifty words shipped with the game

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod alphabet;
pub mod builtin;
pub mod catalog;
pub mod category;
pub mod item;

pub use alphabet::PHONETIC_ALPHABET;
pub use catalog::Catalog;
pub use category::Category;
pub use item::VocabularyItem;
