//! Zhuyin Quest - a phonetic-symbol (注音) quiz game
//!
//! This crate re-exports all layers of the game for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: zhuyin_runtime    - Terminal driver, CLI, logging, picture and sound collaborators
//! Layer 2: zhuyin_engine     - Question generation, answer checking, scoring, state machine
//! Layer 1: zhuyin_catalog    - Vocabulary items, categories, phonetic alphabet
//! Layer 0: zhuyin_foundation - Core types (VocabId, Error, RandomSource, collections)
//! ```

pub use zhuyin_catalog as catalog;
pub use zhuyin_engine as engine;
pub use zhuyin_foundation as foundation;
pub use zhuyin_runtime as runtime;
