//! Core ids, errors, persistent collections, and random sources for Zhuyin Quest.
//!
//! This crate provides:
//! - [`VocabId`] - Cheaply clonable vocabulary identifiers
//! - [`Error`] - Rich error types with context
//! - Persistent collections ([`LtVec`], [`LtSet`])
//! - [`RandomSource`] - The single substitutable source of randomness

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod id;
pub mod random;

pub use collections::{LtSet, LtVec};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use id::VocabId;
pub use random::{RandomSource, ScriptedRandom, SeededRandom, shuffle};
