//! Integration tests for Layer 0: Foundation
//!
//! Tests for persistent collections, errors, ids, and random sources.

mod collections;
mod errors;
mod random;
