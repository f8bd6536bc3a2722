//! Integration tests for Layer 1: Catalog
//!
//! Tests for the built-in vocabulary, lookups, and sampling.

mod builtin;
mod sampling;
