//! Integration tests for Layer 2: Engine
//!
//! Tests for level generation, answer checking, and state transitions.

mod generation;
mod transitions;
