//! Cross-layer integration tests
//!
//! Tests complete play-throughs from catalog to terminal driver.

mod driver;
mod full_game;
