//! Test utilities shared by unit and HTTP-level tests.
//!
//! This module provides:
//! - Fixture factories for activities and catalogues
//! - `TestAppStateBuilder` for wiring an `AppState` around an in-memory store

mod app_state_builder;
mod factories;

pub use app_state_builder::*;
pub use factories::*;
