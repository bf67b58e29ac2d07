//! Shared test utilities for quicksnmp integration tests.

// Allow dead code and unused imports since not all test files use all utilities
#![allow(dead_code)]
#![allow(unused_imports)]

mod events;
mod fixtures;

pub use events::{CapturedEvent, capture_events};
pub use fixtures::*;
