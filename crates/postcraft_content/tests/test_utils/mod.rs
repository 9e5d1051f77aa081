//! Shared test utilities for pipeline tests.

mod mock_generator;

#[allow(unused_imports)]
pub use mock_generator::{MockBehavior, MockGenerator};
