//! Trait definitions for the Postcraft post generator.
//!
//! This crate provides the seams the content pipeline is built against: the
//! remote text generator and the random source used for template selection.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod random;
mod traits;

pub use random::{FixedIndex, RandomSource, SeededRandom, ThreadRandom};
pub use traits::PostGenerator;
