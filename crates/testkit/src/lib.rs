#![warn(missing_docs)]
//! Shared test helpers for the roomscene workspace.

mod approx;
mod snapshot;
pub mod strategies;

pub use approx::*;
pub use snapshot::*;
