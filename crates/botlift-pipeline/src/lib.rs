//! Fail-fast provisioning pipeline.
//!
//! A [`Pipeline`] is an ordered sequence of [`Step`]s, each wrapping exactly
//! one externally observable side effect. Execution is strictly sequential
//! and halts on the first failure; nothing is rolled back.

pub mod executor;
pub mod pipeline;
pub mod step;

pub use executor::{StepExecutor, StepFailure};
pub use pipeline::{Pipeline, RunResult};
pub use step::Step;
