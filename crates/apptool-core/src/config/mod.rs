//! Run configuration built from the command invocation

pub mod run;

pub use run::{Mode, RunConfig};
