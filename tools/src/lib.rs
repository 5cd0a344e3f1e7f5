//! Command line tools for reconstructing polynomial constant terms.
#[macro_use]
extern crate slog;

pub mod command_compute;
pub mod command_demo;

// Re-exports.
pub use self::{command_compute::compute, command_demo::demo};
