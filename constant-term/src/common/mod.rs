//! Common functionality.
pub mod logger;
