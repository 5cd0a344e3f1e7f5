//! # Constant Term
//!
//! This library reconstructs the constant term of a polynomial from a set of
//! its roots, where every root is supplied as a numeral string in its own
//! base (2 to 36) and may be arbitrarily large.
//!
//! ## Pipeline
//!
//! - Decoder (base-N numeral strings to unbounded-precision integers)
//! - Assembler (selection of the first `k` roots by ascending index)
//! - Reducer (product of the negated roots)
//!
//! Root documents in the JSON format are parsed by [`document::Document`] and
//! can be evaluated in parallel with [`batch::Batch`].

#[macro_use]
extern crate slog;

pub mod assembler;
pub mod batch;
pub mod common;
pub mod config;
pub mod decoder;
pub mod document;
pub mod errors;
pub mod reducer;

// Re-exports.
pub use self::{
    assembler::{compute_constant_term, Assembler, DecodedRoot, RootEntry, RootSetDescriptor},
    batch::Batch,
    config::Config,
    decoder::decode,
    document::Document,
    errors::{DecodeError, Error},
    reducer::reduce,
};
