//! # gradeval (library surface)
//!
//! The CLI and file-provider layers of the gradeval binary, exposed as a
//! library so integration tests can drive command plumbing directly.

pub mod cli;
pub mod files;
