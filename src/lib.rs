//! Boost Note export library
//!
//! Walks the remote folder graph of a Boost Note workspace and mirrors it as
//! local directories of Markdown files. Modules are public for the binary and
//! for integration tests.

pub mod boost_service;
pub mod config;
pub mod error;
pub mod operations;
pub mod sync;
