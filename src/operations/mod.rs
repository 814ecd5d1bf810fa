//! Operations module for local materialization: path derivation and file writes

pub mod file_ops;
pub mod path_utils;
