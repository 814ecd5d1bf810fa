//! Sync module: the folder tree traversal and its per-run state

pub mod folder_cache;
pub mod tree_sync;
