//! Shared utilities for mavenpub.
//!
//! This crate provides cross-cutting concerns used by all other mavenpub crates:
//! the publish error taxonomy, filesystem helpers, checksum hashing, and
//! terminal status and progress output.

pub mod errors;
pub mod fs;
pub mod hash;
pub mod progress;
