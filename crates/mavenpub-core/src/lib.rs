//! Core data types for mavenpub.
//!
//! This crate defines the types that describe a publication: the
//! `Mavenpub.toml` project file, Maven coordinates, the artifact set,
//! repository credentials and where they are looked up, the Java toolchain
//! requirement, and the user-level global configuration.
//!
//! This crate is intentionally free of async code and network I/O.

/// File name of the project file.
pub const MANIFEST_FILE: &str = "Mavenpub.toml";

/// File name of the per-project secrets file read alongside the manifest.
pub const ENV_FILE: &str = ".mavenpub.env";

pub mod artifacts;
pub mod config;
pub mod coordinates;
pub mod credentials;
pub mod manifest;
pub mod properties;
pub mod toolchain;
