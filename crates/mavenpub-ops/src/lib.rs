//! High-level operations behind the `mavenpub` commands.
//!
//! Each `ops_*` module loads what it needs from the project directory and the
//! global config, drives the lower crates, and prints Cargo-style status
//! lines to stderr. Return values carry everything a caller may want to
//! render on stdout.

pub mod ops_check;
pub mod ops_pom;
pub mod ops_publish;

use std::path::{Path, PathBuf};

use mavenpub_core::manifest::Manifest;
use mavenpub_core::MANIFEST_FILE;
use mavenpub_util::errors::PublishError;

/// A loaded project: its root directory and parsed `Mavenpub.toml`.
#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub manifest: Manifest,
}

impl Project {
    /// Find `Mavenpub.toml` in `start` or one of its parents and load it.
    pub fn locate(start: &Path) -> miette::Result<Self> {
        let root = mavenpub_util::fs::find_ancestor_with(start, MANIFEST_FILE).ok_or_else(|| {
            PublishError::Manifest {
                message: format!(
                    "Could not find {MANIFEST_FILE} in this directory or any parent"
                ),
            }
        })?;
        Self::load(&root)
    }

    /// Load the project whose `Mavenpub.toml` sits directly in `root`.
    pub fn load(root: &Path) -> miette::Result<Self> {
        let manifest = Manifest::from_path(&root.join(MANIFEST_FILE))?;
        tracing::debug!("Loaded {} from {}", MANIFEST_FILE, root.display());
        Ok(Self {
            root: root.to_path_buf(),
            manifest,
        })
    }
}
