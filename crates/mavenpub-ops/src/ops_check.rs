//! Operation: verify a project is ready to publish without contacting any
//! repository.
//!
//! Checks the coordinates, that every configured archive is on disk, that
//! each repository URL is usable, and that a JDK matching `[toolchain]` is
//! installed.

use std::path::PathBuf;

use mavenpub_core::artifacts::Artifacts;
use mavenpub_core::config::GlobalConfig;
use mavenpub_core::coordinates::Coordinates;
use mavenpub_core::credentials::CredentialSource;
use mavenpub_maven::repository::RepositoryTarget;
use mavenpub_toolchain::jdk::{self, JdkInfo};
use mavenpub_util::progress;

use crate::Project;

/// Everything `check` confirmed.
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub coordinates: Coordinates,
    pub artifacts: Vec<PathBuf>,
    pub repositories: Vec<String>,
    pub jdk: Option<JdkInfo>,
}

pub fn check(project: &Project, config: &GlobalConfig) -> miette::Result<CheckReport> {
    let manifest = &project.manifest;
    let coordinates = manifest.coordinates()?;
    progress::status("Checking", &coordinates.to_string());

    let artifacts = Artifacts::from_config(&manifest.artifacts, &project.root, &coordinates);
    artifacts.validate()?;
    let artifact_paths: Vec<PathBuf> = std::iter::once(artifacts.primary.clone())
        .chain(artifacts.sources.clone())
        .chain(artifacts.javadoc.clone())
        .collect();
    for path in &artifact_paths {
        tracing::debug!("Found artifact {}", path.display());
    }

    if manifest.repositories.is_empty() {
        progress::status_warn("Warning", "no [repositories] configured");
    }
    for (name, entry) in &manifest.repositories {
        RepositoryTarget::from_entry(name, entry, CredentialSource::Anonymous)
            .validate_transport()?;
    }

    let jdk = match manifest.toolchain_requirement()? {
        Some(requirement) => {
            let found = jdk::resolve_toolchain(&requirement, config.toolchain.jdk.as_deref())?;
            progress::status_info("Toolchain", &format!("{requirement}: {found}"));
            Some(found)
        }
        None => None,
    };

    progress::status(
        "Finished",
        &format!("{coordinates} is ready to publish"),
    );

    Ok(CheckReport {
        coordinates,
        artifacts: artifact_paths,
        repositories: manifest.repositories.keys().cloned().collect(),
        jdk,
    })
}
