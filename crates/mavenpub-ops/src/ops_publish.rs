//! Operation: publish the project's artifacts to a Maven repository.

use std::path::Path;

use serde::Serialize;

use mavenpub_core::artifacts::Artifacts;
use mavenpub_core::config::GlobalConfig;
use mavenpub_core::coordinates::Coordinates;
use mavenpub_core::credentials::{CredentialLookup, CredentialSource};
use mavenpub_core::properties::load_env_file;
use mavenpub_core::ENV_FILE;
use mavenpub_maven::pom::PomDescriptor;
use mavenpub_maven::publish::{self, PublishReceipt, Publisher};
use mavenpub_maven::repository::RepositoryTarget;
use mavenpub_util::progress;

use crate::Project;

/// Flags of `mavenpub publish`.
#[derive(Debug, Clone, Default)]
pub struct PublishOptions {
    /// Repository name from `[repositories]`; required when several exist.
    pub repository: Option<String>,
    /// Validate and list remote paths without uploading.
    pub dry_run: bool,
}

/// What `publish` did.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum PublishOutcome {
    DryRun {
        coordinates: Coordinates,
        repository: String,
        url: String,
        paths: Vec<String>,
    },
    Published(PublishReceipt),
}

/// Publish the project, or plan the publish when `dry_run` is set.
pub async fn publish(
    project: &Project,
    config: &GlobalConfig,
    opts: &PublishOptions,
) -> miette::Result<PublishOutcome> {
    let manifest = &project.manifest;
    let coords = manifest.coordinates()?;
    let artifacts = Artifacts::from_config(&manifest.artifacts, &project.root, &coords);
    let target = repository_target(project, opts.repository.as_deref(), config)?;

    if opts.dry_run {
        let paths = publish::plan(&artifacts, &coords, &target)?;
        progress::status_info(
            "Dry run",
            &format!("{coords} to {} ({})", target.name, target.url),
        );
        for path in &paths {
            progress::status_info("Would upload", path);
        }
        return Ok(PublishOutcome::DryRun {
            coordinates: coords,
            repository: target.name,
            url: target.url,
            paths,
        });
    }

    let pom = PomDescriptor::from_manifest(manifest)?;
    let publisher = Publisher::new(&config.publish)?;

    progress::status(
        "Publishing",
        &format!("{coords} to {} ({})", target.name, target.url),
    );
    let receipt = publisher.publish_with(&artifacts, &pom, &target).await?;

    if receipt.replaced {
        progress::status_warn("Replaced", &format!("existing {coords}"));
    }
    for file in &receipt.files {
        progress::status("Uploaded", &format!("{} ({} bytes)", file.path, file.bytes));
    }
    progress::status("Published", &format!("{coords} to {}", receipt.repository));

    Ok(PublishOutcome::Published(receipt))
}

/// Build the publish target for `name` (or the only configured repository).
pub fn repository_target(
    project: &Project,
    name: Option<&str>,
    config: &GlobalConfig,
) -> miette::Result<RepositoryTarget> {
    let (name, entry) = project.manifest.select_repository(name)?;
    let lookup = credential_lookup(&project.root, name, config)?;
    Ok(RepositoryTarget::from_entry(
        name,
        entry,
        CredentialSource::Lookup(lookup),
    ))
}

/// The credential lookup chain for `repository`: `.mavenpub.env` in the
/// project root, then the global credential store, then the process
/// environment.
pub fn credential_lookup(
    project_root: &Path,
    repository: &str,
    config: &GlobalConfig,
) -> miette::Result<CredentialLookup> {
    let env_file = load_env_file(&project_root.join(ENV_FILE))?;
    Ok(CredentialLookup::new(repository)
        .with_env_file(env_file)
        .with_store(config.credentials.get(repository).cloned()))
}
