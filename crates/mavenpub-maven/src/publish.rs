//! The publisher: validate locally, authenticate, then upload artifacts, POM,
//! checksum sidecars and `maven-metadata.xml` to a repository.
//!
//! Everything that can fail without the network fails first. A publish that
//! stops on a missing artifact, a bad URL or absent credentials has sent
//! nothing.

use serde::Serialize;

use mavenpub_core::artifacts::Artifacts;
use mavenpub_core::config::PublishSettings;
use mavenpub_core::coordinates::Coordinates;
use mavenpub_core::credentials::Credentials;
use mavenpub_util::errors::PublishError;

use crate::checksum;
use crate::metadata::{self, MavenMetadata};
use crate::pom::PomDescriptor;
use crate::repository::{self, RepositoryTarget};
use crate::transport::Transport;

/// One file written to the repository (checksum sidecars not listed).
#[derive(Debug, Clone, Serialize)]
pub struct UploadedFile {
    /// Repository-relative path.
    pub path: String,
    pub url: String,
    pub bytes: u64,
    pub sha1: String,
}

/// What a successful publish wrote.
#[derive(Debug, Clone, Serialize)]
pub struct PublishReceipt {
    pub coordinates: Coordinates,
    pub repository: String,
    pub files: Vec<UploadedFile>,
    /// An existing version was overwritten.
    pub replaced: bool,
    pub metadata_updated: bool,
}

impl PublishReceipt {
    pub fn paths(&self) -> Vec<&str> {
        self.files.iter().map(|f| f.path.as_str()).collect()
    }

    /// Path of the primary binary artifact.
    pub fn primary_path(&self) -> Option<&str> {
        self.files.first().map(|f| f.path.as_str())
    }
}

/// Uploads publications through a [`Transport`].
#[derive(Debug, Clone)]
pub struct Publisher {
    transport: Transport,
}

impl Publisher {
    pub fn new(settings: &PublishSettings) -> miette::Result<Self> {
        Ok(Self::with_transport(Transport::new(settings)?))
    }

    pub fn with_transport(transport: Transport) -> Self {
        Self { transport }
    }

    /// Publish `artifacts` under `coords` with a minimal generated POM.
    pub async fn publish(
        &self,
        artifacts: &Artifacts,
        coords: &Coordinates,
        target: &RepositoryTarget,
    ) -> miette::Result<PublishReceipt> {
        self.publish_with(artifacts, &PomDescriptor::new(coords.clone()), target)
            .await
    }

    /// Publish `artifacts` with a caller-supplied POM descriptor.
    pub async fn publish_with(
        &self,
        artifacts: &Artifacts,
        pom: &PomDescriptor,
        target: &RepositoryTarget,
    ) -> miette::Result<PublishReceipt> {
        let coords = &pom.coordinates;

        let loaded = artifacts.load()?;
        target.validate_transport()?;
        let creds = target.credentials.resolve()?;
        let pom_xml = pom.to_xml()?;

        tracing::debug!("Publishing {coords} to {} ({})", target.name, target.url);

        let primary_url = target.artifact_url(coords, None, "jar");
        let replaced = self.transport.exists(&primary_url, &creds).await?;
        if replaced && !(target.allow_redeploy || coords.is_snapshot()) {
            return Err(PublishError::Conflict {
                message: format!(
                    "{coords} already exists in repository '{}'",
                    target.name
                ),
            }
            .into());
        }
        if replaced {
            tracing::info!("Replacing existing {coords} in '{}'", target.name);
        }

        let mut files = Vec::with_capacity(loaded.len() + 2);
        for artifact in &loaded {
            let path = coords.file_path(artifact.classifier, artifact.extension);
            files.push(self.upload(target, &creds, path, &artifact.data).await?);
        }
        let pom_path = coords.file_path(None, "pom");
        files.push(self.upload(target, &creds, pom_path, pom_xml.as_bytes()).await?);

        let metadata_updated = if target.update_metadata {
            let xml = self.merged_metadata(target, &creds, coords).await?;
            let path = repository::metadata_path(coords);
            files.push(self.upload(target, &creds, path, xml.as_bytes()).await?);
            true
        } else {
            false
        };

        Ok(PublishReceipt {
            coordinates: coords.clone(),
            repository: target.name.clone(),
            files,
            replaced,
            metadata_updated,
        })
    }

    /// Upload one file followed by its checksum sidecars.
    async fn upload(
        &self,
        target: &RepositoryTarget,
        creds: &Credentials,
        path: String,
        data: &[u8],
    ) -> miette::Result<UploadedFile> {
        let url = target.url_for(&path);
        let label = path.rsplit('/').next().unwrap_or(&path).to_string();
        self.transport.put(&url, creds, data, &label).await?;

        let mut sha1 = String::new();
        for sidecar in checksum::sidecars(&path, data) {
            if sidecar.algorithm == checksum::ChecksumAlgorithm::Sha1 {
                sha1 = sidecar.hex.clone();
            }
            let sidecar_url = target.url_for(&sidecar.path);
            let sidecar_label = format!("{label}.{}", sidecar.algorithm.extension());
            self.transport
                .put(&sidecar_url, creds, sidecar.hex.as_bytes(), &sidecar_label)
                .await?;
        }

        tracing::info!("Uploaded {path} ({} bytes)", data.len());
        Ok(UploadedFile {
            path,
            url,
            bytes: data.len() as u64,
            sha1,
        })
    }

    async fn merged_metadata(
        &self,
        target: &RepositoryTarget,
        creds: &Credentials,
        coords: &Coordinates,
    ) -> miette::Result<String> {
        let url = target.metadata_url(coords);
        let mut meta = match self.transport.get_text(&url, creds).await? {
            Some(existing) => metadata::parse_metadata(&existing)?,
            None => MavenMetadata::for_artifact(coords),
        };
        meta.record_version(coords, &metadata::timestamp_now());
        meta.to_xml()
    }
}

/// Remote paths a publish would write, checked against the same local
/// preconditions but without resolving credentials or touching the network.
pub fn plan(
    artifacts: &Artifacts,
    coords: &Coordinates,
    target: &RepositoryTarget,
) -> miette::Result<Vec<String>> {
    artifacts.validate()?;
    target.validate_transport()?;

    let mut paths: Vec<String> = std::iter::once(None)
        .chain(artifacts.sources.as_ref().map(|_| Some("sources")))
        .chain(artifacts.javadoc.as_ref().map(|_| Some("javadoc")))
        .map(|classifier| coords.file_path(classifier, "jar"))
        .collect();
    paths.push(coords.file_path(None, "pom"));
    if target.update_metadata {
        paths.push(repository::metadata_path(coords));
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mavenpub_core::credentials::CredentialSource;
    use tempfile::TempDir;

    #[test]
    fn plan_lists_jars_pom_and_metadata() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("lib.jar"), b"PK").unwrap();
        std::fs::write(tmp.path().join("src.jar"), b"PK").unwrap();
        let artifacts = Artifacts::new(tmp.path().join("lib.jar")).with_sources(tmp.path().join("src.jar"));
        let coords = Coordinates::new("de.example", "lib", "1.0").unwrap();
        let target = RepositoryTarget::new(
            "releases",
            "https://repo.example.com/releases",
            CredentialSource::Anonymous,
        );
        let paths = plan(&artifacts, &coords, &target).unwrap();
        assert_eq!(
            paths,
            vec![
                "de/example/lib/1.0/lib-1.0.jar",
                "de/example/lib/1.0/lib-1.0-sources.jar",
                "de/example/lib/1.0/lib-1.0.pom",
                "de/example/lib/maven-metadata.xml",
            ]
        );
    }

    #[test]
    fn plan_skips_metadata_when_disabled() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("lib.jar"), b"PK").unwrap();
        let coords = Coordinates::new("de.example", "lib", "1.0").unwrap();
        let target = RepositoryTarget::new(
            "releases",
            "https://repo.example.com/releases",
            CredentialSource::Anonymous,
        )
        .update_metadata(false);
        let paths = plan(&Artifacts::new(tmp.path().join("lib.jar")), &coords, &target).unwrap();
        assert_eq!(paths.len(), 2);
    }
}
