//! Publish targets: repository URL layout, transport policy, credential source.

use mavenpub_core::coordinates::Coordinates;
use mavenpub_core::credentials::CredentialSource;
use mavenpub_core::manifest::RepositoryEntry;
use mavenpub_util::errors::PublishError;

/// A Maven repository to publish into.
///
/// Holds where credentials come from, never the credentials themselves; they
/// are resolved by the publisher right before the first request.
#[derive(Debug, Clone)]
pub struct RepositoryTarget {
    pub name: String,
    pub url: String,
    pub credentials: CredentialSource,
    /// Permit plain `http://` URLs.
    pub allow_insecure: bool,
    /// Permit overwriting a version that already exists.
    pub allow_redeploy: bool,
    /// Maintain the artifact-level `maven-metadata.xml`.
    pub update_metadata: bool,
}

impl RepositoryTarget {
    pub fn new(name: &str, url: &str, credentials: CredentialSource) -> Self {
        Self {
            name: name.to_string(),
            url: url.trim_end_matches('/').to_string(),
            credentials,
            allow_insecure: false,
            allow_redeploy: false,
            update_metadata: true,
        }
    }

    /// Build a target from a `[repositories.<name>]` entry.
    pub fn from_entry(name: &str, entry: &RepositoryEntry, credentials: CredentialSource) -> Self {
        Self {
            allow_insecure: entry.allow_insecure,
            allow_redeploy: entry.allow_redeploy,
            update_metadata: entry.update_metadata,
            ..Self::new(name, &entry.url, credentials)
        }
    }

    pub fn allow_insecure(mut self, allow: bool) -> Self {
        self.allow_insecure = allow;
        self
    }

    pub fn allow_redeploy(mut self, allow: bool) -> Self {
        self.allow_redeploy = allow;
        self
    }

    pub fn update_metadata(mut self, update: bool) -> Self {
        self.update_metadata = update;
        self
    }

    /// Check the URL parses, carries no `user:pass@`, and uses a secure
    /// scheme (or insecure is allowed).
    pub fn validate_transport(&self) -> miette::Result<()> {
        let parsed = reqwest::Url::parse(&self.url).map_err(|e| PublishError::Validation {
            message: format!("Invalid URL for repository '{}': {e}", self.name),
        })?;
        if !parsed.username().is_empty() || parsed.password().is_some() {
            return Err(PublishError::Validation {
                message: format!(
                    "Repository '{}' embeds credentials in its URL; configure them in \
                     .mavenpub.env or ~/.mavenpub/config.toml instead",
                    self.name
                ),
            }
            .into());
        }
        match parsed.scheme() {
            "https" => Ok(()),
            "http" if self.allow_insecure => {
                tracing::warn!(
                    "Repository '{}' uses insecure transport {}",
                    self.name,
                    self.url
                );
                Ok(())
            }
            "http" => Err(PublishError::Validation {
                message: format!(
                    "Repository '{}' uses insecure http:// ({}); set allow-insecure = true to permit it",
                    self.name, self.url
                ),
            }
            .into()),
            other => Err(PublishError::Validation {
                message: format!(
                    "Unsupported URL scheme '{other}' for repository '{}'",
                    self.name
                ),
            }
            .into()),
        }
    }

    /// Full URL of a repository-relative path.
    pub fn url_for(&self, relative: &str) -> String {
        format!("{}/{}", self.url, relative.trim_start_matches('/'))
    }

    /// URL of an artifact file for the given coordinates.
    ///
    /// `de.example:lib:1.0` with classifier `sources` becomes
    /// `<url>/de/example/lib/1.0/lib-1.0-sources.jar`.
    pub fn artifact_url(
        &self,
        coords: &Coordinates,
        classifier: Option<&str>,
        extension: &str,
    ) -> String {
        self.url_for(&coords.file_path(classifier, extension))
    }

    /// URL of the artifact-level `maven-metadata.xml` (version listing).
    pub fn metadata_url(&self, coords: &Coordinates) -> String {
        self.url_for(&metadata_path(coords))
    }
}

/// Repository-relative path of the artifact-level `maven-metadata.xml`.
pub fn metadata_path(coords: &Coordinates) -> String {
    format!("{}/maven-metadata.xml", coords.artifact_dir())
}
