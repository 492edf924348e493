//! The set of archives that make up one publication.

use std::path::{Path, PathBuf};

use mavenpub_util::errors::PublishError;

use crate::coordinates::Coordinates;
use crate::manifest::ArtifactsConfig;

/// Archives produced by the build: one required binary jar plus the
/// conventional sources and javadoc jars.
#[derive(Debug, Clone)]
pub struct Artifacts {
    pub primary: PathBuf,
    pub sources: Option<PathBuf>,
    pub javadoc: Option<PathBuf>,
}

/// An artifact read into memory and ready to upload.
#[derive(Debug, Clone)]
pub struct LoadedArtifact {
    pub classifier: Option<&'static str>,
    pub extension: &'static str,
    pub source: PathBuf,
    pub data: Vec<u8>,
}

impl Artifacts {
    pub fn new(primary: impl Into<PathBuf>) -> Self {
        Self {
            primary: primary.into(),
            sources: None,
            javadoc: None,
        }
    }

    pub fn with_sources(mut self, path: impl Into<PathBuf>) -> Self {
        self.sources = Some(path.into());
        self
    }

    pub fn with_javadoc(mut self, path: impl Into<PathBuf>) -> Self {
        self.javadoc = Some(path.into());
        self
    }

    /// Resolve artifact paths from `[artifacts]` the way Gradle lays out
    /// `build/libs`: `<name>-<version>.jar`, `-sources.jar`, `-javadoc.jar`.
    pub fn from_config(config: &ArtifactsConfig, root: &Path, coords: &Coordinates) -> Self {
        let dir = root.join(&config.dir);
        let primary = match &config.primary {
            Some(p) => root.join(p),
            None => dir.join(coords.file_name(None, "jar")),
        };
        Self {
            primary,
            sources: config
                .sources
                .then(|| dir.join(coords.file_name(Some("sources"), "jar"))),
            javadoc: config
                .javadoc
                .then(|| dir.join(coords.file_name(Some("javadoc"), "jar"))),
        }
    }

    /// Check every configured archive is present and non-empty without reading it.
    pub fn validate(&self) -> miette::Result<()> {
        for (classifier, path) in self.entries() {
            let label = classifier.unwrap_or("primary");
            match mavenpub_util::fs::file_len(path) {
                None => {
                    return Err(PublishError::Validation {
                        message: format!("{label} artifact not found: {}", path.display()),
                    }
                    .into())
                }
                Some(0) => {
                    return Err(PublishError::Validation {
                        message: format!("{label} artifact is empty: {}", path.display()),
                    }
                    .into())
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Validate and read all archives, primary first.
    pub fn load(&self) -> miette::Result<Vec<LoadedArtifact>> {
        self.validate()?;
        self.entries()
            .map(|(classifier, path)| -> miette::Result<LoadedArtifact> {
                let data = std::fs::read(path).map_err(PublishError::Io)?;
                Ok(LoadedArtifact {
                    classifier,
                    extension: "jar",
                    source: path.to_path_buf(),
                    data,
                })
            })
            .collect()
    }

    fn entries(&self) -> impl Iterator<Item = (Option<&'static str>, &Path)> {
        std::iter::once((None, self.primary.as_path()))
            .chain(self.sources.as_deref().map(|p| (Some("sources"), p)))
            .chain(self.javadoc.as_deref().map(|p| (Some("javadoc"), p)))
    }
}
