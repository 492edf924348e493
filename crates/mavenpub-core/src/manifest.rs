use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use mavenpub_util::errors::PublishError;

use crate::coordinates::Coordinates;
use crate::toolchain::{JavaLanguageVersion, JvmVendor, ToolchainRequirement};

/// The parsed representation of a `Mavenpub.toml` file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub package: PackageMetadata,

    #[serde(default)]
    pub toolchain: Option<ToolchainConfig>,

    #[serde(default)]
    pub compile: CompileConfig,

    #[serde(default)]
    pub artifacts: ArtifactsConfig,

    #[serde(default)]
    pub repositories: BTreeMap<String, RepositoryEntry>,
}

/// Publication identity and descriptive metadata from the `[package]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageMetadata {
    pub group: String,
    /// Artifact id.
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Java toolchain pin from `[toolchain]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolchainConfig {
    pub java: u32,
    #[serde(default)]
    pub vendor: Option<String>,
}

/// Compiler settings from `[compile]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompileConfig {
    #[serde(default = "default_encoding")]
    pub encoding: String,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            encoding: default_encoding(),
        }
    }
}

fn default_encoding() -> String {
    "UTF-8".to_string()
}

/// Where the build tool leaves its archives, from `[artifacts]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactsConfig {
    #[serde(default = "default_artifacts_dir")]
    pub dir: String,
    #[serde(default)]
    pub primary: Option<String>,
    #[serde(default = "default_true")]
    pub sources: bool,
    #[serde(default = "default_true")]
    pub javadoc: bool,
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            dir: default_artifacts_dir(),
            primary: None,
            sources: true,
            javadoc: true,
        }
    }
}

fn default_artifacts_dir() -> String {
    "build/libs".to_string()
}

fn default_true() -> bool {
    true
}

/// A target Maven repository from `[repositories.<name>]`.
///
/// Credentials are not part of this table: unknown keys such as `username`
/// or `password` are rejected at parse time, as is a `user:pass@` url.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RepositoryEntry {
    pub url: String,
    #[serde(default, rename = "allow-insecure")]
    pub allow_insecure: bool,
    #[serde(default, rename = "allow-redeploy")]
    pub allow_redeploy: bool,
    #[serde(default = "default_true", rename = "update-metadata")]
    pub update_metadata: bool,
}

/// True when the authority part of `url` carries `user[:password]@`.
fn url_has_userinfo(url: &str) -> bool {
    let Some((_, rest)) = url.split_once("://") else {
        return false;
    };
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    authority.contains('@')
}

impl Manifest {
    /// Load and parse a `Mavenpub.toml` file from the given path.
    ///
    /// Before parsing, `${env:VAR}` references in the manifest content are
    /// resolved using `.mavenpub.env` (if present alongside `Mavenpub.toml`)
    /// and process environment variables.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PublishError::Manifest {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;

        let dir = path.parent().unwrap_or(Path::new("."));
        let env_vars = crate::properties::load_env_file(&dir.join(crate::ENV_FILE))?;
        let resolved = crate::properties::interpolate(&content, &env_vars);

        Self::from_str(&resolved)
    }

    /// Parse a `Mavenpub.toml` from a string (no interpolation).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> miette::Result<Self> {
        let manifest: Self = toml::from_str(content).map_err(|e| PublishError::Manifest {
            message: format!("Failed to parse Mavenpub.toml: {e}"),
        })?;
        for (name, entry) in &manifest.repositories {
            if url_has_userinfo(&entry.url) {
                return Err(PublishError::Manifest {
                    message: format!(
                        "Repository '{name}' embeds credentials in its url; \
                         move them to {} or ~/.mavenpub/config.toml",
                        crate::ENV_FILE
                    ),
                }
                .into());
            }
        }
        Ok(manifest)
    }

    /// Validated coordinates of the `[package]` section.
    pub fn coordinates(&self) -> miette::Result<Coordinates> {
        Coordinates::new(
            &self.package.group,
            &self.package.name,
            &self.package.version,
        )
    }

    /// The toolchain requirement, if `[toolchain]` is present.
    pub fn toolchain_requirement(&self) -> miette::Result<Option<ToolchainRequirement>> {
        let Some(tc) = &self.toolchain else {
            return Ok(None);
        };
        let vendor = match &tc.vendor {
            Some(v) => Some(v.parse::<JvmVendor>().map_err(|e| PublishError::Manifest {
                message: e,
            })?),
            None => None,
        };
        Ok(Some(ToolchainRequirement {
            language_version: JavaLanguageVersion::of(tc.java),
            vendor,
        }))
    }

    /// Pick the repository to publish to.
    ///
    /// An explicit `name` must exist. Without one, a single configured
    /// repository is used; zero or several is a validation error.
    pub fn select_repository(
        &self,
        name: Option<&str>,
    ) -> miette::Result<(&str, &RepositoryEntry)> {
        if let Some(name) = name {
            return self
                .repositories
                .get_key_value(name)
                .map(|(k, v)| (k.as_str(), v))
                .ok_or_else(|| {
                    PublishError::Validation {
                        message: format!("No repository named '{name}' in Mavenpub.toml"),
                    }
                    .into()
                });
        }

        let mut iter = self.repositories.iter();
        match (iter.next(), iter.next()) {
            (Some((k, v)), None) => Ok((k.as_str(), v)),
            (None, _) => Err(PublishError::Validation {
                message: "No [repositories] configured in Mavenpub.toml".to_string(),
            }
            .into()),
            (Some(_), Some(_)) => {
                let names: Vec<&str> = self.repositories.keys().map(String::as_str).collect();
                Err(PublishError::Validation {
                    message: format!(
                        "Several repositories configured ({}); pick one with --repository",
                        names.join(", ")
                    ),
                }
                .into())
            }
        }
    }
}
