//! Maven coordinates: the `group:artifact:version` triple of a publication.

use std::fmt;

use serde::Serialize;

use mavenpub_util::errors::PublishError;

/// Validated Maven coordinates.
///
/// All three parts are non-empty and contain no whitespace, path separators
/// or `:`; the only way to obtain a value is through [`Coordinates::new`] or
/// [`Coordinates::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Coordinates {
    group: String,
    artifact: String,
    version: String,
}

impl Coordinates {
    pub fn new(group: &str, artifact: &str, version: &str) -> miette::Result<Self> {
        check_part("group", group)?;
        check_part("artifact", artifact)?;
        check_part("version", version)?;
        if group.starts_with('.') || group.ends_with('.') || group.contains("..") {
            return Err(PublishError::Validation {
                message: format!("Malformed group '{group}': empty segment"),
            }
            .into());
        }
        Ok(Self {
            group: group.to_string(),
            artifact: artifact.to_string(),
            version: version.to_string(),
        })
    }

    /// Parse `group:artifact:version`.
    pub fn parse(coord: &str) -> miette::Result<Self> {
        let parts: Vec<&str> = coord.split(':').collect();
        match parts.as_slice() {
            [g, a, v] => Self::new(g, a, v),
            _ => Err(PublishError::Validation {
                message: format!("Invalid coordinate '{coord}': expected group:artifact:version"),
            }
            .into()),
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn artifact(&self) -> &str {
        &self.artifact
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn is_snapshot(&self) -> bool {
        self.version.ends_with("-SNAPSHOT")
    }

    /// Repository-relative directory holding this version.
    ///
    /// `de.example:lib:1.0` becomes `de/example/lib/1.0`.
    pub fn version_dir(&self) -> String {
        format!("{}/{}", self.artifact_dir(), self.version)
    }

    /// Repository-relative directory holding all versions (and `maven-metadata.xml`).
    pub fn artifact_dir(&self) -> String {
        format!("{}/{}", self.group.replace('.', "/"), self.artifact)
    }

    /// File name of an artifact of this publication, e.g. `lib-1.0-sources.jar`.
    pub fn file_name(&self, classifier: Option<&str>, extension: &str) -> String {
        match classifier {
            Some(c) => format!("{}-{}-{c}.{extension}", self.artifact, self.version),
            None => format!("{}-{}.{extension}", self.artifact, self.version),
        }
    }

    /// Repository-relative path to an artifact of this publication.
    pub fn file_path(&self, classifier: Option<&str>, extension: &str) -> String {
        format!(
            "{}/{}",
            self.version_dir(),
            self.file_name(classifier, extension)
        )
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
    }
}

fn check_part(what: &str, value: &str) -> miette::Result<()> {
    if value.trim().is_empty() {
        return Err(PublishError::Validation {
            message: format!("Coordinate {what} must not be empty"),
        }
        .into());
    }
    if let Some(c) = value
        .chars()
        .find(|c| c.is_whitespace() || matches!(c, '/' | '\\' | ':'))
    {
        return Err(PublishError::Validation {
            message: format!("Coordinate {what} '{value}' contains illegal character {c:?}"),
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_dir_replaces_dots_in_group_only() {
        let c = Coordinates::new("de.example", "lib", "1.0").unwrap();
        assert_eq!(c.version_dir(), "de/example/lib/1.0");
        assert_eq!(c.file_path(None, "jar"), "de/example/lib/1.0/lib-1.0.jar");
    }

    #[test]
    fn file_name_with_classifier() {
        let c = Coordinates::new("de.example", "lib", "1.0").unwrap();
        assert_eq!(c.file_name(Some("javadoc"), "jar"), "lib-1.0-javadoc.jar");
    }

    #[test]
    fn empty_part_is_validation_error() {
        let err = Coordinates::new("de.example", "", "1.0").unwrap_err();
        let err = err.downcast_ref::<PublishError>().unwrap();
        assert!(matches!(err, PublishError::Validation { .. }));
    }

    #[test]
    fn illegal_characters_rejected() {
        assert!(Coordinates::new("de.example", "my lib", "1.0").is_err());
        assert!(Coordinates::new("de/example", "lib", "1.0").is_err());
        assert!(Coordinates::new("de..example", "lib", "1.0").is_err());
    }

    #[test]
    fn parse_and_display() {
        let c = Coordinates::parse("de.dasbabypixel:graph:1.0").unwrap();
        assert_eq!(c.group(), "de.dasbabypixel");
        assert_eq!(c.to_string(), "de.dasbabypixel:graph:1.0");
        assert!(Coordinates::parse("de.dasbabypixel:graph").is_err());
    }

    #[test]
    fn snapshot_detection() {
        assert!(Coordinates::parse("a:b:1.0-SNAPSHOT").unwrap().is_snapshot());
        assert!(!Coordinates::parse("a:b:1.0").unwrap().is_snapshot());
    }
}
