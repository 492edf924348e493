//! Artifact-level `maven-metadata.xml`: read what the repository has, add the
//! version being published, write it back.

use quick_xml::events::Event;
use quick_xml::Reader;

use mavenpub_core::coordinates::Coordinates;
use mavenpub_util::errors::PublishError;

use crate::xml::XmlOut;

/// Artifact-level Maven metadata listing available versions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MavenMetadata {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub latest: Option<String>,
    pub release: Option<String>,
    pub versions: Vec<String>,
    pub last_updated: Option<String>,
}

impl MavenMetadata {
    /// Fresh metadata for an artifact that has never been published.
    pub fn for_artifact(coords: &Coordinates) -> Self {
        Self {
            group_id: Some(coords.group().to_string()),
            artifact_id: Some(coords.artifact().to_string()),
            ..Self::default()
        }
    }

    /// Record a newly deployed version.
    ///
    /// The version becomes `latest`; non-SNAPSHOT versions also become
    /// `release`. A version already listed keeps its position.
    pub fn record_version(&mut self, coords: &Coordinates, last_updated: &str) {
        if self.group_id.is_none() {
            self.group_id = Some(coords.group().to_string());
        }
        if self.artifact_id.is_none() {
            self.artifact_id = Some(coords.artifact().to_string());
        }
        let version = coords.version().to_string();
        if !self.versions.contains(&version) {
            self.versions.push(version.clone());
        }
        if !coords.is_snapshot() {
            self.release = Some(version.clone());
        }
        self.latest = Some(version);
        self.last_updated = Some(last_updated.to_string());
    }

    /// Render as an indented XML document.
    pub fn to_xml(&self) -> miette::Result<String> {
        let mut out = XmlOut::new("maven-metadata.xml")?;
        out.open("metadata")?;
        if let Some(g) = &self.group_id {
            out.leaf("groupId", g)?;
        }
        if let Some(a) = &self.artifact_id {
            out.leaf("artifactId", a)?;
        }
        out.open("versioning")?;
        if let Some(latest) = &self.latest {
            out.leaf("latest", latest)?;
        }
        if let Some(release) = &self.release {
            out.leaf("release", release)?;
        }
        out.open("versions")?;
        for v in &self.versions {
            out.leaf("version", v)?;
        }
        out.close("versions")?;
        if let Some(ts) = &self.last_updated {
            out.leaf("lastUpdated", ts)?;
        }
        out.close("versioning")?;
        out.close("metadata")?;
        out.finish()
    }
}

/// `lastUpdated` stamp for the current instant (UTC, `yyyyMMddHHmmss`).
pub fn timestamp_now() -> String {
    chrono::Utc::now().format("%Y%m%d%H%M%S").to_string()
}

/// Parse an artifact-level `maven-metadata.xml` that lists available versions.
pub fn parse_metadata(xml: &str) -> miette::Result<MavenMetadata> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut meta = MavenMetadata::default();
    let mut path: Vec<String> = Vec::new();
    let mut text_buf = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                path.push(String::from_utf8_lossy(e.name().as_ref()).to_string());
                text_buf.clear();
            }
            Ok(Event::Text(ref e)) => {
                text_buf = e
                    .unescape()
                    .map_err(|err| PublishError::Generic {
                        message: format!("Failed to parse maven-metadata.xml: {err}"),
                    })?
                    .to_string();
            }
            Ok(Event::End(_)) => {
                match path.join(">").as_str() {
                    "metadata>groupId" => meta.group_id = Some(text_buf.clone()),
                    "metadata>artifactId" => meta.artifact_id = Some(text_buf.clone()),
                    "metadata>versioning>latest" => meta.latest = Some(text_buf.clone()),
                    "metadata>versioning>release" => meta.release = Some(text_buf.clone()),
                    "metadata>versioning>versions>version" => {
                        meta.versions.push(text_buf.clone());
                    }
                    "metadata>versioning>lastUpdated" => {
                        meta.last_updated = Some(text_buf.clone());
                    }
                    _ => {}
                }
                path.pop();
                text_buf.clear();
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(PublishError::Generic {
                    message: format!("Failed to parse maven-metadata.xml: {e}"),
                }
                .into());
            }
            _ => {}
        }
    }

    Ok(meta)
}
