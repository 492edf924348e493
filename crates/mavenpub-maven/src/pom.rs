//! POM generation: the publication descriptor uploaded next to the jars.

use mavenpub_core::coordinates::Coordinates;
use mavenpub_core::manifest::Manifest;
use mavenpub_core::toolchain::JavaLanguageVersion;

use crate::xml::XmlOut;

const POM_NAMESPACE: &str = "http://maven.apache.org/POM/4.0.0";
const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
const POM_SCHEMA_LOCATION: &str =
    "http://maven.apache.org/POM/4.0.0 https://maven.apache.org/xsd/maven-4.0.0.xsd";

/// Everything that goes into a generated `pom.xml`.
#[derive(Debug, Clone)]
pub struct PomDescriptor {
    pub coordinates: Coordinates,
    pub packaging: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub licenses: Vec<String>,
    /// `project.build.sourceEncoding`.
    pub encoding: Option<String>,
    /// Emitted as `maven.compiler.source` / `maven.compiler.target`.
    pub java: Option<JavaLanguageVersion>,
}

impl PomDescriptor {
    /// A bare `jar` POM carrying only the coordinates.
    pub fn new(coordinates: Coordinates) -> Self {
        Self {
            coordinates,
            packaging: "jar".to_string(),
            name: None,
            description: None,
            url: None,
            licenses: Vec::new(),
            encoding: None,
            java: None,
        }
    }

    /// Build the descriptor for a project file.
    pub fn from_manifest(manifest: &Manifest) -> miette::Result<Self> {
        let coordinates = manifest.coordinates()?;
        let java = manifest
            .toolchain_requirement()?
            .map(|req| req.language_version);
        Ok(Self {
            name: Some(manifest.package.name.clone()),
            description: manifest.package.description.clone(),
            url: manifest.package.url.clone(),
            licenses: manifest.package.license.iter().cloned().collect(),
            encoding: Some(manifest.compile.encoding.clone()),
            java,
            ..Self::new(coordinates)
        })
    }

    /// Render the POM as an indented XML document.
    pub fn to_xml(&self) -> miette::Result<String> {
        let mut out = XmlOut::new("POM")?;
        out.open_with(
            "project",
            &[
                ("xmlns", POM_NAMESPACE),
                ("xmlns:xsi", XSI_NAMESPACE),
                ("xsi:schemaLocation", POM_SCHEMA_LOCATION),
            ],
        )?;
        out.leaf("modelVersion", "4.0.0")?;
        out.leaf("groupId", self.coordinates.group())?;
        out.leaf("artifactId", self.coordinates.artifact())?;
        out.leaf("version", self.coordinates.version())?;
        out.leaf("packaging", &self.packaging)?;
        if let Some(name) = &self.name {
            out.leaf("name", name)?;
        }
        if let Some(description) = &self.description {
            out.leaf("description", description)?;
        }
        if let Some(url) = &self.url {
            out.leaf("url", url)?;
        }

        if !self.licenses.is_empty() {
            out.open("licenses")?;
            for license in &self.licenses {
                out.open("license")?;
                out.leaf("name", license)?;
                out.close("license")?;
            }
            out.close("licenses")?;
        }

        if self.encoding.is_some() || self.java.is_some() {
            out.open("properties")?;
            if let Some(encoding) = &self.encoding {
                out.leaf("project.build.sourceEncoding", encoding)?;
            }
            if let Some(java) = &self.java {
                let release = java.compiler_release();
                out.leaf("maven.compiler.source", &release)?;
                out.leaf("maven.compiler.target", &release)?;
            }
            out.close("properties")?;
        }

        out.close("project")?;
        out.finish()
    }
}
