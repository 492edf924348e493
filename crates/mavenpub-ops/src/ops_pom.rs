//! Operation: render the POM a publish would upload.

use std::path::Path;

use mavenpub_maven::pom::PomDescriptor;
use mavenpub_util::errors::PublishError;

use crate::Project;

/// The generated `pom.xml` for the project.
pub fn render(project: &Project) -> miette::Result<String> {
    PomDescriptor::from_manifest(&project.manifest)?.to_xml()
}

/// Write the generated POM to `dest`.
pub fn write_to(project: &Project, dest: &Path) -> miette::Result<()> {
    let xml = render(project)?;
    std::fs::write(dest, xml).map_err(PublishError::Io)?;
    mavenpub_util::progress::status("Generated", &dest.display().to_string());
    Ok(())
}
