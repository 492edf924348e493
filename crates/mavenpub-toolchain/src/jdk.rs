//! JDK discovery and requirement matching.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use mavenpub_core::toolchain::{JavaLanguageVersion, ToolchainRequirement};
use mavenpub_util::errors::PublishError;

/// Information about a discovered JDK.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JdkInfo {
    pub home: PathBuf,
    /// Full version string, e.g. `1.8.0_392` or `17.0.2`.
    pub version: String,
    /// `IMPLEMENTOR` from the `release` file, when present.
    pub implementor: Option<String>,
}

impl JdkInfo {
    pub fn language_version(&self) -> Option<JavaLanguageVersion> {
        JavaLanguageVersion::from_full_version(&self.version)
    }

    pub fn satisfies(&self, requirement: &ToolchainRequirement) -> bool {
        requirement.is_satisfied_by(&self.version, self.implementor.as_deref())
    }
}

impl std::fmt::Display for JdkInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.implementor {
            Some(imp) => write!(f, "{} ({imp}) at {}", self.version, self.home.display()),
            None => write!(f, "{} at {}", self.version, self.home.display()),
        }
    }
}

/// Find a JDK that satisfies `requirement`.
///
/// Search order: explicit config path -> `JAVA_HOME` -> common OS paths.
pub fn resolve_toolchain(
    requirement: &ToolchainRequirement,
    config_jdk: Option<&str>,
) -> miette::Result<JdkInfo> {
    let java_home = std::env::var("JAVA_HOME").ok();
    let candidates = candidate_homes(config_jdk, java_home.as_deref(), common_jdk_paths());
    find_matching(requirement, &candidates)
}

/// First JDK among `candidates` that satisfies `requirement`.
///
/// When none does, the error lists every JDK that was looked at.
pub fn find_matching(
    requirement: &ToolchainRequirement,
    candidates: &[PathBuf],
) -> miette::Result<JdkInfo> {
    let mut seen = Vec::new();
    for home in candidates {
        let Some(info) = probe_jdk(home) else {
            continue;
        };
        if info.satisfies(requirement) {
            tracing::debug!("Using JDK {info} for {requirement}");
            return Ok(info);
        }
        tracing::debug!("JDK {info} does not satisfy {requirement}");
        seen.push(info.to_string());
    }

    let message = if seen.is_empty() {
        format!("No JDK found for {requirement}; set JAVA_HOME or [toolchain] jdk in ~/.mavenpub/config.toml")
    } else {
        format!(
            "No installed JDK satisfies {requirement}. Found: {}",
            seen.join("; ")
        )
    };
    Err(PublishError::Toolchain { message }.into())
}

/// Candidate JDK homes in search order, without duplicates.
pub fn candidate_homes(
    config_jdk: Option<&str>,
    java_home: Option<&str>,
    common: Vec<PathBuf>,
) -> Vec<PathBuf> {
    let mut homes: Vec<PathBuf> = Vec::new();
    let explicit = config_jdk.into_iter().chain(java_home).map(PathBuf::from);
    for home in explicit.chain(common) {
        if !homes.contains(&home) {
            homes.push(home);
        }
    }
    homes
}

/// Inspect a JDK home: the `release` file first, then `bin/java -version`.
pub fn probe_jdk(home: &Path) -> Option<JdkInfo> {
    if let Ok(content) = fs::read_to_string(home.join("release")) {
        let release = parse_release(&content);
        if let Some(version) = release.get("JAVA_VERSION") {
            return Some(JdkInfo {
                home: home.to_path_buf(),
                version: version.clone(),
                implementor: release.get("IMPLEMENTOR").cloned(),
            });
        }
    }

    let java = if cfg!(windows) {
        home.join("bin").join("java.exe")
    } else {
        home.join("bin").join("java")
    };
    if !java.exists() {
        return None;
    }
    let output = Command::new(&java).arg("-version").output().ok()?;
    let stderr = String::from_utf8_lossy(&output.stderr);
    Some(JdkInfo {
        home: home.to_path_buf(),
        version: parse_java_version(&stderr)?,
        implementor: None,
    })
}

/// Parse the `KEY="value"` lines of a JDK `release` file.
pub fn parse_release(content: &str) -> BTreeMap<String, String> {
    content
        .lines()
        .filter_map(|line| {
            let (key, value) = line.split_once('=')?;
            let key = key.trim();
            if key.is_empty() || key.starts_with('#') {
                return None;
            }
            Some((key.to_string(), value.trim().trim_matches('"').to_string()))
        })
        .collect()
}

/// Full version from `java -version` output.
///
/// `openjdk version "1.8.0_392"` gives `1.8.0_392`.
pub fn parse_java_version(output: &str) -> Option<String> {
    output.lines().find_map(|line| {
        let start = line.find('"')?;
        let rest = &line[start + 1..];
        let end = rest.find('"')?;
        Some(rest[..end].to_string())
    })
}

fn common_jdk_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    #[cfg(target_os = "macos")]
    {
        let lib_jvm = PathBuf::from("/Library/Java/JavaVirtualMachines");
        if let Ok(entries) = fs::read_dir(&lib_jvm) {
            for entry in entries.filter_map(|e| e.ok()) {
                let contents = entry.path().join("Contents/Home");
                if contents.is_dir() {
                    paths.push(contents);
                }
            }
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(entries) = fs::read_dir("/usr/lib/jvm") {
            let mut found: Vec<PathBuf> = entries.filter_map(|e| e.ok()).map(|e| e.path()).collect();
            found.sort();
            paths.extend(found);
        }
    }

    #[cfg(target_os = "windows")]
    {
        for base in [
            "C:\\Program Files\\Eclipse Adoptium",
            "C:\\Program Files\\Java",
            "C:\\Program Files\\Amazon Corretto",
            "C:\\Program Files\\Zulu",
        ] {
            if let Ok(entries) = fs::read_dir(base) {
                for entry in entries.filter_map(|e| e.ok()) {
                    paths.push(entry.path());
                }
            }
        }
    }

    if let Some(home) = std::env::var_os("HOME") {
        let sdkman = Path::new(&home).join(".sdkman/candidates/java");
        if let Ok(entries) = fs::read_dir(sdkman) {
            for entry in entries.filter_map(|e| e.ok()) {
                if entry.file_name() != "current" {
                    paths.push(entry.path());
                }
            }
        }
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_file_values_are_unquoted() {
        let release = parse_release(
            "IMPLEMENTOR=\"Eclipse Adoptium\"\nJAVA_VERSION=\"1.8.0_392\"\n# comment\n\n",
        );
        assert_eq!(release["IMPLEMENTOR"], "Eclipse Adoptium");
        assert_eq!(release["JAVA_VERSION"], "1.8.0_392");
        assert_eq!(release.len(), 2);
    }

    #[test]
    fn java_version_output() {
        let out = "openjdk version \"17.0.2\" 2022-01-18\nOpenJDK Runtime Environment";
        assert_eq!(parse_java_version(out).as_deref(), Some("17.0.2"));
        assert_eq!(parse_java_version("no version here"), None);
    }

    #[test]
    fn candidates_keep_order_and_drop_duplicates() {
        let homes = candidate_homes(
            Some("/opt/jdk8"),
            Some("/opt/jdk8"),
            vec![PathBuf::from("/usr/lib/jvm/a"), PathBuf::from("/opt/jdk8")],
        );
        assert_eq!(
            homes,
            vec![PathBuf::from("/opt/jdk8"), PathBuf::from("/usr/lib/jvm/a")]
        );
    }
}
