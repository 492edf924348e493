//! Java toolchain requirement: language version and vendor distribution.

use std::fmt;
use std::str::FromStr;

/// A Java language version as used by toolchain pins (`8`, `11`, `17`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JavaLanguageVersion(u32);

impl JavaLanguageVersion {
    pub fn of(major: u32) -> Self {
        Self(major)
    }

    pub fn major(&self) -> u32 {
        self.0
    }

    /// The value javac and Maven expect for `-source`/`-target`.
    ///
    /// Releases before 9 use the legacy `1.x` form.
    pub fn compiler_release(&self) -> String {
        if self.0 <= 8 {
            format!("1.{}", self.0)
        } else {
            self.0.to_string()
        }
    }

    /// Parse the major version out of a full JDK version string.
    ///
    /// `1.8.0_392` is 8, `17.0.2` is 17, `21` is 21.
    pub fn from_full_version(version: &str) -> Option<Self> {
        let version = version.trim().trim_matches('"');
        let mut parts = version.split(['.', '_', '-', '+']);
        let first: u32 = parts.next()?.parse().ok()?;
        if first == 1 {
            parts.next()?.parse().ok().map(Self)
        } else {
            Some(Self(first))
        }
    }
}

impl fmt::Display for JavaLanguageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// JVM vendor distributions a toolchain pin may name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JvmVendor {
    Adoptium,
    Amazon,
    Azul,
    Oracle,
    Microsoft,
    Bellsoft,
    Other(String),
}

impl JvmVendor {
    /// Whether the `IMPLEMENTOR` string from a JDK `release` file belongs to this vendor.
    pub fn matches(&self, implementor: &str) -> bool {
        let implementor = implementor.to_ascii_lowercase();
        let needles: &[&str] = match self {
            Self::Adoptium => &["adoptium", "temurin"],
            Self::Amazon => &["amazon", "corretto"],
            Self::Azul => &["azul", "zulu"],
            Self::Oracle => &["oracle"],
            Self::Microsoft => &["microsoft"],
            Self::Bellsoft => &["bellsoft", "liberica"],
            Self::Other(name) => return implementor.contains(&name.to_ascii_lowercase()),
        };
        needles.iter().any(|n| implementor.contains(n))
    }
}

impl FromStr for JvmVendor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let v = s.trim();
        if v.is_empty() {
            return Err("Toolchain vendor must not be empty".to_string());
        }
        Ok(match v.to_ascii_lowercase().as_str() {
            "adoptium" | "temurin" | "eclipse" => Self::Adoptium,
            "amazon" | "corretto" => Self::Amazon,
            "azul" | "zulu" => Self::Azul,
            "oracle" => Self::Oracle,
            "microsoft" => Self::Microsoft,
            "bellsoft" | "liberica" => Self::Bellsoft,
            _ => Self::Other(v.to_string()),
        })
    }
}

impl fmt::Display for JvmVendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Adoptium => write!(f, "Eclipse Adoptium"),
            Self::Amazon => write!(f, "Amazon Corretto"),
            Self::Azul => write!(f, "Azul Zulu"),
            Self::Oracle => write!(f, "Oracle"),
            Self::Microsoft => write!(f, "Microsoft"),
            Self::Bellsoft => write!(f, "BellSoft Liberica"),
            Self::Other(name) => write!(f, "{name}"),
        }
    }
}

/// The JDK a project must be built with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolchainRequirement {
    pub language_version: JavaLanguageVersion,
    pub vendor: Option<JvmVendor>,
}

impl ToolchainRequirement {
    /// Whether a JDK with the given full version and implementor satisfies this requirement.
    pub fn is_satisfied_by(&self, version: &str, implementor: Option<&str>) -> bool {
        let version_ok =
            JavaLanguageVersion::from_full_version(version) == Some(self.language_version);
        let vendor_ok = match (&self.vendor, implementor) {
            (None, _) => true,
            (Some(vendor), Some(imp)) => vendor.matches(imp),
            (Some(_), None) => false,
        };
        version_ok && vendor_ok
    }
}

impl fmt::Display for ToolchainRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.vendor {
            Some(v) => write!(f, "Java {} ({v})", self.language_version),
            None => write!(f, "Java {}", self.language_version),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_version_parsing() {
        assert_eq!(
            JavaLanguageVersion::from_full_version("1.8.0_392"),
            Some(JavaLanguageVersion::of(8))
        );
        assert_eq!(
            JavaLanguageVersion::from_full_version("\"17.0.2\""),
            Some(JavaLanguageVersion::of(17))
        );
        assert_eq!(
            JavaLanguageVersion::from_full_version("21"),
            Some(JavaLanguageVersion::of(21))
        );
        assert_eq!(JavaLanguageVersion::from_full_version("abc"), None);
    }

    #[test]
    fn compiler_release_uses_legacy_form_for_8() {
        assert_eq!(JavaLanguageVersion::of(8).compiler_release(), "1.8");
        assert_eq!(JavaLanguageVersion::of(11).compiler_release(), "11");
    }

    #[test]
    fn vendor_aliases() {
        assert_eq!("temurin".parse::<JvmVendor>().unwrap(), JvmVendor::Adoptium);
        assert_eq!("ADOPTIUM".parse::<JvmVendor>().unwrap(), JvmVendor::Adoptium);
        assert_eq!(
            "graalvm".parse::<JvmVendor>().unwrap(),
            JvmVendor::Other("graalvm".to_string())
        );
        assert!("".parse::<JvmVendor>().is_err());
    }

    #[test]
    fn requirement_matching() {
        let req = ToolchainRequirement {
            language_version: JavaLanguageVersion::of(8),
            vendor: Some(JvmVendor::Adoptium),
        };
        assert!(req.is_satisfied_by("1.8.0_392", Some("Eclipse Adoptium")));
        assert!(!req.is_satisfied_by("1.8.0_392", Some("Amazon.com Inc.")));
        assert!(!req.is_satisfied_by("17.0.2", Some("Eclipse Adoptium")));
        assert!(!req.is_satisfied_by("1.8.0_392", None));
    }
}
