use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all mavenpub operations.
///
/// The four publish failure kinds (`Validation`, `Authentication`, `Network`,
/// `Conflict`) are what a caller of the publisher branches on; the rest cover
/// loading configuration and inspecting the local machine.
#[derive(Debug, Error, Diagnostic)]
pub enum PublishError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed project file (e.g. Mavenpub.toml).
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check your Mavenpub.toml for syntax errors"))]
    Manifest { message: String },

    /// Missing required artifact, malformed coordinates or an unusable target.
    #[error("Validation failed: {message}")]
    Validation { message: String },

    /// Credentials missing, empty, or rejected by the repository.
    #[error("Authentication failed: {message}")]
    #[diagnostic(help(
        "Set <repo>Username/<repo>Password in .mavenpub.env, ~/.mavenpub/config.toml \
         or the MAVENPUB_<REPO>_USERNAME/MAVENPUB_<REPO>_PASSWORD environment variables"
    ))]
    Authentication { message: String },

    /// Host unreachable, timeout, or an unexpected HTTP response.
    #[error("Network error: {message}")]
    Network { message: String },

    /// The version is already published and the repository forbids overwriting it.
    #[error("Conflict: {message}")]
    #[diagnostic(help("Bump the version or set `allow-redeploy = true` for this repository"))]
    Conflict { message: String },

    /// JDK discovery or toolchain requirement mismatch.
    #[error("Toolchain error: {message}")]
    Toolchain { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

impl PublishError {
    /// Short machine-readable name of the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Manifest { .. } => "manifest",
            Self::Validation { .. } => "validation",
            Self::Authentication { .. } => "authentication",
            Self::Network { .. } => "network",
            Self::Conflict { .. } => "conflict",
            Self::Toolchain { .. } => "toolchain",
            Self::Generic { .. } => "generic",
        }
    }
}

/// Convenience alias for `miette::Result<T>`.
pub type PublishResult<T> = miette::Result<T>;
