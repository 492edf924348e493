//! Checksum sidecars (`.md5`, `.sha1`, `.sha256`, `.sha512`) uploaded next to
//! every published file.

use mavenpub_util::hash;

/// Digest algorithms a Maven repository expects sidecars for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumAlgorithm {
    Md5,
    Sha1,
    Sha256,
    Sha512,
}

impl ChecksumAlgorithm {
    /// All algorithms in upload order.
    pub const ALL: [ChecksumAlgorithm; 4] = [Self::Md5, Self::Sha1, Self::Sha256, Self::Sha512];

    /// Sidecar file extension, appended to the artifact file name.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }

    /// Lowercase hex digest of `data`.
    pub fn digest(&self, data: &[u8]) -> String {
        match self {
            Self::Md5 => hash::md5_bytes(data),
            Self::Sha1 => hash::sha1_bytes(data),
            Self::Sha256 => hash::sha256_bytes(data),
            Self::Sha512 => hash::sha512_bytes(data),
        }
    }
}

/// A checksum sidecar ready to upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sidecar {
    pub algorithm: ChecksumAlgorithm,
    /// Repository-relative path, e.g. `de/example/lib/1.0/lib-1.0.jar.sha1`.
    pub path: String,
    pub hex: String,
}

/// Compute every sidecar for a file published at `path`.
pub fn sidecars(path: &str, data: &[u8]) -> Vec<Sidecar> {
    ChecksumAlgorithm::ALL
        .iter()
        .map(|algorithm| Sidecar {
            algorithm: *algorithm,
            path: format!("{path}.{}", algorithm.extension()),
            hex: algorithm.digest(data),
        })
        .collect()
}
