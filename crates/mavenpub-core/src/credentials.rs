//! Repository credentials and the places they are looked up.
//!
//! Credentials never come from `Mavenpub.toml`. For a repository named
//! `DasBabyPixel` the keys `DasBabyPixelUsername` / `DasBabyPixelPassword`
//! are searched in, in order:
//!
//! 1. `.mavenpub.env` next to the project file,
//! 2. `[credentials.DasBabyPixel]` in `~/.mavenpub/config.toml`,
//! 3. `MAVENPUB_DASBABYPIXEL_USERNAME` / `MAVENPUB_DASBABYPIXEL_PASSWORD`.
//!
//! Resolution happens only when a publish is about to upload.

use std::collections::BTreeMap;
use std::fmt;

use mavenpub_util::errors::PublishError;

use crate::config::CredentialEntry;

/// A resolved username/password pair. `Debug` never prints the password.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

/// Where a repository's credentials come from.
#[derive(Debug, Clone)]
pub enum CredentialSource {
    /// Search the lookup chain when the upload starts.
    Lookup(CredentialLookup),
    /// Credentials supplied directly by the caller.
    Explicit(Credentials),
    /// No credentials configured.
    Anonymous,
}

impl CredentialSource {
    /// Resolve to a non-empty username and password.
    pub fn resolve(&self) -> miette::Result<Credentials> {
        match self {
            Self::Lookup(lookup) => lookup.resolve(),
            Self::Explicit(creds) => {
                check_non_empty("username", &creds.username, "the supplied credentials")?;
                check_non_empty("password", &creds.password, "the supplied credentials")?;
                Ok(creds.clone())
            }
            Self::Anonymous => Err(PublishError::Authentication {
                message: "No credentials configured for this repository".to_string(),
            }
            .into()),
        }
    }
}

/// The lookup chain for one repository's credentials.
#[derive(Clone)]
pub struct CredentialLookup {
    repository: String,
    env_file: BTreeMap<String, String>,
    store: Option<CredentialEntry>,
    process_env: bool,
}

impl fmt::Debug for CredentialLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialLookup")
            .field("repository", &self.repository)
            .field("env_file_keys", &self.env_file.keys().collect::<Vec<_>>())
            .field("store", &self.store.is_some())
            .field("process_env", &self.process_env)
            .finish()
    }
}

impl CredentialLookup {
    pub fn new(repository: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            env_file: BTreeMap::new(),
            store: None,
            process_env: true,
        }
    }

    /// Entries loaded from `.mavenpub.env`.
    pub fn with_env_file(mut self, entries: BTreeMap<String, String>) -> Self {
        self.env_file = entries;
        self
    }

    /// The repository's entry from the user credential store.
    pub fn with_store(mut self, entry: Option<CredentialEntry>) -> Self {
        self.store = entry;
        self
    }

    /// Skip the process environment (used by tests and sandboxed callers).
    pub fn without_process_env(mut self) -> Self {
        self.process_env = false;
        self
    }

    /// Keys searched in `.mavenpub.env`: `<name>Username`, `<name>Password`.
    pub fn property_keys(&self) -> (String, String) {
        (
            format!("{}Username", self.repository),
            format!("{}Password", self.repository),
        )
    }

    /// Process environment variable names: `MAVENPUB_<NAME>_USERNAME`, `..._PASSWORD`.
    pub fn env_var_names(&self) -> (String, String) {
        let name: String = self
            .repository
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .collect();
        (
            format!("MAVENPUB_{name}_USERNAME"),
            format!("MAVENPUB_{name}_PASSWORD"),
        )
    }

    /// Where the username comes from, and its value. Empty values are skipped.
    pub fn username(&self) -> Option<(CredentialOrigin, String)> {
        let (key, _) = self.property_keys();
        let (var, _) = self.env_var_names();
        self.find(
            &key,
            self.store.as_ref().and_then(|s| s.username.as_deref()),
            &var,
        )
    }

    /// Where the password comes from, and its value. Empty values are skipped.
    pub fn password(&self) -> Option<(CredentialOrigin, String)> {
        let (_, key) = self.property_keys();
        let (_, var) = self.env_var_names();
        self.find(
            &key,
            self.store.as_ref().and_then(|s| s.password.as_deref()),
            &var,
        )
    }

    fn resolve(&self) -> miette::Result<Credentials> {
        let (user_key, pass_key) = self.property_keys();
        let (user_var, pass_var) = self.env_var_names();

        let username = self.username().map(|(_, v)| v);
        let password = self.password().map(|(_, v)| v);

        let tried = format!(
            "{} ({user_key}/{pass_key}), ~/.mavenpub/config.toml [credentials.{}], \
             ${user_var}/${pass_var}",
            crate::ENV_FILE,
            self.repository
        );
        check_non_empty("username", username.as_deref().unwrap_or(""), &tried)?;
        check_non_empty("password", password.as_deref().unwrap_or(""), &tried)?;

        tracing::debug!("Resolved credentials for repository '{}'", self.repository);
        Ok(Credentials {
            username: username.unwrap_or_default(),
            password: password.unwrap_or_default(),
        })
    }

    fn find(
        &self,
        key: &str,
        stored: Option<&str>,
        var: &str,
    ) -> Option<(CredentialOrigin, String)> {
        let from_file = self
            .env_file
            .get(key)
            .filter(|v| !v.is_empty())
            .map(|v| (CredentialOrigin::EnvFile, v.clone()));
        let from_store = || {
            stored
                .filter(|v| !v.is_empty())
                .map(|v| (CredentialOrigin::Store, v.to_string()))
        };
        let from_process = || {
            self.process_env
                .then(|| std::env::var(var).ok())
                .flatten()
                .filter(|v| !v.is_empty())
                .map(|v| (CredentialOrigin::ProcessEnv, v))
        };
        from_file.or_else(from_store).or_else(from_process)
    }
}

/// Which link of the lookup chain supplied a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialOrigin {
    EnvFile,
    Store,
    ProcessEnv,
}

impl fmt::Display for CredentialOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EnvFile => f.write_str(crate::ENV_FILE),
            Self::Store => f.write_str("~/.mavenpub/config.toml"),
            Self::ProcessEnv => f.write_str("environment"),
        }
    }
}

fn check_non_empty(what: &str, value: &str, origin: &str) -> miette::Result<()> {
    if value.is_empty() {
        return Err(PublishError::Authentication {
            message: format!("Empty or missing {what} (looked in {origin})"),
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_file(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn property_keys_follow_repository_name() {
        let lookup = CredentialLookup::new("DasBabyPixel");
        assert_eq!(
            lookup.property_keys(),
            (
                "DasBabyPixelUsername".to_string(),
                "DasBabyPixelPassword".to_string()
            )
        );
        assert_eq!(
            lookup.env_var_names().0,
            "MAVENPUB_DASBABYPIXEL_USERNAME".to_string()
        );
    }

    #[test]
    fn env_var_names_replace_punctuation() {
        let lookup = CredentialLookup::new("my-nexus.releases");
        assert_eq!(
            lookup.env_var_names().1,
            "MAVENPUB_MY_NEXUS_RELEASES_PASSWORD"
        );
    }

    #[test]
    fn env_file_wins_over_store() {
        let lookup = CredentialLookup::new("repo")
            .with_env_file(env_file(&[("repoUsername", "file-user")]))
            .with_store(Some(CredentialEntry {
                username: Some("store-user".to_string()),
                password: Some("store-pass".to_string()),
            }))
            .without_process_env();
        let creds = CredentialSource::Lookup(lookup).resolve().unwrap();
        assert_eq!(creds.username, "file-user");
        assert_eq!(creds.password, "store-pass");
    }

    #[test]
    fn empty_password_is_authentication_error() {
        let lookup = CredentialLookup::new("repo")
            .with_env_file(env_file(&[("repoUsername", "u"), ("repoPassword", "")]))
            .without_process_env();
        let err = CredentialSource::Lookup(lookup).resolve().unwrap_err();
        let err = err.downcast_ref::<PublishError>().unwrap();
        assert!(matches!(err, PublishError::Authentication { .. }));
        assert!(err.to_string().contains("password"));
    }

    #[test]
    fn empty_env_file_value_falls_through_to_store() {
        let lookup = CredentialLookup::new("repo")
            .with_env_file(env_file(&[("repoUsername", "u"), ("repoPassword", "")]))
            .with_store(Some(CredentialEntry {
                username: None,
                password: Some("store-pass".to_string()),
            }))
            .without_process_env();
        assert_eq!(
            lookup.password(),
            Some((CredentialOrigin::Store, "store-pass".to_string()))
        );
        let creds = CredentialSource::Lookup(lookup).resolve().unwrap();
        assert_eq!(creds.username, "u");
        assert_eq!(creds.password, "store-pass");
    }

    #[test]
    fn origins_are_reported() {
        let lookup = CredentialLookup::new("repo")
            .with_env_file(env_file(&[("repoUsername", "file-user")]))
            .without_process_env();
        assert_eq!(
            lookup.username(),
            Some((CredentialOrigin::EnvFile, "file-user".to_string()))
        );
        assert_eq!(lookup.password(), None);
        assert_eq!(CredentialOrigin::EnvFile.to_string(), ".mavenpub.env");
    }

    #[test]
    fn explicit_empty_username_rejected() {
        let src = CredentialSource::Explicit(Credentials::new("", "secret"));
        assert!(src.resolve().is_err());
    }

    #[test]
    fn anonymous_never_resolves() {
        assert!(CredentialSource::Anonymous.resolve().is_err());
    }

    #[test]
    fn debug_redacts_password() {
        let creds = Credentials::new("deploy", "hunter2");
        let shown = format!("{creds:?}");
        assert!(shown.contains("deploy"));
        assert!(!shown.contains("hunter2"));
    }
}
