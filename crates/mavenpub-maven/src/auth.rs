//! Request authentication for publish targets.
//!
//! Credentials reach this module already resolved (see
//! [`mavenpub_core::credentials`]); Maven repositories such as Nexus and
//! Artifactory accept HTTP basic authentication for deploys.

use mavenpub_core::credentials::Credentials;
use reqwest::RequestBuilder;

/// Apply basic authentication to a request.
pub fn apply_auth(request: RequestBuilder, credentials: &Credentials) -> RequestBuilder {
    request.basic_auth(&credentials.username, Some(&credentials.password))
}
