//! HTTP transfer against a Maven repository: existence probes, metadata
//! downloads and artifact uploads, with retries for transient failures.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};

use mavenpub_core::config::PublishSettings;
use mavenpub_core::credentials::Credentials;
use mavenpub_util::errors::PublishError;

use crate::auth;

/// Uploads larger than this get a spinner while the request is in flight.
const PROGRESS_THRESHOLD: usize = 100_000;

/// A reqwest client plus the retry policy used for every request.
#[derive(Debug, Clone)]
pub struct Transport {
    client: Client,
    attempts: u32,
    retry_delay: Duration,
}

impl Transport {
    /// Build a transport from the `[publish]` settings of the global config.
    pub fn new(settings: &PublishSettings) -> miette::Result<Self> {
        let client = Client::builder()
            .timeout(settings.timeout())
            .user_agent(concat!("mavenpub/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PublishError::Network {
                message: format!("Failed to create HTTP client: {e}"),
            })?;
        Ok(Self {
            client,
            attempts: settings.retries.max(1),
            retry_delay: settings.retry_delay(),
        })
    }

    /// Whether a file exists at `url`.
    ///
    /// 2xx means present, 404 absent; 401/403 are authentication failures.
    pub async fn exists(&self, url: &str, creds: &Credentials) -> miette::Result<bool> {
        let resp = self
            .send(url, || auth::apply_auth(self.client.head(url), creds))
            .await?;
        let status = resp.status();
        match status {
            s if s.is_success() => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(auth_error(status, url)),
            _ => Err(PublishError::Network {
                message: format!("HTTP {status} probing {url}"),
            }
            .into()),
        }
    }

    /// Download a text file, or `None` on 404.
    pub async fn get_text(&self, url: &str, creds: &Credentials) -> miette::Result<Option<String>> {
        let resp = self
            .send(url, || auth::apply_auth(self.client.get(url), creds))
            .await?;
        let status = resp.status();
        match status {
            StatusCode::NOT_FOUND => return Ok(None),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => return Err(auth_error(status, url)),
            s if !s.is_success() => {
                return Err(PublishError::Network {
                    message: format!("HTTP {status} fetching {url}"),
                }
                .into())
            }
            _ => {}
        }
        let text = resp.text().await.map_err(|e| PublishError::Network {
            message: format!("Failed to read response from {url}: {e}"),
        })?;
        Ok(Some(text))
    }

    /// Upload `data` to `url` with `PUT`.
    pub async fn put(
        &self,
        url: &str,
        creds: &Credentials,
        data: &[u8],
        label: &str,
    ) -> miette::Result<()> {
        let spinner = (data.len() > PROGRESS_THRESHOLD).then(|| {
            mavenpub_util::progress::spinner(&format!(
                "Uploading {label} ({})",
                mavenpub_util::progress::format_bytes(data.len() as u64)
            ))
        });

        let result = self
            .send(url, || {
                auth::apply_auth(self.client.put(url), creds).body(data.to_vec())
            })
            .await;

        if let Some(spinner) = &spinner {
            spinner.finish_and_clear();
        }

        let resp = result?;
        let status = resp.status();
        if status.is_success() {
            tracing::debug!("PUT {url} -> {status}");
            return Ok(());
        }
        let body = resp.text().await.unwrap_or_default();
        Err(classify_upload_failure(status, url, &body))
    }

    /// Send a request, retrying 5xx responses, timeouts and refused connections.
    async fn send<F>(&self, url: &str, build: F) -> miette::Result<Response>
    where
        F: Fn() -> RequestBuilder,
    {
        let mut last_err = String::new();

        for attempt in 0..self.attempts {
            if attempt > 0 {
                tracing::warn!(
                    "Retrying {url} (attempt {}/{}): {last_err}",
                    attempt + 1,
                    self.attempts
                );
                tokio::time::sleep(self.retry_delay * attempt).await;
            }

            match build().send().await {
                Ok(resp) if resp.status().is_server_error() => {
                    last_err = format!("HTTP {} from {url}", resp.status());
                }
                Ok(resp) => return Ok(resp),
                Err(e) if e.is_timeout() || e.is_connect() => {
                    last_err = format!("{e}");
                }
                Err(e) => {
                    return Err(PublishError::Network {
                        message: format!("Request to {url} failed: {e}"),
                    }
                    .into());
                }
            }
        }

        Err(PublishError::Network {
            message: format!(
                "Failed after {} attempt(s) for {url}: {last_err}",
                self.attempts
            ),
        }
        .into())
    }
}

fn auth_error(status: StatusCode, url: &str) -> miette::Report {
    PublishError::Authentication {
        message: format!("Repository rejected credentials (HTTP {status}) for {url}"),
    }
    .into()
}

/// Map a failed upload response onto the publish error taxonomy.
///
/// 409 is a conflict everywhere; Nexus answers a forbidden redeploy with 400
/// and a body saying the repository does not allow updating assets.
fn classify_upload_failure(status: StatusCode, url: &str, body: &str) -> miette::Report {
    let lower = body.to_ascii_lowercase();
    let refuses_update = lower.contains("does not allow updating")
        || lower.contains("redeploy")
        || lower.contains("already exists");
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => auth_error(status, url),
        StatusCode::CONFLICT => PublishError::Conflict {
            message: format!("Repository refused to overwrite {url} (HTTP {status})"),
        }
        .into(),
        StatusCode::BAD_REQUEST if refuses_update => PublishError::Conflict {
            message: format!("Repository refused to overwrite {url}: {}", body.trim()),
        }
        .into(),
        _ => PublishError::Network {
            message: format!("HTTP {status} uploading {url}: {}", body.trim()),
        }
        .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(report: &miette::Report) -> &'static str {
        report.downcast_ref::<PublishError>().unwrap().kind()
    }

    #[test]
    fn classify_auth_statuses() {
        let r = classify_upload_failure(StatusCode::UNAUTHORIZED, "u", "");
        assert_eq!(kind(&r), "authentication");
        let r = classify_upload_failure(StatusCode::FORBIDDEN, "u", "");
        assert_eq!(kind(&r), "authentication");
    }

    #[test]
    fn classify_conflicts() {
        let r = classify_upload_failure(StatusCode::CONFLICT, "u", "");
        assert_eq!(kind(&r), "conflict");
        let r = classify_upload_failure(
            StatusCode::BAD_REQUEST,
            "u",
            "Repository does not allow updating assets: maven-releases",
        );
        assert_eq!(kind(&r), "conflict");
    }

    #[test]
    fn classify_other_client_errors_as_network() {
        let r = classify_upload_failure(StatusCode::BAD_REQUEST, "u", "malformed path");
        assert_eq!(kind(&r), "network");
        let r = classify_upload_failure(StatusCode::METHOD_NOT_ALLOWED, "u", "");
        assert_eq!(kind(&r), "network");
    }
}
