//! Live adapter for the `RepoContents` port using the GitHub contents API.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::ports::repo_api::{ContentsFuture, RemoteEntry, RepoContents};
use crate::ports::PortError;

const USER_AGENT: &str = concat!("roadtrack/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Live contents client that calls the GitHub REST API.
pub struct GithubContents {
    client: Client,
}

impl GithubContents {
    /// Creates a client with the default timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new() -> Result<Self, PortError> {
        let client = Client::builder().user_agent(USER_AGENT).timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client })
    }
}

/// Error body returned by the GitHub API.
#[derive(Deserialize)]
struct GithubError {
    message: String,
}

/// Fetches and decodes one contents listing.
async fn fetch_contents(client: &Client, url: String) -> Result<Vec<RemoteEntry>, PortError> {
    let response = client
        .get(&url)
        .header("Accept", "application/vnd.github+json")
        .send()
        .await
        .map_err(|e| format!("contents request failed: {e}"))?;

    let status = response.status();
    let body =
        response.text().await.map_err(|e| format!("failed to read contents response: {e}"))?;

    if !status.is_success() {
        let msg = serde_json::from_str::<GithubError>(&body).map_or(body, |e| e.message);
        return Err(format!("API error ({}): {msg}", status.as_u16()).into());
    }

    let entries = serde_json::from_str::<Vec<RemoteEntry>>(&body)
        .map_err(|e| format!("failed to parse contents listing: {e}"))?;
    Ok(entries)
}

impl RepoContents for GithubContents {
    fn list_contents(&self, url: &str) -> ContentsFuture<'_> {
        Box::pin(fetch_contents(&self.client, url.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_entries_parse_from_github_payload() {
        let body = r#"[
            {"name": "README.md", "path": "README.md", "type": "file", "size": 120, "sha": "x"},
            {"name": "src", "path": "src", "type": "dir", "size": 0, "sha": "y"}
        ]"#;
        let entries: Vec<RemoteEntry> = serde_json::from_str(body).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "README.md");
        assert_eq!(entries[0].kind, "file");
        assert_eq!(entries[1].kind, "dir");
    }

    #[test]
    fn client_builds() {
        assert!(GithubContents::new().is_ok());
    }
}
