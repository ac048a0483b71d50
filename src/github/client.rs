// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! GitHub REST API client.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::GitHubConfig;
use crate::error::GitHubError;

use super::source::RepoSource;
use super::types::{CommitPayload, CommitRecord, DirectoryEntry, FilePayload, RepositoryMetadata};
use super::url::RepoCoordinates;

/// Media type requested on every call.
pub const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// Unauthenticated client for the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: reqwest::Client,
    api_url: String,
}

impl GitHubClient {
    /// Create a client from configuration.
    pub fn new(config: &GitHubConfig) -> Result<Self, GitHubError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GitHubError::Transport {
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    /// The API base URL requests are sent to.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn repo_url(&self, repo: &RepoCoordinates, suffix: &str) -> String {
        format!(
            "{}/repos/{}/{}{}",
            self.api_url, repo.owner, repo.repo, suffix
        )
    }

    /// HTTP GET + status check + JSON parse helper.
    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, GitHubError> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("{} -> {}", url, status);

        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("Unknown");
            return Err(GitHubError::from_status(status.as_u16(), reason));
        }

        response.json().await.map_err(|e| GitHubError::Decode {
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl RepoSource for GitHubClient {
    fn source_tag(&self) -> &'static str {
        "github"
    }

    async fn repository(&self, repo: &RepoCoordinates) -> Result<RepositoryMetadata, GitHubError> {
        self.fetch_json(&self.repo_url(repo, "")).await
    }

    async fn commits(
        &self,
        repo: &RepoCoordinates,
        count: u32,
    ) -> Result<Vec<CommitRecord>, GitHubError> {
        let url = self.repo_url(repo, &format!("/commits?per_page={}", count));
        let payload: Vec<CommitPayload> = self.fetch_json(&url).await?;
        Ok(payload.into_iter().map(CommitRecord::from).collect())
    }

    async fn contents(
        &self,
        repo: &RepoCoordinates,
        path: &str,
    ) -> Result<Vec<DirectoryEntry>, GitHubError> {
        let url = self.repo_url(repo, &format!("/contents/{}", path));
        self.fetch_json(&url).await
    }

    async fn file_text(&self, repo: &RepoCoordinates, path: &str) -> Result<String, GitHubError> {
        let url = self.repo_url(repo, &format!("/contents/{}", path));
        let payload: FilePayload = self.fetch_json(&url).await?;

        match (payload.content, payload.encoding.as_deref()) {
            (Some(content), Some("base64") | None) => decode_content(&content),
            (Some(content), Some(_)) => Ok(content),
            (None, _) => Ok(String::new()),
        }
    }
}

/// Decode a base64 `content` field, which GitHub wraps at 60 columns.
pub fn decode_content(encoded: &str) -> Result<String, GitHubError> {
    let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD.decode(compact).map_err(|e| GitHubError::Decode {
        message: format!("invalid base64 content: {}", e),
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Answer one request with a canned response; yields the raw request head.
    async fn serve_once(status_line: &str, body: &str) -> (GitHubClient, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
            String::from_utf8_lossy(&request).to_lowercase()
        });

        let config = GitHubConfig {
            api_url: format!("http://{}", addr),
            timeout_secs: 5,
            ..GitHubConfig::default()
        };
        (GitHubClient::new(&config).unwrap(), handle)
    }

    fn repo() -> RepoCoordinates {
        RepoCoordinates::new("foo", "bar")
    }

    #[test]
    fn test_decode_wrapped_content() {
        // "# Title\n\nSome usage text." wrapped the way the API returns it
        let encoded = "IyBUaXRsZQoKU29tZSB1\nc2FnZSB0ZXh0Lg==\n";
        assert_eq!(decode_content(encoded).unwrap(), "# Title\n\nSome usage text.");
    }

    #[test]
    fn test_decode_invalid_content() {
        let err = decode_content("not base64!!").unwrap_err();
        assert!(matches!(err, GitHubError::Decode { .. }));
    }

    #[test]
    fn test_repo_url_building() {
        let config = GitHubConfig {
            api_url: "http://localhost:9999/".to_string(),
            ..GitHubConfig::default()
        };
        let client = GitHubClient::new(&config).unwrap();
        let repo = RepoCoordinates::new("foo", "bar");

        assert_eq!(client.api_url(), "http://localhost:9999");
        assert_eq!(
            client.repo_url(&repo, "/commits?per_page=30"),
            "http://localhost:9999/repos/foo/bar/commits?per_page=30"
        );
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let config = GitHubConfig {
            api_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 2,
            ..GitHubConfig::default()
        };
        let client = GitHubClient::new(&config).unwrap();
        let err = client
            .repository(&RepoCoordinates::new("foo", "bar"))
            .await
            .unwrap_err();
        assert!(matches!(err, GitHubError::Transport { .. }));
    }

    #[tokio::test]
    async fn test_not_found_response() {
        let (client, server) = serve_once("404 Not Found", r#"{"message":"Not Found"}"#).await;
        let err = client.repository(&repo()).await.unwrap_err();

        assert!(matches!(err, GitHubError::NotFound));
        let request = server.await.unwrap();
        assert!(request.starts_with("get /repos/foo/bar http/1.1"));
    }

    #[tokio::test]
    async fn test_forbidden_response_is_rate_limit() {
        let (client, server) = serve_once("403 Forbidden", "{}").await;
        let err = client.commits(&repo(), 30).await.unwrap_err();

        assert!(matches!(err, GitHubError::RateLimited));
        let request = server.await.unwrap();
        assert!(request.starts_with("get /repos/foo/bar/commits?per_page=30 "));
    }

    #[tokio::test]
    async fn test_server_error_keeps_status() {
        let (client, _server) = serve_once("500 Internal Server Error", "{}").await;
        match client.contents(&repo(), "").await.unwrap_err() {
            GitHubError::Api { status, reason } => {
                assert_eq!(status, 500);
                assert_eq!(reason, "Internal Server Error");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_requests_carry_github_headers() {
        let (client, server) = serve_once("404 Not Found", "{}").await;
        let _ = client.repository(&repo()).await;

        let request = server.await.unwrap();
        assert!(request.contains(&format!("accept: {}", GITHUB_ACCEPT)));
        assert!(request.contains(&format!("user-agent: gitgrade/{}", env!("CARGO_PKG_VERSION"))));
    }

    #[tokio::test]
    async fn test_file_text_decodes_payload() {
        let body = r#"{"content":"IyBUaXRsZQoKU29tZSB1\nc2FnZSB0ZXh0Lg==\n","encoding":"base64"}"#;
        let (client, server) = serve_once("200 OK", body).await;

        let text = client.file_text(&repo(), "README.md").await.unwrap();
        assert_eq!(text, "# Title\n\nSome usage text.");
        let request = server.await.unwrap();
        assert!(request.starts_with("get /repos/foo/bar/contents/readme.md "));
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let (client, _server) = serve_once("200 OK", "not json").await;
        let err = client.repository(&repo()).await.unwrap_err();
        assert!(matches!(err, GitHubError::Decode { .. }));
    }
}
