use crate::error::{GitHubError, Result};
use crate::types::{ApiErrorBody, PullRequest, Release};
use reqwest::{Client, RequestBuilder, Response, StatusCode, header};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

const USER_AGENT: &str = concat!("relnotes/", env!("CARGO_PKG_VERSION"));

#[allow(async_fn_in_trait)]
pub trait GitHubApi {
    /// Pull requests that contain `sha`. Commits unknown to GitHub yield an
    /// empty list.
    async fn pull_requests_for_commit(&self, repo: &str, sha: &str) -> Result<Vec<PullRequest>>;

    /// Release published for `tag`, if any
    async fn release_by_tag(&self, repo: &str, tag: &str) -> Result<Option<Release>>;

    /// Replaces the body of a release, leaving its title and flags untouched
    async fn update_release_body(&self, repo: &str, release_id: u64, body: &str) -> Result<Release>;
}

/// GitHub REST client
#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl GitHubClient {
    /// Client for api.github.com. Without a token only public repositories
    /// are reachable and rate limits are low.
    pub fn new(token: Option<String>) -> Result<Self> {
        Self::with_base_url(DEFAULT_API_URL, token)
    }

    pub fn with_base_url(base_url: impl Into<String>, token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()),
        })
    }

    fn url(&self, repo: &str, path: &str) -> Result<String> {
        validate_repo(repo)?;
        Ok(format!("{}/repos/{}/{}", self.base_url, repo, path))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.header(header::ACCEPT, "application/vnd.github+json");
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Sends `request` and decodes a successful response
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = self.authorize(request).send().await?;
        Self::decode(response).await
    }

    /// Like [`Self::send`], but the listed statuses mean "nothing there"
    async fn send_optional<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        absent: &[StatusCode],
    ) -> Result<Option<T>> {
        let response = self.authorize(request).send().await?;
        if absent.contains(&response.status()) {
            return Ok(None);
        }
        Self::decode(response).await.map(Some)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        let url = response.url().to_string();

        let bytes = response.bytes().await?;
        if !status.is_success() {
            let message = serde_json::from_slice::<ApiErrorBody>(&bytes)
                .map(|body| body.message)
                .unwrap_or_else(|_| String::from_utf8_lossy(&bytes).trim().to_string());
            return Err(GitHubError::Status {
                status: status.as_u16(),
                url,
                message,
            });
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl GitHubApi for GitHubClient {
    async fn pull_requests_for_commit(&self, repo: &str, sha: &str) -> Result<Vec<PullRequest>> {
        let url = self.url(repo, &format!("commits/{sha}/pulls"))?;
        let pulls = self
            .send_optional(
                self.client.get(url),
                &[StatusCode::NOT_FOUND, StatusCode::UNPROCESSABLE_ENTITY],
            )
            .await
            .map_err(|e| e.with_context(format!("Failed to list pull requests for {sha}")))?;
        Ok(pulls.unwrap_or_default())
    }

    async fn release_by_tag(&self, repo: &str, tag: &str) -> Result<Option<Release>> {
        // Tags may contain '/', which would otherwise change the route
        let url = self.url(repo, &format!("releases/tags/{}", urlencoding::encode(tag)))?;
        self.send_optional(self.client.get(url), &[StatusCode::NOT_FOUND])
            .await
            .map_err(|e| e.with_context(format!("Failed to look up release {tag}")))
    }

    async fn update_release_body(&self, repo: &str, release_id: u64, body: &str) -> Result<Release> {
        let url = self.url(repo, &format!("releases/{release_id}"))?;
        let request = self
            .client
            .patch(url)
            .json(&serde_json::json!({ "body": body }));

        self.send(request)
            .await
            .map_err(|e| e.with_context(format!("Failed to update release {release_id}")))
    }
}

fn validate_repo(repo: &str) -> Result<()> {
    match repo.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok(())
        }
        _ => Err(GitHubError::InvalidRepository(repo.to_string())),
    }
}
