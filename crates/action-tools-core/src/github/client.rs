//! GitHub REST API client

use super::pagination::{self, MAX_PER_PAGE};
use crate::error::{ClientStatusError, Error, RequestSnapshot, ResponseSnapshot, Result};
use crate::traits::GitHubApi;
use crate::types::{Page, RepoContents, SearchItem};
use reqwest::header::{ACCEPT, LINK};
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

/// Public GitHub API
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const USER_AGENT: &str = concat!("action-tools/", env!("CARGO_PKG_VERSION"));

/// Authenticated GitHub API client.
///
/// Every call is a single attempt; retries are up to the caller.
pub struct GitHubClient {
    client: reqwest::Client,
    base_url: String,
    base_path: String,
    token: String,
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl GitHubClient {
    /// Create a client for `base_url` (e.g. `https://api.github.com`)
    pub fn new(token: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(Error::Config("GitHub API URL must not be empty".to_string()));
        }

        let parsed = Url::parse(&base_url)
            .map_err(|e| Error::Config(format!("Invalid GitHub API URL {base_url}: {e}")))?;
        let base_path = parsed.path().to_string();

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url,
            base_path,
            token: token.into(),
        })
    }

    /// Create from environment variables
    ///
    /// `GITHUB_TOKEN` is required; `GITHUB_API_URL` defaults to the public API.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("GITHUB_TOKEN")
            .map_err(|_| Error::Config("GITHUB_TOKEN not set".to_string()))?;
        let base_url =
            std::env::var("GITHUB_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Self::new(token, base_url)
    }

    /// Base URL with any trailing slash removed
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `base_url + endpoint`.
    ///
    /// Any status >= 400 becomes [`Error::Status`]; transport failures become
    /// [`Error::Http`].
    pub async fn get(&self, endpoint: &str, params: &[(String, String)]) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(%url, params = params.len(), "GET");

        let mut request = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .header(ACCEPT, GITHUB_ACCEPT);
        if !params.is_empty() {
            request = request.query(params);
        }

        let response = request.send().await?;
        let status = response.status();
        if status.as_u16() >= 400 {
            let request = RequestSnapshot {
                method: Method::GET,
                url: response.url().clone(),
            };
            let headers = response.headers().clone();
            let body = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), url = %request.url, "request failed");

            return Err(ClientStatusError {
                status_code: status.as_u16(),
                request,
                response: ResponseSnapshot {
                    status,
                    headers,
                    body,
                },
            }
            .into());
        }

        Ok(response)
    }

    /// Fetch `items` from up to `max_pages` pages, following `rel="next"` links.
    ///
    /// Items keep page order, then in-page order.
    pub async fn paginate<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: Vec<(String, String)>,
        max_pages: usize,
    ) -> Result<Vec<T>> {
        let mut items = Vec::new();
        let mut endpoint = endpoint.to_string();
        let mut params = params;
        let mut pages_fetched = 0;

        while pages_fetched < max_pages {
            let response = self.get(&endpoint, &params).await?;
            let link = response
                .headers()
                .get(LINK)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned);

            let page: Page<T> = decode(response).await?;
            items.extend(page.items);
            pages_fetched += 1;
            debug!(page = pages_fetched, total = items.len(), "fetched page");

            match pagination::next_page(link.as_deref(), &self.base_path)? {
                Some(next) => {
                    endpoint = next.endpoint;
                    params = next.params;
                }
                None => break,
            }
        }

        Ok(items)
    }

    /// `GET /repos/{org}/{repo}/contents{subpath}`
    pub async fn get_repo_contents(
        &self,
        org: &str,
        repo: &str,
        subpath: &str,
    ) -> Result<RepoContents> {
        let endpoint = contents_endpoint(org, repo, subpath)?;
        let response = self.get(&endpoint, &[]).await?;
        decode(response).await
    }

    /// `GET /search/code` with the maximum page size
    pub async fn search_code(&self, query: &str, max_pages: usize) -> Result<Vec<SearchItem>> {
        let params = vec![
            ("q".to_string(), query.to_string()),
            ("per_page".to_string(), MAX_PER_PAGE.to_string()),
        ];
        self.paginate("/search/code", params, max_pages).await
    }
}

/// Contents path with every segment percent-encoded, so `#` or `?` in a file
/// name stay part of the path.
fn contents_endpoint(org: &str, repo: &str, subpath: &str) -> Result<String> {
    let mut url = Url::parse("http://localhost/")
        .map_err(|e| Error::Config(format!("Failed to build contents path: {e}")))?;
    url.path_segments_mut()
        .map_err(|()| Error::Config("Failed to build contents path".to_string()))?
        .clear()
        .extend(["repos", org, repo, "contents"])
        .extend(subpath.split('/').filter(|s| !s.is_empty()));
    Ok(url.path().to_string())
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

impl GitHubApi for GitHubClient {
    async fn get_repo_contents<'a>(
        &'a self,
        org: &'a str,
        repo: &'a str,
        subpath: &'a str,
    ) -> Result<RepoContents> {
        GitHubClient::get_repo_contents(self, org, repo, subpath).await
    }

    async fn search_code<'a>(
        &'a self,
        query: &'a str,
        max_pages: usize,
    ) -> Result<Vec<SearchItem>> {
        GitHubClient::search_code(self, query, max_pages).await
    }
}
