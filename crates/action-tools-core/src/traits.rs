//! Trait seam between the usage lookup and the GitHub API

use crate::error::Result;
use crate::types::{RepoContents, SearchItem};
use std::future::Future;

/// The two GitHub calls the usage lookup needs.
///
/// Return-position `impl Future` keeps this free of boxing; implementors can
/// write plain `async fn`.
pub trait GitHubApi {
    /// Contents of `org/repo` at `subpath` (empty for the repo root)
    fn get_repo_contents<'a>(
        &'a self,
        org: &'a str,
        repo: &'a str,
        subpath: &'a str,
    ) -> impl Future<Output = Result<RepoContents>> + Send + 'a;

    /// Code search results, fetching at most `max_pages` pages
    fn search_code<'a>(
        &'a self,
        query: &'a str,
        max_pages: usize,
    ) -> impl Future<Output = Result<Vec<SearchItem>>> + Send + 'a;
}
