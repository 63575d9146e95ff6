//! Find repositories that use an action or reusable workflow
//!
//! The lookup runs in three steps: [`classify`] the target, confirm it exists
//! with [`validate_exists`], then [`find_usage`] through code search.

pub mod search;
pub mod target;
pub mod validate;

pub use search::{find_usage, find_usage_with_limit, usage_query};
pub use target::{classify, strip_ref};
pub use validate::{validate_exists, ACTION_METADATA_FILES};

use crate::error::{Error, Result};
use crate::github::{GitHubClient, DEFAULT_MAX_PAGES};
use crate::traits::GitHubApi;
use tracing::info;

/// Classify, validate and search for `target`.
///
/// Returns [`Error::NotFound`] naming `target` when the action or workflow
/// does not exist, and propagates every other failure unchanged.
pub async fn lookup_usage<C: GitHubApi>(target: &str, client: &C) -> Result<Vec<String>> {
    lookup_usage_with_limit(target, client, DEFAULT_MAX_PAGES).await
}

/// [`lookup_usage`] reading at most `max_pages` pages of search results
pub async fn lookup_usage_with_limit<C: GitHubApi>(
    target: &str,
    client: &C,
    max_pages: usize,
) -> Result<Vec<String>> {
    let resource = classify(target)?;

    if !validate_exists(&resource, client).await? {
        return Err(Error::NotFound(target.to_string()));
    }
    info!(%resource, kind = %resource.kind(), "resource exists, searching for usage");

    // Display is the ref-free `org/repo{subpath}` form searched for
    let repos = find_usage_with_limit(&resource.to_string(), client, max_pages).await?;
    info!(%resource, count = repos.len(), "usage lookup complete");
    Ok(repos)
}

/// Synchronous variant of [`lookup_usage`]
///
/// Builds a current-thread Tokio runtime and blocks on the async version.
/// Prefer the async version if you're already in an async context.
pub fn lookup_usage_sync(target: &str, client: &GitHubClient) -> Result<Vec<String>> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| Error::Config(format!("Failed to create runtime: {e}")))?
        .block_on(lookup_usage(target, client))
}
