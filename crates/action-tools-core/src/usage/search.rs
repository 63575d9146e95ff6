//! Code search for repositories that reference a target

use crate::error::Result;
use crate::github::DEFAULT_MAX_PAGES;
use crate::traits::GitHubApi;
use std::collections::BTreeSet;
use tracing::debug;

/// Exact-phrase search for `uses: <target>` in YAML files
pub fn usage_query(target: &str) -> String {
    format!("\"uses: {target}\" language:YAML")
}

/// Distinct `org/repo` names whose YAML files contain `uses: <target>`,
/// sorted ascending.
pub async fn find_usage<C: GitHubApi>(target: &str, client: &C) -> Result<Vec<String>> {
    find_usage_with_limit(target, client, DEFAULT_MAX_PAGES).await
}

/// [`find_usage`] reading at most `max_pages` pages of search results
pub async fn find_usage_with_limit<C: GitHubApi>(
    target: &str,
    client: &C,
    max_pages: usize,
) -> Result<Vec<String>> {
    let query = usage_query(target);
    let items = client.search_code(&query, max_pages).await?;
    let hits = items.len();

    let repos: BTreeSet<String> = items
        .into_iter()
        .map(|item| item.repository.full_name)
        .collect();

    debug!(%target, hits, repos = repos.len(), "search complete");
    Ok(repos.into_iter().collect())
}
