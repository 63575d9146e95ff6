//! # action-tools core
//!
//! GitHub API client and `uses:` reference resolution for GitHub Actions
//! tooling.
//!
//! This library provides:
//! - An authenticated GitHub REST client with typed status errors
//! - Bounded `link`-header pagination
//! - Classification of `org/repo[/path][@ref]` targets into workflows and actions
//! - Existence checks and code-search usage lookup
//! - Usage snippets for generated action READMEs
//!
//! ## Example
//!
//! ```no_run
//! use action_tools_core::{lookup_usage, GitHubClient};
//!
//! # async fn example() -> action_tools_core::Result<()> {
//! let client = GitHubClient::from_env()?;
//! let repos = lookup_usage("my-org/my-repo/.github/workflows/build.yml@v1", &client).await?;
//! for repo in repos {
//!     println!("{repo}");
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs, rust_2018_idioms)]

pub mod docs;
pub mod error;
pub mod github;
pub mod traits;
pub mod types;
pub mod usage;

pub use error::{ClientStatusError, Error, ErrorKind, Result};
pub use github::{GitHubClient, DEFAULT_BASE_URL, DEFAULT_MAX_PAGES, MAX_PER_PAGE};
pub use traits::GitHubApi;
pub use types::{ContentEntry, RepoContents, Resource, ResourceKind, SearchItem};
pub use usage::{
    classify, find_usage, find_usage_with_limit, lookup_usage, lookup_usage_sync,
    lookup_usage_with_limit, strip_ref, validate_exists,
};
