//! HTTP client for the GitHub REST API

pub mod client;
pub mod pagination;

pub use client::{GitHubClient, DEFAULT_BASE_URL};
pub use pagination::{DEFAULT_MAX_PAGES, MAX_PER_PAGE};
