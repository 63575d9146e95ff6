//! Core type definitions

use serde::Deserialize;
use std::fmt;

/// Which kind of `uses:` reference a [`Resource`] points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ResourceKind {
    /// Reusable workflow under `.github/workflows/`
    Workflow,
    /// Action directory containing `action.yml` / `action.yaml`
    Action,
}

impl ResourceKind {
    /// Get string representation
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Workflow => "workflow",
            Self::Action => "action",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified action or workflow location.
///
/// `org` and `repo` are never empty and `subpath` is either empty or starts
/// with `/`. Only the classifier builds these, so the fields stay private.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Resource {
    kind: ResourceKind,
    org: String,
    repo: String,
    subpath: String,
}

impl Resource {
    pub(crate) fn new(
        kind: ResourceKind,
        org: impl Into<String>,
        repo: impl Into<String>,
        subpath: impl Into<String>,
    ) -> Self {
        let resource = Self {
            kind,
            org: org.into(),
            repo: repo.into(),
            subpath: subpath.into(),
        };
        debug_assert!(!resource.org.is_empty() && !resource.repo.is_empty());
        debug_assert!(resource.subpath.is_empty() || resource.subpath.starts_with('/'));
        resource
    }

    /// Workflow or action
    #[inline]
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Owning organization or user
    #[inline]
    pub fn org(&self) -> &str {
        &self.org
    }

    /// Repository name
    #[inline]
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Repo-relative path, empty for the repository root
    #[inline]
    pub fn subpath(&self) -> &str {
        &self.subpath
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}{}", self.org, self.repo, self.subpath)
    }
}

/// One entry from the repository contents API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContentEntry {
    /// File or directory name
    pub name: String,
    /// Repo-relative path
    #[serde(default)]
    pub path: String,
    /// `file`, `dir`, `symlink` or `submodule`
    #[serde(rename = "type", default)]
    pub entry_type: String,
}

/// Body of `GET /repos/{org}/{repo}/contents{path}`.
///
/// Directories come back as an array; a path that resolves to a file comes
/// back as a single object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RepoContents {
    /// Directory listing
    Listing(Vec<ContentEntry>),
    /// Single file metadata
    Entry(ContentEntry),
}

impl RepoContents {
    /// True for an empty directory listing
    pub fn is_empty(&self) -> bool {
        match self {
            RepoContents::Listing(entries) => entries.is_empty(),
            RepoContents::Entry(_) => false,
        }
    }

    /// Directory entries; empty when the path is a file
    pub fn listing(&self) -> &[ContentEntry] {
        match self {
            RepoContents::Listing(entries) => entries,
            RepoContents::Entry(_) => &[],
        }
    }
}

/// Repository that owns a code search hit
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchRepository {
    /// `org/repo`
    pub full_name: String,
}

/// One code search hit
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchItem {
    /// Matching file name
    #[serde(default)]
    pub name: String,
    /// Matching file path
    #[serde(default)]
    pub path: String,
    /// Parent repository
    pub repository: SearchRepository,
}

/// A page of results from a search endpoint
#[derive(Debug, Deserialize)]
pub(crate) struct Page<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}
