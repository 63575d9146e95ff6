//! Check that a classified resource exists upstream

use crate::error::{Error, Result};
use crate::traits::GitHubApi;
use crate::types::{Resource, ResourceKind};
use tracing::debug;

/// File names that mark a directory as an action
pub const ACTION_METADATA_FILES: [&str; 2] = ["action.yml", "action.yaml"];

/// Returns `Ok(false)` when the contents API answers 404.
///
/// Every other error is returned unchanged.
pub async fn validate_exists<C: GitHubApi>(resource: &Resource, client: &C) -> Result<bool> {
    let contents = match client
        .get_repo_contents(resource.org(), resource.repo(), resource.subpath())
        .await
    {
        Ok(contents) => contents,
        Err(Error::Status(err)) if err.status_code == 404 => {
            debug!(%resource, "contents not found");
            return Ok(false);
        }
        Err(err) => return Err(err),
    };

    let exists = match resource.kind() {
        ResourceKind::Workflow => !contents.is_empty(),
        ResourceKind::Action => contents
            .listing()
            .iter()
            .any(|entry| ACTION_METADATA_FILES.contains(&entry.name.as_str())),
    };

    debug!(%resource, kind = %resource.kind(), exists, "validated resource");
    Ok(exists)
}
