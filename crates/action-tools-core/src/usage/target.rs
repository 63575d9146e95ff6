//! Classify `uses:` targets into workflows and actions

use crate::error::{Error, Result};
use crate::types::{Resource, ResourceKind};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

// Checked first: every workflow path also matches ACTION_PATTERN.
static WORKFLOW_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<org>[\w.-]+)/(?P<repo>[\w.-]+)(?P<subpath>/\.github/workflows/[^/]+\.(?:yaml|yml))$",
    )
    .expect("valid regex")
});

static ACTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<org>[\w.-]+)/(?P<repo>[\w.-]+)(?P<subpath>(?:/[\w.-]+)*)$")
        .expect("valid regex")
});

/// Drop an `@ref` suffix (`org/repo@v1` -> `org/repo`)
#[inline]
pub fn strip_ref(target: &str) -> &str {
    match target.split_once('@') {
        Some((head, _)) => head,
        None => target,
    }
}

/// Parse `org/repo[/subpath][@ref]` into a [`Resource`].
///
/// The ref is discarded. Fails with [`Error::InvalidTarget`] naming `target`
/// when the string is neither a workflow nor an action reference.
pub fn classify(target: &str) -> Result<Resource> {
    let stripped = strip_ref(target);

    let (kind, caps) = if let Some(caps) = WORKFLOW_PATTERN.captures(stripped) {
        (ResourceKind::Workflow, caps)
    } else if let Some(caps) = ACTION_PATTERN.captures(stripped) {
        (ResourceKind::Action, caps)
    } else {
        return Err(Error::InvalidTarget(target.to_string()));
    };

    let resource = Resource::new(kind, &caps["org"], &caps["repo"], &caps["subpath"]);
    debug!(%target, %kind, %resource, "classified target");
    Ok(resource)
}
