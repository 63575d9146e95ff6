//! Usage snippets for generated action READMEs
//!
//! Works on action metadata that has already been deserialized; loading
//! `action.yml` and rendering the README itself happen elsewhere.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

/// One entry under `inputs:` in `action.yml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ActionInput {
    /// Human-readable description
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the caller must set it
    #[serde(default)]
    pub required: bool,
    /// Default value
    #[serde(default)]
    pub default: Option<String>,
    /// Example value shown in usage snippets for required inputs
    #[serde(default)]
    pub example: Option<String>,
}

/// One entry under `outputs:` in `action.yml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ActionOutput {
    /// Human-readable description
    #[serde(default)]
    pub description: Option<String>,
    /// Expression the output is bound to
    #[serde(default)]
    pub value: Option<String>,
}

/// The parts of `action.yml` a README needs. Maps keep declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActionMetadata {
    /// Action name
    pub name: String,
    /// Action description
    pub description: String,
    /// Inputs in declaration order
    #[serde(default)]
    pub inputs: IndexMap<String, ActionInput>,
    /// Outputs in declaration order
    #[serde(default)]
    pub outputs: IndexMap<String, ActionOutput>,
}

impl ActionMetadata {
    /// Reject required inputs that have neither a default nor an example
    pub fn validate(&self) -> Result<()> {
        for (key, input) in &self.inputs {
            if input.required && input.default.is_none() && input.example.is_none() {
                return Err(Error::InvalidMetadata(format!(
                    "required input '{key}' without default must provide an example"
                )));
            }
        }
        Ok(())
    }
}

/// `with:` lines for a usage snippet.
///
/// Required inputs show their example, optional ones their default.
/// Multi-line values become YAML block scalars.
pub fn format_usage_lines<'a, I>(inputs: I) -> Vec<String>
where
    I: IntoIterator<Item = (&'a String, &'a ActionInput)>,
{
    let mut lines = Vec::new();
    for (key, input) in inputs {
        let value = if input.required {
            input.example.as_deref()
        } else {
            input.default.as_deref()
        }
        .unwrap_or("None");

        if value.contains('\n') {
            lines.push(format!("    {key}: |"));
            lines.extend(value.lines().map(|line| format!("      {line}")));
        } else {
            lines.push(format!("    {key}: {value}"));
        }
    }
    lines
}

/// Fenced YAML step that uses `action_path` with the given inputs
pub fn example_usage<'a, I>(action_path: &str, inputs: I) -> String
where
    I: IntoIterator<Item = (&'a String, &'a ActionInput)>,
{
    let mut lines = vec![
        "```yaml".to_string(),
        format!("- uses: {action_path}"),
        "  with:".to_string(),
    ];
    lines.extend(format_usage_lines(inputs));
    lines.push("```".to_string());
    lines.join("\n")
}

/// Snippet with required inputs only
pub fn minimal_usage_example(action_path: &str, inputs: &IndexMap<String, ActionInput>) -> String {
    example_usage(action_path, inputs.iter().filter(|(_, input)| input.required))
}

/// Snippet with required inputs plus every input that has a non-empty default
pub fn defaults_usage_example(
    action_path: &str,
    inputs: &IndexMap<String, ActionInput>,
) -> String {
    example_usage(
        action_path,
        inputs.iter().filter(|(_, input)| {
            input.required || input.default.as_deref().is_some_and(|d| !d.is_empty())
        }),
    )
}

/// Concatenate the `*.md` files in `dir`, sorted by file name.
///
/// Each file is trimmed and empty files are skipped; files are separated by a
/// blank line.
pub fn load_custom_usage_examples(dir: &Path) -> Result<String> {
    if !dir.is_dir() {
        return Err(Error::Config(format!(
            "Usage dir '{}' does not exist",
            dir.display()
        )));
    }

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "md") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut examples = Vec::new();
    for path in paths {
        let content = std::fs::read_to_string(&path)?;
        let content = content.trim();
        if !content.is_empty() {
            examples.push(content.to_string());
        }
    }

    Ok(examples.join("\n\n"))
}
