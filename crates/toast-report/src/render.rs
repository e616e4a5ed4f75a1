use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

/// `{{ name }}` placeholders; whitespace inside the braces is optional.
static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").expect("Invalid placeholder regex")
});

/// Every distinct placeholder name appearing in the template.
pub fn extract_placeholders(template: &str) -> BTreeSet<String> {
    PLACEHOLDER_REGEX
        .captures_iter(template)
        .map(|captures| captures[1].to_string())
        .collect()
}

/// Result of one render pass. `text` is absent exactly when a critical
/// placeholder had no binding.
#[derive(Debug)]
pub struct RenderOutcome {
    /// Names of missing critical placeholders.
    pub errors: Vec<String>,
    /// Names of missing non-critical placeholders, substituted empty.
    pub warnings: Vec<String>,
    pub text: Option<String>,
}

impl RenderOutcome {
    pub fn succeeded(&self) -> bool {
        self.text.is_some()
    }
}

/// Substitute every placeholder in `template` from `variables`.
///
/// A placeholder in `critical` with no binding fails the whole render; any
/// other unbound placeholder is substituted with the empty string and
/// reported as a warning. Variables the template never mentions are
/// ignored.
pub fn render(
    template: &str,
    variables: &BTreeMap<String, String>,
    critical: &BTreeSet<String>,
) -> RenderOutcome {
    let placeholders = extract_placeholders(template);
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    for name in &placeholders {
        if variables.contains_key(name) {
            continue;
        }
        if critical.contains(name) {
            errors.push(name.clone());
        } else {
            warnings.push(name.clone());
        }
    }
    debug!(
        placeholders = placeholders.len(),
        bound = variables.len(),
        missing_critical = errors.len(),
        missing_other = warnings.len(),
        "rendering template"
    );
    if !errors.is_empty() {
        return RenderOutcome {
            errors,
            warnings,
            text: None,
        };
    }

    let text = PLACEHOLDER_REGEX
        .replace_all(template, |captures: &regex::Captures<'_>| {
            variables
                .get(&captures[1])
                .map(String::as_str)
                .unwrap_or("")
                .to_string()
        })
        .into_owned();
    RenderOutcome {
        errors,
        warnings,
        text: Some(text),
    }
}

/// Write the rendered script, replacing any previous run's output.
pub fn write_script(path: &Path, text: &str) -> std::io::Result<()> {
    fs::write(path, text)
}
