use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

/// One author's profile as declared in the book config.
#[derive(Debug, Clone)]
pub struct AuthorProfile {
    pub id: String,
    pub name: String,
    pub bio: String,
    pub github: String,
    pub linkedin: String,
    pub email: String,
}

/// Author id → profile, sorted by id for deterministic page generation.
pub type Registry = BTreeMap<String, AuthorProfile>;

#[derive(Deserialize)]
struct ConfigDoc {
    sphinx: Option<SphinxSection>,
}

#[derive(Deserialize)]
struct SphinxSection {
    config: Option<SphinxConfig>,
}

#[derive(Deserialize)]
struct SphinxConfig {
    myst_substitutions: Option<BTreeMap<String, serde_yaml::Value>>,
}

/// Load the author registry from the book's `_config.yml`.
///
/// A missing or malformed config is fatal: the tool cannot do anything
/// useful without a registry, so the error propagates instead of falling
/// back to an empty one.
pub fn load(path: &Path) -> Result<Registry> {
    let yaml = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let registry =
        parse(&yaml).with_context(|| format!("Invalid config {}", path.display()))?;
    info!("Loaded {} author profiles", registry.len());
    Ok(registry)
}

/// Parse the registry out of raw config YAML.
///
/// Author ids are the prefixes of `myst_substitutions` keys ending in
/// `_name`; the `_bio`, `_github`, `_linkedin` and `_email` companion keys
/// default to empty strings, and a non-string name falls back to the
/// title-cased id.
pub fn parse(yaml: &str) -> Result<Registry> {
    let doc: ConfigDoc = serde_yaml::from_str(yaml)?;
    let subs = doc
        .sphinx
        .and_then(|s| s.config)
        .and_then(|c| c.myst_substitutions)
        .context("config has no sphinx.config.myst_substitutions table")?;

    let field = |key: String| -> Option<String> {
        subs.get(&key).and_then(|v| v.as_str()).map(str::to_string)
    };

    let mut registry = Registry::new();
    for key in subs.keys() {
        let Some(id) = key.strip_suffix("_name") else {
            continue;
        };
        registry.insert(
            id.to_string(),
            AuthorProfile {
                id: id.to_string(),
                name: field(format!("{id}_name")).unwrap_or_else(|| title_case(id)),
                bio: field(format!("{id}_bio")).unwrap_or_default(),
                github: field(format!("{id}_github")).unwrap_or_default(),
                linkedin: field(format!("{id}_linkedin")).unwrap_or_default(),
                email: field(format!("{id}_email")).unwrap_or_default(),
            },
        );
    }
    Ok(registry)
}

/// "ada lovelace" → "Ada Lovelace"; word boundaries at any non-alphanumeric.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphanumeric() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
