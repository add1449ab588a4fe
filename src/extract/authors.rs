use std::sync::LazyLock;

use regex::Regex;

static MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\*Authors?:\s*(.+?)\*").unwrap());
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap());

/// Extract credited author ids from a document's attribution marker.
///
/// The marker is a single line of the form `*Author(s): ...*`. Names written
/// as markdown links count by their display text; otherwise the marker text
/// is split on commas. Ids come back lower-cased and trimmed. No marker
/// means an unattributed document, not an error.
pub fn extract(markdown: &str) -> Vec<String> {
    let Some(caps) = MARKER_RE.captures(markdown) else {
        return Vec::new();
    };
    let credited = &caps[1];

    // Links take precedence: [Ada](intro.md#ada) credits "ada".
    let linked: Vec<String> = LINK_RE
        .captures_iter(credited)
        .map(|c| c[1].trim().to_lowercase())
        .collect();
    if !linked.is_empty() {
        return linked;
    }

    credited
        .split(',')
        .map(|name| name.trim().to_lowercase())
        .filter(|name| !name.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linked_names() {
        let md = "# Grid Basics\n\n*Author: [Ada](x.md#ada), [Bo](y.md#bo)*\n";
        assert_eq!(extract(md), vec!["ada", "bo"]);
    }

    #[test]
    fn plain_names() {
        let md = "*Authors: Ada, Bo*";
        assert_eq!(extract(md), vec!["ada", "bo"]);
    }

    #[test]
    fn marker_is_case_insensitive() {
        let md = "*AUTHORS: Ada*";
        assert_eq!(extract(md), vec!["ada"]);
    }

    #[test]
    fn no_marker() {
        let md = "# A page\n\nBody text with no attribution.\n";
        assert!(extract(md).is_empty());
    }

    #[test]
    fn marker_anywhere_in_document() {
        let md = "# Title\n\nIntro paragraph.\n\n*Author: [Ada](intro.md#ada)*\n\nMore text.\n";
        assert_eq!(extract(md), vec!["ada"]);
    }

    #[test]
    fn names_are_trimmed() {
        let md = "*Authors:  Ada ,  Bo *";
        assert_eq!(extract(md), vec!["ada", "bo"]);
    }
}
