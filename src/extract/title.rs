/// First level-1 heading in the document, if any.
///
/// `None` means the caller should fall back to the filename stem.
pub fn extract(markdown: &str) -> Option<String> {
    markdown
        .lines()
        .find_map(|line| line.strip_prefix("# ").map(|t| t.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_h1() {
        let md = "# Grid Basics\n\nSome text.\n\n## Details\n";
        assert_eq!(extract(md).as_deref(), Some("Grid Basics"));
    }

    #[test]
    fn h1_after_preamble() {
        let md = "---\norphan: true\n---\n\n# Late Title\n";
        assert_eq!(extract(md).as_deref(), Some("Late Title"));
    }

    #[test]
    fn deeper_headings_ignored() {
        let md = "## Not a title\n\n### Also not\n";
        assert_eq!(extract(md), None);
    }

    #[test]
    fn no_heading() {
        assert_eq!(extract("just prose\n"), None);
    }
}
