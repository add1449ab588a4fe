/// Fallback label for documents outside the section table.
const DEFAULT_SECTION: &str = "Other";

/// Section assignments mirroring the book's table of contents.
const SECTIONS: &[(&str, &str)] = &[
    ("01-introduction", "Getting Started"),
    ("02-setup", "Getting Started"),
    ("03-energy-basics", "Energy System Fundamentals"),
    ("04-electricity-markets", "Energy System Fundamentals"),
    ("05-optimization", "Modelling Techniques"),
    ("06-capacity-expansion", "Modelling Techniques"),
];

/// Static lookup from document id to section label.
pub struct SectionMap {
    entries: &'static [(&'static str, &'static str)],
}

impl SectionMap {
    pub fn with_defaults() -> Self {
        Self { entries: SECTIONS }
    }

    pub fn section_for(&self, doc_id: &str) -> &'static str {
        self.entries
            .iter()
            .find(|(id, _)| *id == doc_id)
            .map(|(_, label)| *label)
            .unwrap_or(DEFAULT_SECTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids() {
        let map = SectionMap::with_defaults();
        assert_eq!(map.section_for("01-introduction"), "Getting Started");
        assert_eq!(map.section_for("05-optimization"), "Modelling Techniques");
    }

    #[test]
    fn unknown_id_falls_back() {
        let map = SectionMap::with_defaults();
        assert_eq!(map.section_for("99-scratch"), "Other");
        assert_eq!(map.section_for(""), "Other");
    }
}
