pub mod authors;
pub mod title;

/// Everything extraction learns about one document's text.
pub struct DocFacts {
    pub authors: Vec<String>,
    pub title: Option<String>,
}

pub fn extract_all(markdown: &str) -> DocFacts {
    DocFacts {
        authors: authors::extract(markdown),
        title: title::extract(markdown),
    }
}
