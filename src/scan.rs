use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use crate::extract;
use crate::sections::SectionMap;

/// Filename prefixes that never count as articles: generated author pages,
/// the introduction page and the references page.
const SKIP_PREFIXES: &[&str] = &["author-", "intro", "references"];

/// One article credited to an author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleEntry {
    pub doc_id: String,
    pub title: String,
    pub section: String,
}

/// Author id → that author's articles, sorted by document id.
pub type AuthorArticleIndex = BTreeMap<String, Vec<ArticleEntry>>;

/// Scan every markdown document directly inside `book_dir` and group the
/// resulting articles by credited author.
///
/// Unreadable documents are logged and contribute nothing; a failed read
/// never aborts the scan.
pub fn scan_articles(book_dir: &Path, sections: &SectionMap) -> Result<AuthorArticleIndex> {
    let paths = list_documents(book_dir)?;

    let pb = ProgressBar::new(paths.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len}")?
            .progress_chars("=> "),
    );

    let mut index = AuthorArticleIndex::new();
    for path in &paths {
        let doc_id = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();

        let text = match fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) => {
                warn!("Error reading {}: {}", path.display(), e);
                pb.inc(1);
                continue;
            }
        };

        let facts = extract::extract_all(&text);
        let title = facts.title.unwrap_or_else(|| doc_id.clone());
        let section = sections.section_for(&doc_id).to_string();

        for author in facts.authors {
            index.entry(author).or_default().push(ArticleEntry {
                doc_id: doc_id.clone(),
                title: title.clone(),
                section: section.clone(),
            });
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    for entries in index.values_mut() {
        entries.sort_by(|a, b| a.doc_id.cmp(&b.doc_id));
    }
    Ok(index)
}

/// Markdown files directly in `book_dir` (non-recursive), reserved prefixes
/// excluded, sorted by path for stable processing order.
fn list_documents(book_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(book_dir)
        .with_context(|| format!("Failed to read book directory {}", book_dir.display()))?
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            let is_md = path.is_file() && path.extension().is_some_and(|ext| ext == "md");
            if is_md {
                Some(path)
            } else {
                None
            }
        })
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|name| !SKIP_PREFIXES.iter().any(|p| name.starts_with(p)))
        })
        .collect();
    paths.sort();
    Ok(paths)
}
