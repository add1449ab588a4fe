use crate::registry::AuthorProfile;
use crate::scan::ArticleEntry;

/// Render the full markdown content of one author's generated page.
///
/// Pure string building: identical inputs produce byte-identical output.
/// The social-link row renders even when a URL field is empty; the page is
/// consumed by a MyST build that tolerates empty link targets.
pub fn render_page(author: &AuthorProfile, articles: &[ArticleEntry]) -> String {
    let mut lines: Vec<String> = vec![
        "---".into(),
        "orphan: true".into(),
        "---".into(),
        String::new(),
        format!("(author-{}-page)=", author.id),
        format!("# {} - Articles", author.name),
        String::new(),
        format!(
            "<a href=\"{}\"><i class=\"fa-brands fa-github author-icon\"></i></a> \
             <a href=\"{}\"><i class=\"fa-brands fa-linkedin author-icon\"></i></a> \
             <a href=\"mailto:{}\"><i class=\"fa-solid fa-envelope author-icon\"></i></a>",
            author.github, author.linkedin, author.email
        ),
        String::new(),
        author.bio.clone(),
        String::new(),
        format!("## Articles by {}", author.name),
        String::new(),
    ];

    if articles.is_empty() {
        lines.push("*No articles found.*".into());
    } else {
        lines.push("```{list-table}".into());
        lines.push(":header-rows: 1".into());
        lines.push(String::new());
        lines.push("* - Article".into());
        lines.push("  - Section".into());
        for entry in articles {
            lines.push(format!("* - {{doc}}`{}`", entry.doc_id));
            lines.push(format!("  - {}", entry.section));
        }
        lines.push("```".into());
    }

    lines.push(String::new());
    lines.push(format!(
        "<a href=\"intro.html#{}\">← Back to About the Author</a>",
        author.id
    ));
    lines.push(String::new());

    lines.join("\n")
}
