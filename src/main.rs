mod extract;
mod registry;
mod render;
mod scan;
mod sections;

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;

use crate::sections::SectionMap;

/// Book directory holding the markdown corpus; author pages are written
/// back into it.
const BOOK_DIR: &str = "energy_modelling_notes";
const CONFIG_PATH: &str = "energy_modelling_notes/_config.yml";

#[derive(Parser)]
#[command(
    name = "author_pages",
    about = "Generate per-author article index pages from markdown attribution markers"
)]
struct Cli {}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let _cli = Cli::parse();

    run(Path::new(BOOK_DIR), Path::new(CONFIG_PATH))?;

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }
    Ok(())
}

/// Full pipeline: load registry, scan the corpus, write one page per
/// registered author. Only a missing or invalid registry aborts the run.
fn run(book_dir: &Path, config_path: &Path) -> Result<()> {
    let registry = registry::load(config_path)?;
    let sections = SectionMap::with_defaults();

    println!("Scanning articles for author attribution...");
    let index = scan::scan_articles(book_dir, &sections)?;

    println!("Found articles for {} authors:", index.len());
    for (author, articles) in &index {
        println!("  - {}: {} articles", author, articles.len());
    }

    // Credited but unregistered: never rendered, worth a warning.
    for author in index.keys() {
        if !registry.contains_key(author) {
            warn!("No metadata found for author '{}'", author);
        }
    }

    for (id, profile) in &registry {
        let articles = index.get(id).map(Vec::as_slice).unwrap_or(&[]);
        let content = render::render_page(profile, articles);
        let out_path = book_dir.join(format!("author-{}.md", id));
        fs::write(&out_path, content)
            .with_context(|| format!("Failed to write {}", out_path.display()))?;
        println!("Generated: author-{}.md", id);
    }

    println!(
        "\nDone! Run 'jupyter-book build {}' to build the book.",
        book_dir.display()
    );
    Ok(())
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
