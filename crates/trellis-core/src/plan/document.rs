//! Plan document template and title handling.

use crate::frontmatter;

/// Derive a file-name slug from a plan title.
///
/// Lower-cases the title and joins its whitespace-separated words with a
/// single `-`. Path separators become `-` as well, so the slug is always a
/// single path component.
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .replace(['/', '\\'], "-")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Render a new plan document: header, title heading, and empty
/// Goal and Tasks sections.
pub fn render_document(id: &str, status: &str, repo: &str, created: &str, title: &str) -> String {
    let header = frontmatter::encode([
        ("id", id),
        ("status", status),
        ("repo", repo),
        ("created", created),
    ]);
    format!("{header}# {title}\n\n## Goal\n\n## Tasks\n- [ ]\n")
}

/// Return the first level-1 heading of a document body.
pub fn extract_title(body: &str) -> Option<String> {
    body.lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .filter(|title| !title.is_empty())
}
