//! Frontmatter header encoding and decoding.
//!
//! A header is a block of `key: value` lines between two `---` marker lines
//! at the very start of a document:
//!
//! ```text
//! ---
//! id: ap1f2e3
//! status: draft
//! ---
//!
//! # Title
//! ```
//!
//! Decoding never fails. A document without a complete header decodes to an
//! empty map, and lines that are not `key: value` pairs are skipped.

use std::collections::BTreeMap;

/// Marker line that opens and closes a header block.
pub const DELIMITER: &str = "---";

/// Render `fields` as a header block, in the order given.
///
/// The block is followed by a blank line so the document body can be
/// appended directly.
pub fn encode<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut out = String::new();
    out.push_str(DELIMITER);
    out.push('\n');
    for (key, value) in fields {
        out.push_str(key.as_ref());
        out.push_str(": ");
        out.push_str(value.as_ref());
        out.push('\n');
    }
    out.push_str(DELIMITER);
    out.push_str("\n\n");
    out
}

/// Parse the header block at the start of `document`.
///
/// The header is the shortest span between an opening `---` line and the
/// next line starting with `---`. Each line is split on its first colon;
/// keys and values are trimmed and a repeated key keeps its last value.
pub fn decode(document: &str) -> BTreeMap<String, String> {
    let mut fields = BTreeMap::new();
    let Some(block) = header_block(document) else {
        return fields;
    };

    for line in block.lines() {
        let Some(idx) = line.find(':') else {
            continue;
        };
        if idx == 0 {
            continue;
        }
        let key = line[..idx].trim();
        if key.is_empty() {
            continue;
        }
        fields.insert(key.to_string(), line[idx + 1..].trim().to_string());
    }

    fields
}

/// Return the text following the closing header delimiter, or the whole
/// document when it has no header.
pub fn body(document: &str) -> &str {
    let Some(rest) = opening(document) else {
        return document;
    };
    match rest.find("\n---") {
        Some(idx) => {
            let after = &rest[idx + 1..];
            // Skip the remainder of the closing delimiter line.
            match after.find('\n') {
                Some(nl) => &after[nl + 1..],
                None => "",
            }
        }
        None => document,
    }
}

fn opening(document: &str) -> Option<&str> {
    document
        .strip_prefix("---\n")
        .or_else(|| document.strip_prefix("---\r\n"))
}

fn header_block(document: &str) -> Option<&str> {
    let rest = opening(document)?;
    let end = rest.find("\n---")?;
    Some(&rest[..end])
}
