//! In-place frontmatter mutation engine.
//!
//! Ticket files carry a flat `key: value` header delimited by `---`
//! marker lines. Every operation here is a single-pass line scan that
//! toggles an in-header flag on each marker line, touches exactly one
//! field, and copies every other byte through verbatim. The flag
//! toggles on *every* marker line, so a well-formed file must contain
//! exactly two of them — callers guarantee that.
//!
//! Writes go through a temp file in the same directory followed by an
//! atomic rename: a concurrent reader sees either the old or the new
//! file, never a partial one. The temp file is removed on every
//! failure path. There is no cross-process locking — two simultaneous
//! writers to the same ticket are a last-rename-wins race.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, TicketError};

/// Header delimiter line (exact match, nothing else on the line).
pub const MARKER: &str = "---";

/// Section heading that add-note appends under.
pub const NOTES_HEADING: &str = "## Notes";

/// True for a line that is exactly the header delimiter.
#[must_use]
pub fn is_marker(line: &str) -> bool {
    line == "---\n" || line == MARKER
}

/// Tokenize a bracketed array: the content between the first `[` and
/// the `]` after it, comma-split, trimmed, with empty tokens dropped.
///
/// Accepts a whole header line or just the value part; anything
/// without a bracket pair yields an empty list.
#[must_use]
pub fn parse_array_tokens(line: &str) -> Vec<String> {
    let Some(open) = line.find('[') else {
        return Vec::new();
    };
    let Some(close) = line[open..].find(']') else {
        return Vec::new();
    };
    line[open + 1..open + close]
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(ToString::to_string)
        .collect()
}

// ============================================================================
// Reads
// ============================================================================

/// Read the first `key:` scalar inside the header, trimmed.
///
/// Returns `None` when the header has no such field.
///
/// # Errors
///
/// Returns `UnreadableFile` if the file cannot be read.
pub fn read_scalar(path: &Path, key: &str) -> Result<Option<String>> {
    let contents = read_file(path)?;
    Ok(find_header_line(&contents, key)
        .map(|line| line[key.len() + 1..].trim().to_string()))
}

/// Read the `key` array field from the header.
///
/// An absent field, or one with an empty bracket body, is an empty list.
///
/// # Errors
///
/// Returns `UnreadableFile` if the file cannot be read.
pub fn read_array(path: &Path, key: &str) -> Result<Vec<String>> {
    let contents = read_file(path)?;
    Ok(find_header_line(&contents, key)
        .map(parse_array_tokens)
        .unwrap_or_default())
}

// ============================================================================
// Mutations
// ============================================================================

/// Replace the first `key:` header line with `key: value`.
///
/// Every other line is copied through untouched; a header without the
/// key is a silent no-op. A matching line outside the header is never
/// rewritten.
///
/// # Errors
///
/// Returns `UnreadableFile` on read failure and `WriteFailed` when the
/// temp file cannot be written or the rename fails.
pub fn write_scalar(path: &Path, key: &str, value: &str) -> Result<()> {
    let contents = read_file(path)?;
    let prefix = format!("{key}:");
    let mut out = String::with_capacity(contents.len() + value.len());
    let mut in_header = false;
    let mut replaced = false;

    for line in contents.split_inclusive('\n') {
        if is_marker(line) {
            in_header = !in_header;
            out.push_str(line);
        } else if in_header && !replaced && line.starts_with(&prefix) {
            out.push_str(&format!("{key}: {value}\n"));
            replaced = true;
        } else {
            out.push_str(line);
        }
    }

    debug!(path = %path.display(), key, replaced, "write scalar field");
    replace_file(path, &out)
}

/// Append `token` to the `key` array, idempotently.
///
/// Returns `false` without touching the file when the token is already
/// present. An empty array becomes `[token]`; otherwise the token is
/// spliced in before the closing bracket, preserving the original line
/// prefix byte-for-byte.
///
/// # Errors
///
/// Returns `UnreadableFile` on read failure and `WriteFailed` when the
/// rewrite cannot be completed.
pub fn append_array_value(path: &Path, key: &str, token: &str) -> Result<bool> {
    if read_array(path, key)?.iter().any(|t| t == token) {
        return Ok(false);
    }

    let contents = read_file(path)?;
    let prefix = format!("{key}:");
    let mut out = String::with_capacity(contents.len() + token.len() + 4);
    let mut in_header = false;
    let mut spliced = false;

    for line in contents.split_inclusive('\n') {
        if is_marker(line) {
            in_header = !in_header;
            out.push_str(line);
            continue;
        }
        if in_header && !spliced && line.starts_with(&prefix) {
            if let Some(rewritten) = splice_token(line, key, token) {
                out.push_str(&rewritten);
                spliced = true;
                continue;
            }
        }
        out.push_str(line);
    }

    debug!(path = %path.display(), key, token, "append array value");
    replace_file(path, &out)?;
    Ok(true)
}

/// Remove every occurrence of `token` from the `key` array and
/// re-serialize it as `key: [a, b]` (or `key: []`).
///
/// Silent no-op when the token is absent; callers wanting a "not
/// found" report check presence first via [`read_array`].
///
/// # Errors
///
/// Returns `UnreadableFile` on read failure and `WriteFailed` when the
/// rewrite cannot be completed.
pub fn remove_array_value(path: &Path, key: &str, token: &str) -> Result<()> {
    let contents = read_file(path)?;
    let prefix = format!("{key}:");
    let mut out = String::with_capacity(contents.len());
    let mut in_header = false;
    let mut rewritten = false;

    for line in contents.split_inclusive('\n') {
        if is_marker(line) {
            in_header = !in_header;
            out.push_str(line);
        } else if in_header && !rewritten && line.starts_with(&prefix) {
            let kept: Vec<String> = parse_array_tokens(line)
                .into_iter()
                .filter(|t| t != token)
                .collect();
            out.push_str(&format!("{key}: [{}]\n", kept.join(", ")));
            rewritten = true;
        } else {
            out.push_str(line);
        }
    }

    debug!(path = %path.display(), key, token, "remove array value");
    replace_file(path, &out)
}

/// Append a timestamped note entry to the body, creating the Notes
/// section when missing. Same atomic replace discipline as the header
/// mutations.
///
/// # Errors
///
/// Returns `UnreadableFile` on read failure and `WriteFailed` when the
/// rewrite cannot be completed.
pub fn append_note(path: &Path, timestamp: &str, text: &str) -> Result<()> {
    let mut contents = read_file(path)?;
    if !contents.contains(NOTES_HEADING) {
        contents.push_str(&format!("\n{NOTES_HEADING}\n"));
    }
    contents.push_str(&format!("\n**{timestamp}**\n\n{text}\n"));
    replace_file(path, &contents)
}

// ============================================================================
// Internal helpers
// ============================================================================

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|_| TicketError::UnreadableFile {
        path: path.to_path_buf(),
    })
}

/// First header line starting with `key:`.
fn find_header_line<'a>(contents: &'a str, key: &str) -> Option<&'a str> {
    let prefix = format!("{key}:");
    let mut in_header = false;
    for line in contents.split_inclusive('\n') {
        if is_marker(line) {
            in_header = !in_header;
        } else if in_header && line.starts_with(&prefix) {
            return Some(line);
        }
    }
    None
}

/// Rewrite an array line with `token` appended. Returns `None` when
/// the line has no bracket pair to splice into.
fn splice_token(line: &str, key: &str, token: &str) -> Option<String> {
    let open = line.find('[')?;
    let close = open + line[open..].find(']')?;
    if parse_array_tokens(line).is_empty() {
        Some(format!("{key}: [{token}]\n"))
    } else {
        Some(format!("{}, {token}]\n", &line[..close]))
    }
}

/// Write `contents` to a sibling temp file, then atomically rename it
/// over `path`.
fn replace_file(path: &Path, contents: &str) -> Result<()> {
    let tmp = tmp_path(path);
    if fs::write(&tmp, contents).is_err() {
        let _ = fs::remove_file(&tmp);
        return Err(TicketError::WriteFailed {
            path: path.to_path_buf(),
        });
    }
    if fs::rename(&tmp, path).is_err() {
        let _ = fs::remove_file(&tmp);
        return Err(TicketError::WriteFailed {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_os_string();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}
