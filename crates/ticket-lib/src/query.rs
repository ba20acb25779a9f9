//! Header-to-JSON record stream for the query command.
//!
//! Each ticket file becomes one single-line JSON object streaming its
//! header key/value pairs in file order. `deps` and `links` become
//! string arrays and `priority` is emitted as a bare literal — the
//! header must hold a valid integer there or the record is malformed.
//! The records are assembled by hand: the escaping contract (quote,
//! backslash, newline, carriage return, tab — nothing else) and the
//! raw priority passthrough are part of the format.

use std::fs;
use std::path::Path;

use crate::error::{Result, TicketError};
use crate::frontmatter::{is_marker, parse_array_tokens};
use crate::store::TicketStore;

/// Escape a string for embedding in a double-quoted JSON literal.
#[must_use]
pub fn escape_json(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

/// Build one JSON record from a ticket file's header.
///
/// # Errors
///
/// Returns `UnreadableFile` if the file cannot be read.
pub fn ticket_record(path: &Path) -> Result<String> {
    let contents = fs::read_to_string(path).map_err(|_| TicketError::UnreadableFile {
        path: path.to_path_buf(),
    })?;

    let mut record = String::from("{");
    let mut first = true;
    let mut in_header = false;

    for line in contents.split_inclusive('\n') {
        if is_marker(line) {
            if in_header {
                break;
            }
            in_header = true;
            continue;
        }
        if !in_header {
            continue;
        }
        let Some(colon) = line.find(':') else { continue };
        let key = &line[..colon];
        let value = line[colon + 1..]
            .trim_start_matches(' ')
            .trim_end_matches('\n');

        if !first {
            record.push(',');
        }
        first = false;

        record.push('"');
        record.push_str(&escape_json(key));
        record.push_str("\":");

        if key == "deps" || key == "links" {
            record.push('[');
            for (i, item) in parse_array_tokens(value).iter().enumerate() {
                if i > 0 {
                    record.push(',');
                }
                record.push('"');
                record.push_str(&escape_json(item));
                record.push('"');
            }
            record.push(']');
        } else if key == "priority" {
            record.push_str(value);
        } else {
            record.push('"');
            record.push_str(&escape_json(value));
            record.push('"');
        }
    }

    record.push('}');
    Ok(record)
}

/// One record per ticket file in the store, best-effort: unreadable
/// files are skipped and a missing store directory is an empty stream.
///
/// # Errors
///
/// Returns `UnreadableStore` if the directory exists but cannot be
/// scanned.
pub fn collect_records(store: &TicketStore) -> Result<Vec<String>> {
    let files = match store.list_files() {
        Ok(files) => files,
        Err(TicketError::UnreadableStore { .. }) if !store.dir().exists() => {
            return Ok(Vec::new());
        }
        Err(e) => return Err(e),
    };

    let mut records = Vec::with_capacity(files.len());
    for path in files {
        if let Ok(record) = ticket_record(&path) {
            records.push(record);
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_for(contents: &str) -> String {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t-01.md");
        fs::write(&path, contents).unwrap();
        ticket_record(&path).unwrap()
    }

    #[test]
    fn test_escape_contract() {
        assert_eq!(escape_json(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_json(r"a\b"), r"a\\b");
        assert_eq!(escape_json("a\nb\rc\td"), r"a\nb\rc\td");
        assert_eq!(escape_json("plain"), "plain");
    }

    #[test]
    fn test_record_keys_in_file_order() {
        let record = record_for(
            "---\nid: t-01\nstatus: open\ndeps: []\nlinks: []\ncreated: 2025-06-01T10:00:00Z\ntype: task\npriority: 2\n---\n# Title\n",
        );
        assert_eq!(
            record,
            r#"{"id":"t-01","status":"open","deps":[],"links":[],"created":"2025-06-01T10:00:00Z","type":"task","priority":2}"#
        );
    }

    #[test]
    fn test_record_arrays_and_priority() {
        let record = record_for(
            "---\nid: t-01\ndeps: [a-1, b-2]\nlinks: [c-3]\npriority: 0\n---\n",
        );
        let parsed: serde_json::Value = serde_json::from_str(&record).unwrap();
        assert_eq!(parsed["deps"], serde_json::json!(["a-1", "b-2"]));
        assert_eq!(parsed["links"], serde_json::json!(["c-3"]));
        assert_eq!(parsed["priority"], serde_json::json!(0));
    }

    #[test]
    fn test_record_escapes_scalar_values() {
        let record = record_for("---\nassignee: He said \"hi\"\tok\n---\n");
        let parsed: serde_json::Value = serde_json::from_str(&record).unwrap();
        assert_eq!(parsed["assignee"], serde_json::json!("He said \"hi\"\tok"));
    }

    #[test]
    fn test_record_ignores_body() {
        let record = record_for("---\nid: t-01\n---\n# Title\n\nbody: not a field\n");
        assert_eq!(record, r#"{"id":"t-01"}"#);
    }

    #[test]
    fn test_records_parse_as_json() {
        let dir = tempfile::tempdir().unwrap();
        let store = TicketStore::new(dir.path());
        fs::write(
            dir.path().join("t-01.md"),
            "---\nid: t-01\nstatus: open\ndeps: []\nlinks: []\npriority: 2\n---\n# A\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("t-02.md"),
            "---\nid: t-02\nstatus: closed\ndeps: [t-01]\nlinks: []\npriority: 1\n---\n# B\n",
        )
        .unwrap();

        let records = collect_records(&store).unwrap();
        assert_eq!(records.len(), 2);
        for record in &records {
            let parsed: serde_json::Value = serde_json::from_str(record).unwrap();
            assert!(parsed.is_object());
        }
    }

    #[test]
    fn test_missing_store_is_empty_stream() {
        let store = TicketStore::new("/nonexistent/.tickets");
        assert!(collect_records(&store).unwrap().is_empty());
    }
}
