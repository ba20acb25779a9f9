//! Ticket id generation.
//!
//! Format: `<prefix>-<hex4>`. The prefix is derived from the working
//! directory's last path segment — the first letter of each `-`/`_`/
//! space-delimited word, capped at 10 characters, falling back to the
//! first 3 raw characters when there are no word segments. The suffix
//! is the first two bytes, hex-encoded, of SHA-256 over pid + current
//! time.
//!
//! Uniqueness is best-effort: two hex bytes is a small space and
//! collisions are possible in large stores.

use sha2::{Digest, Sha256};

/// Fallback id used when the working directory cannot be determined.
const FALLBACK_ID: &str = "tck-0000";

/// Generate a ticket id from the current environment.
#[must_use]
pub fn generate_ticket_id() -> String {
    let Ok(cwd) = std::env::current_dir() else {
        return FALLBACK_ID.to_string();
    };
    let dir_name = cwd
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let prefix = directory_prefix(&dir_name);
    let entropy = format!(
        "{}{}",
        std::process::id(),
        chrono::Utc::now().timestamp()
    );
    let digest = Sha256::digest(entropy.as_bytes());

    format!("{prefix}-{:02x}{:02x}", digest[0], digest[1])
}

/// First letter of each word segment, capped at 10 characters; first
/// three characters of the raw name when there are no segments.
fn directory_prefix(dir_name: &str) -> String {
    let mut prefix = String::new();
    let mut taken = 0;
    let mut in_segment = false;

    for c in dir_name.chars() {
        if taken >= 10 {
            break;
        }
        if matches!(c, '-' | '_' | ' ') {
            in_segment = false;
        } else if !in_segment {
            prefix.push(c);
            taken += 1;
            in_segment = true;
        }
    }

    if prefix.is_empty() {
        dir_name.chars().take(3).collect()
    } else {
        prefix
    }
}
