//! Test workspace and binary runner for `tk` end-to-end tests.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use assert_cmd::Command;
use tempfile::TempDir;

/// Temporary project root with a predictable directory name, so ids
/// generated inside it get the stable prefix `td`.
pub struct TkWorkspace {
    _dir: TempDir,
    root: PathBuf,
}

impl TkWorkspace {
    #[must_use]
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp workspace");
        let root = dir.path().join("ticket-demo");
        fs::create_dir(&root).expect("create project root");
        Self { _dir: dir, root }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn tickets_dir(&self) -> PathBuf {
        self.root.join(".tickets")
    }

    /// Seed a ticket file directly, bypassing the CLI.
    pub fn seed_ticket(&self, id: &str, status: &str, priority: i32, deps: &[&str], title: &str) {
        let dir = self.tickets_dir();
        fs::create_dir_all(&dir).expect("create tickets dir");
        let deps = deps.join(", ");
        let contents = format!(
            "---\nid: {id}\nstatus: {status}\ndeps: [{deps}]\nlinks: []\ncreated: 2025-06-01T10:00:00Z\ntype: task\npriority: {priority}\n---\n# {title}\n"
        );
        fs::write(dir.join(format!("{id}.md")), contents).expect("seed ticket");
    }

    /// Read a seeded or created ticket file back.
    #[must_use]
    pub fn read_ticket(&self, id: &str) -> String {
        fs::read_to_string(self.tickets_dir().join(format!("{id}.md"))).expect("read ticket")
    }
}

impl Default for TkWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Captured output with decoded streams.
pub struct RunOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl RunOutput {
    /// Trimmed stdout — handy for single-line outputs like create's id.
    #[must_use]
    pub fn line(&self) -> String {
        self.stdout.trim().to_string()
    }
}

/// Run `tk` in the workspace with the given arguments.
pub fn run_tk<I, S>(workspace: &TkWorkspace, args: I, context: &str) -> RunOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = Command::cargo_bin("tk")
        .expect("tk binary")
        .args(args)
        .current_dir(workspace.root())
        .output()
        .unwrap_or_else(|e| panic!("{context}: failed to run tk: {e}"));

    RunOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// Run `tk` with text piped to stdin.
pub fn run_tk_stdin(workspace: &TkWorkspace, args: &[&str], stdin: &str, context: &str) -> RunOutput {
    let output = Command::cargo_bin("tk")
        .expect("tk binary")
        .args(args)
        .current_dir(workspace.root())
        .write_stdin(stdin)
        .output()
        .unwrap_or_else(|e| panic!("{context}: failed to run tk: {e}"));

    RunOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
