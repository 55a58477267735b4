//! Shared test utilities for trellis tests.
//!
//! Provides throwaway git repositories with an initial commit and a helper
//! for writing fixture files.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Run git in `dir`, panicking with stderr on failure.
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap_or_else(|e| panic!("git {} failed to run: {e}", args.join(" ")));
    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Initialise a git repository at `path` with one commit on its default
/// branch. The directory is created if needed.
pub fn init_repo(path: &Path) {
    std::fs::create_dir_all(path).expect("failed to create repo dir");
    git(path, &["init"]);
    git(path, &["config", "user.email", "test@trellis.dev"]);
    git(path, &["config", "user.name", "Trellis Test"]);
    git(path, &["config", "commit.gpgsign", "false"]);
    std::fs::write(path.join("README.md"), "# Test repo\n").expect("failed to write README");
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Initial commit"]);
}

/// Create a temporary git repository with an initial commit.
///
/// Returns the `TempDir` (must be held alive) and the repository path.
pub fn create_temp_repo() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let repo_path = dir.path().to_path_buf();
    init_repo(&repo_path);
    (dir, repo_path)
}

/// Write `content` to `path`, creating parent directories. Returns `path`.
pub fn write_file(path: &Path, content: &str) -> PathBuf {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("failed to create parent dir");
    }
    std::fs::write(path, content).expect("failed to write file");
    path.to_path_buf()
}
