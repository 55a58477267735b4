//! Git worktree management for parallel tasks.
//!
//! Each task gets its own worktree checked out on a new branch, placed next
//! to the base repository at `<repo>-<branch>`. Worktrees share the object
//! store of the base repository but have independent working directories
//! and index files.
//!
//! The existence checks done before calling git are a fast path for clear
//! error messages only. Two concurrent creations of the same branch can both
//! pass them, in which case git's own failure is what the loser sees.

pub mod git;
pub mod porcelain;

use std::path::{Path, PathBuf};

use thiserror::Error;

pub use git::{GitBackend, GitCli};
pub use porcelain::parse_porcelain_output;

/// Errors that can occur during worktree operations.
#[derive(Debug, Error)]
pub enum WorktreeError {
    /// The base repository path does not exist.
    #[error("Base repo not found: {}", .0.display())]
    RepoNotFound(PathBuf),

    /// The target worktree path is already present.
    #[error("Worktree already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// A required argument was empty.
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// The git executable could not be run.
    #[error("git command failed: {message}")]
    GitCommand {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A git command exited with a non-zero status.
    #[error("git {command} failed (exit {code}): {}", .stderr.trim_end())]
    GitExit {
        command: String,
        code: i32,
        stderr: String,
    },
}

/// Information about a single git worktree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorktreeInfo {
    /// Path to the worktree directory, as reported by git.
    pub path: PathBuf,
    /// Short name of the checked-out branch; `None` when detached or bare.
    pub branch: Option<String>,
    /// HEAD commit SHA, when reported.
    pub head: Option<String>,
}

/// Creates and lists worktrees relative to a working directory.
///
/// Relative repository paths are resolved against `work_dir`, which the CLI
/// sets to the process working directory.
#[derive(Debug, Clone)]
pub struct WorktreeManager<G = GitCli> {
    git: G,
    work_dir: PathBuf,
}

impl<G: GitBackend> WorktreeManager<G> {
    /// Create a manager that runs `git` with paths resolved against
    /// `work_dir`.
    pub fn new(git: G, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            git,
            work_dir: work_dir.into(),
        }
    }

    /// Return the directory relative paths are resolved against.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Derive the worktree path for a repository and branch:
    /// `<repo>-<branch>`, with trailing separators dropped from `repo`.
    pub fn worktree_path(repo: &str, branch: &str) -> PathBuf {
        let repo = repo.trim_end_matches(['/', '\\']);
        PathBuf::from(format!("{repo}-{branch}"))
    }

    /// Create a worktree for `repo` on a new branch `branch`.
    ///
    /// Returns the worktree path in the same (possibly relative) form as
    /// `repo`. Fails with [`WorktreeError::RepoNotFound`] if `repo` does not
    /// exist and [`WorktreeError::AlreadyExists`] if the worktree path does;
    /// git failures (existing branch, not a repository) are returned as-is.
    pub fn create(&self, repo: &str, branch: &str) -> Result<PathBuf, WorktreeError> {
        require("repo", repo)?;
        require("branch", branch)?;

        let repo_path = self.resolve(Path::new(repo));
        if !repo_path.exists() {
            return Err(WorktreeError::RepoNotFound(PathBuf::from(repo)));
        }

        let worktree_path = Self::worktree_path(repo, branch);
        let target = self.resolve(&worktree_path);
        if target.exists() {
            return Err(WorktreeError::AlreadyExists(worktree_path));
        }

        self.git.add_worktree(&repo_path, branch, &target)?;

        tracing::info!(
            path = %worktree_path.display(),
            branch,
            "created worktree"
        );
        Ok(worktree_path)
    }

    /// List the worktrees registered with `repo`, in git's order.
    pub fn list(&self, repo: &str) -> Result<Vec<WorktreeInfo>, WorktreeError> {
        require("repo", repo)?;

        let repo_path = self.resolve(Path::new(repo));
        if !repo_path.exists() {
            return Err(WorktreeError::RepoNotFound(PathBuf::from(repo)));
        }

        let raw = self.git.list_worktrees(&repo_path)?;
        Ok(parse_porcelain_output(&raw))
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.work_dir.join(path)
        }
    }
}

fn require(field: &'static str, value: &str) -> Result<(), WorktreeError> {
    if value.trim().is_empty() {
        return Err(WorktreeError::InvalidInput {
            field,
            reason: "must not be empty".into(),
        });
    }
    Ok(())
}
