//! The two git operations the worktree manager depends on.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use super::WorktreeError;

/// Backend that creates and lists worktrees for a repository.
///
/// [`GitCli`] shells out to the `git` executable; tests substitute a fake
/// that returns canned output.
pub trait GitBackend {
    /// Create a worktree at `target` on a new branch `branch`, running
    /// against the repository at `repo`.
    fn add_worktree(&self, repo: &Path, branch: &str, target: &Path) -> Result<(), WorktreeError>;

    /// Return the raw output of `git worktree list --porcelain` for `repo`.
    fn list_worktrees(&self, repo: &Path) -> Result<String, WorktreeError>;
}

/// [`GitBackend`] that runs a git executable.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: PathBuf,
}

impl GitCli {
    /// Use `program` (a name on `PATH` or a path) as the git executable.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Return the git executable this backend runs.
    pub fn program(&self) -> &Path {
        &self.program
    }

    fn command(&self, repo: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.current_dir(repo);
        cmd
    }

    fn run(&self, mut cmd: Command, command: &str) -> Result<Output, WorktreeError> {
        tracing::debug!(command, "running git");
        let output = cmd.output().map_err(|e| WorktreeError::GitCommand {
            message: format!("failed to run git {command}"),
            source: e,
        })?;

        if !output.status.success() {
            return Err(WorktreeError::GitExit {
                command: command.into(),
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }

        Ok(output)
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new("git")
    }
}

impl GitBackend for GitCli {
    fn add_worktree(&self, repo: &Path, branch: &str, target: &Path) -> Result<(), WorktreeError> {
        let mut cmd = self.command(repo);
        cmd.args(["worktree", "add", "-b"]).arg(branch).arg(target);
        self.run(cmd, "worktree add")?;
        Ok(())
    }

    fn list_worktrees(&self, repo: &Path) -> Result<String, WorktreeError> {
        let mut cmd = self.command(repo);
        cmd.args(["worktree", "list", "--porcelain"]);
        let output = self.run(cmd, "worktree list")?;
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}
