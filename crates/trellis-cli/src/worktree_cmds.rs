//! CLI handlers for worktree commands.

use anyhow::{Context, Result};

use trellis_core::WorktreeInfo;

use crate::config::TrellisConfig;

/// Create a worktree for `repo` on a new branch and print where it is.
pub fn cmd_create_worktree(config: &TrellisConfig, repo: &str, branch: &str) -> Result<()> {
    let path = config.worktree_manager().create(repo, branch)?;

    println!("Created worktree: {}", path.display());
    println!("  cd {}", path.display());
    Ok(())
}

/// List the worktrees registered with `repo`.
pub fn cmd_list_worktrees(config: &TrellisConfig, repo: &str) -> Result<()> {
    let worktrees = config
        .worktree_manager()
        .list(repo)
        .with_context(|| format!("failed to list worktrees for {repo}"))?;

    print!("{}", render_worktree_table(&worktrees));
    Ok(())
}

/// Render worktrees as a `PATH  BRANCH` table sized to the longest path.
pub fn render_worktree_table(worktrees: &[WorktreeInfo]) -> String {
    let paths: Vec<String> = worktrees
        .iter()
        .map(|wt| wt.path.display().to_string())
        .collect();
    let path_w = paths.iter().map(String::len).max().unwrap_or(4).max(4);

    let mut out = format!("{:<path_w$}  BRANCH\n", "PATH");
    for (wt, path) in worktrees.iter().zip(&paths) {
        let branch = wt.branch.as_deref().unwrap_or("(detached)");
        out.push_str(&format!("{path:<path_w$}  {branch}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn table_marks_detached_worktrees() {
        let table = render_worktree_table(&[
            WorktreeInfo {
                path: PathBuf::from("/src/app"),
                branch: Some("main".into()),
                head: Some("abc123".into()),
            },
            WorktreeInfo {
                path: PathBuf::from("/src/app-feat-x"),
                branch: None,
                head: None,
            },
        ]);
        assert_eq!(
            table,
            "PATH             BRANCH\n\
             /src/app         main\n\
             /src/app-feat-x  (detached)\n"
        );
    }

    #[test]
    fn empty_table_has_only_header() {
        assert_eq!(render_worktree_table(&[]), "PATH  BRANCH\n");
    }
}
