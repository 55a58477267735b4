//! Parser for `git worktree list --porcelain`.

use std::path::PathBuf;

use super::WorktreeInfo;

/// Parse porcelain worktree listing output.
///
/// Every `worktree <path>` line starts a new record. A following
/// `branch <ref>` line sets the record's branch to the last `/` segment of
/// the ref, and `HEAD <sha>` sets its commit. Other lines (`bare`,
/// `detached`, `locked`, blank separators) are ignored, as are attribute
/// lines that appear before the first record.
pub fn parse_porcelain_output(output: &str) -> Vec<WorktreeInfo> {
    let mut worktrees = Vec::new();
    let mut current: Option<WorktreeInfo> = None;

    for line in output.lines() {
        if let Some(rest) = line.strip_prefix("worktree ") {
            if let Some(done) = current.take() {
                worktrees.push(done);
            }
            current = Some(WorktreeInfo {
                path: PathBuf::from(rest),
                branch: None,
                head: None,
            });
            continue;
        }

        let Some(wt) = current.as_mut() else {
            continue;
        };
        if let Some(rest) = line.strip_prefix("branch ") {
            wt.branch = rest.rsplit('/').next().map(str::to_string);
        } else if let Some(rest) = line.strip_prefix("HEAD ") {
            wt.head = Some(rest.to_string());
        }
    }

    if let Some(done) = current {
        worktrees.push(done);
    }

    worktrees
}
