//! Core library for trellis: plan documents and task worktrees.
//!
//! - [`identity`] synthesizes short plan IDs.
//! - [`frontmatter`] encodes and decodes plan headers.
//! - [`plan`] creates and lists plan documents under a plans directory.
//! - [`worktree`] creates and lists git worktrees.

pub mod frontmatter;
pub mod identity;
pub mod plan;
pub mod worktree;

pub use plan::{Plan, PlanError, PlanStore};
pub use worktree::{GitBackend, GitCli, WorktreeError, WorktreeInfo, WorktreeManager};
