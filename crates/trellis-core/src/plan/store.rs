//! Plan storage under a `plans/<repo>/<id>-<slug>.md` layout.
//!
//! Creation writes a new document and never touches existing ones. Listing
//! is best-effort: missing directories, unreadable files, and documents
//! without an `id` header field are skipped rather than reported.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};

use super::document::{extract_title, render_document, slugify};
use super::{DEFAULT_STATUS, PLAN_EXTENSION, Plan, PlanError, UNKNOWN_STATUS};
use crate::{frontmatter, identity};

/// Plan documents rooted at a single directory.
#[derive(Debug, Clone)]
pub struct PlanStore {
    root: PathBuf,
}

impl PlanStore {
    /// Create a store rooted at `root` (conventionally `plans`).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Return the root plans directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Compute the path of a plan document.
    pub fn plan_path(&self, repo: &str, id: &str, slug: &str) -> PathBuf {
        self.root
            .join(repo)
            .join(format!("{id}-{slug}.{PLAN_EXTENSION}"))
    }

    /// Create a new draft plan for `repo` and return its path.
    ///
    /// The repository directory is created if needed. The document is opened
    /// with create-new semantics, so an ID and slug collision with an
    /// existing file fails with [`PlanError::AlreadyExists`].
    pub fn create(&self, title: &str, repo: &str) -> Result<PathBuf, PlanError> {
        validate_title(title)?;
        validate_repo(repo)?;

        let id = identity::new_id(repo);
        let slug = slugify(title);
        let path = self.plan_path(repo, &id, &slug);

        let dir = self.root.join(repo);
        fs::create_dir_all(&dir).map_err(|e| PlanError::Io {
            path: dir.clone(),
            source: e,
        })?;

        let created = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let content = render_document(&id, DEFAULT_STATUS, repo, &created, title);

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => PlanError::AlreadyExists(path.clone()),
                _ => PlanError::Io {
                    path: path.clone(),
                    source: e,
                },
            })?;
        file.write_all(content.as_bytes())
            .map_err(|e| PlanError::Io {
                path: path.clone(),
                source: e,
            })?;

        tracing::info!(id = %id, repo, path = %path.display(), "created plan");
        Ok(path)
    }

    /// List plans, sorted by status with ties kept in discovery order.
    ///
    /// With `repo` set, only that repository's directory is scanned;
    /// otherwise every directory under the root is treated as a repository.
    /// Entries are discovered in file-name order. A `repo` that is not a
    /// single directory name matches nothing.
    pub fn list(&self, repo: Option<&str>) -> Vec<Plan> {
        if !self.root.is_dir() {
            return Vec::new();
        }
        if let Some(Err(e)) = repo.map(validate_repo) {
            tracing::debug!(error = %e, "no plans for invalid repo filter");
            return Vec::new();
        }

        let repos = match repo {
            Some(name) => vec![name.to_string()],
            None => sorted_entries(&self.root)
                .into_iter()
                .filter(|path| path.is_dir())
                .filter_map(|path| {
                    path.file_name()
                        .and_then(|n| n.to_str())
                        .map(str::to_string)
                })
                .collect(),
        };

        let mut plans = Vec::new();
        for name in &repos {
            let dir = self.root.join(name);
            if !dir.is_dir() {
                continue;
            }
            for path in sorted_entries(&dir) {
                if path.extension().and_then(|e| e.to_str()) != Some(PLAN_EXTENSION) {
                    continue;
                }
                if let Some(plan) = read_plan(&path, name) {
                    plans.push(plan);
                }
            }
        }

        // Stable sort keeps discovery order among equal statuses.
        plans.sort_by(|a, b| a.status.cmp(&b.status));
        plans
    }
}

/// Parse one plan document, returning `None` when it is unreadable or has
/// no `id` field. Invalid UTF-8 is replaced rather than rejected; empty
/// `status` and `repo` values fall back to their defaults.
fn read_plan(path: &Path, dir_name: &str) -> Option<Plan> {
    let content = match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "skipping unreadable plan file");
            return None;
        }
    };

    let mut fields = frontmatter::decode(&content);
    let Some(id) = fields.remove("id").filter(|id| !id.is_empty()) else {
        tracing::debug!(path = %path.display(), "skipping file without plan id");
        return None;
    };

    Some(Plan {
        id,
        status: fields
            .remove("status")
            .filter(|status| !status.is_empty())
            .unwrap_or_else(|| UNKNOWN_STATUS.to_string()),
        repo: fields
            .remove("repo")
            .filter(|repo| !repo.is_empty())
            .unwrap_or_else(|| dir_name.to_string()),
        created: fields.remove("created"),
        title: extract_title(frontmatter::body(&content)),
        file: path.to_path_buf(),
    })
}

/// Directory entries of `dir` in file-name order. Unreadable directories
/// yield nothing.
fn sorted_entries(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(path = %dir.display(), error = %e, "skipping unreadable directory");
            return Vec::new();
        }
    };
    let mut paths: Vec<PathBuf> = entries.filter_map(|e| e.ok()).map(|e| e.path()).collect();
    paths.sort();
    paths
}

fn validate_title(title: &str) -> Result<(), PlanError> {
    if title.trim().is_empty() {
        return Err(PlanError::InvalidInput {
            field: "title",
            reason: "must not be empty".into(),
        });
    }
    Ok(())
}

fn validate_repo(repo: &str) -> Result<(), PlanError> {
    if repo.trim().is_empty() {
        return Err(PlanError::InvalidInput {
            field: "repo",
            reason: "must not be empty".into(),
        });
    }
    if repo == "." || repo == ".." || repo.contains(['/', '\\']) {
        return Err(PlanError::InvalidInput {
            field: "repo",
            reason: format!("{repo:?} is not a single directory name"),
        });
    }
    Ok(())
}
