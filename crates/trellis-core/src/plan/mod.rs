//! Plan documents: file layout, creation, and listing.

pub mod document;
pub mod store;

use std::path::PathBuf;

use thiserror::Error;

pub use document::{render_document, slugify};
pub use store::PlanStore;

/// Status written into every newly created plan.
pub const DEFAULT_STATUS: &str = "draft";

/// Status reported for a plan whose header has no `status` field.
pub const UNKNOWN_STATUS: &str = "unknown";

/// File extension of plan documents.
pub const PLAN_EXTENSION: &str = "md";

/// Errors that can occur while creating a plan.
#[derive(Debug, Error)]
pub enum PlanError {
    /// A required argument was empty or unusable as a path component.
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// A directory or file could not be created or written.
    #[error("failed to write plan at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A plan file with the same ID and slug is already present.
    #[error("plan file already exists: {0}")]
    AlreadyExists(PathBuf),
}

/// A plan discovered on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    /// Plan ID from the header.
    pub id: String,
    /// Status from the header, or [`UNKNOWN_STATUS`].
    pub status: String,
    /// Owning repository from the header, or the directory scanned.
    pub repo: String,
    /// Creation timestamp from the header, if present.
    pub created: Option<String>,
    /// Text of the first level-1 heading in the body, if any.
    pub title: Option<String>,
    /// Path of the plan document.
    pub file: PathBuf,
}
