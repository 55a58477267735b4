//! Configuration file management for trellis.
//!
//! Provides a TOML config file at `~/.config/trellis/config.toml` and a
//! resolution chain: CLI flag > env var > config file > default.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use trellis_core::{GitCli, PlanStore, WorktreeManager};

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub plans: PlansSection,
    #[serde(default)]
    pub git: GitSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PlansSection {
    /// Root directory holding `<repo>/<id>-<slug>.md` plan documents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GitSection {
    /// Git executable name or path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<PathBuf>,
}

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the trellis config directory.
///
/// Always uses XDG layout: `$XDG_CONFIG_HOME/trellis` or `~/.config/trellis`.
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("trellis");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("trellis")
}

/// Return the path to the trellis config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Parse config file contents.
pub fn parse_config(contents: &str) -> Result<ConfigFile> {
    toml::from_str(contents).context("failed to parse config file")
}

/// Load the config file, or `None` if there is no config file.
pub fn load_config() -> Result<Option<ConfigFile>> {
    let path = config_path();
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config = parse_config(&contents)
        .with_context(|| format!("invalid config file at {}", path.display()))?;
    Ok(Some(config))
}

/// Serialize and write the config file, creating parent dirs as needed.
pub fn save_config(config: &ConfigFile) -> Result<()> {
    let path = config_path();
    let dir = config_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create config directory {}", dir.display()))?;

    let contents = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(&path, &contents)
        .with_context(|| format!("failed to write config file at {}", path.display()))?;

    Ok(())
}

// -----------------------------------------------------------------------
// Resolved config
// -----------------------------------------------------------------------

/// Fully resolved configuration, passed explicitly to every command.
#[derive(Debug, Clone)]
pub struct TrellisConfig {
    /// Plans root; relative paths are relative to `work_dir`.
    pub plans_dir: PathBuf,
    /// Git executable used for worktree operations.
    pub git_program: PathBuf,
    /// Directory that repository and worktree paths are resolved against.
    pub work_dir: PathBuf,
}

impl TrellisConfig {
    pub const DEFAULT_PLANS_DIR: &str = "plans";
    pub const DEFAULT_GIT: &str = "git";

    /// Resolve configuration using the chain: CLI flag > env var > config file > default.
    ///
    /// - Plans dir: `cli_plans_dir` > `TRELLIS_PLANS_DIR` > `plans.dir` > `plans`
    /// - Git: `cli_git` > `TRELLIS_GIT` > `git.program` > `git`
    pub fn resolve(cli_plans_dir: Option<&Path>, cli_git: Option<&Path>) -> Result<Self> {
        let file_config = load_config()?;
        let work_dir = std::env::current_dir().context("failed to get current directory")?;
        Ok(Self::resolve_with(
            cli_plans_dir,
            cli_git,
            file_config.unwrap_or_default(),
            work_dir,
        ))
    }

    /// Like [`resolve`](Self::resolve), but a config file that cannot be
    /// read or parsed is logged and treated as empty.
    pub fn resolve_lenient(cli_plans_dir: Option<&Path>, cli_git: Option<&Path>) -> Result<Self> {
        let file_config = load_config().unwrap_or_else(|e| {
            tracing::warn!(error = %format!("{e:#}"), "ignoring config file");
            None
        });
        let work_dir = std::env::current_dir().context("failed to get current directory")?;
        Ok(Self::resolve_with(
            cli_plans_dir,
            cli_git,
            file_config.unwrap_or_default(),
            work_dir,
        ))
    }

    fn resolve_with(
        cli_plans_dir: Option<&Path>,
        cli_git: Option<&Path>,
        file_config: ConfigFile,
        work_dir: PathBuf,
    ) -> Self {
        let plans_dir = if let Some(dir) = cli_plans_dir {
            dir.to_path_buf()
        } else if let Some(dir) = env_path("TRELLIS_PLANS_DIR") {
            dir
        } else if let Some(dir) = file_config.plans.dir {
            dir
        } else {
            PathBuf::from(Self::DEFAULT_PLANS_DIR)
        };

        let git_program = if let Some(git) = cli_git {
            git.to_path_buf()
        } else if let Some(git) = env_path("TRELLIS_GIT") {
            git
        } else if let Some(git) = file_config.git.program {
            git
        } else {
            PathBuf::from(Self::DEFAULT_GIT)
        };

        tracing::debug!(
            plans_dir = %plans_dir.display(),
            git = %git_program.display(),
            "resolved configuration"
        );

        Self {
            plans_dir,
            git_program,
            work_dir,
        }
    }

    /// Plan store rooted at the configured plans directory.
    pub fn plan_store(&self) -> PlanStore {
        PlanStore::new(&self.plans_dir)
    }

    /// Worktree manager using the configured git executable.
    pub fn worktree_manager(&self) -> WorktreeManager {
        WorktreeManager::new(GitCli::new(&self.git_program), &self.work_dir)
    }
}

fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------
