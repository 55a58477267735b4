mod config;
mod plan_cmds;
#[cfg(test)]
mod test_util;
mod worktree_cmds;

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};

use config::TrellisConfig;

#[derive(Parser)]
#[command(
    name = "trellis",
    version,
    about = "Plan documents and git worktrees for parallel tasks"
)]
struct Cli {
    /// Plans directory (overrides TRELLIS_PLANS_DIR env var)
    #[arg(long, global = true)]
    plans_dir: Option<PathBuf>,

    /// Git executable (overrides TRELLIS_GIT env var)
    #[arg(long, global = true)]
    git: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a trellis config file
    Init {
        /// Plans directory to record in the config file
        #[arg(long, default_value = TrellisConfig::DEFAULT_PLANS_DIR)]
        dir: PathBuf,
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Create a new draft plan at plans/<repo>/<id>-<slug>.md
    CreatePlan {
        /// Plan title
        name: String,
        /// Owning repository name
        repo: String,
    },
    /// List plans sorted by status
    ListPlans {
        /// Only list plans of this repository
        repo: Option<String>,
    },
    /// Create a worktree at <repo>-<branch> on a new branch
    CreateWorktree {
        /// Path to the base repository
        repo: String,
        /// New branch name
        branch: String,
    },
    /// List worktrees registered with a repository
    ListWorktrees {
        /// Path to the base repository
        repo: String,
    },
}

/// Execute the `trellis init` command: write config file.
fn cmd_init(dir: PathBuf, force: bool) -> Result<()> {
    let path = config::config_path();

    if path.exists() && !force {
        bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let cfg = config::ConfigFile {
        plans: config::PlansSection {
            dir: Some(dir.clone()),
        },
        git: config::GitSection {
            program: Some(PathBuf::from(TrellisConfig::DEFAULT_GIT)),
        },
    };
    config::save_config(&cfg)?;

    println!("Config written to {}", path.display());
    println!("  plans.dir = {}", dir.display());
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let resolve = || TrellisConfig::resolve(cli.plans_dir.as_deref(), cli.git.as_deref());

    match cli.command {
        Commands::Init { dir, force } => cmd_init(dir, force),
        Commands::CreatePlan { name, repo } => {
            plan_cmds::cmd_create_plan(&resolve()?, &name, &repo)
        }
        Commands::ListPlans { repo } => {
            // Listing never fails on a bad config file.
            let config =
                TrellisConfig::resolve_lenient(cli.plans_dir.as_deref(), cli.git.as_deref())?;
            plan_cmds::cmd_list_plans(&config, repo.as_deref())
        }
        Commands::CreateWorktree { repo, branch } => {
            worktree_cmds::cmd_create_worktree(&resolve()?, &repo, &branch)
        }
        Commands::ListWorktrees { repo } => {
            worktree_cmds::cmd_list_worktrees(&resolve()?, &repo)
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Usage errors exit 1; --help and --version exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
