//! CLI handlers for plan commands.
//!
//! Implements:
//! - `trellis create-plan <name> <repo>` -- write a new draft plan document
//! - `trellis list-plans [repo]`         -- list plans sorted by status

use anyhow::{Context, Result};

use trellis_core::Plan;

use crate::config::TrellisConfig;

// -----------------------------------------------------------------------
// trellis create-plan <name> <repo>
// -----------------------------------------------------------------------

/// Create a plan document and print its path.
pub fn cmd_create_plan(config: &TrellisConfig, name: &str, repo: &str) -> Result<()> {
    let path = config
        .plan_store()
        .create(name, repo)
        .with_context(|| format!("failed to create plan {name:?} for {repo}"))?;

    println!("Created: {}", path.display());
    Ok(())
}

// -----------------------------------------------------------------------
// trellis list-plans [repo]
// -----------------------------------------------------------------------

/// Print every plan (or one repository's plans) as a table.
pub fn cmd_list_plans(config: &TrellisConfig, repo: Option<&str>) -> Result<()> {
    let plans = config.plan_store().list(repo);

    if plans.is_empty() {
        println!("No plans found.");
        return Ok(());
    }

    print!("{}", render_plan_table(&plans));
    Ok(())
}

/// Render plans as a fixed-width `ID / Status / Repo / File` table.
pub fn render_plan_table(plans: &[Plan]) -> String {
    let mut out = format!("{:<10} {:<12} {:<20} File\n", "ID", "Status", "Repo");
    out.push_str(&"-".repeat(60));
    out.push('\n');
    for plan in plans {
        out.push_str(&format!(
            "{:<10} {:<12} {:<20} {}\n",
            plan.id,
            plan.status,
            plan.repo,
            plan.file.display()
        ));
    }
    out
}
