//! Branch export command

use std::path::{Path, PathBuf};

use colored::Colorize;
use log::debug;

use crate::cli::{ExportArgs, RunContext, prompt};
use crate::client::{Branch, PlatformApi, Project};
use crate::correlate;
use crate::error::Result;
use crate::export;

/// Run the branch export: branchesList.json + projectBranches.csv
pub async fn run(config_path: Option<&str>, args: &ExportArgs) -> Result<()> {
    let outputs = vec![
        PathBuf::from("branchesList.json"),
        PathBuf::from("projectBranches.csv"),
    ];

    let prompt = prompt::for_args(args.yes);
    if !prompt::clear_outputs(&outputs, prompt.as_ref())? {
        println!("Keeping existing exports, nothing touched.");
        return Ok(());
    }

    let ctx = RunContext::new(config_path).await?;

    debug!("fetching projects and branches with page size {}", args.page_size);
    let projects: Vec<Project> = ctx
        .client
        .list_projects(args.page_size)
        .await
        .data
        .into_iter()
        .map(Project::from)
        .collect();
    let branches: Vec<Branch> = ctx
        .client
        .list_branches(args.page_size)
        .await
        .data
        .into_iter()
        .map(Branch::from)
        .collect();

    let correlated = correlate::correlate_branches(&projects, &branches);

    export::write_json(Path::new("branchesList.json"), &branches)?;
    export::write_csv(
        Path::new("projectBranches.csv"),
        &export::project_branches_rows(&correlated),
    )?;

    println!(
        "{} Exported {} branches across {} projects to branchesList.json / projectBranches.csv",
        "✓".green(),
        branches.len(),
        correlated.len()
    );

    Ok(())
}
