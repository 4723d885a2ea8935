//! Project export command

use std::path::{Path, PathBuf};

use colored::Colorize;
use log::debug;

use crate::cli::{ExportArgs, RunContext, prompt};
use crate::client::{PlatformApi, Project};
use crate::error::Result;
use crate::export;

/// Run the project export: projectList.json + projectList.csv
pub async fn run(config_path: Option<&str>, args: &ExportArgs) -> Result<()> {
    let outputs = vec![
        PathBuf::from("projectList.json"),
        PathBuf::from("projectList.csv"),
    ];

    let prompt = prompt::for_args(args.yes);
    if !prompt::clear_outputs(&outputs, prompt.as_ref())? {
        println!("Keeping existing exports, nothing touched.");
        return Ok(());
    }

    let ctx = RunContext::new(config_path).await?;

    debug!("fetching projects with page size {}", args.page_size);
    let document = ctx.client.list_projects(args.page_size).await;
    let projects: Vec<Project> = document.data.into_iter().map(Project::from).collect();

    export::write_json(Path::new("projectList.json"), &projects)?;
    export::write_csv(Path::new("projectList.csv"), &export::project_rows(&projects)?)?;

    println!(
        "{} Exported {} projects to projectList.json / projectList.csv",
        "✓".green(),
        projects.len()
    );

    Ok(())
}
