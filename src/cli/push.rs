//! Property re-upload command
//!
//! Reads a (possibly hand-edited) projectList.json back in and replaces
//! each project's property mapping on the platform.

use std::path::Path;

use colored::Colorize;
use log::warn;

use crate::cli::RunContext;
use crate::client::{PlatformApi, Project};
use crate::error::{Error, Result};

/// Run the property push from the given project list file
pub async fn run(config_path: Option<&str>, file: &str) -> Result<()> {
    let path = Path::new(file);
    if !path.exists() {
        return Err(Error::Other(format!(
            "{file} not found. Run `scanmate projects` first, then edit the properties to push."
        )));
    }

    let contents = std::fs::read_to_string(path)?;
    let projects: Vec<Project> = serde_json::from_str(&contents)?;

    let ctx = RunContext::new(config_path).await?;

    let mut pushed = 0usize;
    for project in &projects {
        match ctx.client.set_properties(&project.id, &project.properties).await {
            Ok(()) => pushed += 1,
            Err(err) => {
                warn!("project {}: property push failed, skipping: {err}", project.id);
            }
        }
    }

    println!(
        "{} Pushed properties for {pushed}/{} projects from {file}",
        "✓".green(),
        projects.len()
    );

    Ok(())
}
