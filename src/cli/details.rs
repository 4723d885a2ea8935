//! Per-project membership details export command

use std::path::{Path, PathBuf};

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, warn};

use crate::cli::{ExportArgs, RunContext, prompt};
use crate::client::{PlatformApi, Project};
use crate::correlate::{self, ProjectMembers};
use crate::error::Result;
use crate::export;

/// Run the details export: detailsList.json + detailsList.csv +
/// projectDetails.csv
///
/// Role assignments are fetched one project at a time, sequentially. A
/// failing project is logged and skipped; the export still covers every
/// project that succeeded.
pub async fn run(config_path: Option<&str>, args: &ExportArgs) -> Result<()> {
    let outputs = vec![
        PathBuf::from("detailsList.json"),
        PathBuf::from("detailsList.csv"),
        PathBuf::from("projectDetails.csv"),
    ];

    let prompt = prompt::for_args(args.yes);
    if !prompt::clear_outputs(&outputs, prompt.as_ref())? {
        println!("Keeping existing exports, nothing touched.");
        return Ok(());
    }

    let ctx = RunContext::new(config_path).await?;

    debug!("fetching projects with page size {}", args.page_size);
    let projects: Vec<Project> = ctx
        .client
        .list_projects(args.page_size)
        .await
        .data
        .into_iter()
        .map(Project::from)
        .collect();

    let bar = ProgressBar::new(projects.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("{msg:24} [{bar:40}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut details: Vec<ProjectMembers> = Vec::new();
    let mut skipped = 0usize;

    for project in &projects {
        bar.set_message(project.name.clone());

        match ctx.client.role_assignments(&project.id).await {
            Ok(document) => details.push(correlate::correlate_members(project, &document)),
            Err(err) => {
                warn!("project {}: role-assignment fetch failed, skipping: {err}", project.id);
                skipped += 1;
            }
        }

        bar.inc(1);
    }
    bar.finish_and_clear();

    export::write_json(Path::new("detailsList.json"), &details)?;
    export::write_csv(Path::new("detailsList.csv"), &export::details_rows(&details)?)?;
    export::write_csv(
        Path::new("projectDetails.csv"),
        &export::project_details_rows(&details),
    )?;

    if skipped > 0 {
        println!(
            "{} {skipped} of {} projects skipped (role-assignment fetch failed)",
            "⚠".yellow(),
            projects.len()
        );
    }
    println!(
        "{} Exported membership details for {} projects to detailsList.json / detailsList.csv / projectDetails.csv",
        "✓".green(),
        details.len()
    );

    Ok(())
}
