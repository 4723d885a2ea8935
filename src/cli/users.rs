//! User and group export command

use std::path::{Path, PathBuf};

use colored::Colorize;
use log::debug;

use crate::cli::{ExportArgs, RunContext, prompt};
use crate::client::{PlatformApi, User};
use crate::correlate;
use crate::error::Result;
use crate::export;

/// Run the user export: usersList.json + usersList.csv + groupsList.json
pub async fn run(config_path: Option<&str>, args: &ExportArgs) -> Result<()> {
    let outputs = vec![
        PathBuf::from("usersList.json"),
        PathBuf::from("usersList.csv"),
        PathBuf::from("groupsList.json"),
    ];

    let prompt = prompt::for_args(args.yes);
    if !prompt::clear_outputs(&outputs, prompt.as_ref())? {
        println!("Keeping existing exports, nothing touched.");
        return Ok(());
    }

    let ctx = RunContext::new(config_path).await?;

    debug!("fetching users with page size {}", args.page_size);
    let document = ctx.client.list_users(args.page_size).await;

    // Group names ride along in the included set when the endpoint is
    // configured with include=groups; otherwise IDs stand in.
    let names = correlate::group_names(&document.included);
    let users: Vec<User> = document.data.into_iter().map(User::from).collect();
    let groups = correlate::invert_user_groups(&users, &names);

    export::write_json(Path::new("usersList.json"), &users)?;
    export::write_csv(Path::new("usersList.csv"), &export::user_rows(&users)?)?;
    export::write_json(Path::new("groupsList.json"), &groups)?;

    println!(
        "{} Exported {} users and {} groups to usersList.json / usersList.csv / groupsList.json",
        "✓".green(),
        users.len(),
        groups.len()
    );

    Ok(())
}
