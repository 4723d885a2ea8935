//! CLI command definitions and handlers

use clap::{Args, Parser, Subcommand};
pub use clap_complete::Shell;

pub mod branches;
pub mod completions;
pub mod context;
pub mod details;
pub mod init;
pub mod projects;
pub mod prompt;
pub mod push;
pub mod status;
pub mod users;

pub use context::RunContext;

use crate::client::pagination::DEFAULT_PAGE_SIZE;

/// scanmate - export companion for hosted static-analysis platforms
#[derive(Parser, Debug)]
#[command(name = "scanmate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Override config file location
    #[arg(long, global = true, env = "SCANMATE_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "SCANMATE_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a skeleton config.json
    Init,

    /// Show configuration status
    Status,

    /// Export the project list (projectList.json, projectList.csv)
    Projects(ExportArgs),

    /// Export branches and the per-project branch mapping
    /// (branchesList.json, projectBranches.csv)
    Branches(ExportArgs),

    /// Export users and groups (usersList.json, usersList.csv,
    /// groupsList.json)
    Users(ExportArgs),

    /// Export per-project membership details (detailsList.json,
    /// detailsList.csv, projectDetails.csv)
    Details(ExportArgs),

    /// Re-upload project properties from an edited projectList.json
    PushProperties {
        /// Project list file to read
        #[arg(long, default_value = "projectList.json")]
        file: String,
    },

    /// Display version information
    Version,

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Shared arguments for export commands
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Delete existing output files without prompting
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Items per page for collection endpoints
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,
}
