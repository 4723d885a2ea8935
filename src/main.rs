//! scanmate CLI - export companion for hosted static-analysis platforms

use clap::Parser;

mod cli;
mod client;
mod config;
mod correlate;
mod error;
mod export;

use cli::{Cli, Commands};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let default_filter = if debug { "scanmate=debug" } else { "scanmate=warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Init => cli::init::run(config_path),
        Commands::Status => cli::status::run(config_path),
        Commands::Version => {
            println!("scanmate version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Projects(args) => cli::projects::run(config_path, &args).await,
        Commands::Branches(args) => cli::branches::run(config_path, &args).await,
        Commands::Users(args) => cli::users::run(config_path, &args).await,
        Commands::Details(args) => cli::details::run(config_path, &args).await,
        Commands::PushProperties { file } => cli::push::run(config_path, &file).await,
        Commands::Completion { shell } => {
            cli::completions::run(shell);
            Ok(())
        }
    }
}
