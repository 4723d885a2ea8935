//! Init command implementation

use colored::Colorize;
use dialoguer::Confirm;
use dialoguer::theme::ColorfulTheme;

use crate::config::Config;
use crate::error::Result;

/// Write a skeleton config.json for the operator to fill in.
///
/// With no `--config` override, the skeleton lands in the current
/// directory, next to where the exports will be written.
pub fn run(config_path: Option<&str>) -> Result<()> {
    let path = match config_path {
        Some(p) => std::path::PathBuf::from(p),
        None => std::path::PathBuf::from("config.json"),
    };

    if path.exists() {
        let overwrite = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("{} already exists. Overwrite it?", path.display()))
            .default(false)
            .interact()?;

        if !overwrite {
            println!("Keeping existing configuration.");
            return Ok(());
        }
    }

    Config::skeleton().save_to(&path)?;

    println!(
        "{} Skeleton configuration written to {}",
        "✓".green(),
        path.display()
    );
    println!("\n{}", "Fill in before running exports:".bold());
    println!("  customer, email, and one of password / accesstoken");
    println!("  the URL templates for your platform instance");
    println!("\nThen try:");
    println!("  {} - verify the configuration", "scanmate status".cyan());
    println!("  {} - export the project list", "scanmate projects".cyan());

    Ok(())
}
