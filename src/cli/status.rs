//! Status command implementation

use colored::Colorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Config;
use crate::error::Result;

#[derive(Tabled)]
struct EndpointRow {
    #[tabled(rename = "ENDPOINT")]
    name: &'static str,

    #[tabled(rename = "URL TEMPLATE")]
    template: String,
}

/// Run the status command to display configuration status.
///
/// Reads only the configuration; makes no network calls.
pub fn run(config_path: Option<&str>) -> Result<()> {
    println!("{}\n", "Scanmate Configuration Status".bold());

    let path = Config::resolve_path(config_path)?;
    let config = match Config::load_at(config_path) {
        Ok(config) => config,
        Err(err) => {
            println!("{} {}", "✗".red(), err);
            return Ok(());
        }
    };

    println!("Config file: {}", path.display().to_string().cyan());
    println!("Customer: {}", config.customer.bold());
    println!("Email: {}", config.email.bold());

    match (config.password(), config.accesstoken()) {
        (Some(_), _) => println!("{} Credential: password flow", "✓".green()),
        (None, Some(_)) => println!("{} Credential: access-token flow", "✓".green()),
        (None, None) => {
            println!(
                "{} No credential configured (set password or accesstoken)",
                "✗".red()
            );
        }
    }

    let rows = vec![
        EndpointRow {
            name: "auth (password)",
            template: config.auth_url.clone(),
        },
        EndpointRow {
            name: "auth (token)",
            template: config.auth_url_v2.clone(),
        },
        EndpointRow {
            name: "projects",
            template: config.projects_url.clone(),
        },
        EndpointRow {
            name: "branches",
            template: config.branches_url.clone(),
        },
        EndpointRow {
            name: "users",
            template: config.users_url.clone(),
        },
        EndpointRow {
            name: "role assignments",
            template: config.role_assignments_url.clone(),
        },
        EndpointRow {
            name: "set property",
            template: config.set_property_url.clone(),
        },
    ];

    let mut table = Table::new(rows);
    table.with(Style::rounded());

    println!("\n{table}");

    Ok(())
}
