//! # Emblem CLI
//!
//! Inspect role catalogs and preview the cosmetic profile a player would get:
//! - `resolve` merges the given role ids and prints the profile as JSON
//! - `list` prints the catalog
//! - `check` lints the catalog

use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use emblem_common::catalog::load_catalog;
use emblem_common::error::EmblemError;
use emblem_common::models::GameServerRole;
use emblem_common::validation::validate_catalog;
use emblem_roles::RoleManager;

#[derive(Parser, Debug)]
#[command(name = "emblem", version, about = "Role catalog tooling")]
struct Cli {
    /// Role catalog file (.json or .toml); overrides `catalog.path`
    #[arg(short, long, env = "EMBLEM_CATALOG_FILE")]
    catalog: Option<String>,

    /// Config file name, extension optional
    #[arg(long, default_value = emblem_common::config::DEFAULT_CONFIG_FILE)]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the merged profile for a set of role ids
    Resolve {
        /// Role int ids, in the order the player holds them
        #[arg(value_delimiter = ',', required = true)]
        roles: Vec<u8>,
    },
    /// Print every role in the catalog
    List,
    /// Report duplicate ids and unparsable colors
    Check,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Load configuration
    let config = emblem_common::config::load_from(&cli.config)?;

    // Initialize tracing (structured logging)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.as_str().into()),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let path = cli
        .catalog
        .or(config.catalog.path)
        .context("no role catalog given; pass --catalog or set catalog.path")?;

    let roles = load_catalog(&path).with_context(|| format!("failed to load catalog {path}"))?;
    tracing::info!("Loaded {} role(s) from {path}", roles.len());

    let mut manager = RoleManager::new();
    manager.set_all_roles(roles);

    match cli.command {
        Command::Resolve { roles } => {
            let computed = manager.compute(&roles);
            println!("{}", serde_json::to_string_pretty(&computed)?);
        }
        Command::List => {
            println!("{}", serde_json::to_string_pretty(manager.all_roles())?);
        }
        Command::Check => {
            if let Err(err) = check_catalog(manager.all_roles(), config.catalog.strict) {
                tracing::error!(code = err.error_code(), "{err}");
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Print lint issues; with `strict`, any issue fails the check.
fn check_catalog(roles: &[GameServerRole], strict: bool) -> Result<(), EmblemError> {
    let issues = validate_catalog(roles);
    for issue in &issues {
        println!("{issue}");
    }

    if issues.is_empty() {
        tracing::info!("Catalog is clean");
    } else if strict {
        return Err(EmblemError::InvalidCatalog {
            count: issues.len(),
        });
    } else {
        tracing::warn!("{} issue(s) found", issues.len());
    }

    Ok(())
}
