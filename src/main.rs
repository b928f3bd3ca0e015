//! assetkeep CLI - asset inventory with warranty tracking
//!
//! Usage: assetkeep <COMMAND>
//!
//! Commands:
//!   add       Record a new asset
//!   edit      Change fields of an existing asset
//!   remove    Delete an asset
//!   list      List all assets
//!   show      Show one asset
//!   expired   List assets whose warranty has expired
//!   check     Print the warranty notice
//!   category  Manage the category list
//!   location  Manage the location list

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use assetkeep::config::{Config, ConfigWarning, OutputFormat};
use assetkeep::presentation::{open_inventory, Cli, Commands};

mod commands;

use commands::CommandContext;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let (mut config, config_warnings) =
        Config::resolve(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(dir) = &cli.data_dir {
        config.storage.data_dir = dir.clone();
    }
    if cli.json {
        config.output.format = OutputFormat::Json;
    }

    init_tracing(&config, cli.verbose);
    for warning in &config_warnings {
        report_config_warning(warning);
    }

    let mut inventory = open_inventory(&config.storage);
    let report = inventory.load().context("failed to load assets")?;

    let mut ctx = CommandContext::new(inventory, config.output.format);
    ctx.report_load(&report);

    let outcome = match cli.command {
        Commands::Add {
            name,
            category,
            location,
            purchased,
            description,
            value,
            warranty,
        } => commands::cmd_add(
            &mut ctx,
            commands::AddArgs {
                name,
                category,
                location,
                purchased,
                description,
                value,
                warranty,
            },
        ),
        Commands::Edit {
            index,
            name,
            category,
            location,
            purchased,
            clear_purchased,
            description,
            value,
            warranty,
            clear_warranty,
        } => commands::cmd_edit(
            &mut ctx,
            index,
            commands::EditArgs {
                name,
                category,
                location,
                purchased,
                clear_purchased,
                description,
                value,
                warranty,
                clear_warranty,
            },
        ),
        Commands::Remove { index } => commands::cmd_remove(&mut ctx, index),
        Commands::List => commands::cmd_list(&ctx),
        Commands::Show { index } => commands::cmd_show(&ctx, index),
        Commands::Expired { as_of } => commands::cmd_expired(&ctx, as_of),
        Commands::Check { as_of } => {
            let any_expired = commands::cmd_check(&ctx, as_of)?;
            return Ok(if any_expired {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            });
        }
        Commands::Category { action } => commands::cmd_category(&ctx, action),
        Commands::Location { action } => commands::cmd_location(&ctx, action),
    };

    outcome?;
    Ok(ExitCode::SUCCESS)
}

/// `-v` flags win over `ASSETKEEP_LOG` and the config file
fn init_tracing(config: &Config, verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_new(&config.log.filter).unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("assetkeep=info"),
        2 => EnvFilter::new("assetkeep=debug"),
        _ => EnvFilter::new("assetkeep=trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn report_config_warning(warning: &ConfigWarning) {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    match &warning.suggestion {
        Some(suggestion) => tracing::warn!(
            "unknown config key '{}' at {} (did you mean '{}'?)",
            warning.key,
            location,
            suggestion
        ),
        None => tracing::warn!("unknown config key '{}' at {}", warning.key, location),
    }
}
