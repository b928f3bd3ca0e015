//! category / location

use anyhow::{Context, Result};

use assetkeep::presentation::output;
use assetkeep::presentation::{CategoryCommand, LocationCommand};

use super::{emit_json, CommandContext};

pub fn cmd_category(ctx: &CommandContext, action: CategoryCommand) -> Result<()> {
    match action {
        CategoryCommand::Add { name } => {
            let entry = ctx
                .inventory
                .register_category(&name)
                .context("failed to register category")?;
            if ctx.json() {
                return emit_json(&entry);
            }
            println!("Added category: {}", entry.name);
        }
        CategoryCommand::List => {
            let names = ctx.inventory.categories()?;
            if ctx.json() {
                return emit_json(&names);
            }
            for name in names {
                println!("{}", name);
            }
        }
    }
    Ok(())
}

pub fn cmd_location(ctx: &CommandContext, action: LocationCommand) -> Result<()> {
    match action {
        LocationCommand::Add { name, description } => {
            let entry = ctx
                .inventory
                .register_location(&name, description.as_deref())
                .context("failed to register location")?;
            if ctx.json() {
                return emit_json(&entry);
            }
            println!("Added location: {}", entry.name);
        }
        LocationCommand::List => {
            let entries = ctx.inventory.locations()?;
            if ctx.json() {
                return emit_json(&entries);
            }
            print!("{}", output::reference_lines(&entries));
        }
    }
    Ok(())
}
