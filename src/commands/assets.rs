//! add / edit / remove / list / show

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde_json::json;

use assetkeep::presentation::output::{self, AssetView, RewriteView};
use assetkeep::AssetDraft;

use super::{emit_json, CommandContext};

pub struct AddArgs {
    pub name: String,
    pub category: String,
    pub location: String,
    pub purchased: Option<NaiveDate>,
    pub description: Option<String>,
    pub value: Option<String>,
    pub warranty: Option<NaiveDate>,
}

/// Only the fields given on the command line; the rest come from the record
pub struct EditArgs {
    pub name: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub purchased: Option<NaiveDate>,
    pub clear_purchased: bool,
    pub description: Option<String>,
    pub value: Option<String>,
    pub warranty: Option<NaiveDate>,
    pub clear_warranty: bool,
}

impl EditArgs {
    fn apply(self, draft: &mut AssetDraft) {
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(category) = self.category {
            draft.category = category;
        }
        if let Some(location) = self.location {
            draft.location = location;
        }
        if self.clear_purchased {
            draft.purchase_date = None;
        } else if self.purchased.is_some() {
            draft.purchase_date = self.purchased;
        }
        if self.description.is_some() {
            draft.description = self.description;
        }
        if self.value.is_some() {
            draft.purchased_value = self.value;
        }
        if self.clear_warranty {
            draft.warranty_expiration_date = None;
        } else if self.warranty.is_some() {
            draft.warranty_expiration_date = self.warranty;
        }
    }
}

pub fn cmd_add(ctx: &mut CommandContext, args: AddArgs) -> Result<()> {
    let draft = AssetDraft {
        name: args.name,
        category: args.category,
        location: args.location,
        purchase_date: args.purchased,
        description: args.description,
        purchased_value: args.value,
        warranty_expiration_date: args.warranty,
    };

    let index = ctx.inventory.add_asset(draft).context("failed to add asset")?;
    let record = ctx.inventory.asset(index)?;
    tracing::info!(index, name = record.name(), "asset added");

    if ctx.json() {
        return emit_json(&AssetView::new(index, record));
    }
    println!("Added asset #{}: {}", index, record.name());
    Ok(())
}

pub fn cmd_edit(ctx: &mut CommandContext, index: usize, args: EditArgs) -> Result<()> {
    let mut draft = AssetDraft::from(ctx.inventory.asset(index)?);
    args.apply(&mut draft);

    let report = ctx
        .inventory
        .edit_asset(index, draft)
        .with_context(|| format!("failed to edit asset #{}", index))?;
    ctx.report_rewrite(&report);

    let record = ctx.inventory.asset(index)?;
    if ctx.json() {
        return emit_json(&json!({
            "asset": AssetView::new(index, record),
            "rewrite": RewriteView::from(&report),
        }));
    }
    println!("Updated asset #{}: {}", index, record.name());
    Ok(())
}

pub fn cmd_remove(ctx: &mut CommandContext, index: usize) -> Result<()> {
    let (removed, report) = ctx
        .inventory
        .remove_asset(index)
        .with_context(|| format!("failed to remove asset #{}", index))?;
    ctx.report_rewrite(&report);

    if ctx.json() {
        return emit_json(&json!({
            "removed": AssetView::new(index, &removed),
            "rewrite": RewriteView::from(&report),
        }));
    }
    println!("Removed asset #{}: {}", index, removed.name());
    Ok(())
}

pub fn cmd_list(ctx: &CommandContext) -> Result<()> {
    let rows: Vec<_> = ctx.inventory.assets().iter().enumerate().collect();

    if ctx.json() {
        return emit_json(&output::asset_views(&rows));
    }
    print!("{}", output::asset_table(&rows));
    Ok(())
}

pub fn cmd_show(ctx: &CommandContext, index: usize) -> Result<()> {
    let record = ctx.inventory.asset(index)?;

    if ctx.json() {
        return emit_json(&AssetView::new(index, record));
    }
    print!("{}", output::asset_detail(index, record));
    Ok(())
}
