//! expired / check

use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;

use assetkeep::presentation::output;
use assetkeep::today;

use super::{emit_json, CommandContext};

pub fn cmd_expired(ctx: &CommandContext, as_of: Option<NaiveDate>) -> Result<()> {
    let as_of = as_of.unwrap_or_else(today);
    let rows = ctx.inventory.expired(Some(as_of));
    tracing::debug!(%as_of, count = rows.len(), "expired warranty query");

    if ctx.json() {
        return emit_json(&json!({
            "as_of": as_of,
            "assets": output::asset_views(&rows),
        }));
    }
    if rows.is_empty() {
        println!("No warranties expired before {}.", as_of);
        return Ok(());
    }
    print!("{}", output::asset_table(&rows));
    Ok(())
}

/// Prints the notice and reports whether anything has expired
pub fn cmd_check(ctx: &CommandContext, as_of: Option<NaiveDate>) -> Result<bool> {
    let notice = ctx.inventory.warranty_notice(as_of);

    if ctx.json() {
        emit_json(&json!({
            "as_of": notice.as_of,
            "expired": notice.expired,
            "message": notice.message(),
        }))?;
    } else {
        println!("{}", notice.message());
    }
    Ok(notice.has_expired())
}
