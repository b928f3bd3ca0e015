//! Command handlers for the assetkeep binary

mod assets;
mod references;
mod warranty;

use std::io::{self, Write};

use anyhow::Result;
use serde::Serialize;

use assetkeep::config::OutputFormat;
use assetkeep::presentation::output;
use assetkeep::presentation::FileInventory;
use assetkeep::{LoadReport, RewriteReport};

pub use assets::{cmd_add, cmd_edit, cmd_list, cmd_remove, cmd_show, AddArgs, EditArgs};
pub use references::{cmd_category, cmd_location};
pub use warranty::{cmd_check, cmd_expired};

/// Shared state for a single command invocation
pub struct CommandContext {
    pub inventory: FileInventory,
    pub format: OutputFormat,
}

impl CommandContext {
    pub fn new(inventory: FileInventory, format: OutputFormat) -> Self {
        Self { inventory, format }
    }

    pub fn json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Point the user at skipped lines; details are already in the log
    pub fn report_load(&self, report: &LoadReport) {
        if self.json() {
            return;
        }
        if let Some(summary) = output::load_summary(report) {
            eprint!("{}", summary);
        }
    }

    /// Surface records that did not survive a rewrite
    pub fn report_rewrite(&self, report: &RewriteReport) {
        if let Some(text) = output::rewrite_failures(report) {
            eprint!("{}", text);
        }
    }
}

/// Write one JSON document to stdout
pub fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    out.write_all(b"\n")?;
    Ok(())
}
