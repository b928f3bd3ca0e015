//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --verbose, --config, --data-dir) are inherited by all subcommands
//! - Assets are addressed by their 0-based position as shown by `list`
//! - Dates are ISO `YYYY-MM-DD`

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// assetkeep - track physical assets, where they live and when their warranty runs out
#[derive(Parser, Debug)]
#[command(name = "assetkeep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file to use instead of the default lookup
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding the asset, category and location files
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record a new asset
    Add {
        /// Asset name
        name: String,

        /// Category (must be registered)
        #[arg(short, long)]
        category: String,

        /// Location (must be registered)
        #[arg(short, long)]
        location: String,

        /// Purchase date (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        purchased: Option<NaiveDate>,

        /// Free-form description
        #[arg(short, long)]
        description: Option<String>,

        /// Purchased value, kept as written
        #[arg(long)]
        value: Option<String>,

        /// Warranty expiration date (YYYY-MM-DD)
        #[arg(short, long, value_name = "DATE")]
        warranty: Option<NaiveDate>,
    },

    /// Change fields of an existing asset; unspecified fields keep their value
    Edit {
        /// Position of the asset as shown by `list`
        index: usize,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New category (must be registered)
        #[arg(short, long)]
        category: Option<String>,

        /// New location (must be registered)
        #[arg(short, long)]
        location: Option<String>,

        /// New purchase date (YYYY-MM-DD)
        #[arg(long, value_name = "DATE", conflicts_with = "clear_purchased")]
        purchased: Option<NaiveDate>,

        /// Remove the purchase date
        #[arg(long)]
        clear_purchased: bool,

        /// New description
        #[arg(short, long)]
        description: Option<String>,

        /// New purchased value
        #[arg(long)]
        value: Option<String>,

        /// New warranty expiration date (YYYY-MM-DD)
        #[arg(short, long, value_name = "DATE", conflicts_with = "clear_warranty")]
        warranty: Option<NaiveDate>,

        /// Remove the warranty expiration date
        #[arg(long)]
        clear_warranty: bool,
    },

    /// Delete an asset
    Remove {
        /// Position of the asset as shown by `list`
        index: usize,
    },

    /// List all assets in file order
    List,

    /// Show every field of one asset
    Show {
        /// Position of the asset as shown by `list`
        index: usize,
    },

    /// List assets whose warranty has expired
    Expired {
        /// Reference date instead of today (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        as_of: Option<NaiveDate>,
    },

    /// Print the warranty notice; exits non-zero when any warranty has expired
    Check {
        /// Reference date instead of today (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        as_of: Option<NaiveDate>,
    },

    /// Manage the category list
    Category {
        #[command(subcommand)]
        action: CategoryCommand,
    },

    /// Manage the location list
    Location {
        #[command(subcommand)]
        action: LocationCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum CategoryCommand {
    /// Register a category
    Add {
        /// Category name
        name: String,
    },
    /// List registered categories
    List,
}

#[derive(Subcommand, Debug)]
pub enum LocationCommand {
    /// Register a location
    Add {
        /// Location name
        name: String,

        /// Optional description stored next to the name
        #[arg(short, long)]
        description: Option<String>,
    },
    /// List registered locations
    List,
}
