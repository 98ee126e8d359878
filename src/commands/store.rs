use chrono::{DateTime, Local};
use clap::Subcommand;
use colored::Colorize;
use comfy_table::{Cell, CellAlignment, Table};
use std::fs;
use std::path::Path;

use crate::commands::resolve_store_dir;
use crate::config::DevsiftConfig;
use crate::error::Result;
use crate::store::{TreeStats, load_rule_tree};

#[derive(Subcommand, Debug)]
pub enum StoreCommand {
    /// Show what the rule store contains
    Info {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

impl StoreCommand {
    pub fn execute(self, config: &DevsiftConfig, store: Option<&Path>) -> Result<()> {
        match self {
            StoreCommand::Info { json } => show_store_info(config, store, json),
        }
    }
}

fn show_store_info(config: &DevsiftConfig, store: Option<&Path>, json: bool) -> Result<()> {
    let dir = resolve_store_dir(config, store);
    let tree = load_rule_tree(&dir)?;
    let stats = tree.stats();
    let updated = last_modified(&dir);

    if json {
        let output = serde_json::json!({
            "directory": dir.display().to_string(),
            "updated": updated.map(|dt| dt.to_rfc3339()),
            "stats": stats,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", "Rule store".bold());
    println!("  Location: {}", dir.display());
    if let Some(updated) = updated {
        println!("  Updated:  {}", updated.format("%Y-%m-%d %H:%M:%S"));
    }
    println!();
    println!("{}", stats_table(&stats));
    Ok(())
}

fn stats_table(stats: &TreeStats) -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_BORDERS_ONLY);
    table.set_header(vec!["Kind", "Count"]);
    for (kind, count) in [
        ("Branches", stats.branches),
        ("Devices", stats.devices),
        ("Extras", stats.extras),
        ("High accuracy rules", stats.high_accuracy_keys),
        ("Skipped files", stats.skipped_files),
    ] {
        table.add_row(vec![
            Cell::new(kind),
            Cell::new(count).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Newest modification time among the store's files.
fn last_modified(dir: &Path) -> Option<DateTime<Local>> {
    fs::read_dir(dir)
        .ok()?
        .filter_map(|entry| entry.ok()?.metadata().ok()?.modified().ok())
        .max()
        .map(DateTime::<Local>::from)
}
