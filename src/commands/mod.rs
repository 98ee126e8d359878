pub mod build_info;
pub mod detect;
pub mod store;

use colored::Colorize;
use comfy_table::{Table, presets::UTF8_FULL};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::DevsiftConfig;
use crate::detect::{Detection, Detector};
use crate::error::Result;
use crate::store::{RuleTreeHandle, load_rule_tree};

/// Rule directory from the command line, else from configuration.
pub fn resolve_store_dir(config: &DevsiftConfig, store_override: Option<&Path>) -> PathBuf {
    store_override
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.store_directory())
}

/// Load the rule tree and build a detector over it.
pub fn open_detector(config: &DevsiftConfig, store_override: Option<&Path>) -> Result<Detector> {
    let dir = resolve_store_dir(config, store_override);
    log::debug!("Using rule store at {}", dir.display());
    let tree = load_rule_tree(&dir)?;
    Detector::new(Arc::new(RuleTreeHandle::new(tree)), config.detection.clone())
}

/// Print a detection either as JSON or as an attribute table.
///
/// Returns whether a device was found.
pub fn print_detection(detection: &Detection, json: bool) -> Result<bool> {
    if json {
        println!("{}", serde_json::to_string_pretty(detection)?);
        return Ok(detection.is_found());
    }

    let Some(specs) = &detection.specs else {
        eprintln!("{}", detection.message.yellow());
        return Ok(false);
    };

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Attribute", "Value"]);

    if let Value::Object(fields) = serde_json::to_value(specs)? {
        for (name, value) in fields {
            if let Some(text) = display_value(&value) {
                table.add_row(vec![name, text]);
            }
        }
    }

    println!("{table}");
    if let Some(rule_key) = &detection.rule_key {
        println!("Matched rule: {}", rule_key.cyan());
    }
    if let Some(best) = detection.ratings.first() {
        println!(
            "Hardware rating: {} of {} candidates, best score {}",
            best.id.bold(),
            detection.ratings.len(),
            best.score
        );
    }
    Ok(true)
}

/// Table text for a spec value; blanks are skipped.
fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(items) if items.is_empty() => None,
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(", "),
        ),
        other => Some(other.to_string()),
    }
}
