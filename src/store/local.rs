//! Local directory rule store loader.
//!
//! Reads an unpacked rule archive: one JSON document per file, named after
//! the key it holds (`Device_19.json`, `Extra_4.json`, `user-agent0.json`,
//! `hachecks.json`, ...).

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use walkdir::WalkDir;

use crate::error::{DevsiftError, Result};
use crate::store::RuleTree;

/// Load every `*.json` document directly inside `directory`.
///
/// Unreadable or malformed files are skipped with a warning so that one bad
/// record does not take the whole database down.
pub fn load_rule_tree(directory: &Path) -> Result<RuleTree> {
    if !directory.is_dir() {
        return Err(DevsiftError::StoreNotFound(directory.display().to_string()));
    }

    let mut tree = RuleTree::new();

    for entry in WalkDir::new(directory).min_depth(1).max_depth(1) {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().is_none_or(|ext| ext != "json") {
            continue;
        }
        let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };

        let doc = match File::open(path)
            .map_err(DevsiftError::from)
            .and_then(|file| Ok(serde_json::from_reader(BufReader::new(file))?))
        {
            Ok(doc) => doc,
            Err(e) => {
                log::warn!("Skipping rule file {}: {e}", path.display());
                tree.record_skipped();
                continue;
            }
        };

        if let Err(e) = tree.ingest(name, doc) {
            log::warn!("Skipping rule file {}: {e}", path.display());
            tree.record_skipped();
        }
    }

    let stats = tree.stats();
    log::info!(
        "Loaded rule tree from {}: {} branches, {} devices, {} extras, {} high accuracy keys",
        directory.display(),
        stats.branches,
        stats.devices,
        stats.extras,
        stats.high_accuracy_keys
    );
    if stats.skipped_files > 0 {
        log::warn!("{} rule files could not be loaded", stats.skipped_files);
    }

    Ok(tree)
}
