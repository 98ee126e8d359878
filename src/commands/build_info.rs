use std::path::Path;

use crate::commands::{open_detector, print_detection};
use crate::config::DevsiftConfig;
use crate::detect::Detector;
use crate::error::{DevsiftError, Result};
use crate::models::HeaderSet;

/// Parse `key=value` arguments. Values may themselves contain `=`.
pub fn parse_build_info(entries: &[String]) -> Result<HeaderSet> {
    let mut info = HeaderSet::new();
    for entry in entries {
        let (key, value) = entry
            .split_once('=')
            .filter(|(key, _)| !key.trim().is_empty())
            .ok_or_else(|| DevsiftError::InvalidBuildInfo(entry.clone()))?;
        info.insert(key, value.trim());
    }
    Ok(info)
}

pub struct BuildInfoCommand {
    detector: Detector,
}

impl BuildInfoCommand {
    pub fn new(config: &DevsiftConfig, store: Option<&Path>) -> Result<Self> {
        Ok(Self {
            detector: open_detector(config, store)?,
        })
    }

    pub fn execute(&self, entries: &[String], json: bool) -> Result<bool> {
        let info = parse_build_info(entries)?;
        let detection = self.detector.detect_from_build_info(&info)?;
        print_detection(&detection, json)
    }
}
