use colored::Colorize;
use std::path::Path;

use crate::commands::{open_detector, print_detection};
use crate::config::DevsiftConfig;
use crate::detect::Detector;
use crate::error::Result;
use crate::models::HeaderSet;

/// Parse `Name: value` arguments into a header set.
pub fn parse_headers(lines: &[String]) -> Result<HeaderSet> {
    let mut headers = HeaderSet::new();
    for line in lines {
        let (name, value) = HeaderSet::parse_line(line)?;
        headers.insert(name, value);
    }
    Ok(headers)
}

pub struct DetectCommand {
    detector: Detector,
}

impl DetectCommand {
    pub fn new(config: &DevsiftConfig, store: Option<&Path>) -> Result<Self> {
        Ok(Self {
            detector: open_detector(config, store)?,
        })
    }

    pub fn execute(
        &self,
        header_lines: &[String],
        hardware: Option<&str>,
        json: bool,
    ) -> Result<bool> {
        let headers = parse_headers(header_lines)?;
        let detection = self
            .detector
            .detect_from_headers_with_hardware(&headers, hardware)?;
        print_detection(&detection, json)
    }
}

pub struct HelperUsefulCommand {
    detector: Detector,
}

impl HelperUsefulCommand {
    pub fn new(config: &DevsiftConfig, store: Option<&Path>) -> Result<Self> {
        Ok(Self {
            detector: open_detector(config, store)?,
        })
    }

    pub fn execute(&self, header_lines: &[String]) -> Result<bool> {
        let headers = parse_headers(header_lines)?;
        let useful = self.detector.is_helper_useful(&headers)?;
        if useful {
            println!("{}", "yes".green());
        } else {
            println!("{}", "no".dimmed());
        }
        Ok(useful)
    }
}
