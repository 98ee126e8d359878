// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::DevsiftError;
use std::fmt;

pub struct ErrorContext<'a> {
    pub error: &'a DevsiftError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl<'a> ErrorContext<'a> {
    pub fn new(error: &'a DevsiftError) -> Self {
        let (suggestion, details) = match error {
            DevsiftError::RuleTreeNotLoaded => {
                let suggestion = Some(
                    "Point [store] directory in config.toml, DEVSIFT_STORE or --store at an \
                     unpacked rule database."
                        .to_string(),
                );
                let details =
                    Some("Detection cannot run without a loaded rule tree.".to_string());
                (suggestion, details)
            }
            DevsiftError::StoreNotFound(path) => {
                let suggestion = Some(format!(
                    "Ensure the rule database has been unpacked into: {path}"
                ));
                let details = None;
                (suggestion, details)
            }
            DevsiftError::InvalidRuleFile { file, reason } => {
                let suggestion = Some(
                    "The rule database may be truncated or from an incompatible release. \
                     Re-provision it and try again."
                        .to_string(),
                );
                let details = Some(format!("{file}: {reason}"));
                (suggestion, details)
            }
            DevsiftError::ConfigFile(msg) | DevsiftError::ConfigError(msg) => {
                let suggestion = Some(
                    "Check config.toml under DEVSIFT_HOME (default ~/.devsift) for syntax errors."
                        .to_string(),
                );
                let details = Some(msg.clone());
                (suggestion, details)
            }
            DevsiftError::InvalidHeader(_) => {
                let suggestion = Some(
                    "Pass headers as -H 'User-Agent: Mozilla/5.0 ...' (name, colon, value)."
                        .to_string(),
                );
                (suggestion, None)
            }
            DevsiftError::InvalidBuildInfo(_) => {
                let suggestion = Some(
                    "Pass build info as key=value pairs, e.g. ro.product.brand=samsung."
                        .to_string(),
                );
                (suggestion, None)
            }
            DevsiftError::Io(io_err) => {
                let suggestion = match io_err.kind() {
                    std::io::ErrorKind::PermissionDenied => {
                        Some("Check read permissions on the rule store directory.".to_string())
                    }
                    std::io::ErrorKind::NotFound => Some(
                        "Ensure the file or directory exists and the path is correct.".to_string(),
                    ),
                    _ => None,
                };
                let details = Some(format!("I/O error: {io_err}"));
                (suggestion, details)
            }
            _ => (None, None),
        };

        ErrorContext {
            error,
            suggestion,
            details,
        }
    }
}

impl<'a> fmt::Display for ErrorContext<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\n\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}
