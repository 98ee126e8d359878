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

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::error::{DevsiftError, Result};
use crate::models::branch::RecordId;
use crate::models::{DeviceRecord, ExtraRecord, RuleBranch};
use crate::store::{DEVICE_PREFIX, EXTRA_PREFIX, HIGH_ACCURACY_BRANCH, RuleStore};

#[derive(Deserialize)]
struct DeviceDocument {
    #[serde(rename = "Device")]
    device: DeviceRecord,
}

#[derive(Deserialize)]
struct ExtraDocument {
    #[serde(rename = "Extra")]
    extra: ExtraRecord,
}

/// Immutable, fully loaded rule database.
#[derive(Debug, Default)]
pub struct RuleTree {
    branches: HashMap<String, RuleBranch>,
    devices: HashMap<String, DeviceRecord>,
    extras: HashMap<String, ExtraRecord>,
    high_accuracy: HashMap<String, Vec<String>>,
    skipped_files: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    pub branches: usize,
    pub devices: usize,
    pub extras: usize,
    pub high_accuracy_keys: usize,
    /// Store files that could not be read or ingested.
    pub skipped_files: usize,
}

impl RuleTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one archive document, dispatching on its name (`Device_12`,
    /// `Extra_3`, `hachecks`, or a branch such as `user-agent0`).
    pub fn ingest(&mut self, name: &str, doc: Value) -> Result<()> {
        let invalid = |e: serde_json::Error| DevsiftError::InvalidRuleFile {
            file: name.to_string(),
            reason: e.to_string(),
        };

        if name.starts_with(DEVICE_PREFIX) {
            let doc: DeviceDocument = serde_json::from_value(doc).map_err(invalid)?;
            self.insert_device(doc.device);
        } else if name.starts_with(EXTRA_PREFIX) {
            let doc: ExtraDocument = serde_json::from_value(doc).map_err(invalid)?;
            self.insert_extra(doc.extra);
        } else if name == HIGH_ACCURACY_BRANCH {
            let checks: HashMap<String, Vec<RecordId>> =
                serde_json::from_value(doc).map_err(invalid)?;
            for (rule_key, ids) in checks {
                self.insert_high_accuracy(rule_key, ids.into_iter().map(|id| id.0).collect());
            }
        } else {
            let branch = RuleBranch::from_document(doc).map_err(invalid)?;
            log::trace!("Branch {name}: {} entries", branch.len());
            self.insert_branch(name, branch);
        }
        Ok(())
    }

    pub(crate) fn record_skipped(&mut self) {
        self.skipped_files += 1;
    }

    pub fn insert_branch(&mut self, name: impl Into<String>, branch: RuleBranch) {
        self.branches.insert(name.into(), branch);
    }

    pub fn insert_device(&mut self, device: DeviceRecord) {
        self.devices.insert(device.id.clone(), device);
    }

    pub fn insert_extra(&mut self, extra: ExtraRecord) {
        self.extras.insert(extra.id.clone(), extra);
    }

    /// Register an ambiguous rule key. Keys with fewer than two distinct
    /// candidates are not ambiguous and are dropped.
    pub fn insert_high_accuracy(&mut self, rule_key: impl Into<String>, ids: Vec<String>) {
        let mut unique: Vec<String> = Vec::with_capacity(ids.len());
        for id in ids {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }

        let rule_key = rule_key.into();
        if unique.len() < 2 {
            log::debug!("Dropping high accuracy entry {rule_key} with a single candidate");
            return;
        }
        self.high_accuracy.insert(rule_key, unique);
    }

    pub fn stats(&self) -> TreeStats {
        TreeStats {
            branches: self.branches.len(),
            devices: self.devices.len(),
            extras: self.extras.len(),
            high_accuracy_keys: self.high_accuracy.len(),
            skipped_files: self.skipped_files,
        }
    }
}

impl RuleStore for RuleTree {
    fn branch(&self, name: &str) -> Option<&RuleBranch> {
        self.branches.get(name)
    }

    fn device(&self, id: &str) -> Option<&DeviceRecord> {
        self.devices.get(id)
    }

    fn extra(&self, id: &str) -> Option<&ExtraRecord> {
        self.extras.get(id)
    }

    fn high_accuracy_candidates(&self, rule_key: &str) -> Option<&[String]> {
        self.high_accuracy.get(rule_key).map(Vec::as_slice)
    }
}
