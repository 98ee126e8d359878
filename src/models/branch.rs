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

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashMap;

use crate::models::de;

/// A record id as written in branch files (string or number).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordId(pub String);

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        de::id(deserializer).map(RecordId)
    }
}

/// Filters of one sieve level, each with its ordered `match: id` pairs.
pub type SieveFilters = IndexMap<String, IndexMap<String, RecordId>>;

/// On-disk sieve layout.
///
/// Archives group filters under an order key, `{ order: { filter: { match: id } } }`.
/// Hand-written stores may drop that level and list `{ filter: { match: id } }`
/// directly. Either way the file order is the rule priority.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SieveDocument {
    Ordered(IndexMap<String, SieveFilters>),
    Flat(SieveFilters),
}

impl SieveDocument {
    fn into_filters(self) -> Vec<SieveFilters> {
        match self {
            SieveDocument::Ordered(levels) => levels.into_values().collect(),
            SieveDocument::Flat(filters) => vec![filters],
        }
    }
}

/// On-disk exact layout: `{ cleansed value: id }`.
pub type ExactDocument = HashMap<String, RecordId>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchShape {
    Sieve,
    Exact,
}

impl BranchShape {
    /// Shape of a branch document. Sieve documents nest objects under every
    /// key; exact documents map straight to ids. Empty documents are exact.
    pub fn of_document(doc: &Value) -> Self {
        match doc {
            Value::Object(map) if !map.is_empty() && map.values().all(Value::is_object) => {
                BranchShape::Sieve
            }
            _ => BranchShape::Exact,
        }
    }
}

/// One gate of a sieve branch: entry requires `filter`, then the first
/// contained `matches` substring wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SieveRule {
    pub filter: String,
    pub matches: Vec<(String, String)>,
}

impl SieveRule {
    pub fn new<F, M, I>(filter: F, matches: impl IntoIterator<Item = (M, I)>) -> Self
    where
        F: Into<String>,
        M: Into<String>,
        I: Into<String>,
    {
        Self {
            filter: filter.into(),
            matches: matches
                .into_iter()
                .map(|(m, id)| (m.into(), id.into()))
                .collect(),
        }
    }
}

/// A named branch of the rule tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleBranch {
    /// Ordered rules; order is priority and never changes once loaded.
    Sieve(Vec<SieveRule>),
    /// Exact cleansed value to record id.
    Exact(HashMap<String, String>),
}

impl RuleBranch {
    pub fn shape(&self) -> BranchShape {
        match self {
            RuleBranch::Sieve(_) => BranchShape::Sieve,
            RuleBranch::Exact(_) => BranchShape::Exact,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            RuleBranch::Sieve(rules) => rules.len(),
            RuleBranch::Exact(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RuleBranch {
    /// Build a branch from its JSON document, picking the shape from the content.
    pub fn from_document(doc: Value) -> serde_json::Result<Self> {
        Ok(match BranchShape::of_document(&doc) {
            BranchShape::Sieve => serde_json::from_value::<SieveDocument>(doc)?.into(),
            BranchShape::Exact => serde_json::from_value::<ExactDocument>(doc)?.into(),
        })
    }
}

impl From<SieveDocument> for RuleBranch {
    fn from(doc: SieveDocument) -> Self {
        let rules = doc
            .into_filters()
            .into_iter()
            .flat_map(|filters| filters.into_iter())
            .map(|(filter, matches)| SieveRule {
                filter,
                matches: matches.into_iter().map(|(m, id)| (m, id.0)).collect(),
            })
            .collect();
        RuleBranch::Sieve(rules)
    }
}

impl From<ExactDocument> for RuleBranch {
    fn from(doc: ExactDocument) -> Self {
        RuleBranch::Exact(doc.into_iter().map(|(k, id)| (k, id.0)).collect())
    }
}
