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

use crate::models::RuleBranch;
use crate::normalize::{clean_device, clean_extra};
use crate::store::RuleStore;

/// Shortest cleansed value worth matching.
pub const MIN_MATCH_LENGTH: usize = 4;

/// Which cleansing a value gets before it is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Device,
    Extra,
}

impl MatchKind {
    pub fn clean(self, value: &str) -> String {
        match self {
            MatchKind::Device => clean_device(value),
            MatchKind::Extra => clean_extra(value),
        }
    }
}

/// A successful branch lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SieveHit<'a> {
    pub id: &'a str,
    /// `class:filter:match` for sieve hits; exact lookups have no rule key.
    pub rule_key: Option<String>,
}

/// Match `raw` against branch `{class}{subtree}`.
///
/// Sieve branches are walked in stored order and the first contained
/// `(filter, match)` pair wins. Exact branches are a direct lookup of the
/// cleansed value. Short values and missing branches are plain misses.
pub fn match_value<'a>(
    store: &'a dyn RuleStore,
    class: &str,
    raw: &str,
    subtree: &str,
    kind: MatchKind,
) -> Option<SieveHit<'a>> {
    let value = kind.clean(raw);
    if value.len() < MIN_MATCH_LENGTH {
        log::trace!("Value too short to match on {class}: {value:?}");
        return None;
    }

    let tree_tag = format!("{class}{subtree}");
    let Some(branch) = store.branch(&tree_tag) else {
        log::trace!("No branch {tree_tag}");
        return None;
    };

    match branch {
        RuleBranch::Sieve(rules) => rules
            .iter()
            .filter(|rule| value.contains(rule.filter.as_str()))
            .find_map(|rule| {
                rule.matches
                    .iter()
                    .find(|(needle, _)| value.contains(needle.as_str()))
                    .map(|(needle, id)| {
                        let rule_key = rule_key(class, &rule.filter, needle);
                        log::trace!("{tree_tag} matched {rule_key} -> {id}");
                        SieveHit {
                            id: id.as_str(),
                            rule_key: Some(rule_key),
                        }
                    })
            }),
        RuleBranch::Exact(entries) => entries.get(&value).map(|id| {
            log::trace!("{tree_tag} exact hit -> {id}");
            SieveHit {
                id: id.as_str(),
                rule_key: None,
            }
        }),
    }
}

/// Key identifying the rule that produced a match, as used by the
/// high-accuracy index.
pub fn rule_key(class: &str, filter: &str, needle: &str) -> String {
    format!(
        "{}:{}:{}",
        clean_device(class),
        clean_device(filter),
        clean_device(needle)
    )
}
