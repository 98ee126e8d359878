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

//! Classification from native build properties (`ro.product.model`,
//! `utsname.machine`, ...).

use crate::config::{BuildInfoRule, DetectionConfig};
use crate::matcher::sieve::{MatchKind, match_value};
use crate::matcher::{
    AGENT_HEADER, BUILD_INFO_CLASS, GENERIC_SUBTREE, STANDARD_SUBTREE, USER_AGENT_HEADER,
};
use crate::models::{DeviceRecord, ExtraRecord, HeaderSet};
use crate::store::RuleStore;

/// Tuple slot replaced by the platform name itself.
pub const PLATFORM_SENTINEL: &str = "hd-platform";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildInfoCategory {
    Device,
    Platform,
}

impl BuildInfoCategory {
    fn subtree(self) -> &'static str {
        match self {
            BuildInfoCategory::Device => STANDARD_SUBTREE,
            BuildInfoCategory::Platform => "platform",
        }
    }

    fn generic_subtree(self) -> &'static str {
        match self {
            BuildInfoCategory::Device => GENERIC_SUBTREE,
            BuildInfoCategory::Platform => "platform",
        }
    }

    fn kind(self) -> MatchKind {
        match self {
            BuildInfoCategory::Device => MatchKind::Device,
            BuildInfoCategory::Platform => MatchKind::Extra,
        }
    }

    fn rules(self, config: &DetectionConfig) -> &[BuildInfoRule] {
        match self {
            BuildInfoCategory::Device => &config.device_bi_order,
            BuildInfoCategory::Platform => &config.platform_bi_order,
        }
    }
}

/// Join the values named by `tuple` with `|`, or `None` if any key is missing.
pub fn compose_value(platform: &str, tuple: &[String], info: &HeaderSet) -> Option<String> {
    let mut parts = Vec::with_capacity(tuple.len());
    for key in tuple {
        if key == PLATFORM_SENTINEL {
            parts.push(platform);
        } else {
            parts.push(info.get(&key.to_lowercase())?);
        }
    }
    let joined = parts.join("|");
    Some(
        joined
            .trim_matches(|c: char| c == '|' || c.is_whitespace() || c == '\0')
            .to_string(),
    )
}

/// Platform whose device key names are all present, judged from key names
/// only. Inputs carrying an agent header are never treated as build info.
pub fn sniff_platform<'c>(rules: &'c [BuildInfoRule], info: &HeaderSet) -> Option<&'c str> {
    if info.contains(AGENT_HEADER) || info.contains(USER_AGENT_HEADER) {
        return None;
    }
    rules
        .iter()
        .find(|rule| {
            rule.keys
                .iter()
                .any(|tuple| tuple.iter().all(|key| info.contains(&key.to_lowercase())))
        })
        .map(|rule| rule.platform.as_str())
}

pub struct BuildInfoMatcher<'a> {
    store: &'a dyn RuleStore,
    config: &'a DetectionConfig,
}

impl<'a> BuildInfoMatcher<'a> {
    pub fn new(store: &'a dyn RuleStore, config: &'a DetectionConfig) -> Self {
        Self { store, config }
    }

    pub fn match_device(&self, info: &HeaderSet) -> Option<&'a DeviceRecord> {
        self.find(BuildInfoCategory::Device, info, |id| {
            let device = self.store.device(id);
            if device.is_none() {
                log::warn!("Build info rule points at missing device record {id}");
            }
            device
        })
    }

    pub fn match_platform(&self, info: &HeaderSet) -> Option<&'a ExtraRecord> {
        self.find(BuildInfoCategory::Platform, info, |id| {
            let extra = self.store.extra(id);
            if extra.is_none() {
                log::warn!("Build info rule points at missing extra record {id}");
            }
            extra
        })
    }

    /// Try every configured tuple in order, then the generic
    /// `generic|<platform>` forms for a sniffed platform.
    fn find<T>(
        &self,
        category: BuildInfoCategory,
        info: &HeaderSet,
        resolve: impl Fn(&'a str) -> Option<T>,
    ) -> Option<T> {
        if info.is_empty() {
            return None;
        }

        let kind = category.kind();
        for rule in category.rules(self.config) {
            for tuple in &rule.keys {
                let Some(value) = compose_value(&rule.platform, tuple, info) else {
                    continue;
                };
                log::trace!("Trying build info {category:?} match on {value:?}");
                let found =
                    match_value(self.store, BUILD_INFO_CLASS, &value, category.subtree(), kind)
                        .and_then(|hit| resolve(hit.id));
                if found.is_some() {
                    return found;
                }
            }
        }

        let platform = sniff_platform(&self.config.device_bi_order, info)?;
        log::debug!("No build info {category:?} match, trying generic {platform}");
        [format!("generic|{platform}"), format!("{platform}|generic")]
            .iter()
            .find_map(|value| {
                match_value(self.store, BUILD_INFO_CLASS, value, category.generic_subtree(), kind)
                    .and_then(|hit| resolve(hit.id))
            })
    }
}
