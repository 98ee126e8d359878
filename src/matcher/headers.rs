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

//! Device matching from request headers.
//!
//! Strategies run in a fixed order and the first one that yields a device
//! wins:
//!
//! 1. operator header carrying `vendor # model`
//! 2. `profile` then `x-wap-profile` (exact lookup)
//! 3. configured user-agent headers, then any other `x-` headers
//! 4. generic fallback on the agent headers

use crate::config::DetectionConfig;
use crate::matcher::sieve::{MatchKind, SieveHit, match_value};
use crate::matcher::{
    AGENT_HEADER, GENERIC_SUBTREE, PROFILE_CLASS, PROFILE_HEADERS, STANDARD_SUBTREE,
    USER_AGENT_CLASS, USER_AGENT_HEADER, priority_order,
};
use crate::models::{DeviceRecord, HeaderSet};
use crate::store::RuleStore;

/// The operator placeholder `? # ?` after device cleansing.
const OPERATOR_PLACEHOLDER: &str = "??";

/// A matched device and the sieve rule that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceMatch<'a> {
    pub record: &'a DeviceRecord,
    pub rule_key: Option<String>,
}

pub struct DeviceMatcher<'a> {
    store: &'a dyn RuleStore,
    config: &'a DetectionConfig,
}

impl<'a> DeviceMatcher<'a> {
    pub fn new(store: &'a dyn RuleStore, config: &'a DetectionConfig) -> Self {
        Self { store, config }
    }

    /// Run the header cascade over device-cleansed headers.
    pub fn match_headers(&self, headers: &HeaderSet) -> Option<DeviceMatch<'a>> {
        self.match_operator(headers)
            .or_else(|| self.match_profiles(headers))
            .or_else(|| self.match_user_agents(headers))
            .or_else(|| self.match_generic(headers))
    }

    fn match_operator(&self, headers: &HeaderSet) -> Option<DeviceMatch<'a>> {
        let name = self.config.operator_header.as_str();
        let value = present(headers, name)?;
        if value.trim() == OPERATOR_PLACEHOLDER {
            return None;
        }
        log::debug!("Trying operator header {name}");
        let hit = match_value(self.store, name, value, STANDARD_SUBTREE, MatchKind::Device)?;
        self.resolve(hit)
    }

    fn match_profiles(&self, headers: &HeaderSet) -> Option<DeviceMatch<'a>> {
        PROFILE_HEADERS.iter().find_map(|name| {
            let value = present(headers, name)?;
            log::debug!("Trying profile header {name}");
            let hit = match_value(
                self.store,
                PROFILE_CLASS,
                value,
                STANDARD_SUBTREE,
                MatchKind::Device,
            )?;
            self.resolve(hit)
        })
    }

    fn match_user_agents(&self, headers: &HeaderSet) -> Option<DeviceMatch<'a>> {
        // Headers already tried by the earlier strategies are spent.
        let mut consumed = vec![self.config.operator_header.as_str()];
        consumed.extend_from_slice(PROFILE_HEADERS);

        let order = priority_order(&self.config.device_ua_order, headers, &consumed);
        order.iter().find_map(|name| {
            let value = present(headers, name)?;
            log::trace!("Trying user-agent match on header {name}");
            let hit = match_value(
                self.store,
                USER_AGENT_CLASS,
                value,
                STANDARD_SUBTREE,
                MatchKind::Device,
            )?;
            self.resolve(hit)
        })
    }

    fn match_generic(&self, headers: &HeaderSet) -> Option<DeviceMatch<'a>> {
        let order = [
            self.config.operator_ua_header.as_str(),
            AGENT_HEADER,
            USER_AGENT_HEADER,
        ];
        order.iter().find_map(|name| {
            let value = headers.get(name)?;
            log::trace!("Trying generic match on header {name}");
            let hit = match_value(
                self.store,
                USER_AGENT_CLASS,
                value,
                GENERIC_SUBTREE,
                MatchKind::Device,
            )?;
            self.resolve(hit)
        })
    }

    fn resolve(&self, hit: SieveHit<'a>) -> Option<DeviceMatch<'a>> {
        match self.store.device(hit.id) {
            Some(record) => {
                log::debug!("Matched device {} ({})", record.id, record.specs.model);
                Some(DeviceMatch {
                    record,
                    rule_key: hit.rule_key,
                })
            }
            None => {
                log::warn!("Rule points at missing device record {}", hit.id);
                None
            }
        }
    }
}

/// Header value, treating blank values as absent.
fn present<'h>(headers: &'h HeaderSet, name: &str) -> Option<&'h str> {
    headers.get(name).filter(|value| !value.trim().is_empty())
}
