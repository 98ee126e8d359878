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

//! Detection entry points.
//!
//! A [`Detector`] owns the detection settings and a shared handle to the
//! current rule tree. Every call takes one snapshot of the tree and runs
//! to completion against it, so a concurrent refresh never changes the
//! data a request sees halfway through.

pub mod overlay;
pub mod request;

use serde::{Serialize, Serializer};
use std::sync::Arc;

use crate::config::DetectionConfig;
use crate::error::Result;
use crate::matcher::buildinfo::sniff_platform;
use crate::matcher::{
    BuildInfoMatcher, DeviceMatcher, ExtraClass, ExtrasResolver, LanguageTable, Rating,
    is_platform_compatible, rank, rate,
};
use crate::models::{DeviceRecord, DeviceSpecs, ExtraSpecs, HardwareProbe, HeaderSet};
use crate::store::{RuleStore, RuleTreeHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionStatus {
    Ok,
    NotFound,
}

impl DetectionStatus {
    pub fn code(self) -> u16 {
        match self {
            DetectionStatus::Ok => 0,
            DetectionStatus::NotFound => 301,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            DetectionStatus::Ok => "OK",
            DetectionStatus::NotFound => "Not Found",
        }
    }
}

impl Serialize for DetectionStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.code())
    }
}

/// Outcome of one detection call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Detection {
    pub status: DetectionStatus,
    pub message: &'static str,
    #[serde(rename = "hd_specs", skip_serializing_if = "Option::is_none")]
    pub specs: Option<DeviceSpecs>,
    /// Sieve rule that identified the device, when there was one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_key: Option<String>,
    /// Candidate ratings, best first, when a hardware tie-break ran.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ratings: Vec<Rating>,
}

impl Detection {
    pub fn not_found() -> Self {
        Self {
            status: DetectionStatus::NotFound,
            message: DetectionStatus::NotFound.message(),
            specs: None,
            rule_key: None,
            ratings: Vec::new(),
        }
    }

    fn found(specs: DeviceSpecs, rule_key: Option<String>, ratings: Vec<Rating>) -> Self {
        Self {
            status: DetectionStatus::Ok,
            message: DetectionStatus::Ok.message(),
            specs: Some(specs),
            rule_key,
            ratings,
        }
    }

    pub fn is_found(&self) -> bool {
        self.status == DetectionStatus::Ok
    }
}

pub struct Detector {
    tree: Arc<RuleTreeHandle>,
    config: DetectionConfig,
    languages: LanguageTable,
}

impl Detector {
    pub fn new(tree: Arc<RuleTreeHandle>, config: DetectionConfig) -> Result<Self> {
        let languages = LanguageTable::new(&config.languages)?;
        Ok(Self {
            tree,
            config,
            languages,
        })
    }

    pub fn tree(&self) -> &RuleTreeHandle {
        &self.tree
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Route to build-info detection when the input looks like build
    /// properties, otherwise treat it as request headers.
    pub fn detect(&self, input: &HeaderSet) -> Result<Detection> {
        let tree = self.tree.snapshot()?;
        Ok(self.route(&*tree, input))
    }

    pub fn detect_from_headers(&self, headers: &HeaderSet) -> Result<Detection> {
        self.detect_from_headers_with_hardware(headers, None)
    }

    /// Header detection with an explicit hardware info string, which takes
    /// precedence over one carried in the hardware info header.
    pub fn detect_from_headers_with_hardware(
        &self,
        headers: &HeaderSet,
        hardware_info: Option<&str>,
    ) -> Result<Detection> {
        let tree = self.tree.snapshot()?;
        Ok(self.match_headers(&*tree, headers, hardware_info))
    }

    pub fn detect_from_build_info(&self, build_info: &HeaderSet) -> Result<Detection> {
        let tree = self.tree.snapshot()?;
        Ok(self.match_build_info(&*tree, build_info))
    }

    /// True when the input identifies a device whose rule is shared with
    /// other devices, so on-device hardware info would sharpen the result.
    /// Build info never carries a rule key and so never needs the helper.
    pub fn is_helper_useful(&self, input: &HeaderSet) -> Result<bool> {
        let tree = self.tree.snapshot()?;
        let detection = self.route(&*tree, input);
        Ok(detection
            .rule_key
            .as_deref()
            .is_some_and(|key| tree.high_accuracy_candidates(key).is_some()))
    }

    fn route(&self, store: &dyn RuleStore, input: &HeaderSet) -> Detection {
        if sniff_platform(&self.config.device_bi_order, input).is_some() {
            log::debug!("Input carries build info keys");
            self.match_build_info(store, input)
        } else {
            self.match_headers(store, input, None)
        }
    }

    fn match_build_info(&self, store: &dyn RuleStore, build_info: &HeaderSet) -> Detection {
        let matcher = BuildInfoMatcher::new(store, &self.config);

        let Some(device) = matcher.match_device(build_info) else {
            log::debug!("No device matched build info");
            return Detection::not_found();
        };

        let mut specs = device.specs.clone();
        if let Some(platform) = matcher.match_platform(build_info) {
            overlay::overlay_platform(&mut specs, &platform.specs);
        }
        Detection::found(specs, None, Vec::new())
    }

    fn match_headers(
        &self,
        store: &dyn RuleStore,
        headers: &HeaderSet,
        hardware_info: Option<&str>,
    ) -> Detection {
        if headers.is_empty() {
            return Detection::not_found();
        }

        let prepared = request::prepare(headers, &self.config.hardware_info_header);
        let probe = hardware_info
            .or(prepared.hardware_info.as_deref())
            .and_then(HardwareProbe::parse);

        let Some(found) = DeviceMatcher::new(store, &self.config).match_headers(&prepared.device)
        else {
            log::debug!("No device matched headers");
            return Detection::not_found();
        };
        let rule_key = found.rule_key;
        let mut device = found.record;

        if device.ops.stop_on_detect {
            log::debug!("Device {} stops on detect", device.id);
            let mut specs = device.specs.clone();
            if let Some(probe) = probe.as_ref().filter(|_| device.ops.overlay_result_specs) {
                overlay::overlay_hardware(&mut specs, probe);
            }
            return Detection::found(specs, rule_key, Vec::new());
        }

        let resolver = ExtrasResolver::new(store, &self.config, &self.languages);
        let platform = resolver.match_extra(ExtraClass::Platform, &prepared.extra);
        let browser = resolver.match_extra(ExtraClass::Browser, &prepared.extra);
        let app = resolver.match_extra(ExtraClass::App, &prepared.extra);
        let language = resolver.match_language(&prepared.extra);

        let mut ratings = Vec::new();
        if let Some(candidates) = rule_key
            .as_deref()
            .and_then(|key| store.high_accuracy_candidates(key))
        {
            let platform_specs = platform.map(|extra| &extra.specs);
            let survivors = compatible_candidates(store, candidates, platform_specs);
            log::debug!(
                "Rule {} is shared by {} devices, {} compatible with the platform",
                rule_key.as_deref().unwrap_or_default(),
                candidates.len(),
                survivors.len()
            );

            if let Some(probe) = probe.as_ref().filter(|_| survivors.len() >= 2) {
                ratings = survivors.iter().map(|d| rate(d, probe)).collect();
                rank(&mut ratings);
                if let Some(best) = ratings.first().filter(|best| best.score != 0) {
                    if let Some(winner) = store.device(&best.id) {
                        log::debug!("Hardware rating picked device {}", winner.id);
                        device = winner;
                    }
                }
            }
        }

        let mut specs = device.specs.clone();
        if let Some(platform) = platform {
            overlay::overlay_platform(&mut specs, &platform.specs);
        }
        if let Some(browser) = browser {
            overlay::overlay_browser(&mut specs, &browser.specs);
        }
        if let Some(app) = app {
            overlay::overlay_app(&mut specs, &app.specs);
        }
        if let Some(language) = &language {
            overlay::overlay_language(&mut specs, language);
        }
        if let Some(probe) = probe.as_ref().filter(|_| device.ops.overlay_result_specs) {
            overlay::overlay_hardware(&mut specs, probe);
        }

        Detection::found(specs, rule_key, ratings)
    }
}

/// Candidates that could be running the detected platform.
fn compatible_candidates<'a>(
    store: &'a dyn RuleStore,
    candidates: &[String],
    platform: Option<&ExtraSpecs>,
) -> Vec<&'a DeviceRecord> {
    candidates
        .iter()
        .filter_map(|id| {
            let device = store.device(id);
            if device.is_none() {
                log::warn!("High accuracy candidate {id} has no device record");
            }
            device
        })
        .filter(|device| is_platform_compatible(platform, &device.specs))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DeviceOps, RuleBranch, SieveRule};
    use crate::store::RuleTree;
    use crate::test::fixtures::{create_test_browser, create_test_headers as headers};

    fn tree() -> RuleTree {
        let mut tree = RuleTree::new();
        tree.insert_device(DeviceRecord::new(
            "1",
            DeviceSpecs {
                vendor: "Nokia".to_string(),
                model: "N95".to_string(),
                platform: "Symbian".to_string(),
                platform_version: "9.2".to_string(),
                display_x: Some(240),
                display_y: Some(320),
                ..DeviceSpecs::default()
            },
        ));
        tree.insert_device(
            DeviceRecord::new(
                "2",
                DeviceSpecs {
                    vendor: "Kiosk".to_string(),
                    model: "Terminal".to_string(),
                    display_x: Some(1024),
                    display_y: Some(768),
                    ..DeviceSpecs::default()
                },
            )
            .with_ops(DeviceOps {
                stop_on_detect: true,
                overlay_result_specs: true,
            }),
        );
        tree.insert_extra(create_test_browser("10", "Opera Mini", "4.2"));
        tree.insert_branch(
            "user-agent0",
            RuleBranch::Sieve(vec![
                SieveRule::new("nokia", [("n95", "1")]),
                SieveRule::new("kiosk", [("terminal", "2")]),
            ]),
        );
        tree.insert_branch(
            "user-agentbrowser",
            RuleBranch::Sieve(vec![SieveRule::new("opera", [("opera", "10")])]),
        );
        tree
    }

    fn detector(tree: RuleTree) -> Detector {
        Detector::new(
            Arc::new(RuleTreeHandle::new(tree)),
            DetectionConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_extras_are_overlaid() {
        let detector = detector(tree());
        let detection = detector
            .detect_from_headers(&headers(&[(
                "User-Agent",
                "NokiaN95/1.0 Opera/9.80 (J2ME/MIDP; Opera Mini/4.2; de)",
            )]))
            .unwrap();

        assert!(detection.is_found());
        assert_eq!(detection.rule_key.as_deref(), Some("user-agent:nokia:n95"));
        let specs = detection.specs.unwrap();
        assert_eq!(specs.model, "N95");
        assert_eq!(specs.browser, "Opera Mini");
        assert_eq!(specs.language, "de");
        assert_eq!(specs.platform, "Symbian");
    }

    #[test]
    fn test_stop_on_detect_skips_extras() {
        let detector = detector(tree());
        let detection = detector
            .detect_from_headers_with_hardware(
                &headers(&[("User-Agent", "Kiosk Terminal Opera (de)")]),
                Some("x-specs=1280:800:100:0"),
            )
            .unwrap();

        let specs = detection.specs.unwrap();
        assert_eq!(specs.browser, "");
        assert_eq!(specs.language, "");
        assert_eq!(specs.display_x, Some(1280));
        assert_eq!(specs.display_y, Some(800));
    }

    #[test]
    fn test_hardware_overlay_needs_flag() {
        let detector = detector(tree());
        let detection = detector
            .detect_from_headers(&headers(&[
                ("User-Agent", "NokiaN95/1.0"),
                ("X-Local-HardwareInfo", "480:640:200:0"),
            ]))
            .unwrap();
        assert_eq!(detection.specs.unwrap().display_x, Some(240));
    }

    #[test]
    fn test_not_found_has_no_specs() {
        let detector = detector(tree());
        let detection = detector
            .detect_from_headers(&headers(&[("User-Agent", "zzzzzzzzzz")]))
            .unwrap();
        assert_eq!(detection.status, DetectionStatus::NotFound);
        assert_eq!(detection.status.code(), 301);
        assert_eq!(detection.message, "Not Found");
        assert!(detection.specs.is_none());

        let empty = detector.detect_from_headers(&HeaderSet::new()).unwrap();
        assert!(!empty.is_found());
    }

    #[test]
    fn test_unloaded_tree_is_an_error() {
        let detector = Detector::new(
            Arc::new(RuleTreeHandle::empty()),
            DetectionConfig::default(),
        )
        .unwrap();
        let err = detector
            .detect_from_headers(&headers(&[("User-Agent", "NokiaN95")]))
            .unwrap_err();
        assert!(matches!(err, crate::error::DevsiftError::RuleTreeNotLoaded));
    }

    #[test]
    fn test_detection_json_shape() {
        let detector = detector(tree());
        let detection = detector
            .detect_from_headers(&headers(&[("User-Agent", "NokiaN95/1.0")]))
            .unwrap();
        let json = serde_json::to_value(&detection).unwrap();
        assert_eq!(json["status"], 0);
        assert_eq!(json["message"], "OK");
        assert_eq!(json["hd_specs"]["general_model"], "N95");

        let json = serde_json::to_value(Detection::not_found()).unwrap();
        assert_eq!(json["status"], 301);
        assert!(json.get("hd_specs").is_none());
    }
}
