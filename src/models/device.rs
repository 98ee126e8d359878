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
use std::collections::BTreeMap;

use crate::models::de;

/// The `hd_specs` attribute block of a device, as emitted in a detection reply.
///
/// Attributes the engine does not interpret are carried in `other` and
/// written back out unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceSpecs {
    #[serde(rename = "general_vendor", default, deserialize_with = "de::string")]
    pub vendor: String,
    #[serde(rename = "general_model", default, deserialize_with = "de::string")]
    pub model: String,
    #[serde(rename = "general_type", default, deserialize_with = "de::string")]
    pub device_type: String,
    #[serde(rename = "general_aliases", default, deserialize_with = "de::string_list")]
    pub aliases: Vec<String>,

    #[serde(rename = "general_platform", default, deserialize_with = "de::string")]
    pub platform: String,
    #[serde(
        rename = "general_platform_version",
        default,
        deserialize_with = "de::string"
    )]
    pub platform_version: String,
    #[serde(
        rename = "general_platform_version_max",
        default,
        deserialize_with = "de::string"
    )]
    pub platform_version_max: String,

    #[serde(rename = "general_browser", default, deserialize_with = "de::string")]
    pub browser: String,
    #[serde(
        rename = "general_browser_version",
        default,
        deserialize_with = "de::string"
    )]
    pub browser_version: String,

    #[serde(rename = "general_app", default, deserialize_with = "de::string")]
    pub app: String,
    #[serde(rename = "general_app_version", default, deserialize_with = "de::string")]
    pub app_version: String,
    #[serde(
        rename = "general_app_category",
        default,
        deserialize_with = "de::string"
    )]
    pub app_category: String,

    #[serde(rename = "general_language", default, deserialize_with = "de::string")]
    pub language: String,
    #[serde(
        rename = "general_language_full",
        default,
        deserialize_with = "de::string"
    )]
    pub language_full: String,

    #[serde(rename = "display_x", default, deserialize_with = "de::opt_u32")]
    pub display_x: Option<u32>,
    #[serde(rename = "display_y", default, deserialize_with = "de::opt_u32")]
    pub display_y: Option<u32>,
    #[serde(
        rename = "display_pixel_ratio",
        default,
        deserialize_with = "de::opt_f64"
    )]
    pub display_pixel_ratio: Option<f64>,
    #[serde(
        rename = "display_css_screen_sizes",
        default,
        deserialize_with = "de::string_list"
    )]
    pub css_screen_sizes: Vec<String>,

    #[serde(rename = "benchmark_min", default, deserialize_with = "de::opt_u32")]
    pub benchmark_min: Option<u32>,
    #[serde(rename = "benchmark_max", default, deserialize_with = "de::opt_u32")]
    pub benchmark_max: Option<u32>,

    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

/// Operational switches attached to a device record (`hd_ops`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceOps {
    /// Skip extras resolution and tie-break once this device is matched.
    #[serde(default, deserialize_with = "de::flag")]
    pub stop_on_detect: bool,
    /// Let on-device hardware info overwrite the reported display attributes.
    #[serde(default, deserialize_with = "de::flag")]
    pub overlay_result_specs: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceRecord {
    #[serde(rename = "_id", deserialize_with = "de::id")]
    pub id: String,
    #[serde(rename = "hd_specs", default)]
    pub specs: DeviceSpecs,
    #[serde(rename = "hd_ops", default)]
    pub ops: DeviceOps,
}

impl DeviceRecord {
    pub fn new(id: impl Into<String>, specs: DeviceSpecs) -> Self {
        Self {
            id: id.into(),
            specs,
            ops: DeviceOps::default(),
        }
    }

    pub fn with_ops(mut self, ops: DeviceOps) -> Self {
        self.ops = ops;
        self
    }
}
