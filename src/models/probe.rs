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

use serde::Serialize;

/// Lightweight hardware facts reported from the device itself.
///
/// Wire form is `width:height:ratio:benchmark`, optionally prefixed with a
/// cookie or header name and `=`, e.g. `x-specs1a=320:480:100:100`. The pixel
/// ratio is carried in hundredths (`200` means 2.0).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HardwareProbe {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub pixel_ratio_hundredths: Option<u32>,
    pub benchmark: Option<u32>,
}

impl HardwareProbe {
    /// Parse a probe string; malformed input yields `None`.
    ///
    /// Fields that are not unsigned integers (blank, negative, text) are
    /// treated as absent and score nothing, rather than being read as zero.
    pub fn parse(info: &str) -> Option<Self> {
        let payload = match info.split_once('=') {
            Some((_, rest)) if rest.is_empty() => return None,
            Some((_, rest)) => rest,
            None => info,
        };

        let fields: Vec<&str> = payload.split(':').collect();
        if fields.len() != 4 {
            log::debug!("Ignoring hardware info with {} fields", fields.len());
            return None;
        }

        let field = |i: usize| fields[i].trim().parse::<u32>().ok();
        Some(Self {
            width: field(0),
            height: field(1),
            pixel_ratio_hundredths: field(2),
            benchmark: field(3),
        })
    }

    /// Pixel ratio as a plain factor (`1.5`, `2.0`, ...).
    pub fn pixel_ratio(&self) -> Option<f64> {
        self.pixel_ratio_hundredths.map(|r| f64::from(r) / 100.0)
    }
}
