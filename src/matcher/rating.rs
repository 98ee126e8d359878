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

//! Hardware based tie-break between devices sharing one ambiguous rule.

use serde::Serialize;

use crate::models::{DeviceRecord, DeviceSpecs, HardwareProbe};

pub const RESOLUTION_WEIGHT: u32 = 40;
pub const PIXEL_RATIO_BASELINE: u32 = 20;
pub const PIXEL_RATIO_MATCH: u32 = 40;
pub const BENCHMARK_WEIGHT: u32 = 10;
pub const POSSIBLE_SCORE: u32 = 70;
/// Distance reported when a benchmark comparison is impossible.
pub const NO_DISTANCE: u64 = 100_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rating {
    #[serde(rename = "_id")]
    pub id: String,
    pub resolution: u32,
    pub display_pixel_ratio: u32,
    pub benchmark: u32,
    pub score: u32,
    pub possible: u32,
    pub distance: u64,
}

/// Score one candidate against the probe.
pub fn rate(device: &DeviceRecord, probe: &HardwareProbe) -> Rating {
    let specs = &device.specs;
    let resolution = resolution_score(specs, probe);
    let display_pixel_ratio = pixel_ratio_score(specs, probe);
    let benchmark = benchmark_score(specs, probe);

    let distance = match (specs.benchmark_min, specs.benchmark_max, probe.benchmark) {
        (Some(min), Some(max), Some(bench)) => {
            let mid = (u64::from(min) + u64::from(max)) / 2;
            mid.abs_diff(u64::from(bench))
        }
        _ => NO_DISTANCE,
    };

    Rating {
        id: device.id.clone(),
        resolution,
        display_pixel_ratio,
        benchmark,
        score: resolution + display_pixel_ratio + benchmark,
        possible: POSSIBLE_SCORE,
        distance,
    }
}

/// Best first: highest score, then smallest distance.
pub fn rank(ratings: &mut [Rating]) {
    ratings.sort_by(|a, b| b.score.cmp(&a.score).then(a.distance.cmp(&b.distance)));
}

fn sorted_pair(a: u32, b: u32) -> (u32, u32) {
    (a.max(b), a.min(b))
}

fn resolution_score(specs: &DeviceSpecs, probe: &HardwareProbe) -> u32 {
    let (Some(width), Some(height)) = (probe.width, probe.height) else {
        return 0;
    };
    let wanted = sorted_pair(width, height);

    if let (Some(x), Some(y)) = (specs.display_x, specs.display_y) {
        if sorted_pair(x, y) == wanted {
            return RESOLUTION_WEIGHT;
        }
    }

    // Devices may expose several css resolutions (zoom modes).
    let css_match = specs.css_screen_sizes.iter().any(|size| {
        size.split_once('x')
            .and_then(|(w, h)| Some((w.trim().parse::<u32>().ok()?, h.trim().parse::<u32>().ok()?)))
            .is_some_and(|(w, h)| sorted_pair(w, h) == wanted)
    });
    if css_match { RESOLUTION_WEIGHT } else { 0 }
}

fn pixel_ratio_score(specs: &DeviceSpecs, probe: &HardwareProbe) -> u32 {
    let (Some(device_ratio), Some(probe_ratio)) = (specs.display_pixel_ratio, probe.pixel_ratio())
    else {
        return PIXEL_RATIO_BASELINE;
    };
    if round2(device_ratio) == round2(probe_ratio) {
        PIXEL_RATIO_MATCH
    } else {
        PIXEL_RATIO_BASELINE
    }
}

fn benchmark_score(specs: &DeviceSpecs, probe: &HardwareProbe) -> u32 {
    match (specs.benchmark_min, specs.benchmark_max, probe.benchmark) {
        (Some(min), Some(max), Some(bench)) if (min..=max).contains(&bench) => BENCHMARK_WEIGHT,
        _ => 0,
    }
}

fn round2(value: f64) -> i64 {
    (value * 100.0).round() as i64
}
