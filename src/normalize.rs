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

//! Canonical forms used when matching header and build-info values.
//!
//! Only matching inputs go through these functions. Attributes emitted in a
//! detection result are always stored verbatim.

/// Characters dropped from device matching input.
const DEVICE_STRIP: &[char] = &[' ', '_', '\\', '#', ',', '.', '/', ':', '"', '\''];

fn is_printable_ascii(c: char) -> bool {
    (' '..='~').contains(&c)
}

/// Cleanse a value for device (and build-info device) matching.
pub fn clean_device(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .filter(|c| !DEVICE_STRIP.contains(c) && is_printable_ascii(*c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Cleanse a value for platform, browser, app and language matching.
pub fn clean_extra(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .filter(|c| *c != ' ' && is_printable_ascii(*c))
        .collect::<String>()
        .trim()
        .to_string()
}
