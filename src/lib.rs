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

//! Offline device detection.
//!
//! Classifies a client into a device, platform, browser, app and language
//! profile from request headers or native build properties, using a rule
//! database that has already been unpacked to disk.

pub mod commands;
pub mod config;
pub mod detect;
pub mod error;
pub mod logging;
pub mod matcher;
pub mod models;
pub mod normalize;
pub mod store;
pub mod version;

pub use detect::{Detection, DetectionStatus, Detector};
pub use models::HeaderSet;
pub use store::{RuleStore, RuleTree, RuleTreeHandle, load_rule_tree};
