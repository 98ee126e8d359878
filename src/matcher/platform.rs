use std::cmp::Ordering;

use crate::models::{DeviceSpecs, ExtraSpecs};
use crate::version::compare_versions;

/// Whether a device could be running the detected platform.
///
/// Only rules devices out: a missing or different platform name can not
/// disprove anything, so it counts as compatible.
pub fn is_platform_compatible(detected: Option<&ExtraSpecs>, device: &DeviceSpecs) -> bool {
    let Some(detected) = detected else {
        return true;
    };

    let detected_name = normalized(&detected.platform);
    let device_name = normalized(&device.platform);
    if detected_name.is_empty() || device_name.is_empty() || detected_name != device_name {
        return true;
    }

    let version = normalized(&detected.platform_version);
    if version.is_empty() {
        return true;
    }

    let min = normalized(&device.platform_version);
    if !min.is_empty() && compare_versions(&version, &min) == Ordering::Less {
        log::debug!("Platform {version} is older than device minimum {min}");
        return false;
    }

    let max = normalized(&device.platform_version_max);
    if !max.is_empty() && compare_versions(&version, &max) == Ordering::Greater {
        log::debug!("Platform {version} is newer than device maximum {max}");
        return false;
    }

    true
}

fn normalized(value: &str) -> String {
    value.trim().to_lowercase()
}
