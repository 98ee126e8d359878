//! Merging resolved extras and hardware info onto a device's specs.

use crate::models::{DeviceSpecs, ExtraSpecs, HardwareProbe};

/// A platform with a version replaces both fields; a bare platform name
/// only replaces a different name, and then clears the version.
pub fn overlay_platform(specs: &mut DeviceSpecs, platform: &ExtraSpecs) {
    if platform.platform.is_empty() {
        return;
    }
    if !platform.platform_version.is_empty() {
        specs.platform = platform.platform.clone();
        specs.platform_version = platform.platform_version.clone();
    } else if platform.platform != specs.platform {
        specs.platform = platform.platform.clone();
        specs.platform_version.clear();
    }
}

pub fn overlay_browser(specs: &mut DeviceSpecs, browser: &ExtraSpecs) {
    if browser.browser.is_empty() {
        return;
    }
    specs.browser = browser.browser.clone();
    specs.browser_version = browser.browser_version.clone();
}

pub fn overlay_app(specs: &mut DeviceSpecs, app: &ExtraSpecs) {
    if app.app.is_empty() {
        return;
    }
    specs.app = app.app.clone();
    specs.app_version = app.app_version.clone();
    specs.app_category = app.app_category.clone();
}

pub fn overlay_language(specs: &mut DeviceSpecs, language: &ExtraSpecs) {
    if language.language.is_empty() {
        return;
    }
    specs.language = language.language.clone();
    specs.language_full = language.language_full.clone();
}

/// Copy display fields the probe actually carried.
pub fn overlay_hardware(specs: &mut DeviceSpecs, probe: &HardwareProbe) {
    if let Some(width) = probe.width {
        specs.display_x = Some(width);
    }
    if let Some(height) = probe.height {
        specs.display_y = Some(height);
    }
    if let Some(ratio) = probe.pixel_ratio() {
        specs.display_pixel_ratio = Some(ratio);
    }
}
