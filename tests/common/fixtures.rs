use devsift::config::DetectionConfig;
use devsift::{Detector, HeaderSet, RuleTreeHandle, load_rule_tree};
use serde_json::{Value, json};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

/// A small rule database laid out as one JSON document per file, the way a
/// downloaded archive is unpacked.
pub struct RuleStoreFixture {
    dir: TempDir,
}

impl RuleStoreFixture {
    /// Sieve branches, written in the archive layout with an order level.
    pub const SIEVE_BRANCHES: usize = 7;
    /// Sieve branches plus the three exact build-info ones.
    pub const BRANCHES: usize = Self::SIEVE_BRANCHES + 3;

    /// Empty store directory.
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create store directory"),
        }
    }

    /// Store populated with the handsets used across the integration tests.
    pub fn new() -> Self {
        let fixture = Self::empty();
        fixture.write_devices();
        fixture.write_extras();
        fixture.write_branches();
        fixture
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_document(&self, name: &str, doc: &Value) {
        let path = self.dir.path().join(format!("{name}.json"));
        fs::write(&path, serde_json::to_string_pretty(doc).unwrap())
            .unwrap_or_else(|e| panic!("Failed to write {}: {e}", path.display()));
    }

    pub fn write_raw(&self, file_name: &str, contents: &str) {
        fs::write(self.dir.path().join(file_name), contents).unwrap();
    }

    pub fn write_device(&self, id: &str, specs: Value) {
        self.write_device_with_ops(id, specs, json!({}));
    }

    pub fn write_device_with_ops(&self, id: &str, specs: Value, ops: Value) {
        self.write_document(
            &format!("Device_{id}"),
            &json!({ "Device": { "_id": id, "hd_specs": specs, "hd_ops": ops } }),
        );
    }

    pub fn write_extra(&self, id: &str, specs: Value) {
        self.write_document(
            &format!("Extra_{id}"),
            &json!({ "Extra": { "_id": id, "hd_specs": specs } }),
        );
    }

    fn write_devices(&self) {
        self.write_device(
            "10",
            json!({
                "general_vendor": "Apple",
                "general_model": "iPhone 4",
                "general_type": "Mobile",
                "general_platform": "iOS",
                "general_platform_version": "4.0",
                "display_x": 640,
                "display_y": 960,
                "display_pixel_ratio": "2.0",
                "display_css_screen_sizes": ["320x480"]
            }),
        );
        self.write_device(
            "20",
            json!({
                "general_vendor": "Apple",
                "general_model": "iPhone 3G",
                "general_type": "Mobile",
                "general_platform": "iOS",
                "general_platform_version": "2.0",
                "general_platform_version_max": "4.2.1",
                "display_x": 320,
                "display_y": 480,
                "display_pixel_ratio": "1.0",
                "benchmark_min": 90,
                "benchmark_max": 110
            }),
        );
        self.write_device(
            "21",
            json!({
                "general_vendor": "Apple",
                "general_model": "iPhone 3GS",
                "general_type": "Mobile",
                "general_platform": "iOS",
                "general_platform_version": "3.0",
                "general_platform_version_max": "6.1.6",
                "display_x": 320,
                "display_y": 480,
                "display_pixel_ratio": "1.0",
                "benchmark_min": 200,
                "benchmark_max": 260
            }),
        );
        self.write_device(
            "30",
            json!({
                "general_vendor": "Nokia",
                "general_model": "N95",
                "general_type": "Mobile",
                "general_platform": "Symbian",
                "general_platform_version": "9.2",
                "display_x": 240,
                "display_y": 320
            }),
        );
        self.write_device(
            "31",
            json!({
                "general_vendor": "Nokia",
                "general_model": "Lumia 1020",
                "general_type": "Mobile",
                "general_platform": "Windows Phone",
                "general_platform_version": "8.0",
                "display_x": 768,
                "display_y": 1280
            }),
        );
        self.write_device_with_ops(
            "35",
            json!({
                "general_vendor": "Sony",
                "general_model": "PlayStation Vita",
                "general_type": "Console",
                "general_browser": "Vita Browser"
            }),
            json!({ "stop_on_detect": "1", "overlay_result_specs": 0 }),
        );
        self.write_device(
            "40",
            json!({
                "general_vendor": "Samsung",
                "general_model": "GT-I9300",
                "general_type": "Mobile",
                "general_platform": "Android",
                "general_platform_version": "4.0.4"
            }),
        );
        self.write_device(
            "90",
            json!({
                "general_vendor": "Generic",
                "general_model": "Android",
                "general_type": "Mobile",
                "general_platform": "Android"
            }),
        );
    }

    fn write_extras(&self) {
        self.write_extra(
            "50",
            json!({ "general_platform": "iOS", "general_platform_version": "4.3" }),
        );
        self.write_extra(
            "51",
            json!({ "general_platform": "iOS", "general_platform_version": "3.1.2" }),
        );
        self.write_extra(
            "52",
            json!({ "general_platform": "Android", "general_platform_version": "4.1.2" }),
        );
        self.write_extra(
            "53",
            json!({ "general_platform": "Windows Phone", "general_platform_version": "" }),
        );
        self.write_extra(
            "60",
            json!({ "general_browser": "Mobile Safari", "general_browser_version": "5.0.2" }),
        );
        self.write_extra(
            "61",
            json!({ "general_browser": "Silk", "general_browser_version": "3.2" }),
        );
        self.write_extra(
            "70",
            json!({
                "general_app": "Facebook",
                "general_app_version": "5.0",
                "general_app_category": "Social"
            }),
        );
    }

    fn write_sieve(&self, name: &str, filters: Value) {
        self.write_document(name, &json!({ "0": filters }));
    }

    fn write_branches(&self) {
        // Rule order is priority: the narrower 3.x rule must come first.
        self.write_sieve(
            "user-agent0",
            json!({
                "iphone": { "cpuiphoneos3": "20", "iphone": "10" },
                "nokia": { "nokian95": "30" },
                "playstation": { "playstationvita": "35" }
            }),
        );
        self.write_sieve("user-agent1", json!({ "android": { "android": "90" } }));
        self.write_sieve("profile0", json!({ "nokiacom": { "nn95": "30" } }));
        self.write_sieve("x-operamini-phone0", json!({ "nokia": { "nokian95": "30" } }));
        self.write_sieve(
            "user-agentplatform",
            json!({ "iphoneos": { "os4_3": "50", "os3_1": "51" } }),
        );
        self.write_sieve(
            "user-agentbrowser",
            json!({
                "safari": { "mobile": "60" },
                "silk": { "silk": "61" }
            }),
        );
        self.write_sieve("user-agentapp", json!({ "fban": { "fbios": "70" } }));
        self.write_document(
            "buildinfo0",
            &json!({ "nokia|rm-875": "31", "samsung|gt-i9300": "40" }),
        );
        self.write_document("buildinfo1", &json!({ "generic|android": "90" }));
        self.write_document(
            "buildinfoplatform",
            &json!({ "generic|windowsphone": "53", "jzo54k|4.1.2": "52" }),
        );
        self.write_document(
            "hachecks",
            &json!({ "user-agent:iphone:cpuiphoneos3": ["20", 21] }),
        );
    }
}

/// Detector over a freshly loaded copy of `dir` with default settings.
pub fn detector_for(dir: &Path) -> Detector {
    let tree = load_rule_tree(dir).expect("Failed to load rule store");
    Detector::new(
        Arc::new(RuleTreeHandle::new(tree)),
        DetectionConfig::default(),
    )
    .expect("Failed to build detector")
}

pub fn headers(pairs: &[(&str, &str)]) -> HeaderSet {
    pairs.iter().copied().collect()
}
