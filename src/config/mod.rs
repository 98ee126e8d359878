mod languages;

use crate::error::{DevsiftError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub use languages::DEFAULT_LANGUAGES;

const CONFIG_FILE_NAME: &str = "config.toml";
const DEFAULT_HOME_DIR_NAME: &str = ".devsift";
const DEFAULT_STORE_DIR_NAME: &str = "store";

pub const HOME_ENV: &str = "DEVSIFT_HOME";
pub const STORE_ENV: &str = "DEVSIFT_STORE";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DevsiftConfig {
    #[serde(skip)]
    home: PathBuf,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub detection: DetectionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoreConfig {
    /// Directory holding the unpacked rule database.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

/// Ordered build-info key tuples for one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildInfoRule {
    pub platform: String,
    pub keys: Vec<Vec<String>>,
}

impl BuildInfoRule {
    pub fn new(platform: &str, keys: &[&[&str]]) -> Self {
        Self {
            platform: platform.to_string(),
            keys: keys
                .iter()
                .map(|tuple| tuple.iter().map(|k| k.to_string()).collect())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageEntry {
    pub code: String,
    pub name: String,
}

/// Header priorities, build-info tuples and the language table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    pub device_ua_order: Vec<String>,
    pub platform_ua_order: Vec<String>,
    pub browser_ua_order: Vec<String>,
    pub app_ua_order: Vec<String>,
    pub language_ua_order: Vec<String>,
    pub device_bi_order: Vec<BuildInfoRule>,
    pub platform_bi_order: Vec<BuildInfoRule>,
    pub languages: Vec<LanguageEntry>,
    /// Operator header that may carry `vendor # model` directly.
    pub operator_header: String,
    /// Operator header carrying the handset's own user-agent.
    pub operator_ua_header: String,
    /// Header carrying the on-device hardware probe string.
    pub hardware_info_header: String,
}

fn header_list(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

impl Default for DetectionConfig {
    fn default() -> Self {
        let ua_headers = [
            "x-operamini-phone-ua",
            "x-mobile-ua",
            "device-stock-ua",
            "user-agent",
            "agent",
        ];
        let extra_headers = ["user-agent", "agent", "device-stock-ua"];

        Self {
            device_ua_order: header_list(&ua_headers),
            platform_ua_order: header_list(&ua_headers),
            browser_ua_order: header_list(&extra_headers),
            app_ua_order: header_list(&extra_headers),
            language_ua_order: header_list(&extra_headers),
            device_bi_order: vec![
                BuildInfoRule::new(
                    "android",
                    &[
                        &["ro.product.brand", "ro.product.model"],
                        &["ro.product.manufacturer", "ro.product.model"],
                        &["ro-product-brand", "ro-product-model"],
                        &["ro-product-manufacturer", "ro-product-model"],
                    ],
                ),
                BuildInfoRule::new("ios", &[&["utsname.brand", "utsname.machine"]]),
                BuildInfoRule::new("windows phone", &[&["devicemanufacturer", "devicename"]]),
            ],
            platform_bi_order: vec![
                BuildInfoRule::new(
                    "android",
                    &[
                        &["ro.build.id", "ro.build.version.release"],
                        &["ro-build-id", "ro-build-version-release"],
                    ],
                ),
                BuildInfoRule::new("ios", &[&["uidevice.systemname", "uidevice.systemversion"]]),
                BuildInfoRule::new("windows phone", &[&["osname", "osversion"]]),
            ],
            languages: DEFAULT_LANGUAGES
                .iter()
                .map(|(code, name)| LanguageEntry {
                    code: code.to_string(),
                    name: name.to_string(),
                })
                .collect(),
            operator_header: "x-operamini-phone".to_string(),
            operator_ua_header: "x-operamini-phone-ua".to_string(),
            hardware_info_header: "x-local-hardwareinfo".to_string(),
        }
    }
}

impl DevsiftConfig {
    pub fn load(devsift_home: &Path) -> Result<Self> {
        let config_path = devsift_home.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            let contents = fs::read_to_string(&config_path)
                .map_err(|e| DevsiftError::ConfigFile(format!("{}: {e}", config_path.display())))?;
            let config: DevsiftConfig = toml::from_str(&contents).map_err(|e| {
                DevsiftError::ConfigError(format!("Failed to parse config.toml: {e}"))
            })?;
            log::debug!("Loaded config from {config_path:?}");
            config
        } else {
            log::debug!("Config file not found at {config_path:?}, using defaults");
            Self::default()
        };

        config.home = devsift_home.to_path_buf();
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, devsift_home: &Path) -> Result<()> {
        let config_path = devsift_home.join(CONFIG_FILE_NAME);

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| DevsiftError::ConfigError(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, contents)?;
        log::debug!("Saved config to {config_path:?}");
        Ok(())
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Rule database location: `DEVSIFT_STORE`, then `[store] directory`,
    /// then `<home>/store`.
    pub fn store_directory(&self) -> PathBuf {
        if let Ok(dir) = env::var(STORE_ENV) {
            if !dir.is_empty() {
                return PathBuf::from(dir);
            }
        }
        self.store
            .directory
            .clone()
            .unwrap_or_else(|| self.home.join(DEFAULT_STORE_DIR_NAME))
    }

    fn validate(&self) -> Result<()> {
        let detection = &self.detection;
        if detection.device_ua_order.is_empty() {
            return Err(DevsiftError::InvalidConfig(
                "detection.device_ua_order must name at least one header".to_string(),
            ));
        }
        for rule in detection
            .device_bi_order
            .iter()
            .chain(detection.platform_bi_order.iter())
        {
            if rule.keys.iter().any(|tuple| tuple.is_empty()) {
                return Err(DevsiftError::InvalidConfig(format!(
                    "build info tuple for '{}' is empty",
                    rule.platform
                )));
            }
        }
        Ok(())
    }
}

/// Resolve the devsift home directory (`DEVSIFT_HOME` or `~/.devsift`).
pub fn devsift_home() -> Result<PathBuf> {
    if let Ok(home) = env::var(HOME_ENV) {
        if !home.is_empty() {
            return Ok(PathBuf::from(home));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(DEFAULT_HOME_DIR_NAME))
        .ok_or_else(|| DevsiftError::ConfigError("Unable to determine home directory".to_string()))
}

pub fn new_devsift_config() -> Result<DevsiftConfig> {
    DevsiftConfig::load(&devsift_home()?)
}
