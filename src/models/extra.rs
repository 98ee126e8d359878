use serde::{Deserialize, Serialize};

use crate::models::de;

/// The subset of specs an extra (platform, browser, app or language) carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraSpecs {
    #[serde(rename = "general_platform", default, deserialize_with = "de::string")]
    pub platform: String,
    #[serde(
        rename = "general_platform_version",
        default,
        deserialize_with = "de::string"
    )]
    pub platform_version: String,
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
}

impl ExtraSpecs {
    pub fn language(code: impl Into<String>, full: impl Into<String>) -> Self {
        Self {
            language: code.into(),
            language_full: full.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraRecord {
    #[serde(rename = "_id", deserialize_with = "de::id")]
    pub id: String,
    #[serde(rename = "hd_specs", default)]
    pub specs: ExtraSpecs,
}

impl ExtraRecord {
    pub fn new(id: impl Into<String>, specs: ExtraSpecs) -> Self {
        Self {
            id: id.into(),
            specs,
        }
    }
}
