//! Platform, browser, app and language resolution.

use regex::Regex;

use crate::config::{DetectionConfig, LanguageEntry};
use crate::error::{DevsiftError, Result};
use crate::matcher::sieve::{MatchKind, match_value};
use crate::matcher::{LANGUAGE_HEADER, USER_AGENT_CLASS, priority_order};
use crate::models::{ExtraRecord, ExtraSpecs, HeaderSet};
use crate::store::RuleStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraClass {
    Platform,
    Browser,
    App,
}

impl ExtraClass {
    /// Subtree name, also the suffix of the `user-agent<class>` branch.
    pub fn as_str(self) -> &'static str {
        match self {
            ExtraClass::Platform => "platform",
            ExtraClass::Browser => "browser",
            ExtraClass::App => "app",
        }
    }

    fn header_order(self, config: &DetectionConfig) -> &[String] {
        match self {
            ExtraClass::Platform => &config.platform_ua_order,
            ExtraClass::Browser => &config.browser_ua_order,
            ExtraClass::App => &config.app_ua_order,
        }
    }
}

#[derive(Debug, Clone)]
struct Language {
    code: String,
    name: String,
    pattern: Regex,
}

/// Known language codes with their boundary patterns compiled up front.
#[derive(Debug, Clone)]
pub struct LanguageTable {
    languages: Vec<Language>,
}

impl LanguageTable {
    pub fn new(entries: &[LanguageEntry]) -> Result<Self> {
        let languages = entries
            .iter()
            .map(|entry| {
                // A code only counts when wrapped in `;`, space or parentheses.
                let pattern = format!(r"(?i)[; (]{}[; )]", regex::escape(&entry.code));
                Regex::new(&pattern)
                    .map(|pattern| Language {
                        code: entry.code.clone(),
                        name: entry.name.clone(),
                        pattern,
                    })
                    .map_err(|e| {
                        DevsiftError::InvalidConfig(format!(
                            "language code '{}' is not usable: {e}",
                            entry.code
                        ))
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { languages })
    }

    pub fn name(&self, code: &str) -> Option<&str> {
        self.languages
            .iter()
            .find(|language| language.code == code)
            .map(|language| language.name.as_str())
    }

    /// First code, in table order, delimited inside `value`.
    pub fn find_in(&self, value: &str) -> Option<(&str, &str)> {
        self.languages
            .iter()
            .find(|language| language.pattern.is_match(value))
            .map(|language| (language.code.as_str(), language.name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

pub struct ExtrasResolver<'a> {
    store: &'a dyn RuleStore,
    config: &'a DetectionConfig,
    languages: &'a LanguageTable,
}

impl<'a> ExtrasResolver<'a> {
    pub fn new(
        store: &'a dyn RuleStore,
        config: &'a DetectionConfig,
        languages: &'a LanguageTable,
    ) -> Self {
        Self {
            store,
            config,
            languages,
        }
    }

    /// Resolve one extra class from extra-cleansed headers.
    pub fn match_extra(&self, class: ExtraClass, headers: &HeaderSet) -> Option<&'a ExtraRecord> {
        let order = priority_order(class.header_order(self.config), headers, &["profile"]);
        order.iter().find_map(|name| {
            let value = headers.get(name).filter(|v| !v.is_empty())?;
            let hit = match_value(
                self.store,
                USER_AGENT_CLASS,
                value,
                class.as_str(),
                MatchKind::Extra,
            )?;
            match self.store.extra(hit.id) {
                Some(extra) => {
                    log::debug!("Matched {} extra {} on {name}", class.as_str(), extra.id);
                    Some(extra)
                }
                None => {
                    log::warn!("Rule points at missing extra record {}", hit.id);
                    None
                }
            }
        })
    }

    /// Language from the `language` header, else from any header carrying
    /// a delimited language code.
    pub fn match_language(&self, headers: &HeaderSet) -> Option<ExtraSpecs> {
        if let Some(code) = headers.get(LANGUAGE_HEADER).filter(|v| !v.is_empty()) {
            if let Some(name) = self.languages.name(code) {
                log::debug!("Language {code} taken from language header");
                return Some(ExtraSpecs::language(code, name));
            }
        }

        let order = self
            .config
            .language_ua_order
            .iter()
            .map(String::as_str)
            .chain(headers.names());

        for name in order {
            let Some(value) = headers.get(name).filter(|v| !v.is_empty()) else {
                continue;
            };
            if let Some((code, full)) = self.languages.find_in(value) {
                log::debug!("Language {code} found in header {name}");
                return Some(ExtraSpecs::language(code, full));
            }
        }
        None
    }
}
