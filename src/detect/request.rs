//! Request header preparation.

use crate::matcher::{LANGUAGE_HEADER, PROFILE_HEADERS};
use crate::models::HeaderSet;
use crate::normalize::{clean_device, clean_extra};

/// Headers that never describe the client device.
const IGNORED_HEADERS: &[&str] = &["ip", "host"];
const LANGUAGE_SOURCES: &[&str] = &["accept-language", "content-language"];

/// The two cleansed views of one request, plus any hardware info it carried.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreparedHeaders {
    pub device: HeaderSet,
    pub extra: HeaderSet,
    pub hardware_info: Option<String>,
}

pub fn prepare(headers: &HeaderSet, hardware_header: &str) -> PreparedHeaders {
    let mut prepared = PreparedHeaders::default();

    for (name, value) in headers.iter() {
        if IGNORED_HEADERS.contains(&name) {
            continue;
        }
        if name == hardware_header {
            prepared.hardware_info = Some(value.to_string());
            continue;
        }

        let (name, value) = if LANGUAGE_SOURCES.contains(&name) {
            match primary_language(value) {
                Some(code) => (LANGUAGE_HEADER, code),
                None => continue,
            }
        } else if PROFILE_HEADERS.contains(&name) {
            (name, value.to_string())
        } else {
            (name, decode_plus_spaces(value))
        };

        prepared.device.insert(name, clean_device(&value));
        prepared.extra.insert(name, clean_extra(&value));
    }

    prepared
}

/// First tag of an `Accept-Language` style value, e.g. `en-gb` from
/// `en-GB,en;q=0.8`.
fn primary_language(value: &str) -> Option<String> {
    let compact: String = value.to_lowercase().chars().filter(|c| *c != ' ').collect();
    compact
        .split([',', ';'])
        .next()
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

/// Values with many `+` and no spaces had their spaces form-encoded.
fn decode_plus_spaces(value: &str) -> String {
    let pluses = value.matches('+').count();
    if !value.contains(' ') && pluses > 5 && value.len() > 20 {
        value.replace('+', " ")
    } else {
        value.to_string()
    }
}
