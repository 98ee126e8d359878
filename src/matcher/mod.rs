//! The matching engine: sieve lookups and the strategies built on them.

pub mod buildinfo;
pub mod extras;
pub mod headers;
pub mod platform;
pub mod rating;
pub mod sieve;

pub use buildinfo::{BuildInfoCategory, BuildInfoMatcher};
pub use extras::{ExtraClass, ExtrasResolver, LanguageTable};
pub use headers::{DeviceMatch, DeviceMatcher};
pub use platform::is_platform_compatible;
pub use rating::{Rating, rank, rate};
pub use sieve::{MatchKind, SieveHit, match_value};

use crate::models::HeaderSet;

pub const STANDARD_SUBTREE: &str = "0";
pub const GENERIC_SUBTREE: &str = "1";

pub const USER_AGENT_CLASS: &str = "user-agent";
pub const BUILD_INFO_CLASS: &str = "buildinfo";
pub const PROFILE_CLASS: &str = "profile";

pub const USER_AGENT_HEADER: &str = "user-agent";
pub const AGENT_HEADER: &str = "agent";
pub const LANGUAGE_HEADER: &str = "language";
pub const PROFILE_HEADERS: &[&str] = &["profile", "x-wap-profile"];

/// Configured header names followed by every other `x-` header in the
/// order it was received. Names in `skip` are left out.
pub(crate) fn priority_order<'h>(
    configured: &'h [String],
    headers: &'h HeaderSet,
    skip: &[&str],
) -> Vec<&'h str> {
    let mut order: Vec<&str> = configured
        .iter()
        .map(String::as_str)
        .filter(|name| !skip.contains(name))
        .collect();

    for name in headers.names() {
        if name.starts_with("x-") && !order.contains(&name) && !skip.contains(&name) {
            order.push(name);
        }
    }
    order
}
