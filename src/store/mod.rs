//! Read side of the rule database.
//!
//! The engine only ever talks to a [`RuleStore`]. [`RuleTree`] is the
//! in-memory implementation built from the unpacked JSON archive, and
//! [`RuleTreeHandle`] publishes successive trees to concurrent readers.

mod local;
mod snapshot;
mod tree;

pub use local::load_rule_tree;
pub use snapshot::RuleTreeHandle;
pub use tree::{RuleTree, TreeStats};

use crate::models::{DeviceRecord, ExtraRecord, RuleBranch};

/// Name of the document listing ambiguous rule keys.
pub const HIGH_ACCURACY_BRANCH: &str = "hachecks";

pub const DEVICE_PREFIX: &str = "Device_";
pub const EXTRA_PREFIX: &str = "Extra_";

/// Lookups the matching engine needs. All reads are synchronous and borrow
/// from the store for the duration of one detection.
pub trait RuleStore: Send + Sync {
    fn branch(&self, name: &str) -> Option<&RuleBranch>;

    fn device(&self, id: &str) -> Option<&DeviceRecord>;

    fn extra(&self, id: &str) -> Option<&ExtraRecord>;

    /// Device ids sharing an ambiguous rule key. Only keys with two or more
    /// candidates are ever returned.
    fn high_accuracy_candidates(&self, rule_key: &str) -> Option<&[String]>;
}
