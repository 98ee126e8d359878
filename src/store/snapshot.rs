use arc_swap::ArcSwapOption;
use std::sync::Arc;

use crate::error::{DevsiftError, Result};
use crate::store::RuleTree;

/// Shared, atomically replaceable reference to the current rule tree.
///
/// A refresh swaps in a whole new tree. Readers take a snapshot at the start
/// of a detection and keep using it even if a refresh lands mid-request.
#[derive(Debug, Default)]
pub struct RuleTreeHandle {
    current: ArcSwapOption<RuleTree>,
}

impl RuleTreeHandle {
    /// Handle with no tree loaded yet.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(tree: RuleTree) -> Self {
        Self {
            current: ArcSwapOption::from_pointee(tree),
        }
    }

    /// Publish a new tree, returning the one it replaced.
    pub fn replace(&self, tree: RuleTree) -> Option<Arc<RuleTree>> {
        let previous = self.current.swap(Some(Arc::new(tree)));
        log::debug!("Rule tree replaced (had previous: {})", previous.is_some());
        previous
    }

    pub fn clear(&self) {
        self.current.store(None);
    }

    /// Current tree, or `RuleTreeNotLoaded` if nothing has been published.
    pub fn snapshot(&self) -> Result<Arc<RuleTree>> {
        self.current.load_full().ok_or(DevsiftError::RuleTreeNotLoaded)
    }
}
