use crate::domain::record::RecordId;
use std::collections::HashMap;

/// Which records currently have their details panel open.
///
/// Entries are never purged: ids from an older fetch simply stop matching
/// anything on screen, and reappear expanded if the service returns them again.
#[derive(Debug, Clone, Default)]
pub struct DisclosureState {
    expanded: HashMap<RecordId, bool>,
}

impl DisclosureState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the flag for `id` and returns the new value.
    pub fn toggle(&mut self, id: &RecordId) -> bool {
        let flag = self.expanded.entry(id.clone()).or_insert(false);
        *flag = !*flag;
        *flag
    }

    pub fn is_expanded(&self, id: &RecordId) -> bool {
        self.expanded.get(id).copied().unwrap_or(false)
    }

    /// Number of ids ever toggled this session.
    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}
