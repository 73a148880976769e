use super::model::EventKey;
use std::collections::HashSet;
use tracing::trace;

/// Which events have their details unfolded. Every event starts collapsed.
#[derive(Debug, Default, Clone)]
pub struct DisclosureState {
    expanded: HashSet<EventKey>,
}

impl DisclosureState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, key: EventKey) -> bool {
        self.expanded.contains(&key)
    }

    pub fn toggle(&mut self, key: EventKey) {
        if !self.expanded.remove(&key) {
            self.expanded.insert(key);
        }

        trace!("Event {} expanded: {}", key, self.is_expanded(key));
    }
}
