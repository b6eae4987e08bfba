use std::collections::HashSet;
use std::hash::Hash;

use leptos::prelude::*;

/// Keys of actions that have been submitted and not yet settled.
#[derive(Clone, Debug)]
pub struct PendingSet<K> {
    keys: HashSet<K>,
}

impl<K> Default for PendingSet<K> {
    fn default() -> Self {
        Self {
            keys: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash> PendingSet<K> {
    /// Marks `key` in flight. Returns `false` if it already was, in which
    /// case the caller must not submit again.
    pub fn begin(&mut self, key: K) -> bool {
        self.keys.insert(key)
    }

    pub fn settle(&mut self, key: &K) {
        self.keys.remove(key);
    }

    pub fn is_pending(&self, key: &K) -> bool {
        self.keys.contains(key)
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Reactive [`PendingSet`] shared by a page and its buttons.
pub struct PendingActions<K: Send + Sync + 'static> {
    inner: RwSignal<PendingSet<K>>,
}

impl<K: Send + Sync + 'static> Clone for PendingActions<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: Send + Sync + 'static> Copy for PendingActions<K> {}

impl<K: Eq + Hash + Clone + Send + Sync + 'static> PendingActions<K> {
    pub fn new() -> Self {
        Self {
            inner: RwSignal::new(PendingSet::default()),
        }
    }

    pub fn begin(&self, key: K) -> bool {
        let mut started = false;
        self.inner.update(|set| started = set.begin(key));
        started
    }

    pub fn settle(&self, key: &K) {
        self.inner.update(|set| set.settle(key));
    }

    pub fn is_pending(&self, key: &K) -> bool {
        self.inner.with(|set| set.is_pending(key))
    }
}

impl<K: Eq + Hash + Clone + Send + Sync + 'static> Default for PendingActions<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_submission_is_refused_until_settled() {
        let mut pending = PendingSet::default();

        assert!(pending.begin(7));
        assert!(!pending.begin(7));
        assert!(pending.is_pending(&7));

        pending.settle(&7);
        assert!(!pending.is_pending(&7));
        assert!(pending.begin(7));
    }

    #[test]
    fn keys_are_independent() {
        let mut pending = PendingSet::default();
        assert!(pending.begin("borrow-1"));
        assert!(pending.begin("borrow-2"));

        pending.settle(&"borrow-1");
        assert!(!pending.is_empty());
        assert!(pending.is_pending(&"borrow-2"));
    }
}
