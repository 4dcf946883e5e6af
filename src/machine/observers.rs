//! Ordered list of transition observers.

use crate::core::{StateChange, StateKey};

/// Handle returned when subscribing, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Type alias for transition observer callbacks.
pub type Observer<K> = Box<dyn FnMut(&StateChange<K>)>;

/// Observers invoked synchronously, in subscription order, on every
/// committed transition.
pub struct Observers<K: StateKey> {
    entries: Vec<(ObserverId, Observer<K>)>,
    next_id: u64,
}

impl<K: StateKey> Observers<K> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    pub fn subscribe<F>(&mut self, observer: F) -> ObserverId
    where
        F: FnMut(&StateChange<K>) + 'static,
    {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns `false` if the id is not subscribed.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub fn notify(&mut self, change: &StateChange<K>) {
        for (_, observer) in &mut self.entries {
            observer(change);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: StateKey> Default for Observers<K> {
    fn default() -> Self {
        Self::new()
    }
}
