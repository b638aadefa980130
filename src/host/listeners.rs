use std::collections::BTreeMap;

/// Host input event kinds a listener can subscribe to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Pointer movement over the page.
    PointerMove,
    /// Page scroll.
    Scroll,
}

/// Component a listener routes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListenerOwner {
    /// The reveal-mask controller.
    RevealMask,
    /// The parallax video layer.
    Parallax,
}

/// Handle returned by [`ListenerTable::add`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct ListenerId(u64);

/// Registered listeners, dispatched in registration order.
#[derive(Debug, Default)]
pub struct ListenerTable {
    next: u64,
    entries: BTreeMap<ListenerId, (EventKind, ListenerOwner)>,
}

impl ListenerTable {
    /// Register a listener. Every call yields a fresh id.
    pub fn add(&mut self, kind: EventKind, owner: ListenerOwner) -> ListenerId {
        let id = ListenerId(self.next);
        self.next += 1;
        self.entries.insert(id, (kind, owner));
        id
    }

    /// Remove a listener. Returns false when it was not registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        self.entries.remove(&id).is_some()
    }

    /// True when `id` is registered.
    pub fn contains(&self, id: ListenerId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Listeners subscribed to `kind`, in registration order.
    pub fn for_kind(&self, kind: EventKind) -> Vec<(ListenerId, ListenerOwner)> {
        self.entries
            .iter()
            .filter(|(_, (k, _))| *k == kind)
            .map(|(id, (_, owner))| (*id, *owner))
            .collect()
    }

    /// Number of listeners registered for `kind` by `owner`.
    pub fn count(&self, kind: EventKind, owner: ListenerOwner) -> usize {
        self.entries
            .values()
            .filter(|(k, o)| *k == kind && *o == owner)
            .count()
    }

    /// Total registered listeners.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/listeners.rs"]
mod tests;
