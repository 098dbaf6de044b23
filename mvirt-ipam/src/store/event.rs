//! Events emitted by prefix store changes.

use crate::prefix::{Prefix, PrefixKey};

/// Events emitted when state changes occur.
///
/// These events are dispatched via broadcast channels to subscribers.
/// They are only sent after a mutation succeeded and the store lock has
/// been released.
#[derive(Debug, Clone)]
pub enum Event {
    /// A new prefix was created.
    PrefixCreated(Prefix),
    /// A prefix was replaced.
    PrefixUpdated {
        key: PrefixKey,
        old: Prefix,
        new: Prefix,
    },
    /// A stored prefix was deleted.
    PrefixDeleted { key: PrefixKey },
    /// Every prefix of a namespace was deleted at once.
    NamespaceCleared { namespace: String, removed: usize },
}

impl Event {
    /// Get the resource type for this event.
    pub fn resource_type(&self) -> &'static str {
        match self {
            Event::PrefixCreated(_) | Event::PrefixUpdated { .. } | Event::PrefixDeleted { .. } => {
                "prefix"
            }
            Event::NamespaceCleared { .. } => "namespace",
        }
    }

    /// Get the namespace this event belongs to.
    pub fn namespace(&self) -> &str {
        match self {
            Event::PrefixCreated(p) => &p.namespace,
            Event::PrefixUpdated { key, .. } => &key.namespace,
            Event::PrefixDeleted { key } => &key.namespace,
            Event::NamespaceCleared { namespace, .. } => namespace,
        }
    }
}
