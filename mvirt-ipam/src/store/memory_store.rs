//! MemoryStore implementation - keeps prefixes in a process-local map.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::{RwLock, broadcast};
use tracing::debug;

use crate::prefix::{Prefix, PrefixKey};

use super::error::{Result, StoreError};
use super::event::Event;
use super::traits::PrefixStore;

/// Default capacity of the event broadcast channel.
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

/// MemoryStore keeps prefixes in a map guarded by a single RwLock.
///
/// Mutations hold the write guard across lookup, insert/remove and the
/// event send, so two concurrent creates of the same key can never both
/// succeed and subscribers see events in the order the map changed. Reads
/// share the lock. Values are cloned on the way in and on the way out; the
/// map never holds a value the caller can reach.
pub struct MemoryStore {
    prefixes: RwLock<HashMap<PrefixKey, Prefix>>,
    events: broadcast::Sender<Event>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::from_channel(DEFAULT_EVENT_CAPACITY)
    }

    /// Create an empty store whose event channel buffers `capacity` events.
    ///
    /// Fails with `InvalidArgument` if `capacity` is zero.
    pub fn with_event_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(StoreError::InvalidArgument(
                "event_capacity must be greater than zero".to_string(),
            ));
        }
        Ok(Self::from_channel(capacity))
    }

    fn from_channel(capacity: usize) -> Self {
        let (events, _) = broadcast::channel(capacity);
        Self {
            prefixes: RwLock::new(HashMap::new()),
            events,
        }
    }

    /// Number of stored prefixes.
    pub async fn len(&self) -> usize {
        self.prefixes.read().await.len()
    }

    /// Whether the store holds no prefixes.
    pub async fn is_empty(&self) -> bool {
        self.prefixes.read().await.is_empty()
    }

    /// Broadcast an event. Having no subscribers is fine.
    ///
    /// Callers must hold the write guard. `send` never blocks and runs no
    /// subscriber code.
    fn emit(&self, event: Event) {
        let _ = self.events.send(event);
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PrefixStore for MemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn create_prefix(&self, prefix: Prefix) -> Result<Prefix> {
        let key = prefix.key();
        let stored = prefix.deep_copy();

        let mut prefixes = self.prefixes.write().await;
        if prefixes.contains_key(&key) {
            return Err(StoreError::AlreadyExists {
                cidr: key.cidr,
                namespace: key.namespace,
            });
        }
        prefixes.insert(key, stored.clone());
        self.emit(Event::PrefixCreated(stored));
        drop(prefixes);

        debug!(cidr = %prefix.cidr, namespace = %prefix.namespace, "prefix created");
        Ok(prefix)
    }

    async fn read_prefix(&self, cidr: &str, namespace: &str) -> Result<Prefix> {
        let key = PrefixKey::new(cidr, namespace);
        let prefixes = self.prefixes.read().await;
        prefixes
            .get(&key)
            .map(Prefix::deep_copy)
            .ok_or(StoreError::NotFound {
                cidr: key.cidr,
                namespace: key.namespace,
            })
    }

    async fn read_prefixes(&self, namespace: &str) -> Result<Vec<Prefix>> {
        let prefixes = self.prefixes.read().await;
        let mut result = Vec::with_capacity(prefixes.len());
        result.extend(
            prefixes
                .iter()
                .filter(|(key, _)| key.namespace == namespace)
                .map(|(_, prefix)| prefix.deep_copy()),
        );
        Ok(result)
    }

    async fn read_all_prefixes(&self) -> Result<Vec<Prefix>> {
        let prefixes = self.prefixes.read().await;
        Ok(prefixes.values().map(Prefix::deep_copy).collect())
    }

    async fn read_all_prefix_cidrs(&self, namespace: &str) -> Result<Vec<String>> {
        let prefixes = self.prefixes.read().await;
        Ok(prefixes
            .keys()
            .filter(|key| key.namespace == namespace)
            .map(|key| key.cidr.clone())
            .collect())
    }

    async fn update_prefix(&self, prefix: Prefix) -> Result<Prefix> {
        if prefix.cidr.is_empty() {
            return Err(StoreError::InvalidArgument(format!(
                "prefix without cidr in namespace {:?}",
                prefix.namespace
            )));
        }

        let key = prefix.key();
        let new = prefix.deep_copy();

        let mut prefixes = self.prefixes.write().await;
        let Some(slot) = prefixes.get_mut(&key) else {
            return Err(StoreError::NotFound {
                cidr: key.cidr,
                namespace: key.namespace,
            });
        };
        let old = std::mem::replace(slot, new.clone());
        self.emit(Event::PrefixUpdated { key, old, new });
        drop(prefixes);

        debug!(cidr = %prefix.cidr, namespace = %prefix.namespace, "prefix updated");
        Ok(prefix)
    }

    async fn delete_prefix(&self, prefix: Prefix) -> Result<Prefix> {
        let key = prefix.key();

        let mut prefixes = self.prefixes.write().await;
        if prefixes.remove(&key).is_some() {
            self.emit(Event::PrefixDeleted { key });
            drop(prefixes);
            debug!(cidr = %prefix.cidr, namespace = %prefix.namespace, "prefix deleted");
        }
        Ok(prefix.deep_copy())
    }

    async fn delete_all_prefixes(&self, namespace: &str) -> Result<usize> {
        let mut prefixes = self.prefixes.write().await;
        let before = prefixes.len();
        prefixes.retain(|key, _| key.namespace != namespace);
        let removed = before - prefixes.len();

        if removed > 0 {
            self.emit(Event::NamespaceCleared {
                namespace: namespace.to_string(),
                removed,
            });
            drop(prefixes);
            debug!(namespace, removed, "namespace cleared");
        }
        Ok(removed)
    }

    fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.events.subscribe()
    }
}
