//! PrefixStore trait definition.
//!
//! The trait is the storage contract the allocator works against. The
//! in-memory backend lives in this crate; durable backends implement the
//! same trait on top of their own persistence.

use async_trait::async_trait;
use tokio::sync::broadcast;

use crate::prefix::Prefix;

use super::error::Result;
use super::event::Event;

/// Storage contract for prefixes keyed by (cidr, namespace).
///
/// Every prefix handed in or out is an independent copy: mutating a value
/// after passing it to the store, or after receiving it from the store,
/// never changes what is stored.
#[async_trait]
pub trait PrefixStore: Send + Sync {
    /// Short identifier of the backend.
    fn name(&self) -> &'static str;

    /// Store a new prefix.
    ///
    /// Fails with `AlreadyExists` if a prefix with the same cidr and
    /// namespace is stored. Returns the input unchanged.
    async fn create_prefix(&self, prefix: Prefix) -> Result<Prefix>;

    /// Get a prefix by cidr and namespace.
    async fn read_prefix(&self, cidr: &str, namespace: &str) -> Result<Prefix>;

    /// List all prefixes of a namespace, in no particular order.
    async fn read_prefixes(&self, namespace: &str) -> Result<Vec<Prefix>>;

    /// List all prefixes across all namespaces, in no particular order.
    async fn read_all_prefixes(&self) -> Result<Vec<Prefix>>;

    /// List the cidrs of all prefixes of a namespace.
    async fn read_all_prefix_cidrs(&self, namespace: &str) -> Result<Vec<String>>;

    /// Replace a stored prefix wholesale.
    ///
    /// Fails with `InvalidArgument` if the cidr is empty and with
    /// `NotFound` if nothing is stored under the key. Returns the input
    /// unchanged.
    async fn update_prefix(&self, prefix: Prefix) -> Result<Prefix>;

    /// Delete a prefix.
    ///
    /// Deleting an absent prefix is a no-op. Returns a copy of the input,
    /// not the previously stored value.
    async fn delete_prefix(&self, prefix: Prefix) -> Result<Prefix>;

    /// Delete every prefix of a namespace, returning how many were removed.
    async fn delete_all_prefixes(&self, namespace: &str) -> Result<usize>;

    /// Subscribe to state change events.
    fn subscribe(&self) -> broadcast::Receiver<Event>;
}
