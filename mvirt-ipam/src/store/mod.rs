//! PrefixStore abstraction for IP address management.
//!
//! This module provides the storage contract the allocator works against,
//! keyed by (cidr, namespace), plus an in-memory backend.
//!
//! # Architecture
//!
//! ```text
//! allocator → Arc<dyn PrefixStore>
//!                     ↓
//!               store.read_prefix(cidr, ns).await     // shared lock
//!               store.create_prefix(prefix).await     // exclusive lock
//! ```
//!
//! Every prefix crossing the store boundary is a deep copy, in both
//! directions.
//!
//! # Usage
//!
//! ```ignore
//! use mvirt_ipam::store::{MemoryStore, PrefixStore};
//! use mvirt_ipam::Prefix;
//!
//! let store = Arc::new(MemoryStore::new());
//!
//! store.create_prefix(Prefix::new("10.0.0.0/24", "tenant-a")).await?;
//! let prefix = store.read_prefix("10.0.0.0/24", "tenant-a").await?;
//! ```

mod error;
mod event;
mod memory_store;
mod traits;

pub use error::{Result, StoreError};
pub use event::Event;
pub use memory_store::{DEFAULT_EVENT_CAPACITY, MemoryStore};
pub use traits::*;
