//! Prefix storage for IP address management, keyed by (cidr, namespace).

pub mod config;
pub mod prefix;
pub mod store;

pub use config::{Backend, StoreConfig, open_store};
pub use prefix::{DEFAULT_NAMESPACE, Prefix, PrefixKey};
pub use store::{Event, MemoryStore, PrefixStore, StoreError};
