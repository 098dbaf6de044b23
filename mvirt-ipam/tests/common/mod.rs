//! Shared test utilities for mvirt-ipam integration tests.

use std::sync::Arc;

use mvirt_ipam::{MemoryStore, Prefix, PrefixStore};
use tracing_subscriber::EnvFilter;

/// Install a tracing subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Fresh in-memory store behind the trait object consumers use.
pub fn new_store() -> Arc<dyn PrefixStore> {
    init_tracing();
    Arc::new(MemoryStore::new())
}

/// Prefix with a single acquired address, so tests can tell values apart.
pub fn prefix_with_ip(cidr: &str, namespace: &str, ip: &str) -> Prefix {
    let mut prefix = Prefix::new(cidr, namespace);
    prefix.ips.insert(ip.to_string(), true);
    prefix
}
