//! Prefix entity and its composite identity key.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::store::Result;

/// Namespace used when the caller does not partition its prefixes.
pub const DEFAULT_NAMESPACE: &str = "root";

/// Identity of a stored prefix: the (cidr, namespace) pair.
///
/// Both parts are kept as separate fields, so a `@` (or any other
/// character) inside either one can never make two keys collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PrefixKey {
    pub cidr: String,
    pub namespace: String,
}

impl PrefixKey {
    pub fn new(cidr: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            cidr: cidr.into(),
            namespace: namespace.into(),
        }
    }
}

impl fmt::Display for PrefixKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.cidr, self.namespace)
    }
}

/// A managed address block.
///
/// The store only looks at `cidr` and `namespace`; the remaining fields
/// belong to the allocator and are carried through untouched. Every field
/// is owned, so [`Prefix::deep_copy`] never shares state with the original.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prefix {
    pub cidr: String,
    pub namespace: String,
    /// Cidr of the prefix this one was carved from, empty for top-level prefixes.
    #[serde(default)]
    pub parent_cidr: String,
    /// Set once child prefixes have been carved out of this prefix.
    #[serde(default)]
    pub is_parent: bool,
    /// Child prefix cidrs and whether each one is still available.
    #[serde(default)]
    pub available_child_prefixes: HashMap<String, bool>,
    #[serde(default)]
    pub child_prefix_length: u8,
    /// Addresses acquired inside this prefix.
    #[serde(default)]
    pub ips: HashMap<String, bool>,
    /// Optimistic-concurrency counter for durable backends.
    #[serde(default)]
    pub version: i64,
}

impl Prefix {
    /// Create an empty top-level prefix.
    pub fn new(cidr: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            cidr: cidr.into(),
            namespace: namespace.into(),
            ..Default::default()
        }
    }

    /// Composite key identifying this prefix in a store.
    pub fn key(&self) -> PrefixKey {
        PrefixKey::new(self.cidr.clone(), self.namespace.clone())
    }

    /// Independent copy with no shared mutable state.
    pub fn deep_copy(&self) -> Self {
        self.clone()
    }

    /// Encode the full record as JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a record produced by [`Prefix::to_json`].
    pub fn from_json(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.cidr, self.namespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;
    use std::collections::HashSet;

    fn parent_prefix() -> Prefix {
        let mut prefix = Prefix::new("10.0.0.0/16", "tenant-a");
        prefix.is_parent = true;
        prefix.child_prefix_length = 24;
        prefix
            .available_child_prefixes
            .insert("10.0.1.0/24".to_string(), true);
        prefix.ips.insert("10.0.0.1".to_string(), true);
        prefix
    }

    #[test]
    fn test_new_prefix_is_empty() {
        let prefix = Prefix::new("192.168.0.0/24", DEFAULT_NAMESPACE);
        assert_eq!(prefix.cidr, "192.168.0.0/24");
        assert_eq!(prefix.namespace, "root");
        assert!(prefix.parent_cidr.is_empty());
        assert!(!prefix.is_parent);
        assert!(prefix.ips.is_empty());
        assert!(prefix.available_child_prefixes.is_empty());
        assert_eq!(prefix.version, 0);
    }

    #[test]
    fn test_deep_copy_does_not_alias_collections() {
        let original = parent_prefix();
        let mut copy = original.deep_copy();
        assert_eq!(copy, original);

        copy.ips.insert("10.0.0.2".to_string(), true);
        copy.available_child_prefixes
            .insert("10.0.1.0/24".to_string(), false);

        assert_eq!(original.ips.len(), 1);
        assert!(original.available_child_prefixes["10.0.1.0/24"]);
    }

    #[test]
    fn test_key_does_not_collide_on_separator() {
        let a = Prefix::new("a@b", "c").key();
        let b = Prefix::new("a", "b@c").key();
        assert_ne!(a, b);

        let set: HashSet<PrefixKey> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display() {
        let prefix = Prefix::new("10.0.0.0/24", "a");
        assert_eq!(prefix.to_string(), "10.0.0.0/24@a");
        assert_eq!(prefix.key().to_string(), "10.0.0.0/24@a");
    }

    #[test]
    fn test_json_keeps_allocator_state() {
        let prefix = parent_prefix();
        let json = prefix.to_json().unwrap();
        let decoded = Prefix::from_json(&json).unwrap();
        assert_eq!(decoded, prefix);
    }

    #[test]
    fn test_json_missing_optional_fields() {
        let decoded = Prefix::from_json(r#"{"cidr":"10.1.0.0/24","namespace":""}"#).unwrap();
        assert_eq!(decoded, Prefix::new("10.1.0.0/24", ""));
    }

    #[test]
    fn test_json_invalid_input() {
        let err = Prefix::from_json("not json").unwrap_err();
        assert!(matches!(err, StoreError::Serialization(_)));
    }
}
