// OPC UA address space
// SPDX-License-Identifier: MPL-2.0

//! Contains the implementation of `NodeId`.

use std::fmt;

use crate::{byte_string::ByteString, guid::Guid, string::UAString};

/// The kind of identifier carried by a [`NodeId`]: numeric, string, GUID or opaque bytes.
#[derive(Eq, PartialEq, Clone, Debug, Hash)]
pub enum Identifier {
    /// A numeric identifier, `i=123`.
    Numeric(u32),
    /// A string identifier, `s=...`.
    String(UAString),
    /// A GUID identifier, `g=...`.
    Guid(Guid),
    /// An opaque byte-string identifier, `b=...`.
    ByteString(ByteString),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Identifier::Numeric(v) => write!(f, "i={v}"),
            Identifier::String(v) => write!(f, "s={v}"),
            Identifier::Guid(v) => write!(f, "g={v}"),
            Identifier::ByteString(v) => write!(f, "b={}", v.as_base64()),
        }
    }
}

impl From<u32> for Identifier {
    fn from(v: u32) -> Self {
        Identifier::Numeric(v)
    }
}

impl From<&str> for Identifier {
    fn from(v: &str) -> Self {
        Identifier::String(UAString::from(v))
    }
}

impl From<Guid> for Identifier {
    fn from(v: Guid) -> Self {
        Identifier::Guid(v)
    }
}

impl From<ByteString> for Identifier {
    fn from(v: ByteString) -> Self {
        Identifier::ByteString(v)
    }
}

/// Identifies a node within the address space: a namespace index plus one of
/// four identifier kinds. Equality and hashing are purely structural, which is
/// what lets [`crate::NodeId`] be used directly as a map key by the node store.
#[derive(Eq, PartialEq, Clone, Debug, Hash)]
pub struct NodeId {
    /// The index of the namespace that owns this identifier.
    pub namespace: u16,
    /// The identifier itself.
    pub identifier: Identifier,
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.namespace != 0 {
            write!(f, "ns={};{}", self.namespace, self.identifier)
        } else {
            write!(f, "{}", self.identifier)
        }
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::null()
    }
}

impl NodeId {
    /// Create a new node id from a namespace index and anything convertible to an [`Identifier`].
    pub fn new(namespace: u16, value: impl Into<Identifier>) -> Self {
        Self {
            namespace,
            identifier: value.into(),
        }
    }

    /// The distinguished "null" node id: numeric zero in namespace zero.
    ///
    /// A null node id is never a valid reference to a node; it is used as the
    /// sentinel for "no parent" / "no type definition" throughout the AddNode
    /// orchestrator.
    pub fn null() -> Self {
        Self {
            namespace: 0,
            identifier: Identifier::Numeric(0),
        }
    }

    /// Returns true if this is the null node id.
    pub fn is_null(&self) -> bool {
        self.namespace == 0 && matches!(self.identifier, Identifier::Numeric(0))
    }

    /// Construct a well-known, namespace-zero numeric node id.
    pub const fn ns0(id: u32) -> Self {
        Self {
            namespace: 0,
            identifier: Identifier::Numeric(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_is_namespace_zero_numeric_zero() {
        let id = NodeId::null();
        assert!(id.is_null());
        assert_eq!(id, NodeId::new(0, 0u32));
    }

    #[test]
    fn equality_is_structural_across_identifier_kinds() {
        assert_eq!(NodeId::new(1, 42u32), NodeId::new(1, 42u32));
        assert_ne!(NodeId::new(1, 42u32), NodeId::new(2, 42u32));
        assert_ne!(NodeId::new(1, "42"), NodeId::new(1, 42u32));
    }

    #[test]
    fn display_omits_namespace_prefix_for_ns0() {
        assert_eq!(NodeId::ns0(58).to_string(), "i=58");
        assert_eq!(NodeId::new(2, 58u32).to_string(), "ns=2;i=58");
    }

    #[test]
    fn string_identifier_is_not_null_even_when_empty() {
        let id = NodeId::new(0, "");
        assert!(!id.is_null());
    }
}
