// OPC UA address space
// SPDX-License-Identifier: MPL-2.0

//! Contains the implementation of `ExpandedNodeId`.

use std::fmt;

use crate::node_id::NodeId;

/// A [`NodeId`] plus an optional server index and namespace URI, used as the
/// target of a reference so that references can (in principle) point outside
/// the local server. A `server_index` of `0` means local; this is the only
/// case the address-space core resolves itself (§1 Non-goals: cross-server
/// namespaces are a collaborator's concern).
#[derive(Eq, PartialEq, Clone, Debug, Hash)]
pub struct ExpandedNodeId {
    /// The local or remote node id.
    pub node_id: NodeId,
    /// Non-zero if the target lives on another server.
    pub server_index: u32,
    /// Present when the namespace was expressed by URI rather than index.
    pub namespace_uri: Option<String>,
}

impl fmt::Display for ExpandedNodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.node_id)
    }
}

impl From<NodeId> for ExpandedNodeId {
    fn from(node_id: NodeId) -> Self {
        Self {
            node_id,
            server_index: 0,
            namespace_uri: None,
        }
    }
}

impl ExpandedNodeId {
    /// Returns true if this id refers to a node on the local server.
    pub fn is_local(&self) -> bool {
        self.server_index == 0
    }

    /// Returns the local node id, if this is a local reference.
    pub fn as_node_id(&self) -> Option<&NodeId> {
        self.is_local().then_some(&self.node_id)
    }

    /// The null expanded node id.
    pub fn null() -> Self {
        Self::from(NodeId::null())
    }

    /// Returns true if the wrapped node id is null.
    pub fn is_null(&self) -> bool {
        self.node_id.is_null()
    }
}
