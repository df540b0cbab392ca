// OPC UA address space
// SPDX-License-Identifier: MPL-2.0

//! Contains `NodeStore` (§4.A): the keyed container of typed nodes.

use hashbrown::HashMap;
use log::{debug, warn};
use opcua_addrspace_types::{Identifier, NodeId, StatusCode};

use crate::node::NodeType;

/// Maps `NodeId -> NodeType`. Owns every node it stores; mutation happens
/// exclusively through [`NodeStore::edit`], which is what lets the
/// address space centralize its single-writer discipline (§5) and, in
/// principle, let an external namespace intercept the same call.
#[derive(Debug, Default)]
pub struct NodeStore {
    nodes: HashMap<NodeId, NodeType>,
    /// Per-namespace counter used to allocate numeric ids when a caller
    /// inserts a node with a null id.
    next_numeric_id: HashMap<u16, u32>,
}

impl NodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `node`, taking ownership. A numeric identifier of zero, in any
    /// namespace, requests auto-assignment: a fresh numeric id is allocated
    /// in that namespace and assigned before insertion (the null id is the
    /// degenerate case of this in namespace zero). The id actually used is
    /// returned. Fails with [`StatusCode::BadIdExists`] if a non-requesting
    /// id collides.
    pub fn insert(&mut self, mut node: NodeType) -> Result<NodeId, StatusCode> {
        let namespace = node.base().node_id().namespace;
        if matches!(node.base().node_id().identifier, Identifier::Numeric(0)) {
            let id = self.allocate_numeric_id(namespace);
            node.base_mut().set_node_id(id);
        }
        let id = node.base().node_id().clone();
        if self.nodes.contains_key(&id) {
            warn!("insert: node id {id} already exists");
            return Err(StatusCode::BadIdExists);
        }
        debug!("insert: {id} ({:?})", node.node_class());
        self.nodes.insert(id.clone(), node);
        Ok(id)
    }

    fn allocate_numeric_id(&mut self, namespace: u16) -> NodeId {
        let counter = self.next_numeric_id.entry(namespace).or_insert(1);
        loop {
            let candidate = NodeId::new(namespace, *counter);
            *counter += 1;
            if !self.nodes.contains_key(&candidate) {
                return candidate;
            }
        }
    }

    /// Immutable borrow, for read-only traversal.
    pub fn get(&self, id: &NodeId) -> Option<&NodeType> {
        self.nodes.get(id)
    }

    /// Deep clone of a stored node, used by the instantiator to seed a new
    /// child from a type-member template (§4.G).
    pub fn get_copy(&self, id: &NodeId) -> Option<NodeType> {
        self.nodes.get(id).cloned()
    }

    /// Obtain a mutable borrow and run `f` against it. This is the only
    /// supported way to mutate a stored node (§4.A, §5); it is how both
    /// reference bookkeeping and attribute edits go through one choke
    /// point.
    pub fn edit<F, T>(&mut self, id: &NodeId, f: F) -> Result<T, StatusCode>
    where
        F: FnOnce(&mut NodeType) -> Result<T, StatusCode>,
    {
        match self.nodes.get_mut(id) {
            Some(node) => f(node),
            None => {
                warn!("edit: node id {id} not found");
                Err(StatusCode::BadNodeIdUnknown)
            }
        }
    }

    /// Remove and return a node, if present.
    pub fn remove(&mut self, id: &NodeId) -> Option<NodeType> {
        debug!("remove: {id}");
        self.nodes.remove(id)
    }

    /// Put a previously-[`remove`](Self::remove)d node back under `id`
    /// without the id-allocation/exists checks `insert` does. Used by
    /// operations (the type checker) that need to temporarily take a node
    /// out of the map to get a read-only view of the rest of the store
    /// while still holding a mutable reference to it.
    pub fn reinsert(&mut self, id: NodeId, node: NodeType) {
        self.nodes.insert(id, node);
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &NodeType)> {
        self.nodes.iter()
    }
}
