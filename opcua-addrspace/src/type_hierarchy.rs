// OPC UA address space
// SPDX-License-Identifier: MPL-2.0

//! Contains the Type Hierarchy (§4.D): subtype-tree membership tests and
//! supertype-chain materialization, used throughout the validator, type
//! checker and instantiator.

use std::collections::VecDeque;

use hashbrown::HashSet;
use opcua_addrspace_types::NodeId;

use crate::node_store::NodeStore;

/// BFS from `start`, following inverse edges whose reference type is in
/// `via`, until a member of `root_set` is reached or the frontier is
/// exhausted. `via` is typically `&[HasSubtype]`; walking inverse edges of
/// that type is what "is a (sub)type of" means, since a subtype's forward
/// `HasSubtype` edge lives on its supertype (§3 common-header
/// `references`, §4.B).
///
/// Reflexive: if `start` is itself in `root_set`, returns true immediately,
/// which is what callers rely on for "non-strict subtype of" checks.
/// Cycles are tolerated via a visited set even though the graph is
/// expected acyclic by construction (§4.D).
pub fn is_node_in_tree(
    store: &NodeStore,
    start: &NodeId,
    root_set: &[NodeId],
    via: &[NodeId],
) -> bool {
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    queue.push_back(start.clone());

    while let Some(current) = queue.pop_front() {
        if root_set.contains(&current) {
            return true;
        }
        if !visited.insert(current.clone()) {
            continue;
        }
        let Some(node) = store.get(&current) else {
            continue;
        };
        for edge in node.references() {
            if edge.is_inverse && via.contains(&edge.reference_type_id) {
                if let Some(target_id) = edge.target.as_node_id() {
                    queue.push_back(target_id.clone());
                }
            }
        }
    }
    false
}

/// The supertype chain of `type_node`, most-specific first. Each type node
/// is connected to exactly one supertype via an inbound `HasSubtype` edge
/// (invariant 4, §3); this walks that chain until a root type (no further
/// supertype) is reached.
///
/// The instantiator (§4.G step 3) relies on this ordering: processing
/// ancestors in most-derived-first order means a more-derived type's
/// members are copied before an ancestor's, so the ancestor's
/// same-browseName member is later found "already existing" and merged
/// into rather than overwriting it.
pub fn type_hierarchy(store: &NodeStore, type_node: &NodeId, include_self: bool) -> Vec<NodeId> {
    let has_subtype = opcua_addrspace_types::ids::reference_type::HAS_SUBTYPE;
    let mut chain = Vec::new();
    let mut visited = HashSet::new();
    let mut current = type_node.clone();

    if include_self {
        chain.push(current.clone());
    }
    visited.insert(current.clone());

    loop {
        let Some(node) = store.get(&current) else {
            break;
        };
        let supertype = node.references().iter().find_map(|edge| {
            (edge.is_inverse && edge.reference_type_id == has_subtype)
                .then(|| edge.target.as_node_id().cloned())
                .flatten()
        });
        match supertype {
            Some(parent) if visited.insert(parent.clone()) => {
                chain.push(parent.clone());
                current = parent;
            }
            _ => break,
        }
    }

    chain
}

#[cfg(test)]
mod tests {
    use opcua_addrspace_types::{ids, ExpandedNodeId};

    use super::*;
    use crate::data_type::DataType;
    use crate::reference_index::add_one_way;

    fn link_subtype(store: &mut NodeStore, child: &NodeId, parent: &NodeId) {
        store
            .edit(child, |node| {
                add_one_way(
                    node,
                    ids::reference_type::HAS_SUBTYPE,
                    ExpandedNodeId::from(parent.clone()),
                    true,
                );
                Ok(())
            })
            .unwrap();
        store
            .edit(parent, |node| {
                add_one_way(
                    node,
                    ids::reference_type::HAS_SUBTYPE,
                    ExpandedNodeId::from(child.clone()),
                    false,
                );
                Ok(())
            })
            .unwrap();
    }

    fn three_level_chain() -> (NodeStore, NodeId, NodeId, NodeId) {
        let mut store = NodeStore::new();
        let root = NodeId::new(1, 10u32);
        let mid = NodeId::new(1, 11u32);
        let leaf = NodeId::new(1, 12u32);
        store.insert(DataType::new(&root, "Root", "Root").into()).unwrap();
        store.insert(DataType::new(&mid, "Mid", "Mid").into()).unwrap();
        store.insert(DataType::new(&leaf, "Leaf", "Leaf").into()).unwrap();
        link_subtype(&mut store, &mid, &root);
        link_subtype(&mut store, &leaf, &mid);
        (store, root, mid, leaf)
    }

    #[test]
    fn is_node_in_tree_reaches_indirect_ancestor() {
        let (store, root, _mid, leaf) = three_level_chain();
        assert!(is_node_in_tree(
            &store,
            &leaf,
            &[root],
            &[ids::reference_type::HAS_SUBTYPE]
        ));
    }

    #[test]
    fn is_node_in_tree_is_reflexive() {
        let (store, root, _mid, _leaf) = three_level_chain();
        assert!(is_node_in_tree(
            &store,
            &root,
            &[root.clone()],
            &[ids::reference_type::HAS_SUBTYPE]
        ));
    }

    #[test]
    fn is_node_in_tree_false_when_unreachable() {
        let (store, _root, _mid, leaf) = three_level_chain();
        let other = NodeId::new(1, 99u32);
        assert!(!is_node_in_tree(
            &store,
            &leaf,
            &[other],
            &[ids::reference_type::HAS_SUBTYPE]
        ));
    }

    #[test]
    fn is_node_in_tree_tolerates_cycles() {
        let mut store = NodeStore::new();
        let a = NodeId::new(1, 20u32);
        let b = NodeId::new(1, 21u32);
        store.insert(DataType::new(&a, "A", "A").into()).unwrap();
        store.insert(DataType::new(&b, "B", "B").into()).unwrap();
        // a -> b -> a, a cycle that would never terminate without a visited set.
        link_subtype(&mut store, &a, &b);
        link_subtype(&mut store, &b, &a);

        let other = NodeId::new(1, 99u32);
        assert!(!is_node_in_tree(
            &store,
            &a,
            &[other],
            &[ids::reference_type::HAS_SUBTYPE]
        ));
    }

    #[test]
    fn type_hierarchy_orders_most_specific_first() {
        let (store, root, mid, leaf) = three_level_chain();
        assert_eq!(
            type_hierarchy(&store, &leaf, true),
            vec![leaf.clone(), mid.clone(), root.clone()]
        );
        assert_eq!(type_hierarchy(&store, &leaf, false), vec![mid, root]);
    }

    #[test]
    fn type_hierarchy_of_root_is_itself_or_empty() {
        let (store, root, _mid, _leaf) = three_level_chain();
        assert_eq!(type_hierarchy(&store, &root, true), vec![root]);
        assert!(type_hierarchy(&store, &root, false).is_empty());
    }
}
