// OPC UA address space
// SPDX-License-Identifier: MPL-2.0

//! Contains the one-way edge primitives (§4.B) the reference service builds
//! bidirectional add/delete on top of.

use log::debug;
use opcua_addrspace_types::{ExpandedNodeId, NodeId, StatusCode};

use crate::node::NodeType;
use crate::reference::ReferenceEdge;

/// Append one edge to `node`'s adjacency list.
pub fn add_one_way(
    node: &mut NodeType,
    reference_type_id: NodeId,
    target: ExpandedNodeId,
    is_inverse: bool,
) {
    debug!(
        "add_one_way: {} -{}{}-> {}",
        node.base().node_id(),
        if is_inverse { "inverse " } else { "" },
        reference_type_id,
        target
    );
    node.base_mut()
        .references_mut()
        .push(ReferenceEdge::new(reference_type_id, target, is_inverse));
}

/// Remove the first edge on `node` matching `(target, reference_type_id)`
/// and orientation, swap-removing it with the tail of the list. Fails with
/// [`StatusCode::UncertainReferenceNotDeleted`] if no such edge exists —
/// not fatal to callers, per §4.B/§7.
pub fn delete_one_way(
    node: &mut NodeType,
    reference_type_id: &NodeId,
    target: &ExpandedNodeId,
    is_inverse: bool,
) -> Result<(), StatusCode> {
    let refs = node.base_mut().references_mut();
    let position = refs.iter().position(|edge| {
        &edge.reference_type_id == reference_type_id
            && &edge.target == target
            && edge.is_inverse == is_inverse
    });
    match position {
        Some(index) => {
            refs.swap_remove(index);
            Ok(())
        }
        None => {
            debug!(
                "delete_one_way: no matching edge {reference_type_id} -> {target} on {}",
                node.base().node_id()
            );
            Err(StatusCode::UncertainReferenceNotDeleted)
        }
    }
}

#[cfg(test)]
mod tests {
    use opcua_addrspace_types::ids;

    use super::*;
    use crate::object::Object;

    fn sample_node() -> NodeType {
        Object::new(&NodeId::new(1, 1u32), "Obj", "Obj").into()
    }

    #[test]
    fn add_then_delete_round_trips_to_no_edges() {
        let mut node = sample_node();
        let target = ExpandedNodeId::from(NodeId::new(1, 2u32));
        add_one_way(&mut node, ids::reference_type::ORGANIZES, target.clone(), false);
        assert_eq!(node.references().len(), 1);

        delete_one_way(&mut node, &ids::reference_type::ORGANIZES, &target, false).unwrap();
        assert!(node.references().is_empty());
    }

    #[test]
    fn delete_missing_edge_is_uncertain_not_fatal() {
        let mut node = sample_node();
        let target = ExpandedNodeId::from(NodeId::new(1, 2u32));
        let result = delete_one_way(&mut node, &ids::reference_type::ORGANIZES, &target, false);
        assert_eq!(result, Err(StatusCode::UncertainReferenceNotDeleted));
    }

    #[test]
    fn delete_matches_on_orientation_not_just_target() {
        let mut node = sample_node();
        let target = ExpandedNodeId::from(NodeId::new(1, 2u32));
        add_one_way(&mut node, ids::reference_type::ORGANIZES, target.clone(), true);

        // Same reference type and target, opposite orientation: no match.
        let result = delete_one_way(&mut node, &ids::reference_type::ORGANIZES, &target, false);
        assert!(result.is_err());
        assert_eq!(node.references().len(), 1);
    }

    #[test]
    fn swap_remove_keeps_remaining_edge_intact() {
        let mut node = sample_node();
        let first = ExpandedNodeId::from(NodeId::new(1, 2u32));
        let second = ExpandedNodeId::from(NodeId::new(1, 3u32));
        add_one_way(&mut node, ids::reference_type::ORGANIZES, first.clone(), false);
        add_one_way(&mut node, ids::reference_type::ORGANIZES, second.clone(), false);

        delete_one_way(&mut node, &ids::reference_type::ORGANIZES, &first, false).unwrap();

        assert_eq!(node.references().len(), 1);
        assert_eq!(node.references()[0].target, second);
    }
}
